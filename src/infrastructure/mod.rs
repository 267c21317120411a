pub mod cervantes;
pub mod core;
pub mod mock;

pub use cervantes::CervantesApiClient;
pub use mock::MockCervantesBackend;
