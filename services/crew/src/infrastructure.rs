// Infrastructure layer modules
pub mod config;
pub mod crew_repository;
pub mod logging;

// Re-exports
pub use config::{CrewTableConfig, CrewTableConfigError};
pub use crew_repository::{CrewRepository, CrewRepositoryError, DynamoCrewRepository};
pub use logging::init_logging;
