// Domain layer modules
pub mod crew_record;
pub mod lookup_request;
pub mod lookup_response;
pub mod name_filter;

// Re-exports
pub use crew_record::{flatten_crew_names, CrewRecord};
pub use lookup_request::{LookupRequest, LookupRequestError};
pub use lookup_response::LookupResponse;
pub use name_filter::NameFilter;
