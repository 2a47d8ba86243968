// Module declarations
pub(crate) mod realtime_model;
pub(crate) mod realtime_service;
pub(crate) mod realtime_transport;

// Re-export the public interface
pub use realtime_model::TenderEvent;
pub use realtime_service::RealtimeMerger;
pub use realtime_transport::connect_and_forward;
