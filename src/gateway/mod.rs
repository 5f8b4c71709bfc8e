pub mod adapters;
pub mod error;
pub mod gateway;
pub mod ports;
pub mod testing;

pub use adapters::build_default_backends;
pub use error::{BackendError, BackendErrorKind};
pub use gateway::AdapterGateway;
pub use ports::{BackendPort, BackendReply};
