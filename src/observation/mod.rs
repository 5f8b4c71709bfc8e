pub mod error;
pub mod noop;
pub mod ports;
pub mod store;
pub mod types;

pub use error::{ObservationError, ObservationErrorKind};
pub use noop::NoopObservationStore;
pub use ports::ObservationStorePort;
pub use store::JsonFileStore;
pub use types::{ObservationRecord, RecordId};
