use async_trait::async_trait;

use crate::{
    observation::{
        error::ObservationError,
        types::{ObservationRecord, RecordId},
    },
    types::{InputEvent, Opinion},
};

/// Durable append log of pipeline observations. Appends must be serialized:
/// at most one writer at a time, with successive appends forming a total
/// order.
#[async_trait]
pub trait ObservationStorePort: Send + Sync {
    async fn append(
        &self,
        event: &InputEvent,
        opinions: &[Opinion],
    ) -> Result<RecordId, ObservationError>;

    /// Most recent `limit` records whose tag set contains `tag`, oldest
    /// first.
    async fn query(
        &self,
        tag: &str,
        limit: usize,
    ) -> Result<Vec<ObservationRecord>, ObservationError>;
}
