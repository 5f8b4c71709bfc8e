use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    observation::{
        error::ObservationError,
        ports::ObservationStorePort,
        types::{ObservationRecord, RecordId},
    },
    types::{InputEvent, Opinion},
};

/// Always-succeeding store for embedding the pipeline without persistence.
#[derive(Debug, Clone, Default)]
pub struct NoopObservationStore;

#[async_trait]
impl ObservationStorePort for NoopObservationStore {
    async fn append(
        &self,
        _event: &InputEvent,
        _opinions: &[Opinion],
    ) -> Result<RecordId, ObservationError> {
        Ok(Uuid::now_v7().to_string())
    }

    async fn query(
        &self,
        _tag: &str,
        _limit: usize,
    ) -> Result<Vec<ObservationRecord>, ObservationError> {
        Ok(Vec::new())
    }
}
