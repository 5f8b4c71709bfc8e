use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    observation::{
        error::{ObservationError, corrupt, internal_error, io_error},
        ports::ObservationStorePort,
        types::{ObservationRecord, RecordId},
    },
    types::{InputEvent, Opinion},
};

/// Whole-file JSON observation log. Every append is a read-modify-write of
/// the full document, serialized behind `write_lock` so concurrent pipeline
/// runs produce a total append order. The document is replaced atomically via
/// a temp file and rename.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_all(&self) -> Result<Vec<ObservationRecord>, ObservationError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(io_error(format!(
                    "failed to read observation log '{}': {err}",
                    self.path.display()
                )));
            }
        };

        serde_json::from_str(&content).map_err(|err| {
            corrupt(format!(
                "failed to parse observation log '{}': {err}",
                self.path.display()
            ))
        })
    }

    fn save_all(&self, records: &[ObservationRecord]) -> Result<(), ObservationError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| {
                io_error(format!(
                    "failed to create observation directory '{}': {err}",
                    parent.display()
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("tmp");
        let file = fs::File::create(&tmp_path).map_err(|err| {
            io_error(format!(
                "failed to create observation temp file '{}': {err}",
                tmp_path.display()
            ))
        })?;
        {
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, records).map_err(|err| {
                io_error(format!(
                    "failed to serialize observation log '{}': {err}",
                    tmp_path.display()
                ))
            })?;
            writer.write_all(b"\n").and_then(|_| writer.flush()).map_err(|err| {
                io_error(format!(
                    "failed to flush observation log '{}': {err}",
                    tmp_path.display()
                ))
            })?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|err| {
            io_error(format!(
                "failed to replace observation log '{}' from '{}': {err}",
                self.path.display(),
                tmp_path.display()
            ))
        })
    }
}

#[async_trait]
impl ObservationStorePort for JsonFileStore {
    async fn append(
        &self,
        event: &InputEvent,
        opinions: &[Opinion],
    ) -> Result<RecordId, ObservationError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load_all()?;
        let recorded_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|err| internal_error(format!("failed to format record timestamp: {err}")))?;
        let record = ObservationRecord {
            id: Uuid::now_v7().to_string(),
            recorded_at,
            tags: vec![event.kind.as_str().to_string(), event.source.clone()],
            event: event.clone(),
            opinions: opinions.to_vec(),
        };
        let record_id = record.id.clone();
        records.push(record);
        self.save_all(&records)?;

        tracing::debug!(
            target: "observation",
            record_id = %record_id,
            total = records.len(),
            "observation_appended"
        );
        Ok(record_id)
    }

    async fn query(
        &self,
        tag: &str,
        limit: usize,
    ) -> Result<Vec<ObservationRecord>, ObservationError> {
        let matching: Vec<ObservationRecord> = self
            .load_all()?
            .into_iter()
            .filter(|record| record.tags.iter().any(|candidate| candidate == tag))
            .collect();
        let skip = matching.len().saturating_sub(limit);
        Ok(matching.into_iter().skip(skip).collect())
    }
}
