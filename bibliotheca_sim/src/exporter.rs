//! JSON exporter for simulation runs.

use crate::runner::{RunOutcome, StepRecord};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors raised while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete run export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunExport {
    /// Seed used
    pub seed: u64,

    /// Steps requested by the caller
    pub steps_requested: i64,

    /// Books on the shelf after the last step
    pub final_library_size: usize,

    /// All step records
    pub records: Vec<StepRecord>,
}

impl RunExport {
    /// Builds an export from a finished run.
    pub fn from_outcome(outcome: &RunOutcome) -> Self {
        Self {
            seed: outcome.seed,
            steps_requested: outcome.steps_requested,
            final_library_size: outcome.library.len(),
            records: outcome.records.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let json = self.to_json_pretty()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::SimulationRun;
    use tempfile::tempdir;

    #[test]
    fn test_export_fields() {
        let outcome = SimulationRun::new(4, 42).execute();
        let export = RunExport::from_outcome(&outcome);

        let json: serde_json::Value =
            serde_json::from_str(&export.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["seed"], 42);
        assert_eq!(json["steps_requested"], 4);
        assert_eq!(json["records"].as_array().unwrap().len(), 4);
        assert_eq!(json["records"][3]["index"], 4);
        assert_eq!(json["records"][0]["description"], "Step 1");
        assert!(json["records"][0]["event"].is_string());
        assert_eq!(json["final_library_size"], outcome.library.len());
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.json");
        let export = RunExport::from_outcome(&SimulationRun::new(2, 1).execute());

        export.write_to_file(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();

        let parsed: RunExport = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.records, export.records);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("run.json");
        let export = RunExport::from_outcome(&SimulationRun::new(1, 1).execute());

        assert!(matches!(export.write_to_file(&path), Err(ExportError::Io(_))));
    }
}
