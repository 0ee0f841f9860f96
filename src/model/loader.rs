//! Dataset loading and persistence.
//!
//! The dataset lives in a single JSON document. On first run the document is
//! synthesized from the canonical default and written back so users have a
//! file to edit. An unreadable or unparseable document is never fatal: the
//! loader falls back to the default and carries a diagnostic string the host
//! application surfaces as an informational banner.

use std::fs;
use std::path::Path;

use super::default::default_data;
use super::LifecycleData;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Error during dataset loading.
#[derive(Debug)]
pub struct LoadError {
    pub message: String,
    pub phase: &'static str,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

/// Dataset plus an optional non-fatal diagnostic from the load step.
pub struct LoadOutcome {
    pub data: LifecycleData,
    pub diagnostic: Option<String>,
}

// ─── Loading ─────────────────────────────────────────────────────────────────

/// Load the dataset document at `path`, or synthesize the default.
///
/// Missing file: the default dataset is written to `path` (best effort) and
/// returned. Read or parse failure: the default is returned together with a
/// diagnostic. Either way the returned dataset is sanitized and startup
/// continues.
pub fn load_or_default(path: &Path) -> LoadOutcome {
    let (mut data, diagnostic) = if path.exists() {
        match read_dataset(path) {
            Ok(data) => {
                log::info!(
                    "Loaded lifecycle dataset from {}: {} stages, {} connections, {} exemplars",
                    path.display(),
                    data.stages.len(),
                    data.connections.len(),
                    data.exemplars.len()
                );
                (data, None)
            }
            Err(e) => {
                log::warn!("Falling back to default dataset: {}", e);
                (
                    default_data(),
                    Some(format!("Could not load {}: {}. Using the built-in dataset.", path.display(), e)),
                )
            }
        }
    } else {
        let data = default_data();
        match persist(path, &data) {
            Ok(()) => {
                log::info!("Synthesized default dataset at {}", path.display());
                (data, None)
            }
            Err(e) => {
                log::warn!("Could not persist default dataset: {}", e);
                (
                    data,
                    Some(format!("Could not write {}: {}. Changes to the dataset will not stick.", path.display(), e)),
                )
            }
        }
    };

    data.sanitize();
    LoadOutcome { data, diagnostic }
}

fn read_dataset(path: &Path) -> Result<LifecycleData, LoadError> {
    let raw = fs::read_to_string(path).map_err(|e| LoadError {
        message: e.to_string(),
        phase: "read",
    })?;
    serde_json::from_str(&raw).map_err(|e| LoadError {
        message: e.to_string(),
        phase: "parse",
    })
}

/// Write the dataset document as pretty-printed JSON.
pub fn persist(path: &Path, data: &LifecycleData) -> Result<(), LoadError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| LoadError {
                message: e.to_string(),
                phase: "mkdir",
            })?;
        }
    }
    let json = serde_json::to_string_pretty(data).map_err(|e| LoadError {
        message: e.to_string(),
        phase: "serialize",
    })?;
    fs::write(path, json).map_err(|e| LoadError {
        message: e.to_string(),
        phase: "write",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("lifewheel-test-{}-{}", std::process::id(), name));
        p
    }

    #[test]
    fn test_missing_file_synthesizes_and_persists() {
        let path = temp_path("missing/lifecycle_data.json");
        let _ = fs::remove_file(&path);

        let outcome = load_or_default(&path);
        assert!(outcome.diagnostic.is_none());
        assert_eq!(outcome.data.stages.len(), 12);
        assert!(path.exists(), "default dataset should be written back");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unparseable_file_falls_back_with_diagnostic() {
        let path = temp_path("garbage.json");
        fs::write(&path, "{not json").unwrap();

        let outcome = load_or_default(&path);
        assert!(outcome.diagnostic.is_some());
        assert_eq!(outcome.data.stages.len(), 12);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_persist_round_trip() {
        let path = temp_path("roundtrip.json");
        let data = default_data();
        persist(&path, &data).unwrap();

        let loaded = read_dataset(&path).unwrap();
        assert_eq!(loaded.stages.len(), data.stages.len());
        assert_eq!(loaded.connections.len(), data.connections.len());
        assert_eq!(loaded.exemplars.len(), data.exemplars.len());
        assert_eq!(loaded.stages[2].name, "Fund");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_loaded_dataset_is_sanitized() {
        let path = temp_path("dangling.json");
        let json = r##"{
            "stages": [{"name": "Plan", "description": "", "color": "#90be44"}],
            "connections": [{"from": "Plan", "to": "Ghost", "type": "normal"}],
            "exemplars": [{"stage": "Plan", "category": "Project Planning", "name": "Trello", "description": ""}]
        }"##;
        fs::write(&path, json).unwrap();

        let outcome = load_or_default(&path);
        assert!(outcome.diagnostic.is_none());
        assert!(outcome.data.connections.is_empty());
        assert_eq!(outcome.data.exemplars.len(), 1);

        let _ = fs::remove_file(&path);
    }
}
