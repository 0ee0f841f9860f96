//! Lifecycle data model.
//!
//! The dataset is a three-part document: lifecycle stages, directed
//! connections between stages, and concrete tool exemplars. It is loaded once
//! at startup (see `loader`), sanitized, and treated as immutable for the
//! rest of the session. Everything derived from it (category lists, angular
//! spans) is recomputed from this root, never stored back into it.
//!
//! No egui types are imported here so the model stays renderer-agnostic.

pub mod default;
pub mod index;
pub mod loader;

use serde::{Deserialize, Serialize};

// ─── Document types ──────────────────────────────────────────────────────────

/// A lifecycle stage. `name` is the unique key; the declared order of stages
/// defines the default angular ordering around the circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub description: String,
    /// RGB hex string, e.g. `"#90be33"`. Parsed at the render boundary.
    pub color: String,
}

/// Connection kind: solid forward flow or dashed alternative/feedback edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    Normal,
    Alternative,
}

/// Directed edge between two stages, referenced by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: ConnectionKind,
}

/// A concrete tool exemplar. Many exemplars may share a (stage, category)
/// pair, and the same tool name may appear under several stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exemplar {
    pub stage: String,
    pub category: String,
    pub name: String,
    pub description: String,
}

/// The dataset root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleData {
    pub stages: Vec<Stage>,
    pub connections: Vec<Connection>,
    pub exemplars: Vec<Exemplar>,
}

// ─── Accessors & sanitization ────────────────────────────────────────────────

impl LifecycleData {
    /// Look up a stage by name.
    pub fn stage(&self, name: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.name == name)
    }

    pub fn has_stage(&self, name: &str) -> bool {
        self.stage(name).is_some()
    }

    /// Drop connections and exemplars that reference unknown stage names.
    ///
    /// Dangling references are a data-shape defect, not a fatal one: each
    /// offending entry is skipped with a warning and the rest of the dataset
    /// renders normally.
    pub fn sanitize(&mut self) {
        let known: Vec<String> = self.stages.iter().map(|s| s.name.clone()).collect();
        let is_known = |name: &str| known.iter().any(|k| k == name);

        self.connections.retain(|c| {
            let ok = is_known(&c.from) && is_known(&c.to);
            if !ok {
                log::warn!("Skipping connection with unknown stage: {} -> {}", c.from, c.to);
            }
            ok
        });

        self.exemplars.retain(|e| {
            let ok = is_known(&e.stage);
            if !ok {
                log::warn!("Skipping exemplar '{}' with unknown stage: {}", e.name, e.stage);
            }
            ok
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stage_data() -> LifecycleData {
        LifecycleData {
            stages: vec![
                Stage {
                    name: "Conceptualise".into(),
                    description: "Formulate the idea".into(),
                    color: "#90be33".into(),
                },
                Stage {
                    name: "Plan".into(),
                    description: "Establish the framework".into(),
                    color: "#90be44".into(),
                },
            ],
            connections: vec![
                Connection {
                    from: "Conceptualise".into(),
                    to: "Plan".into(),
                    kind: ConnectionKind::Normal,
                },
                Connection {
                    from: "Plan".into(),
                    to: "Ghost".into(),
                    kind: ConnectionKind::Alternative,
                },
            ],
            exemplars: vec![
                Exemplar {
                    stage: "Conceptualise".into(),
                    category: "Mind mapping".into(),
                    name: "Miro".into(),
                    description: "Whiteboard".into(),
                },
                Exemplar {
                    stage: "Nowhere".into(),
                    category: "Lost".into(),
                    name: "Orphan".into(),
                    description: "Dangling".into(),
                },
            ],
        }
    }

    #[test]
    fn test_sanitize_drops_dangling_entries() {
        let mut data = two_stage_data();
        data.sanitize();
        assert_eq!(data.connections.len(), 1);
        assert_eq!(data.connections[0].to, "Plan");
        assert_eq!(data.exemplars.len(), 1);
        assert_eq!(data.exemplars[0].name, "Miro");
    }

    #[test]
    fn test_connection_kind_serde_names() {
        let json = r#"{"from":"A","to":"B","type":"alternative"}"#;
        let c: Connection = serde_json::from_str(json).unwrap();
        assert_eq!(c.kind, ConnectionKind::Alternative);

        let out = serde_json::to_string(&c).unwrap();
        assert!(out.contains(r#""type":"alternative""#));
    }

    #[test]
    fn test_stage_lookup() {
        let data = two_stage_data();
        assert!(data.has_stage("Plan"));
        assert!(!data.has_stage("Ghost"));
        assert_eq!(data.stage("Conceptualise").unwrap().color, "#90be33");
    }
}
