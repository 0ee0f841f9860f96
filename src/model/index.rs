//! Hierarchy indexer.
//!
//! Builds the two derived maps the radial layout needs from the flat exemplar
//! list: stage → ordered unique categories, and (stage, category) → ordered
//! tools. Ordering is first-seen so repeated renders are deterministic. The
//! index is a pure function of the dataset; since the dataset is immutable it
//! is built once at startup and reused for every render.
//!
//! Also derives the tabular summaries the host application displays next to
//! the diagram (per-stage counts, global totals, cross-stage comparison rows).

use std::collections::{BTreeSet, HashMap};

use super::{Exemplar, LifecycleData};

/// Separator between stage and category in a category key.
pub const CATEGORY_KEY_SEPARATOR: &str = "::";

/// Unique key for a (stage, category) pair.
pub fn category_key(stage: &str, category: &str) -> String {
    format!("{}{}{}", stage, CATEGORY_KEY_SEPARATOR, category)
}

/// A category observed under a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRef {
    pub name: String,
    /// `"{stage}::{category}"`, unique per (stage, category).
    pub key: String,
}

/// Per-stage counts for the overview table.
#[derive(Debug, Clone)]
pub struct StageSummary {
    pub name: String,
    pub description: String,
    pub category_count: usize,
    pub tool_count: usize,
}

/// How the comparison table groups tools that appear under several stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAggregation {
    /// One row per exemplar entry.
    PerStage,
    /// One row per (tool name, category), listing every stage it appears in.
    MergeByName,
}

/// A row of the cross-stage comparison table.
#[derive(Debug, Clone)]
pub struct ToolRow {
    pub name: String,
    pub category: String,
    pub stages: Vec<String>,
    pub description: String,
}

// ─── Index ───────────────────────────────────────────────────────────────────

/// Derived lookup structure over the exemplar list.
pub struct HierarchyIndex {
    categories: HashMap<String, Vec<CategoryRef>>,
    tools: HashMap<String, Vec<Exemplar>>,
}

impl HierarchyIndex {
    /// Build the index in one pass over the exemplars, preserving first-seen
    /// order at both levels.
    pub fn build(data: &LifecycleData) -> Self {
        let mut categories: HashMap<String, Vec<CategoryRef>> = HashMap::new();
        let mut tools: HashMap<String, Vec<Exemplar>> = HashMap::new();

        for exemplar in &data.exemplars {
            let key = category_key(&exemplar.stage, &exemplar.category);

            let cats = categories.entry(exemplar.stage.clone()).or_default();
            if !cats.iter().any(|c| c.key == key) {
                cats.push(CategoryRef {
                    name: exemplar.category.clone(),
                    key: key.clone(),
                });
            }

            tools.entry(key).or_default().push(exemplar.clone());
        }

        Self { categories, tools }
    }

    /// Categories of a stage, first-seen order. Unknown stage yields `&[]`.
    pub fn categories_of(&self, stage: &str) -> &[CategoryRef] {
        self.categories.get(stage).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tools under a category key, insertion order. Unknown key yields `&[]`.
    pub fn tools_of(&self, category_key: &str) -> &[Exemplar] {
        self.tools.get(category_key).map(Vec::as_slice).unwrap_or(&[])
    }

    // ─── Summaries for the host chrome ───────────────────────────────────────

    /// Distinct category names across all stages, sorted, for the compare
    /// picker.
    pub fn all_categories(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for cats in self.categories.values() {
            for c in cats {
                names.insert(c.name.clone());
            }
        }
        names.into_iter().collect()
    }

    /// Per-stage category and tool counts, in stage declaration order.
    pub fn stage_summaries(&self, data: &LifecycleData) -> Vec<StageSummary> {
        data.stages
            .iter()
            .map(|s| {
                let cats = self.categories_of(&s.name);
                let tool_count = cats.iter().map(|c| self.tools_of(&c.key).len()).sum();
                StageSummary {
                    name: s.name.clone(),
                    description: s.description.clone(),
                    category_count: cats.len(),
                    tool_count,
                }
            })
            .collect()
    }

    /// Comparison rows for the selected category names, across all stages.
    ///
    /// `MergeByName` collapses a tool appearing under the same category in
    /// several stages into one row carrying the stage list; `PerStage` keeps
    /// one row per exemplar entry.
    pub fn compare_rows(
        &self,
        data: &LifecycleData,
        selected: &BTreeSet<String>,
        aggregation: ToolAggregation,
    ) -> Vec<ToolRow> {
        let mut rows: Vec<ToolRow> = Vec::new();

        for stage in &data.stages {
            for cat in self.categories_of(&stage.name) {
                if !selected.contains(&cat.name) {
                    continue;
                }
                for tool in self.tools_of(&cat.key) {
                    match aggregation {
                        ToolAggregation::PerStage => rows.push(ToolRow {
                            name: tool.name.clone(),
                            category: tool.category.clone(),
                            stages: vec![tool.stage.clone()],
                            description: tool.description.clone(),
                        }),
                        ToolAggregation::MergeByName => {
                            if let Some(row) = rows
                                .iter_mut()
                                .find(|r| r.name == tool.name && r.category == tool.category)
                            {
                                if !row.stages.contains(&tool.stage) {
                                    row.stages.push(tool.stage.clone());
                                }
                            } else {
                                rows.push(ToolRow {
                                    name: tool.name.clone(),
                                    category: tool.category.clone(),
                                    stages: vec![tool.stage.clone()],
                                    description: tool.description.clone(),
                                });
                            }
                        }
                    }
                }
            }
        }

        rows
    }

    /// Global totals: (stages, distinct categories, tools, connections).
    pub fn totals(&self, data: &LifecycleData) -> (usize, usize, usize, usize) {
        (
            data.stages.len(),
            self.all_categories().len(),
            data.exemplars.len(),
            data.connections.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default::default_data;

    #[test]
    fn test_first_seen_category_order() {
        let data = default_data();
        let index = HierarchyIndex::build(&data);

        let cats: Vec<&str> = index
            .categories_of("Conceptualise")
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(cats, ["Mind mapping", "Diagramming", "Wireframing"]);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let data = default_data();
        let a = HierarchyIndex::build(&data);
        let b = HierarchyIndex::build(&data);

        for stage in &data.stages {
            assert_eq!(a.categories_of(&stage.name), b.categories_of(&stage.name));
            for cat in a.categories_of(&stage.name) {
                let ta: Vec<&str> = a.tools_of(&cat.key).iter().map(|t| t.name.as_str()).collect();
                let tb: Vec<&str> = b.tools_of(&cat.key).iter().map(|t| t.name.as_str()).collect();
                assert_eq!(ta, tb);
            }
        }
    }

    #[test]
    fn test_unknown_stage_yields_empty() {
        let data = default_data();
        let index = HierarchyIndex::build(&data);
        assert!(index.categories_of("Ghost").is_empty());
        assert!(index.tools_of("Ghost::Nothing").is_empty());
    }

    #[test]
    fn test_tools_keyed_per_stage_category_pair() {
        let data = default_data();
        let index = HierarchyIndex::build(&data);

        // "Data Repository" exists under several stages; keys keep them apart.
        let store = index.tools_of(&category_key("Store", "Data Repository"));
        let share = index.tools_of(&category_key("Share", "Data Repository"));
        assert_eq!(store.len(), 3);
        assert_eq!(share.len(), 2);
    }

    #[test]
    fn test_merge_by_name_collects_stages() {
        let data = default_data();
        let index = HierarchyIndex::build(&data);

        let selected: BTreeSet<String> = ["Data Repository".to_string()].into_iter().collect();
        let merged = index.compare_rows(&data, &selected, ToolAggregation::MergeByName);
        let figshare = merged.iter().find(|r| r.name == "Figshare").unwrap();
        assert!(figshare.stages.len() >= 2, "Figshare appears under Store and Share");

        let flat = index.compare_rows(&data, &selected, ToolAggregation::PerStage);
        assert!(flat.len() > merged.len());
    }

    #[test]
    fn test_stage_summaries_counts() {
        let data = default_data();
        let index = HierarchyIndex::build(&data);

        let summaries = index.stage_summaries(&data);
        assert_eq!(summaries.len(), 12);
        let access = summaries.iter().find(|s| s.name == "Access").unwrap();
        assert_eq!(access.category_count, 3);
        assert_eq!(access.tool_count, 5);
    }
}
