//! Angular partitioner.
//!
//! Divides the circle into the three-level annular tree: stages share the
//! full circle equally, categories subdivide their stage's span, tools
//! subdivide their category's span. Each resolved span is recorded in a
//! `SpanTable` keyed by node identity so the connection and label steps of
//! the same render pass can look mid-angles up without recomputing.
//!
//! All knobs live in `RingConfig` — radii, paddings, opacities, label
//! thresholds — so layout variants are presets of one code path, not forks.

use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::model::index::HierarchyIndex;
use crate::model::LifecycleData;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Ring geometry and policy knobs, in unit circle space.
#[derive(Debug, Clone)]
pub struct RingConfig {
    /// Outer radius of the center disc.
    pub center_radius: f32,
    /// Outer bound of the stage ring.
    pub stage_radius: f32,
    /// Outer bound of the category ring.
    pub category_radius: f32,
    /// Outer bound of the tool ring.
    pub tool_radius: f32,
    /// Radial gap applied symmetrically to each ring band.
    pub radial_padding: f32,
    /// Angular gap between adjacent sectors at every level, radians.
    pub angular_padding: f32,
    /// Where the first stage starts. Top of the circle.
    pub start_angle: f32,

    pub stage_opacity: f32,
    pub category_opacity: f32,
    pub tool_opacity: f32,
    /// Opacity for nodes outside the current focus/selection. Non-zero so
    /// dimmed context stays visible.
    pub dimmed_opacity: f32,

    /// Sectors narrower than this get no label, radians.
    pub min_label_span: f32,
    /// Category and tool labels longer than this are ellipsis-truncated.
    pub max_label_chars: usize,

    /// Radius at which connection edges run.
    pub connection_radius: f32,
    /// How far a connection curve is pulled toward the center (0..1).
    pub connection_bulge: f32,

    /// Stage placed as a disc at the circle center instead of on the ring.
    pub centered_stage: Option<String>,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            center_radius: 0.2,
            stage_radius: 0.45,
            category_radius: 0.65,
            tool_radius: 0.85,
            radial_padding: 0.01,
            angular_padding: 0.01,
            start_angle: -FRAC_PI_2,
            stage_opacity: 0.8,
            category_opacity: 0.75,
            tool_opacity: 0.7,
            dimmed_opacity: 0.3,
            min_label_span: 0.04,
            max_label_chars: 18,
            connection_radius: 0.33,
            connection_bulge: 0.45,
            centered_stage: None,
        }
    }
}

impl RingConfig {
    /// Preset that places one stage inside the circle center, with the
    /// remaining stages partitioning the full ring.
    pub fn centered(stage: impl Into<String>) -> Self {
        Self {
            centered_stage: Some(stage.into()),
            ..Self::default()
        }
    }

    /// Radial band `[inner, outer]` of the stage ring after padding.
    pub fn stage_band(&self) -> (f32, f32) {
        (self.center_radius + self.radial_padding, self.stage_radius - self.radial_padding)
    }

    pub fn category_band(&self) -> (f32, f32) {
        (self.stage_radius + self.radial_padding, self.category_radius - self.radial_padding)
    }

    pub fn tool_band(&self) -> (f32, f32) {
        (self.category_radius + self.radial_padding, self.tool_radius - self.radial_padding)
    }
}

// ─── Resolved spans ──────────────────────────────────────────────────────────

/// Angular + radial extent resolved for one node during a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub angle_start: f32,
    pub angle_end: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

impl Span {
    pub fn mid_angle(&self) -> f32 {
        (self.angle_start + self.angle_end) / 2.0
    }

    pub fn mid_radius(&self) -> f32 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    pub fn angular_width(&self) -> f32 {
        self.angle_end - self.angle_start
    }

    /// Whether `angle` (any representation) falls inside this span's arc.
    pub fn contains_angle(&self, angle: f32) -> bool {
        let rel = crate::render::geometry::normalize_angle(angle - self.angle_start);
        rel <= self.angular_width()
    }

    /// Whether `radius` falls inside this span's band.
    pub fn contains_radius(&self, radius: f32) -> bool {
        radius >= self.inner_radius && radius <= self.outer_radius
    }
}

/// Resolved spans for one render pass, keyed by node identity.
#[derive(Default)]
pub struct SpanTable {
    /// Stage name → span (ring stages only).
    pub stages: HashMap<String, Span>,
    /// Category key → span.
    pub categories: HashMap<String, Span>,
    /// Category key → spans of its tools, index-aligned with `tools_of`.
    pub tools: HashMap<String, Vec<Span>>,
    /// The center-placed stage, if the config names one that exists.
    pub centered: Option<String>,
}

impl SpanTable {
    /// Mid-angle of a stage's resolved position, for connection endpoints.
    pub fn stage_mid_angle(&self, name: &str) -> Option<f32> {
        self.stages.get(name).map(Span::mid_angle)
    }
}

// ─── Partitioning ────────────────────────────────────────────────────────────

/// Subdivide `[start, start+total)` equally among `count` children, each
/// child keeping `share - padding` of its slot.
fn subdivide(start: f32, total: f32, count: usize, padding: f32, band: (f32, f32)) -> Vec<Span> {
    if count == 0 {
        return Vec::new();
    }
    let share = total / count as f32;
    // Padding wider than the share would flip the span; collapse to zero
    // width instead (the label suppresses itself there anyway).
    let width = (share - padding).max(0.0);
    (0..count)
        .map(|i| {
            let a0 = start + i as f32 * share;
            Span {
                angle_start: a0,
                angle_end: a0 + width,
                inner_radius: band.0,
                outer_radius: band.1,
            }
        })
        .collect()
}

/// Resolve the full three-level span table for one render pass.
pub fn partition(data: &LifecycleData, index: &HierarchyIndex, config: &RingConfig) -> SpanTable {
    let mut table = SpanTable::default();

    table.centered = config
        .centered_stage
        .as_ref()
        .filter(|name| data.has_stage(name.as_str()))
        .cloned();

    let ring_stages: Vec<&str> = data
        .stages
        .iter()
        .map(|s| s.name.as_str())
        .filter(|name| table.centered.as_deref() != Some(*name))
        .collect();

    // Level 1: stages share the full circle equally.
    let stage_spans = subdivide(
        config.start_angle,
        TAU,
        ring_stages.len(),
        config.angular_padding,
        config.stage_band(),
    );

    for (name, span) in ring_stages.iter().zip(&stage_spans) {
        table.stages.insert((*name).to_string(), *span);

        // Level 2: categories subdivide the stage's resolved span.
        let cats = index.categories_of(name);
        let cat_spans = subdivide(
            span.angle_start,
            span.angular_width(),
            cats.len(),
            config.angular_padding,
            config.category_band(),
        );

        for (cat, cat_span) in cats.iter().zip(&cat_spans) {
            table.categories.insert(cat.key.clone(), *cat_span);

            // Level 3: tools subdivide the category's resolved span.
            let tool_count = index.tools_of(&cat.key).len();
            let tool_spans = subdivide(
                cat_span.angle_start,
                cat_span.angular_width(),
                tool_count,
                config.angular_padding,
                config.tool_band(),
            );
            table.tools.insert(cat.key.clone(), tool_spans);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default::default_data;
    use crate::model::index::category_key;
    use crate::model::{Exemplar, LifecycleData, Stage};
    use std::f32::consts::PI;

    const EPS: f32 = 1e-4;

    fn data_with(stages: &[&str], exemplars: &[(&str, &str, &str)]) -> LifecycleData {
        LifecycleData {
            stages: stages
                .iter()
                .map(|n| Stage {
                    name: (*n).into(),
                    description: String::new(),
                    color: "#90be33".into(),
                })
                .collect(),
            connections: Vec::new(),
            exemplars: exemplars
                .iter()
                .map(|(s, c, n)| Exemplar {
                    stage: (*s).into(),
                    category: (*c).into(),
                    name: (*n).into(),
                    description: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_two_stages_split_the_circle_evenly() {
        let data = data_with(
            &["Conceptualise", "Plan"],
            &[
                ("Conceptualise", "Mind mapping", "Miro"),
                ("Conceptualise", "Diagramming", "Lucidchart"),
            ],
        );
        let index = HierarchyIndex::build(&data);
        let config = RingConfig {
            angular_padding: 0.0,
            ..RingConfig::default()
        };
        let table = partition(&data, &index, &config);

        let a = table.stages["Conceptualise"];
        let b = table.stages["Plan"];
        assert!((a.angular_width() - PI).abs() < EPS);
        assert!((b.angular_width() - PI).abs() < EPS);
        assert!((a.angle_start + FRAC_PI_2).abs() < EPS, "first stage starts at the top");

        // Each of the two categories gets exactly half the stage arc.
        let mm = table.categories[&category_key("Conceptualise", "Mind mapping")];
        let dg = table.categories[&category_key("Conceptualise", "Diagramming")];
        assert!((mm.angular_width() - PI / 2.0).abs() < EPS);
        assert!((dg.angular_width() - PI / 2.0).abs() < EPS);
    }

    #[test]
    fn test_partition_completeness_with_padding() {
        // Sum of child spans plus total padding equals the parent span.
        let data = default_data();
        let index = HierarchyIndex::build(&data);
        let config = RingConfig::default();
        let table = partition(&data, &index, &config);

        for stage in &data.stages {
            let parent = table.stages[&stage.name];
            let cats = index.categories_of(&stage.name);
            if cats.is_empty() {
                continue;
            }
            let child_sum: f32 = cats
                .iter()
                .map(|c| table.categories[&c.key].angular_width())
                .sum();
            let padding_sum = cats.len() as f32 * config.angular_padding;
            assert!(
                (child_sum + padding_sum - parent.angular_width()).abs() < EPS,
                "stage {}: {} + {} != {}",
                stage.name,
                child_sum,
                padding_sum,
                parent.angular_width()
            );
        }
    }

    #[test]
    fn test_stage_without_exemplars_has_no_category_spans() {
        let data = data_with(&["Alpha", "Beta"], &[("Alpha", "Only", "Tool")]);
        let index = HierarchyIndex::build(&data);
        let table = partition(&data, &index, &RingConfig::default());

        assert!(table.stages.contains_key("Beta"));
        assert!(!table
            .categories
            .keys()
            .any(|k| k.starts_with("Beta")));
    }

    #[test]
    fn test_tool_spans_align_with_tool_order() {
        let data = default_data();
        let index = HierarchyIndex::build(&data);
        let table = partition(&data, &index, &RingConfig::default());

        let key = category_key("Access", "Database");
        let tools = index.tools_of(&key);
        let spans = &table.tools[&key];
        assert_eq!(tools.len(), spans.len());
        assert_eq!(tools.len(), 2);
        assert!(spans[0].angle_start < spans[1].angle_start);
    }

    #[test]
    fn test_centered_preset_excludes_stage_from_ring() {
        let data = default_data();
        let index = HierarchyIndex::build(&data);
        let config = RingConfig::centered("Fund");
        let table = partition(&data, &index, &config);

        assert_eq!(table.centered.as_deref(), Some("Fund"));
        assert!(!table.stages.contains_key("Fund"));
        assert_eq!(table.stages.len(), 11);

        // The remaining stages partition the full circle.
        let total: f32 = table.stages.values().map(Span::angular_width).sum();
        let padding = 11.0 * config.angular_padding;
        assert!((total + padding - TAU).abs() < 1e-3);
    }

    #[test]
    fn test_centered_preset_with_unknown_stage_is_uniform() {
        let data = default_data();
        let index = HierarchyIndex::build(&data);
        let table = partition(&data, &index, &RingConfig::centered("Ghost"));

        assert!(table.centered.is_none());
        assert_eq!(table.stages.len(), 12);
    }

    #[test]
    fn test_span_angle_membership_wraps() {
        let span = Span {
            angle_start: -FRAC_PI_2,
            angle_end: 0.5 - FRAC_PI_2,
            inner_radius: 0.2,
            outer_radius: 0.5,
        };
        assert!(span.contains_angle(-FRAC_PI_2 + 0.1));
        // Same physical direction expressed one turn later
        assert!(span.contains_angle(-FRAC_PI_2 + 0.1 + TAU));
        assert!(!span.contains_angle(1.0));
    }

    #[test]
    fn test_oversized_padding_collapses_to_zero_width() {
        let spans = subdivide(0.0, 0.1, 50, 0.05, (0.2, 0.5));
        assert_eq!(spans.len(), 50);
        for span in &spans {
            assert!(span.angular_width() >= 0.0);
        }
    }

    #[test]
    fn test_ring_bands_are_disjoint() {
        let c = RingConfig::default();
        assert!(c.stage_band().1 < c.category_band().0);
        assert!(c.category_band().1 < c.tool_band().0);
    }
}
