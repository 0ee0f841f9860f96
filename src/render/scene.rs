//! Scene-graph types emitted by the renderer.
//!
//! A scene is plain data — filled sector polygons, positioned rotated labels,
//! stroked edge paths, and center discs — consumable by any 2D vector
//! surface. Every sector carries a `PickTarget` identity payload so the host
//! can map pointer interactions back to a semantic node; `Scene::pick` does
//! the polar-space membership test for it.
//!
//! No egui types are imported here so the scene stays renderer-agnostic.

use crate::render::color::Rgba;
use crate::render::partition::Span;

// ─── Picking ─────────────────────────────────────────────────────────────────

/// Semantic identity of a rendered sector, attached for hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickTarget {
    Stage {
        stage: String,
    },
    Category {
        stage: String,
        category: String,
    },
    Tool {
        stage: String,
        category: String,
        tool: String,
    },
}

impl PickTarget {
    pub fn stage_name(&self) -> &str {
        match self {
            PickTarget::Stage { stage } => stage,
            PickTarget::Category { stage, .. } => stage,
            PickTarget::Tool { stage, .. } => stage,
        }
    }
}

// ─── Shapes ──────────────────────────────────────────────────────────────────

/// Filled annular sector with identity and hover metadata.
pub struct SectorShape {
    /// Closed outline in unit circle space.
    pub points: Vec<[f32; 2]>,
    /// Resolved extent, kept for polar hit-testing.
    pub span: Span,
    pub fill: Rgba,
    pub opacity: f32,
    pub target: PickTarget,
    /// Tooltip text for the host.
    pub hover: String,
}

/// Positioned, rotated text label.
pub struct LabelShape {
    pub pos: [f32; 2],
    /// Rotation in radians, already readability-flipped.
    pub rotation: f32,
    pub text: String,
    pub size: f32,
    pub color: Rgba,
}

/// Stroked directional edge between two stages.
pub struct EdgeShape {
    pub points: Vec<[f32; 2]>,
    pub dashed: bool,
    pub arrow: [[f32; 2]; 3],
    pub color: Rgba,
}

/// Filled disc (the hub, or a center-placed stage).
pub struct DiscShape {
    pub radius: f32,
    pub fill: Rgba,
    pub opacity: f32,
    pub target: Option<PickTarget>,
    pub hover: String,
}

/// One full rebuild of the diagram.
#[derive(Default)]
pub struct Scene {
    pub discs: Vec<DiscShape>,
    pub sectors: Vec<SectorShape>,
    pub labels: Vec<LabelShape>,
    pub edges: Vec<EdgeShape>,
}

impl Default for DiscShape {
    fn default() -> Self {
        Self {
            radius: 0.0,
            fill: Rgba::WHITE,
            opacity: 1.0,
            target: None,
            hover: String::new(),
        }
    }
}

impl Scene {
    /// Map a point in unit circle space back to the sector or disc under it.
    ///
    /// Rings do not overlap radially, so the first match is the only match.
    /// Discs are checked last: they sit under the rings.
    pub fn pick(&self, x: f32, y: f32) -> Option<&PickTarget> {
        let radius = (x * x + y * y).sqrt();
        let angle = y.atan2(x);

        for sector in &self.sectors {
            if sector.span.contains_radius(radius) && sector.span.contains_angle(angle) {
                return Some(&sector.target);
            }
        }
        for disc in &self.discs {
            if radius <= disc.radius {
                return disc.target.as_ref();
            }
        }
        None
    }

    /// Hover text for the node under a point, if any.
    pub fn hover_text(&self, x: f32, y: f32) -> Option<&str> {
        let radius = (x * x + y * y).sqrt();
        let angle = y.atan2(x);

        for sector in &self.sectors {
            if sector.span.contains_radius(radius) && sector.span.contains_angle(angle) {
                return Some(&sector.hover);
            }
        }
        for disc in &self.discs {
            if radius <= disc.radius && !disc.hover.is_empty() {
                return Some(&disc.hover);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::geometry::sector_points;

    fn sector(a0: f32, a1: f32, r0: f32, r1: f32, target: PickTarget) -> SectorShape {
        SectorShape {
            points: sector_points(a0, a1, r0, r1),
            span: Span {
                angle_start: a0,
                angle_end: a1,
                inner_radius: r0,
                outer_radius: r1,
            },
            fill: Rgba::FALLBACK_GRAY,
            opacity: 0.8,
            target,
            hover: String::new(),
        }
    }

    #[test]
    fn test_pick_resolves_ring_then_disc() {
        let mut scene = Scene::default();
        scene.discs.push(DiscShape {
            radius: 0.2,
            target: Some(PickTarget::Stage { stage: "Fund".into() }),
            ..DiscShape::default()
        });
        scene.sectors.push(sector(
            0.0,
            1.0,
            0.25,
            0.5,
            PickTarget::Stage { stage: "Plan".into() },
        ));

        // Inside the stage band and arc
        let p = crate::render::geometry::polar(0.5, 0.4);
        assert_eq!(scene.pick(p[0], p[1]).unwrap().stage_name(), "Plan");

        // Inside the center disc
        assert_eq!(scene.pick(0.05, 0.05).unwrap().stage_name(), "Fund");

        // Outside everything
        assert!(scene.pick(0.9, 0.9).is_none());

        // Right band, wrong arc
        let q = crate::render::geometry::polar(2.0, 0.4);
        assert!(scene.pick(q[0], q[1]).is_none());
    }
}
