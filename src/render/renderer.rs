//! Scene assembly.
//!
//! One stateless pass: Partition → Hub → Stage ring → Category ring → Tool
//! ring → Connections. Every call rebuilds the complete scene from the
//! immutable dataset plus the current view state and display options, so the
//! output can never lag behind a filter change.

use crate::model::index::HierarchyIndex;
use crate::model::{ConnectionKind, LifecycleData};
use crate::render::color::{parse_hex_color, Rgba};
use crate::render::geometry::{
    arrowhead, connection_path, label_rotation, polar, radial_connector, sector_points,
    truncate_label,
};
use crate::render::partition::{partition, RingConfig, Span, SpanTable};
use crate::render::scene::{DiscShape, EdgeShape, LabelShape, PickTarget, Scene, SectorShape};
use crate::view::ViewState;

/// Lightening factors for the descendant rings relative to the stage color.
const CATEGORY_LIGHTEN: f32 = 0.15;
const TOOL_LIGHTEN: f32 = 0.3;

/// Stroke color for connection edges and arrowheads.
const EDGE_COLOR: Rgba = Rgba { r: 85, g: 85, b: 85, a: 255 };
/// Label text color.
const LABEL_COLOR: Rgba = Rgba { r: 51, g: 51, b: 51, a: 255 };
/// Neutral hub fill when no stage is centered.
const HUB_COLOR: Rgba = Rgba { r: 240, g: 240, b: 240, a: 255 };

const ARROW_SIZE: f32 = 0.02;

/// Text heights in unit circle space; the host scales them to pixels.
const HUB_LABEL_SIZE: f32 = 0.045;
const STAGE_LABEL_SIZE: f32 = 0.036;
const CATEGORY_LABEL_SIZE: f32 = 0.026;
const TOOL_LABEL_SIZE: f32 = 0.021;

// ─── Display options ─────────────────────────────────────────────────────────

/// Per-draw toggles, owned by the host and passed into every call.
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub show_connections: bool,
    pub show_categories: bool,
    pub show_tools: bool,
    pub show_normal: bool,
    pub show_alternative: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_connections: true,
            show_categories: true,
            show_tools: false,
            show_normal: true,
            show_alternative: true,
        }
    }
}

impl DisplayOptions {
    fn kind_enabled(&self, kind: ConnectionKind) -> bool {
        match kind {
            ConnectionKind::Normal => self.show_normal,
            ConnectionKind::Alternative => self.show_alternative,
        }
    }
}

// ─── Scene assembly ──────────────────────────────────────────────────────────

/// Build the complete scene for one draw call.
pub fn build_scene(
    data: &LifecycleData,
    index: &HierarchyIndex,
    view: &ViewState,
    opts: &DisplayOptions,
    config: &RingConfig,
) -> Scene {
    let table = partition(data, index, config);
    let mut scene = Scene::default();

    emit_hub(data, view, config, &table, &mut scene);
    emit_stage_ring(data, view, config, &table, &mut scene);
    if opts.show_categories {
        emit_category_ring(data, index, view, config, &table, &mut scene);
    }
    if opts.show_tools {
        emit_tool_ring(data, index, view, config, &table, &mut scene);
    }
    if opts.show_connections {
        emit_connections(data, opts, config, &table, &mut scene);
    }

    log::debug!(
        "Scene rebuilt: {} sectors, {} labels, {} edges",
        scene.sectors.len(),
        scene.labels.len(),
        scene.edges.len()
    );
    scene
}

/// Center disc: either the neutral hub with the diagram title, or the
/// center-placed stage under the centered preset.
fn emit_hub(
    data: &LifecycleData,
    view: &ViewState,
    config: &RingConfig,
    table: &SpanTable,
    scene: &mut Scene,
) {
    match table.centered.as_deref().and_then(|name| data.stage(name)) {
        Some(stage) => {
            scene.discs.push(DiscShape {
                radius: config.center_radius - config.radial_padding,
                fill: parse_hex_color(&stage.color),
                opacity: view.stage_opacity(&stage.name, config),
                target: Some(PickTarget::Stage { stage: stage.name.clone() }),
                hover: format!("{}\n{}", stage.name, stage.description),
            });
            scene.labels.push(LabelShape {
                pos: [0.0, 0.0],
                rotation: 0.0,
                text: stage.name.clone(),
                size: HUB_LABEL_SIZE,
                color: LABEL_COLOR,
            });
        }
        None => {
            scene.discs.push(DiscShape {
                radius: config.center_radius - config.radial_padding,
                fill: HUB_COLOR,
                opacity: 1.0,
                target: None,
                hover: String::new(),
            });
            scene.labels.push(LabelShape {
                pos: [0.0, 0.0],
                rotation: 0.0,
                text: "Research\nData\nLifecycle".into(),
                size: HUB_LABEL_SIZE,
                color: LABEL_COLOR,
            });
        }
    }
}

fn emit_stage_ring(
    data: &LifecycleData,
    view: &ViewState,
    config: &RingConfig,
    table: &SpanTable,
    scene: &mut Scene,
) {
    for stage in &data.stages {
        let Some(span) = table.stages.get(&stage.name) else {
            continue; // center-placed
        };

        scene.sectors.push(SectorShape {
            points: sector_points(
                span.angle_start,
                span.angle_end,
                span.inner_radius,
                span.outer_radius,
            ),
            span: *span,
            fill: parse_hex_color(&stage.color),
            opacity: view.stage_opacity(&stage.name, config),
            target: PickTarget::Stage { stage: stage.name.clone() },
            hover: format!("{}\n{}", stage.name, stage.description),
        });

        push_label(scene, span, &stage.name, STAGE_LABEL_SIZE, config, usize::MAX);
    }
}

fn emit_category_ring(
    data: &LifecycleData,
    index: &HierarchyIndex,
    view: &ViewState,
    config: &RingConfig,
    table: &SpanTable,
    scene: &mut Scene,
) {
    for stage in &data.stages {
        let base = parse_hex_color(&stage.color).lighten(CATEGORY_LIGHTEN);

        for cat in index.categories_of(&stage.name) {
            let Some(span) = table.categories.get(&cat.key) else {
                continue;
            };
            let tool_count = index.tools_of(&cat.key).len();

            scene.sectors.push(SectorShape {
                points: sector_points(
                    span.angle_start,
                    span.angle_end,
                    span.inner_radius,
                    span.outer_radius,
                ),
                span: *span,
                fill: base,
                opacity: view.category_opacity(&stage.name, &cat.name, config),
                target: PickTarget::Category {
                    stage: stage.name.clone(),
                    category: cat.name.clone(),
                },
                hover: format!("{}\n{} stage, {} tools", cat.name, stage.name, tool_count),
            });

            push_label(
                scene,
                span,
                &cat.name,
                CATEGORY_LABEL_SIZE,
                config,
                config.max_label_chars,
            );
        }
    }
}

fn emit_tool_ring(
    data: &LifecycleData,
    index: &HierarchyIndex,
    view: &ViewState,
    config: &RingConfig,
    table: &SpanTable,
    scene: &mut Scene,
) {
    for stage in &data.stages {
        let base = parse_hex_color(&stage.color).lighten(TOOL_LIGHTEN);

        for cat in index.categories_of(&stage.name) {
            if !view.tools_visible(&stage.name, &cat.name) {
                continue;
            }
            let Some(spans) = table.tools.get(&cat.key) else {
                continue;
            };

            for (tool, span) in index.tools_of(&cat.key).iter().zip(spans) {
                scene.sectors.push(SectorShape {
                    points: sector_points(
                        span.angle_start,
                        span.angle_end,
                        span.inner_radius,
                        span.outer_radius,
                    ),
                    span: *span,
                    fill: base,
                    opacity: config.tool_opacity,
                    target: PickTarget::Tool {
                        stage: stage.name.clone(),
                        category: cat.name.clone(),
                        tool: tool.name.clone(),
                    },
                    hover: format!("{}\n{}\n{}", tool.name, tool.category, tool.description),
                });

                push_label(
                    scene,
                    span,
                    &tool.name,
                    TOOL_LABEL_SIZE,
                    config,
                    config.max_label_chars,
                );
            }
        }
    }
}

/// Directional edges between resolved stage positions. Edges whose endpoints
/// did not resolve (unknown stage name) are skipped; edges touching the
/// center-placed stage become radial connectors.
fn emit_connections(
    data: &LifecycleData,
    opts: &DisplayOptions,
    config: &RingConfig,
    table: &SpanTable,
    scene: &mut Scene,
) {
    for connection in &data.connections {
        if !opts.kind_enabled(connection.kind) {
            continue;
        }

        let from_mid = table.stage_mid_angle(&connection.from);
        let to_mid = table.stage_mid_angle(&connection.to);
        let centered = table.centered.as_deref();

        let points = match (from_mid, to_mid) {
            (Some(a), Some(b)) => {
                connection_path(a, b, config.connection_radius, config.connection_bulge)
            }
            // Outbound from the center disc
            (None, Some(b)) if centered == Some(connection.from.as_str()) => {
                radial_connector(b, config.center_radius, config.connection_radius)
            }
            // Inbound to the center disc
            (Some(a), None) if centered == Some(connection.to.as_str()) => {
                radial_connector(a, config.connection_radius, config.center_radius)
            }
            _ => {
                log::warn!(
                    "Skipping connection with unresolved endpoint: {} -> {}",
                    connection.from,
                    connection.to
                );
                continue;
            }
        };

        let tip = points[points.len() - 1];
        let prev = points[points.len() - 2];
        let dir = [tip[0] - prev[0], tip[1] - prev[1]];

        scene.edges.push(EdgeShape {
            points,
            dashed: connection.kind == ConnectionKind::Alternative,
            arrow: arrowhead(tip, dir, ARROW_SIZE),
            color: EDGE_COLOR,
        });
    }
}

/// Label at a span's mid-angle/mid-radius, rotated for readability, truncated
/// past `max_chars`, suppressed entirely when the sector is too narrow.
fn push_label(
    scene: &mut Scene,
    span: &Span,
    text: &str,
    size: f32,
    config: &RingConfig,
    max_chars: usize,
) {
    if span.angular_width() < config.min_label_span {
        return;
    }
    let mid = span.mid_angle();
    scene.labels.push(LabelShape {
        pos: polar(mid, span.mid_radius()),
        rotation: label_rotation(mid),
        text: truncate_label(text, max_chars),
        size,
        color: LABEL_COLOR,
    });
}
