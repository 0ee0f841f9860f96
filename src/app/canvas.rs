//! Diagram canvas for `LifewheelApp`.
//!
//! Rebuilds the scene every frame from the current view state and paints it
//! with the egui painter. Annular sectors are tessellated as quad strips
//! between their inner and outer arcs (a whole sector outline is concave, so
//! it cannot go down as one convex polygon). Pointer interaction is resolved
//! in polar space through `Scene::pick`, not against the painted polygons.

use eframe::egui;

use lifewheel::render::color::Rgba;
use lifewheel::render::scene::{Scene, SectorShape};
use lifewheel::render::{build_scene, PickTarget};

use super::LifewheelApp;

/// Fraction of the canvas half-side used by the unit circle.
const CANVAS_FILL: f32 = 0.95;

fn color32(c: Rgba, opacity: f32) -> egui::Color32 {
    let a = (c.a as f32 * opacity.clamp(0.0, 1.0)) as u8;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, a)
}

impl LifewheelApp {
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let side = ui.available_width().min(760.0);
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(side, side),
            egui::Sense::click().union(egui::Sense::hover()),
        );
        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter_at(rect);
        let center = rect.center();
        let scale = side / 2.0 * CANVAS_FILL;

        // Unit circle space is y-up; the screen is y-down.
        let to_screen =
            |p: [f32; 2]| egui::pos2(center.x + p[0] * scale, center.y - p[1] * scale);

        let scene = build_scene(&self.data, &self.index, &self.view, &self.options, &self.config);

        painter.rect_filled(rect, egui::Rounding::ZERO, egui::Color32::WHITE);

        for disc in &scene.discs {
            painter.circle_filled(center, disc.radius * scale, color32(disc.fill, disc.opacity));
            painter.circle_stroke(
                center,
                disc.radius * scale,
                egui::Stroke::new(1.0, egui::Color32::from_gray(204)),
            );
        }

        for sector in &scene.sectors {
            paint_sector(&painter, sector, &to_screen);
        }

        for edge in &scene.edges {
            let points: Vec<egui::Pos2> = edge.points.iter().map(|p| to_screen(*p)).collect();
            let stroke = egui::Stroke::new(1.5, color32(edge.color, 1.0));
            if edge.dashed {
                painter.extend(egui::Shape::dashed_line(&points, stroke, 6.0, 4.0));
            } else {
                painter.add(egui::Shape::line(points, stroke));
            }
            painter.add(egui::Shape::convex_polygon(
                edge.arrow.iter().map(|p| to_screen(*p)).collect(),
                color32(edge.color, 1.0),
                egui::Stroke::NONE,
            ));
        }

        for label in &scene.labels {
            let galley = painter.layout_no_wrap(
                label.text.clone(),
                egui::FontId::proportional((label.size * scale).max(8.0)),
                color32(label.color, 1.0),
            );
            let pos = to_screen(label.pos);
            // TextShape rotates about the galley's anchor; shift the anchor by
            // the rotated half-extent so the text stays centered on `pos`.
            let angle = label.rotation;
            let (w, h) = (galley.size().x, galley.size().y);
            let (sin, cos) = (angle.sin(), angle.cos());
            let anchor = egui::pos2(
                pos.x + (-w / 2.0) * cos - (-h / 2.0) * sin,
                pos.y + (-w / 2.0) * sin + (-h / 2.0) * cos,
            );
            painter.add(egui::Shape::Text(
                egui::epaint::TextShape::new(anchor, galley, egui::Color32::from_gray(51))
                    .with_angle(angle),
            ));
        }

        self.handle_pointer(&response, center, scale, &scene);
    }

    fn handle_pointer(
        &mut self,
        response: &egui::Response,
        center: egui::Pos2,
        scale: f32,
        scene: &Scene,
    ) {
        let to_unit = |pos: egui::Pos2| {
            ((pos.x - center.x) / scale, (center.y - pos.y) / scale)
        };

        if let Some(pos) = response.hover_pos() {
            let (ux, uy) = to_unit(pos);
            if let Some(text) = scene.hover_text(ux, uy) {
                response.clone().on_hover_text(text.to_string());
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (ux, uy) = to_unit(pos);
                let action = scene.pick(ux, uy).cloned();
                match action {
                    Some(PickTarget::Stage { stage }) => self.view.focus_stage(stage),
                    Some(PickTarget::Category { category, .. }) => {
                        self.view.compare_category(category)
                    }
                    // Tools are hover-only
                    Some(PickTarget::Tool { .. }) | None => {}
                }
            }
        }
    }
}

/// Fill a sector as quads between its outer and inner arcs, then stroke the
/// full outline in white for the inter-sector separation look.
fn paint_sector(
    painter: &egui::Painter,
    sector: &SectorShape,
    to_screen: &impl Fn([f32; 2]) -> egui::Pos2,
) {
    let n = sector.points.len() / 2;
    if n < 2 {
        return;
    }
    let fill = color32(sector.fill, sector.opacity);
    let outer = &sector.points[..n];
    let inner_rev = &sector.points[n..];
    // inner arc was emitted end→start; index it backwards to pair with outer
    let inner = |i: usize| inner_rev[inner_rev.len() - 1 - i];

    for i in 0..n - 1 {
        painter.add(egui::Shape::convex_polygon(
            vec![
                to_screen(outer[i]),
                to_screen(outer[i + 1]),
                to_screen(inner(i + 1)),
                to_screen(inner(i)),
            ],
            fill,
            egui::Stroke::NONE,
        ));
    }

    painter.add(egui::Shape::closed_line(
        sector.points.iter().map(|p| to_screen(*p)).collect(),
        egui::Stroke::new(1.0, egui::Color32::WHITE),
    ));
}
