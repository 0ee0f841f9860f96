//! `LifewheelApp` — the top-level egui application state.
//!
//! This module declares the app struct and its constructor. All drawing
//! methods are split across the sibling sub-modules:
//!
//! - `sidebar` — view-mode selection, filters, display options
//! - `canvas`  — diagram painting, hover tooltips, click-to-focus
//! - `details` — tables and metrics below the diagram

pub mod canvas;
pub mod details;
pub mod sidebar;

use eframe::egui;

use lifewheel::model::index::{HierarchyIndex, ToolAggregation};
use lifewheel::model::loader::LoadOutcome;
use lifewheel::model::LifecycleData;
use lifewheel::render::{DisplayOptions, RingConfig};
use lifewheel::view::ViewState;

// ─── Application state ───────────────────────────────────────────────────────

pub struct LifewheelApp {
    /// Immutable dataset, loaded once before the app starts.
    pub data: LifecycleData,
    /// Derived lookups, built once from `data`.
    pub index: HierarchyIndex,
    /// Current view mode and filter selection.
    pub view: ViewState,
    pub options: DisplayOptions,
    pub config: RingConfig,
    /// Grouping policy for the comparison table.
    pub aggregation: ToolAggregation,
    /// Non-fatal diagnostic from the load step, shown until dismissed.
    pub load_diagnostic: Option<String>,
}

impl LifewheelApp {
    pub fn new(outcome: LoadOutcome) -> Self {
        let index = HierarchyIndex::build(&outcome.data);
        Self {
            data: outcome.data,
            index,
            view: ViewState::default(),
            options: DisplayOptions::default(),
            config: RingConfig::default(),
            aggregation: ToolAggregation::PerStage,
            load_diagnostic: outcome.diagnostic,
        }
    }
}

impl eframe::App for LifewheelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(diagnostic) = self.load_diagnostic.clone() {
            egui::TopBottomPanel::top("load_banner").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::from_rgb(180, 120, 0), "\u{24D8}");
                    ui.label(&diagnostic);
                    if ui.small_button("Dismiss").clicked() {
                        self.load_diagnostic = None;
                    }
                });
            });
        }

        egui::SidePanel::left("controls")
            .default_width(270.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.draw_sidebar(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Research Data Lifecycle");
                ui.add_space(4.0);
                self.draw_canvas(ui);
                ui.separator();
                self.draw_details(ui);
            });
        });
    }
}
