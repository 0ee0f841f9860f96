//! Detail tables below the diagram.
//!
//! What renders depends on the view mode: the complete view gets the stage
//! overview table and global statistics, focus mode gets the focused stage's
//! description and per-category tool tables, compare mode gets the selected
//! categories' tools across stages plus comparison metrics.

use eframe::egui;

use lifewheel::model::index::ToolAggregation;
use lifewheel::view::ViewMode;

use super::LifewheelApp;

impl LifewheelApp {
    pub fn draw_details(&mut self, ui: &mut egui::Ui) {
        match self.view.mode() {
            ViewMode::Complete => self.draw_overview(ui),
            ViewMode::FocusStage => self.draw_focus_details(ui),
            ViewMode::CompareTools => self.draw_compare_details(ui),
        }
    }

    // ─── Complete: overview table + global stats ─────────────────────────────

    fn draw_overview(&self, ui: &mut egui::Ui) {
        ui.heading("Lifecycle Stages Overview");

        egui::Grid::new("stage_overview")
            .striped(true)
            .min_col_width(80.0)
            .show(ui, |ui| {
                ui.strong("Stage");
                ui.strong("Categories");
                ui.strong("Tools");
                ui.strong("Description");
                ui.end_row();

                for summary in self.index.stage_summaries(&self.data) {
                    ui.label(&summary.name);
                    ui.label(summary.category_count.to_string());
                    ui.label(summary.tool_count.to_string());
                    ui.add(egui::Label::new(&summary.description).wrap());
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        ui.heading("Global Statistics");
        let (stages, categories, tools, connections) = self.index.totals(&self.data);
        ui.horizontal(|ui| {
            metric(ui, "Stages", stages);
            metric(ui, "Tool Categories", categories);
            metric(ui, "Tools", tools);
            metric(ui, "Connections", connections);
        });
    }

    // ─── Focus: stage description + per-category tools ───────────────────────

    fn draw_focus_details(&self, ui: &mut egui::Ui) {
        let Some(stage_name) = self.view.focused_stage().map(str::to_string) else {
            ui.label("Select a stage to focus on.");
            return;
        };
        let Some(stage) = self.data.stage(&stage_name) else {
            ui.label(format!("Unknown stage: {}", stage_name));
            return;
        };

        ui.heading(format!("{} Stage Details", stage.name));
        ui.label(&stage.description);
        ui.add_space(8.0);

        for cat in self.index.categories_of(&stage.name) {
            let tools = self.index.tools_of(&cat.key);
            egui::CollapsingHeader::new(format!("{} ({} tools)", cat.name, tools.len()))
                .default_open(true)
                .show(ui, |ui| {
                    egui::Grid::new(&cat.key).striped(true).show(ui, |ui| {
                        ui.strong("Tool");
                        ui.strong("Description");
                        ui.end_row();
                        for tool in tools {
                            ui.label(&tool.name);
                            ui.add(egui::Label::new(&tool.description).wrap());
                            ui.end_row();
                        }
                    });
                });
        }
    }

    // ─── Compare: selected categories across stages ──────────────────────────

    fn draw_compare_details(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tool Category Comparison");

        ui.horizontal(|ui| {
            ui.label("Group repeated tools:");
            ui.radio_value(&mut self.aggregation, ToolAggregation::PerStage, "Per stage");
            ui.radio_value(&mut self.aggregation, ToolAggregation::MergeByName, "Merge by name");
        });
        ui.add_space(4.0);

        let selected = self.view.compared_categories().clone();
        if selected.is_empty() {
            ui.label("Select categories in the sidebar to compare their tools.");
            return;
        }

        let rows = self.index.compare_rows(&self.data, &selected, self.aggregation);

        for category in &selected {
            let cat_rows: Vec<_> = rows.iter().filter(|r| &r.category == category).collect();
            if cat_rows.is_empty() {
                continue;
            }
            ui.strong(category);
            egui::Grid::new(category).striped(true).show(ui, |ui| {
                ui.strong("Tool");
                ui.strong("Stages");
                ui.strong("Description");
                ui.end_row();
                for row in cat_rows {
                    ui.label(&row.name);
                    ui.label(row.stages.join(", "));
                    ui.add(egui::Label::new(&row.description).wrap());
                    ui.end_row();
                }
            });
            ui.add_space(6.0);
        }

        ui.heading("Statistics");
        let stages_covered: std::collections::BTreeSet<&str> = rows
            .iter()
            .flat_map(|r| r.stages.iter().map(String::as_str))
            .collect();
        ui.horizontal(|ui| {
            metric(ui, "Total Tools", rows.len());
            metric(ui, "Stages Covered", stages_covered.len());
        });
    }
}

fn metric(ui: &mut egui::Ui, label: &str, value: usize) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.strong(value.to_string());
            ui.label(label);
        });
    });
}
