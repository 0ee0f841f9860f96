//! Sidebar controls for `LifewheelApp`.
//!
//! View-mode radio, the per-mode filter pickers, level visibility toggles,
//! the connection-type filter, and the quick view buttons. Everything here
//! mutates `ViewState`/`DisplayOptions` only; the canvas re-renders from
//! those values on the same frame.

use eframe::egui;

use lifewheel::view::ViewMode;

use super::LifewheelApp;

impl LifewheelApp {
    pub fn draw_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading("Visualization Controls");
        ui.add_space(4.0);

        // View mode
        let mut mode = self.view.mode();
        ui.radio_value(&mut mode, ViewMode::Complete, "Complete Lifecycle");
        ui.radio_value(&mut mode, ViewMode::FocusStage, "Focus on Stage");
        ui.radio_value(&mut mode, ViewMode::CompareTools, "Compare Tools");
        if mode != self.view.mode() {
            self.view.set_mode(mode);
            self.seed_mode_defaults();
        }

        match self.view.mode() {
            ViewMode::FocusStage => self.draw_focus_picker(ui),
            ViewMode::CompareTools => self.draw_compare_picker(ui),
            ViewMode::Complete => {}
        }

        ui.separator();
        ui.heading("Display Options");

        ui.checkbox(&mut self.options.show_connections, "Show Connections");
        ui.checkbox(&mut self.options.show_categories, "Show Substages");
        ui.checkbox(&mut self.options.show_tools, "Show Tools");

        if self.options.show_connections {
            ui.label("Connection types:");
            ui.checkbox(&mut self.options.show_normal, "Normal flow");
            ui.checkbox(&mut self.options.show_alternative, "Alternative / feedback");
        }

        ui.separator();
        ui.heading("Layout");
        let centered = self.config.centered_stage.is_some();
        let label = if centered { "Fund in center" } else { "Uniform ring" };
        egui::ComboBox::from_id_salt("ring_layout")
            .selected_text(label)
            .show_ui(ui, |ui| {
                if ui.selectable_label(!centered, "Uniform ring").clicked() {
                    self.config.centered_stage = None;
                }
                if ui.selectable_label(centered, "Fund in center").clicked() {
                    self.config.centered_stage = Some("Fund".to_string());
                }
            });

        ui.separator();
        self.draw_quick_buttons(ui);
    }

    /// Give a freshly entered mode a useful starting selection, the way the
    /// original picker defaults behave.
    fn seed_mode_defaults(&mut self) {
        match self.view.mode() {
            ViewMode::FocusStage => {
                if self.view.focused_stage().is_none() {
                    if let Some(first) = self.data.stages.first() {
                        self.view.focus_stage(first.name.clone());
                    }
                }
            }
            ViewMode::CompareTools => {
                if self.view.compared_categories().is_empty() {
                    let seed: std::collections::BTreeSet<String> =
                        self.index.all_categories().into_iter().take(3).collect();
                    self.view.set_categories(seed);
                }
            }
            ViewMode::Complete => {}
        }
    }

    fn draw_focus_picker(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.label("Stage to focus on:");

        let current = self.view.focused_stage().unwrap_or("").to_string();
        let mut selected = current.clone();
        egui::ComboBox::from_id_salt("focus_stage")
            .selected_text(&current)
            .show_ui(ui, |ui| {
                for stage in &self.data.stages {
                    ui.selectable_value(&mut selected, stage.name.clone(), &stage.name);
                }
            });
        if selected != current && !selected.is_empty() {
            self.view.focus_stage(selected);
        }

        if let Some(stage) = self.view.focused_stage() {
            let cats = self.index.categories_of(stage);
            if !cats.is_empty() {
                ui.add_space(4.0);
                ui.label(format!("Categories in {}:", stage));
                for cat in cats {
                    ui.label(format!("  \u{2022} {}", cat.name));
                }
            }
        }
    }

    fn draw_compare_picker(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.label("Tool categories to compare:");
        for name in self.index.all_categories() {
            let mut checked = self.view.is_category_selected(&name);
            if ui.checkbox(&mut checked, &name).changed() {
                self.view.toggle_category(&name);
            }
        }
    }

    fn draw_quick_buttons(&mut self, ui: &mut egui::Ui) {
        ui.heading("Quick Views");
        if ui.button("Show All Levels").clicked() {
            self.options.show_connections = true;
            self.options.show_categories = true;
            self.options.show_tools = true;
        }
        if ui.button("Show Stages & Substages").clicked() {
            self.options.show_connections = true;
            self.options.show_categories = true;
            self.options.show_tools = false;
        }
        if ui.button("Show Stages Only").clicked() {
            self.options.show_connections = true;
            self.options.show_categories = false;
            self.options.show_tools = false;
        }
        if ui.button("Reset View").clicked() {
            self.view = Default::default();
            self.options = Default::default();
        }
    }
}
