//! View-state controller.
//!
//! Holds the current view mode and filter selection, validates transitions,
//! and answers per-node visibility/opacity questions for the renderer. The
//! host application owns one `ViewState` value and passes it into every
//! render call; the rendered scene is a pure function of it, so the controls
//! and the diagram can never disagree.

use std::collections::BTreeSet;

use crate::render::partition::RingConfig;

/// The three mutually exclusive view modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Everything at default opacity, no filtering.
    #[default]
    Complete,
    /// One stage at full opacity, the rest dimmed.
    FocusStage,
    /// Selected categories at full opacity across all stages.
    CompareTools,
}

/// Current mode plus the selection belonging to it.
///
/// Switching modes clears the other mode's selection, so a stale stage can
/// never leak into a category comparison or vice versa.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    mode: ViewMode,
    focused_stage: Option<String>,
    compared_categories: BTreeSet<String>,
}

impl ViewState {
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch modes, dropping the selection that belongs to the mode left
    /// behind.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        if mode != ViewMode::FocusStage {
            self.focused_stage = None;
        }
        if mode != ViewMode::CompareTools {
            self.compared_categories.clear();
        }
    }

    // ─── Focus selection ─────────────────────────────────────────────────────

    pub fn focused_stage(&self) -> Option<&str> {
        self.focused_stage.as_deref()
    }

    /// Enter focus mode on `stage` (the click-to-focus action).
    pub fn focus_stage(&mut self, stage: impl Into<String>) {
        self.set_mode(ViewMode::FocusStage);
        self.focused_stage = Some(stage.into());
    }

    fn is_focused(&self, stage: &str) -> bool {
        self.mode == ViewMode::FocusStage && self.focused_stage.as_deref() == Some(stage)
    }

    // ─── Compare selection ───────────────────────────────────────────────────

    pub fn compared_categories(&self) -> &BTreeSet<String> {
        &self.compared_categories
    }

    /// Enter compare mode with `category` selected.
    pub fn compare_category(&mut self, category: impl Into<String>) {
        self.set_mode(ViewMode::CompareTools);
        self.compared_categories.insert(category.into());
    }

    /// Toggle a category in the comparison set. Only meaningful in compare
    /// mode; ignored elsewhere.
    pub fn toggle_category(&mut self, category: &str) {
        if self.mode != ViewMode::CompareTools {
            return;
        }
        if !self.compared_categories.remove(category) {
            self.compared_categories.insert(category.to_string());
        }
    }

    pub fn set_categories(&mut self, categories: BTreeSet<String>) {
        if self.mode == ViewMode::CompareTools {
            self.compared_categories = categories;
        }
    }

    pub fn is_category_selected(&self, category: &str) -> bool {
        self.compared_categories.contains(category)
    }

    // ─── Opacity policy ──────────────────────────────────────────────────────

    /// Opacity for a stage sector.
    pub fn stage_opacity(&self, stage: &str, config: &RingConfig) -> f32 {
        match self.mode {
            ViewMode::FocusStage if !self.is_focused(stage) => config.dimmed_opacity,
            _ => config.stage_opacity,
        }
    }

    /// Opacity for a category sector.
    pub fn category_opacity(&self, stage: &str, category: &str, config: &RingConfig) -> f32 {
        match self.mode {
            ViewMode::FocusStage if !self.is_focused(stage) => config.dimmed_opacity,
            ViewMode::CompareTools if !self.is_category_selected(category) => {
                config.dimmed_opacity
            }
            _ => config.category_opacity,
        }
    }

    /// Whether the tool ring renders this category's tools at all.
    ///
    /// In focus mode only the focused stage's tools appear; in compare mode
    /// only tools of selected categories.
    pub fn tools_visible(&self, stage: &str, category: &str) -> bool {
        match self.mode {
            ViewMode::Complete => true,
            ViewMode::FocusStage => self.is_focused(stage),
            ViewMode::CompareTools => self.is_category_selected(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_switch_clears_other_selection() {
        let mut view = ViewState::default();
        view.focus_stage("Plan");
        assert_eq!(view.focused_stage(), Some("Plan"));

        view.set_mode(ViewMode::CompareTools);
        assert_eq!(view.focused_stage(), None);

        view.toggle_category("Database");
        assert!(view.is_category_selected("Database"));

        view.set_mode(ViewMode::FocusStage);
        assert!(view.compared_categories().is_empty());
    }

    #[test]
    fn test_reentering_same_mode_keeps_selection() {
        let mut view = ViewState::default();
        view.focus_stage("Plan");
        view.set_mode(ViewMode::FocusStage);
        assert_eq!(view.focused_stage(), Some("Plan"));
    }

    #[test]
    fn test_toggle_ignored_outside_compare_mode() {
        let mut view = ViewState::default();
        view.toggle_category("Database");
        assert!(view.compared_categories().is_empty());
    }

    #[test]
    fn test_focus_opacity_exclusive() {
        let config = RingConfig::default();
        let mut view = ViewState::default();
        view.focus_stage("Plan");

        let focused = view.stage_opacity("Plan", &config);
        let dimmed = view.stage_opacity("Collect", &config);
        assert!(focused > dimmed);
        assert!(dimmed > 0.0, "dimmed stages stay visible");
    }

    #[test]
    fn test_compare_opacity_exclusive() {
        let config = RingConfig::default();
        let mut view = ViewState::default();
        view.compare_category("Database");

        let selected = view.category_opacity("Access", "Database", &config);
        let other = view.category_opacity("Access", "Authentication", &config);
        assert!(selected > other);

        // Selection is by category name, regardless of stage.
        let elsewhere = view.category_opacity("Store", "Database", &config);
        assert_eq!(elsewhere, selected);
    }

    #[test]
    fn test_tool_visibility_policy() {
        let mut view = ViewState::default();
        assert!(view.tools_visible("Plan", "Project Planning"));

        view.focus_stage("Plan");
        assert!(view.tools_visible("Plan", "Project Planning"));
        assert!(!view.tools_visible("Access", "Database"));

        view.set_mode(ViewMode::CompareTools);
        view.toggle_category("Database");
        assert!(view.tools_visible("Access", "Database"));
        assert!(!view.tools_visible("Plan", "Project Planning"));
    }

    #[test]
    fn test_complete_mode_uses_default_opacities() {
        let config = RingConfig::default();
        let view = ViewState::default();
        assert_eq!(view.stage_opacity("Plan", &config), config.stage_opacity);
        assert_eq!(
            view.category_opacity("Plan", "Project Planning", &config),
            config.category_opacity
        );
    }
}
