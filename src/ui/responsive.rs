//! Responsive layout utilities for adapting the page to window width
//!
//! Provides breakpoint-based layout decisions for the section grids.

use eframe::egui::Ui;

/// Layout mode based on available width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// >1000px - full grids, hero split with avatar beside the text
    Wide,
    /// 700-1000px - tighter grids, hero still split
    Medium,
    /// <700px - single/double columns, stacked hero and contact
    Narrow,
}

impl LayoutMode {
    /// Determine layout mode from pixel width
    pub fn from_width(width: f32) -> Self {
        if width > 1000.0 {
            LayoutMode::Wide
        } else if width > 700.0 {
            LayoutMode::Medium
        } else {
            LayoutMode::Narrow
        }
    }

    /// Determine layout mode from UI's available width
    pub fn from_ui(ui: &Ui) -> Self {
        Self::from_width(ui.available_width())
    }

    pub fn is_narrow(self) -> bool {
        matches!(self, LayoutMode::Narrow)
    }

    /// Column count for a section grid
    pub fn columns(self, wide: usize, medium: usize, narrow: usize) -> usize {
        match self {
            LayoutMode::Wide => wide,
            LayoutMode::Medium => medium,
            LayoutMode::Narrow => narrow,
        }
    }

    /// Contact info and form stack vertically instead of sitting side by side
    pub fn stacked(self) -> bool {
        self.is_narrow()
    }

    /// Display size for the hero name letters
    pub fn hero_title_size(self) -> f32 {
        match self {
            LayoutMode::Wide => 56.0,
            LayoutMode::Medium => 44.0,
            LayoutMode::Narrow => 34.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(LayoutMode::from_width(1400.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(1000.0), LayoutMode::Medium);
        assert_eq!(LayoutMode::from_width(720.0), LayoutMode::Medium);
        assert_eq!(LayoutMode::from_width(700.0), LayoutMode::Narrow);
        assert_eq!(LayoutMode::from_width(320.0), LayoutMode::Narrow);
    }

    #[test]
    fn test_grid_columns_follow_mode() {
        assert_eq!(LayoutMode::Wide.columns(4, 3, 2), 4);
        assert_eq!(LayoutMode::Medium.columns(4, 3, 2), 3);
        assert_eq!(LayoutMode::Narrow.columns(4, 3, 2), 2);
        assert!(LayoutMode::Narrow.stacked());
        assert!(!LayoutMode::Wide.stacked());
    }
}
