pub mod colors;

// Re-export all colors and functions
pub use colors::{
    apply_theme, card_frame, elevated_frame, focus_stroke, nav_frame, separator_color, ACCENT,
    ACCENT_DIM, ACCENT_GLOW, BG_DARK, BG_HOVER, BG_LIGHT, BG_MID, SUCCESS, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY, WARNING,
};
