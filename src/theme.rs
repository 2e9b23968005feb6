//! Theme module for msa-flow-tui
//!
//! This module provides a centralized color palette and styling constants
//! for the dark "slate classroom" look, plus helpers for turning catalog
//! accent colours into dimmed terminal colours.

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::models::HexColor;

// ============================================================================
// Background Colors - Slate Palette
// ============================================================================

/// Primary background color - near black (#030712)
pub const BG_PRIMARY: Color = Color::Rgb(3, 7, 18);

/// Secondary background color - card and code background (#111827)
pub const BG_SECONDARY: Color = Color::Rgb(17, 24, 39);

/// Tertiary background color - idle buttons (#1f2937)
pub const BG_TERTIARY: Color = Color::Rgb(31, 41, 55);

/// Subtle border color (#1f2937)
pub const BORDER_SUBTLE: Color = Color::Rgb(31, 41, 55);

/// Border for already passed cards (#374151)
pub const BORDER_PASSED: Color = Color::Rgb(55, 65, 81);

/// Unfilled progress segment (#374151)
pub const SEGMENT_EMPTY: Color = Color::Rgb(55, 65, 81);

// ============================================================================
// Accent Colors - Indigo Primary
// ============================================================================

/// Primary indigo accent color (#4f46e5)
pub const INDIGO_PRIMARY: Color = Color::Rgb(79, 70, 229);

/// Light indigo for monospace labels (#a5b4fc)
pub const INDIGO_LIGHT: Color = Color::Rgb(165, 180, 252);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - white (#f9fafb)
pub const TEXT_PRIMARY: Color = Color::Rgb(249, 250, 251);

/// Secondary text color - code and descriptions (#d1d5db)
pub const TEXT_SECONDARY: Color = Color::Rgb(209, 213, 219);

/// Muted text color - inactive labels (#9ca3af)
pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175);

/// Faint text color - hints and disabled controls (#6b7280)
pub const TEXT_FAINT: Color = Color::Rgb(107, 114, 128);

/// Rounded corners for all cards
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

/// Catalog colour as a terminal colour
pub fn accent(color: HexColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Mix `color` over the primary background. `alpha` 1.0 keeps the colour,
/// 0.0 yields the background. Terminals have no opacity, so this is how
/// passed and upcoming steps are faded.
pub fn fade(color: HexColor, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    let (br, bg, bb) = match BG_PRIMARY {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    };
    let mix = |c: u8, base: u8| (base as f32 + (c as f32 - base as f32) * alpha).round() as u8;
    Color::Rgb(mix(color.r, br), mix(color.g, bg), mix(color.b, bb))
}

/// Same as [`fade`] for palette constants
pub fn fade_color(color: Color, alpha: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => fade(HexColor::new(r, g, b), alpha),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_conversion() {
        assert_eq!(accent(HexColor::new(0x63, 0x66, 0xf1)), Color::Rgb(0x63, 0x66, 0xf1));
    }

    #[test]
    fn test_fade_bounds() {
        let c = HexColor::new(200, 100, 50);
        assert_eq!(fade(c, 1.0), Color::Rgb(200, 100, 50));
        assert_eq!(fade(c, 0.0), BG_PRIMARY);
        // Out of range alpha is clamped
        assert_eq!(fade(c, 3.0), Color::Rgb(200, 100, 50));
    }

    #[test]
    fn test_fade_half() {
        // (3 + (201 - 3) * 0.5) = 102
        assert_eq!(fade(HexColor::new(201, 7, 18), 0.5), Color::Rgb(102, 7, 18));
    }

    #[test]
    fn test_fade_color_ignores_named_colors() {
        assert_eq!(fade_color(Color::Reset, 0.5), Color::Reset);
    }
}
