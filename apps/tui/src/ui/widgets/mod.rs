pub mod legend;
pub mod map_canvas;
pub mod popup;

use ratatui::style::Color;

use crate::domain::DifClass;

/// Parses `#rrggbb` into a terminal color; anything else renders Gray.
pub fn hex_color(hex: &str) -> Color {
    let digits = match hex.strip_prefix('#') {
        Some(d) if d.len() == 6 => d,
        _ => return Color::Gray,
    };
    let Ok(value) = u32::from_str_radix(digits, 16) else {
        return Color::Gray;
    };
    #[allow(clippy::cast_possible_truncation)]
    Color::Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

pub const fn dif_color(class: DifClass) -> Color {
    match class {
        DifClass::Positive => Color::Green,
        DifClass::Negative => Color::Red,
        DifClass::Default => Color::Gray,
    }
}
