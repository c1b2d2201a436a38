pub mod asset_line;
/// Component module exports
pub mod rating_table;

pub use asset_line::asset_line;
pub use rating_table::{level_bar, rating_color, RatingTable};

use ratatui::style::Color;

/// Teal #2DD4BF, or plain white in high-contrast mode
pub fn accent_color(high_contrast: bool) -> Color {
    if high_contrast {
        Color::White
    } else {
        Color::Rgb(45, 212, 191)
    }
}
