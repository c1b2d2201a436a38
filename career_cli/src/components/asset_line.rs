/// One styled line describing an image or roadmap lookup

use career_core::{AssetKind, AssetStatus, CareerLabel};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn status_symbol(status: &AssetStatus) -> &'static str {
    match status {
        AssetStatus::Available { .. } => "✓",
        AssetStatus::Unavailable => "ℹ",
        AssetStatus::InvalidImage { .. } => "⚠",
    }
}

pub fn status_color(status: &AssetStatus, high_contrast: bool) -> Color {
    if high_contrast {
        return Color::White;
    }
    match status {
        AssetStatus::Available { .. } => Color::Green,
        AssetStatus::Unavailable => Color::Rgb(96, 165, 250), // Blue, informational
        AssetStatus::InvalidImage { .. } => Color::Rgb(251, 146, 60), // Orange
    }
}

pub fn asset_line(
    kind: AssetKind,
    status: &AssetStatus,
    label: &CareerLabel,
    high_contrast: bool,
) -> Line<'static> {
    let color = status_color(status, high_contrast);
    Line::from(vec![
        Span::styled(
            format!("{} {:8} ", status_symbol(status), kind.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(status.message(kind, label), Style::default().fg(color)),
    ])
}
