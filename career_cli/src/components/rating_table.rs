/// Skill table with a rating column, level bar and scrollbar

use career_core::SkillRating;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Row, Table, Widget},
};

use super::accent_color;

/// Filled/empty bar for a rating, one cell per step on the scale
pub fn level_bar(rating: SkillRating) -> String {
    let max = SkillRating::Professional.value() as usize;
    let filled = rating.value() as usize;
    format!("{}{}", "■".repeat(filled), "□".repeat(max - filled))
}

pub fn rating_color(rating: SkillRating, high_contrast: bool) -> Color {
    if high_contrast {
        return Color::White;
    }
    match rating.value() {
        0 | 1 => Color::Rgb(248, 113, 113), // Red
        2 | 3 => Color::Rgb(251, 191, 36),  // Amber
        _ => Color::Green,
    }
}

pub struct RatingTable<'a> {
    rows: Vec<(&'a str, SkillRating)>,
    selected: usize,
    title: &'a str,
    high_contrast: bool,
}

impl<'a> RatingTable<'a> {
    pub fn new(title: &'a str, rows: Vec<(&'a str, SkillRating)>) -> Self {
        Self {
            rows,
            selected: 0,
            title,
            high_contrast: false,
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index.min(self.rows.len().saturating_sub(1));
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }

    /// First row to draw so the selection stays inside the viewport
    pub fn scroll_offset(&self, viewport: usize) -> usize {
        if viewport == 0 {
            return 0;
        }
        self.selected.saturating_sub(viewport - 1)
    }
}

impl<'a> Widget for RatingTable<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = accent_color(self.high_contrast);
        let border_style = if self.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                self.title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let header_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
        let header = Row::new(
            ["#", "Skill", "Rating", "Level"]
                .into_iter()
                .map(|h| Span::styled(h, header_style)),
        )
        .height(1);

        // Minus borders and header
        let viewport = area.height.saturating_sub(3) as usize;
        let offset = self.scroll_offset(viewport);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .enumerate()
            .skip(offset)
            .map(|(i, (skill, rating))| {
                let style = if i == self.selected {
                    Style::default()
                        .bg(accent)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(rating_color(*rating, self.high_contrast))
                };
                Row::new(vec![
                    format!("{:>2}", i + 1),
                    skill.to_string(),
                    rating.label().to_string(),
                    level_bar(*rating),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(15),
            Constraint::Length(7),
        ];
        let table = Table::new(rows, widths).header(header).block(block);

        Widget::render(table, area, buf);

        if area.height > 4 {
            self.render_scrollbar(area, buf);
        }
    }
}

impl<'a> RatingTable<'a> {
    fn render_scrollbar(&self, area: Rect, buf: &mut Buffer) {
        let total = self.rows.len();
        let viewport = area.height.saturating_sub(3) as usize;
        if total <= viewport {
            return;
        }

        let scrollbar_x = area.right().saturating_sub(1);
        let scrollbar_start = area.top() + 2;
        let scrollbar_end = area.bottom().saturating_sub(1);
        let scrollbar_height = scrollbar_end.saturating_sub(scrollbar_start);
        if scrollbar_height == 0 {
            return;
        }

        let position =
            (self.selected as f32 / total.max(1) as f32 * scrollbar_height as f32) as u16;
        let thumb_y = scrollbar_start + position.min(scrollbar_height.saturating_sub(1));
        let thumb_color = accent_color(self.high_contrast);

        for y in scrollbar_start..scrollbar_end {
            if let Some(cell) = buf.cell_mut((scrollbar_x, y)) {
                if y == thumb_y {
                    cell.set_char('█').set_fg(thumb_color);
                } else {
                    cell.set_char('│').set_fg(Color::DarkGray);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bar_width_is_constant() {
        for rating in SkillRating::ALL {
            assert_eq!(level_bar(rating).chars().count(), 6);
        }
        assert_eq!(level_bar(SkillRating::Average), "■■■□□□");
    }

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        let rows = vec![("x", SkillRating::Beginner); 17];
        let table = RatingTable::new("t", rows).selected(16);
        assert_eq!(table.scroll_offset(10), 7);
        assert_eq!(table.scroll_offset(20), 0);
        assert_eq!(table.scroll_offset(0), 0);
    }
}
