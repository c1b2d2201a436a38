/// Recommendation result screen
use crate::components::{accent_color, asset_line};
use career_core::{AssetKind, Recommendation};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone)]
pub struct ResultState {
    pub recommendation: Recommendation,
    pub high_contrast: bool,
}

impl ResultState {
    pub fn new(recommendation: Recommendation) -> Self {
        Self {
            recommendation,
            high_contrast: false,
        }
    }
}

pub struct ResultScreen<'a> {
    state: &'a ResultState,
}

impl<'a> ResultScreen<'a> {
    pub fn new(state: &'a ResultState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for ResultScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = accent_color(self.state.high_contrast);
        let border_style = if self.state.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let recommendation = &self.state.recommendation;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        // Headline
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(Span::styled(
                " Recommendation ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(chunks[0]);
        Widget::render(block, chunks[0], buf);

        let headline = vec![
            Line::from(Span::styled(
                recommendation.success_message(),
                Style::default()
                    .fg(if self.state.high_contrast {
                        Color::White
                    } else {
                        Color::Green
                    })
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "Readiness: {:.0}% of skills at Beginner or above",
                    recommendation.readiness * 100.0
                ),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        Widget::render(
            Paragraph::new(headline).alignment(Alignment::Center),
            inner,
            buf,
        );

        // Assets
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                " Career Roadmap ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(chunks[1]);
        Widget::render(block, chunks[1], buf);

        let label = &recommendation.label;
        let lines = vec![
            asset_line(
                AssetKind::Image,
                &recommendation.assets.image,
                label,
                self.state.high_contrast,
            ),
            Line::from(""),
            Line::from(Span::styled(
                recommendation.roadmap_intro(),
                Style::default().fg(accent),
            )),
            asset_line(
                AssetKind::Roadmap,
                &recommendation.assets.roadmap,
                label,
                self.state.high_contrast,
            ),
            Line::from(""),
            Line::from(Span::styled(
                "[Esc] Back to skills  [r] Start over  [q] Quit",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        Widget::render(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            inner,
            buf,
        );
    }
}
