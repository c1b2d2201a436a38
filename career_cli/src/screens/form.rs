/// Skill form screen - one rating per skill attribute
use crate::components::{accent_color, level_bar, rating_color, RatingTable};
use career_core::validator::readiness_ratio;
use career_core::{SkillRating, SkillVector, SKILL_COLUMNS, SKILL_COUNT};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

pub struct FormState {
    pub ratings: SkillVector,
    pub selected: usize,
    pub readiness_threshold: f64,
    pub high_contrast: bool,
    pub last_action: String,
}

impl FormState {
    pub fn new(readiness_threshold: f64) -> Self {
        Self {
            ratings: SkillVector::default(),
            selected: 0,
            readiness_threshold,
            high_contrast: false,
            last_action: "Ready".to_string(),
        }
    }

    pub fn move_down(&mut self) {
        if self.selected < SKILL_COUNT - 1 {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn selected_rating(&self) -> SkillRating {
        self.ratings.get(self.selected).unwrap_or_default()
    }

    pub fn selected_skill(&self) -> &'static str {
        SKILL_COLUMNS[self.selected]
    }

    pub fn set_selected(&mut self, rating: SkillRating) {
        self.ratings.set(self.selected, rating);
        self.last_action = format!("{}: {}", self.selected_skill(), rating);
    }

    pub fn raise(&mut self) {
        self.set_selected(self.selected_rating().next());
    }

    pub fn lower(&mut self) {
        self.set_selected(self.selected_rating().prev());
    }

    pub fn reset(&mut self) {
        self.ratings = SkillVector::default();
        self.set_last_action("All skills reset to Beginner".to_string());
    }

    pub fn readiness(&self) -> f64 {
        readiness_ratio(&self.ratings)
    }

    pub fn set_last_action(&mut self, action: String) {
        self.last_action = action;
    }
}

pub struct FormScreen<'a> {
    state: &'a FormState,
}

impl<'a> FormScreen<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for FormScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(chunks[0]);

        let rows = SKILL_COLUMNS
            .iter()
            .zip(self.state.ratings.ratings())
            .map(|(skill, rating)| (*skill, *rating))
            .collect();

        let table = RatingTable::new(" Your Skill Levels ", rows)
            .selected(self.state.selected)
            .high_contrast(self.state.high_contrast);
        Widget::render(table, left[0], buf);

        self.render_status_bar(left[1], buf);
        self.render_side_panel(chunks[1], buf);
    }
}

impl<'a> FormScreen<'a> {
    fn render_side_panel(&self, area: Rect, buf: &mut Buffer) {
        let accent = accent_color(self.state.high_contrast);
        let border_style = if self.state.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let readiness = self.state.readiness();
        let gauge_color = if readiness < self.state.readiness_threshold {
            Color::Rgb(251, 146, 60)
        } else {
            accent
        };
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(Span::styled(
                        " Readiness ",
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    )),
            )
            .gauge_style(Style::default().fg(gauge_color))
            .ratio(readiness.clamp(0.0, 1.0))
            .label(format!(
                "{:.0}% (need {:.0}%)",
                readiness * 100.0,
                self.state.readiness_threshold * 100.0
            ));
        Widget::render(gauge, parts[0], buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                " Rating Scale ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(parts[1]);
        Widget::render(block, parts[1], buf);

        let current = self.state.selected_rating();
        let mut lines = vec![
            Line::from(Span::styled(
                self.state.selected_skill(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for rating in SkillRating::ALL {
            let marker = if rating == current { ">" } else { " " };
            let mut style = Style::default().fg(rating_color(rating, self.state.high_contrast));
            if rating == current {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            lines.push(Line::from(vec![
                Span::raw(format!("{} {} ", marker, rating.value())),
                Span::styled(format!("{:15}", rating.label()), style),
                Span::raw(level_bar(rating)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Enter] Recommend  [r] Reset",
            Style::default().add_modifier(Modifier::DIM),
        )));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        Widget::render(paragraph, inner, buf);
    }

    fn render_status_bar(&self, area: Rect, buf: &mut Buffer) {
        let accent = accent_color(self.state.high_contrast);
        let border_style = if self.state.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let status_text = vec![Line::from(vec![
            Span::styled("Status: ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(&self.state.last_action, Style::default().fg(accent)),
            Span::raw("  "),
            Span::styled("[?] Help", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("  "),
            Span::styled("[q] Quit", Style::default().add_modifier(Modifier::DIM)),
        ])];

        Widget::render(Paragraph::new(status_text), inner, buf);
    }
}
