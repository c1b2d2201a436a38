/// Top-level TUI event loop and input handler
use crate::components::accent_color;
use crate::keymap::KeyMap;
use crate::screens::{FormScreen, FormState, ResultScreen, ResultState};
use anyhow::Result;
use career_core::{Classifier, RecommendError, Recommender, TreeEnsemble};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    Result,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    pub title: String,
    pub message: String,
    /// Validation warnings render amber, everything else red
    pub warning: bool,
}

impl Modal {
    fn for_rejection(err: &RecommendError) -> Self {
        let title = if err.is_warning() {
            "Check your ratings"
        } else {
            "Input Error"
        };
        Self {
            title: title.to_string(),
            message: err.to_string(),
            warning: err.is_warning(),
        }
    }

    fn color(&self, high_contrast: bool) -> Color {
        match (high_contrast, self.warning) {
            (true, _) => Color::White,
            (false, true) => Color::Rgb(251, 146, 60),
            (false, false) => Color::Rgb(248, 113, 113),
        }
    }
}

pub struct AppState<C: Classifier = TreeEnsemble> {
    recommender: Recommender<C>,
    screen: Screen,
    help_return: Screen,
    form: FormState,
    result: Option<ResultState>,
    modal: Option<Modal>,
    should_quit: bool,
}

impl<C: Classifier> AppState<C> {
    pub fn new(recommender: Recommender<C>) -> Self {
        let form = FormState::new(recommender.readiness_threshold());
        Self {
            recommender,
            screen: Screen::Form,
            help_return: Screen::Form,
            form,
            result: None,
            modal: None,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn result(&self) -> Option<&ResultState> {
        self.result.as_ref()
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn high_contrast(&self) -> bool {
        self.form.high_contrast
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Any key closes an open modal and is not acted on
        if self.modal.take().is_some() {
            return;
        }

        if KeyMap::is_quit(code, modifiers) {
            match self.screen {
                Screen::Form => self.should_quit = true,
                Screen::Help => self.screen = self.help_return,
                Screen::Result => self.screen = Screen::Form,
            }
            return;
        }

        if KeyMap::is_help(code) {
            if self.screen == Screen::Help {
                self.screen = self.help_return;
            } else {
                self.help_return = self.screen;
                self.screen = Screen::Help;
            }
            return;
        }

        if KeyMap::is_toggle_theme(code) {
            self.toggle_high_contrast();
            return;
        }

        match self.screen {
            Screen::Form => self.handle_form_key(code),
            Screen::Result => self.handle_result_key(code),
            Screen::Help => {
                // Any key closes help
                if matches!(code, KeyCode::Char(_) | KeyCode::Enter) {
                    self.screen = self.help_return;
                }
            }
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) {
            self.form.move_down();
        } else if KeyMap::is_up(code) {
            self.form.move_up();
        } else if KeyMap::is_raise(code) {
            self.form.raise();
        } else if KeyMap::is_lower(code) {
            self.form.lower();
        } else if let Some(rating) = KeyMap::direct_rating(code) {
            self.form.set_selected(rating);
        } else if KeyMap::is_reset(code) {
            self.form.reset();
        } else if KeyMap::is_submit(code) {
            self.submit();
        }
    }

    fn handle_result_key(&mut self, code: KeyCode) {
        if KeyMap::is_reset(code) {
            self.form.reset();
            self.screen = Screen::Form;
        }
    }

    fn toggle_high_contrast(&mut self) {
        self.form.high_contrast = !self.form.high_contrast;
        if let Some(result) = self.result.as_mut() {
            result.high_contrast = self.form.high_contrast;
        }
    }

    /// Runs the current ratings through the recommender
    pub fn submit(&mut self) {
        match self.recommender.recommend(&self.form.ratings) {
            Ok(recommendation) => {
                log::info!("Recommended {}", recommendation.label);
                self.form
                    .set_last_action(format!("Recommended {}", recommendation.label));
                let mut result = ResultState::new(recommendation);
                result.high_contrast = self.form.high_contrast;
                self.result = Some(result);
                self.screen = Screen::Result;
            }
            Err(err) => {
                if err.is_warning() {
                    log::warn!("Submission rejected: {}", err);
                    self.form.set_last_action("Submission rejected".to_string());
                } else {
                    log::error!("Submission failed: {}", err);
                    self.form.set_last_action("Submission failed".to_string());
                }
                self.modal = Some(Modal::for_rejection(&err));
            }
        }
    }

    /// Renders the whole application into one frame
    pub fn draw(&self, f: &mut Frame) {
        let size = f.area();
        let high_contrast = self.high_contrast();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        match self.screen {
            Screen::Form => {
                f.render_widget(FormScreen::new(&self.form), chunks[0]);
            }
            Screen::Result => {
                if let Some(ref result) = self.result {
                    f.render_widget(ResultScreen::new(result), chunks[0]);
                }
            }
            Screen::Help => render_help(f, chunks[0], high_contrast),
        }

        render_quick_actions_bar(f, chunks[1], self.screen, high_contrast);

        if let Some(ref modal) = self.modal {
            render_modal(f, size, modal, high_contrast);
        }
    }
}

pub fn run_tui<C: Classifier>(recommender: Recommender<C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(recommender);
    let outcome = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn event_loop<B: Backend, C: Classifier>(
    terminal: &mut Terminal<B>,
    app: &mut AppState<C>,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| app.draw(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases as well
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }
    }
    Ok(())
}

fn render_help(f: &mut Frame, area: Rect, high_contrast: bool) {
    let accent = accent_color(high_contrast);

    let border_style = if high_contrast {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            " Help - Keybindings ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Career Recommender",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from("Rate each skill from 0 (Not Interested) to 6 (Professional)."),
        Line::from(""),
    ];

    for (key, desc) in KeyMap::help_text() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", key),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(paragraph, inner);
}

/// Box sized to the message, centred over whatever screen is behind it
fn render_modal(f: &mut Frame, area: Rect, modal: &Modal, high_contrast: bool) {
    let color = modal.color(high_contrast);

    let width = area.width.saturating_sub(4).min(64);
    let text_width = width.saturating_sub(4).max(1) as usize;
    let message_rows = modal.message.chars().count().div_ceil(text_width) as u16;
    // Message, gap, hint, two borders
    let height = (message_rows + 4).min(area.height);
    let modal_area = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            format!(" {} ", modal.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let lines = vec![
        Line::from(modal.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        modal_area,
    );
}

fn render_quick_actions_bar(f: &mut Frame, area: Rect, screen: Screen, high_contrast: bool) {
    let color = if high_contrast {
        Color::White
    } else {
        Color::Gray
    };

    let actions: &[&str] = match screen {
        Screen::Form => &[
            "[j/k] Skill",
            "[h/l] Rating",
            "[0-6] Set",
            "[Enter] Recommend",
            "[t] Contrast",
        ],
        Screen::Result => &["[Esc] Back", "[r] Start over", "[t] Contrast"],
        Screen::Help => &["[Esc] Close"],
    };

    let text = Line::from(
        actions
            .iter()
            .map(|a| Span::styled(format!(" {} ", a), Style::default().fg(color)))
            .collect::<Vec<_>>(),
    );

    let paragraph = Paragraph::new(text)
        .style(Style::default().bg(Color::Black))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}
