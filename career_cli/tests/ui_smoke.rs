/// Smoke tests for the skill form, result screen and key handling
use career_cli::screens::{FormScreen, FormState, ResultScreen, ResultState};
use career_cli::ui::{AppState, Screen};
use career_core::classifier::{ModelArtifact, ModelKind, TreeArtifact};
use career_core::{
    AssetMap, AssetResolver, AssetStatus, CareerLabel, LabelEncoder, Recommendation,
    Recommender, ResolvedAssets, SkillRating, TreeEnsemble, CAREER_LABELS, SKILL_COUNT,
};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

const DATA_SCIENCE: usize = 14;

/// Data Science > 4.5 -> Data Scientist, else Software Developer
fn create_test_recommender() -> Recommender {
    let encoder = LabelEncoder::fit(CAREER_LABELS).unwrap();
    let n = encoder.len();
    let mut low = vec![0.0; n];
    low[encoder.encode("Software Developer").unwrap()] = 1.0;
    let mut high = vec![0.0; n];
    high[encoder.encode("Data Scientist").unwrap()] = 1.0;

    let model = TreeEnsemble::from_artifact(ModelArtifact {
        kind: ModelKind::DecisionTree,
        n_features: SKILL_COUNT,
        n_classes: n,
        trees: vec![TreeArtifact {
            feature: vec![DATA_SCIENCE as i64, -2, -2],
            threshold: vec![4.5, -2.0, -2.0],
            left: vec![1, -1, -1],
            right: vec![2, -1, -1],
            value: vec![vec![1.0; n], low, high],
        }],
    })
    .unwrap();

    let assets = AssetResolver::new(".", AssetMap::empty());
    Recommender::new(model, encoder, assets).unwrap()
}

fn press(app: &mut AppState, code: KeyCode) {
    app.handle_key(code, KeyModifiers::NONE);
}

fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_app(app: &AppState) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_form_state_navigation() {
    let mut state = FormState::new(0.7);

    assert_eq!(state.selected, 0);
    assert_eq!(state.ratings.len(), SKILL_COUNT);
    assert_eq!(state.selected_skill(), "Database Fundamentals");

    state.move_down();
    state.move_down();
    assert_eq!(state.selected, 2);

    state.move_up();
    assert_eq!(state.selected, 1);

    // Clamped at both ends
    state.move_up();
    state.move_up();
    assert_eq!(state.selected, 0);
    for _ in 0..SKILL_COUNT + 5 {
        state.move_down();
    }
    assert_eq!(state.selected, SKILL_COUNT - 1);
    assert_eq!(state.selected_skill(), "Graphics Designing");
}

#[test]
fn test_form_state_rating_changes() {
    let mut state = FormState::new(0.7);
    assert_eq!(state.selected_rating(), SkillRating::Beginner);

    state.raise();
    assert_eq!(state.selected_rating(), SkillRating::Average);
    assert_eq!(state.last_action, "Database Fundamentals: Average");

    state.set_selected(SkillRating::Professional);
    state.raise();
    assert_eq!(state.selected_rating(), SkillRating::Professional);

    state.set_selected(SkillRating::NotInterested);
    state.lower();
    assert_eq!(state.selected_rating(), SkillRating::NotInterested);

    assert!(state.readiness() < 1.0);
    state.reset();
    assert_eq!(state.readiness(), 1.0);
    assert_eq!(state.selected_rating(), SkillRating::Beginner);
}

#[test]
fn test_form_screen_renders_all_skills() {
    let state = FormState::new(0.7);
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| f.render_widget(FormScreen::new(&state), f.area()))
        .unwrap();

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Your Skill Levels"));
    assert!(text.contains("Database Fundamentals"));
    assert!(text.contains("Graphics Designing"));
    assert!(text.contains("Readiness"));
    assert!(text.contains("100% (need 70%)"));
    assert!(text.contains("Rating Scale"));
}

#[test]
fn test_form_screen_small_terminal_does_not_panic() {
    let mut state = FormState::new(0.7);
    for _ in 0..SKILL_COUNT {
        state.move_down();
    }
    let backend = TestBackend::new(30, 8);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| f.render_widget(FormScreen::new(&state), f.area()))
        .unwrap();
}

#[test]
fn test_result_screen_renders_messages() {
    let state = ResultState::new(Recommendation {
        label: CareerLabel::new("Data Scientist"),
        readiness: 1.0,
        assets: ResolvedAssets {
            image: AssetStatus::Unavailable,
            roadmap: AssetStatus::InvalidImage {
                path: "RDataScientist.jpg".into(),
            },
        },
    });
    let backend = TestBackend::new(100, 20);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| f.render_widget(ResultScreen::new(&state), f.area()))
        .unwrap();

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Recommended Career Role: Data Scientist"));
    assert!(text.contains("Here is a roadmap for becoming a Data Scientist."));
    assert!(text.contains("Image not available for this role."));
    assert!(text.contains("Roadmap file is not a valid image format."));
}

#[test]
fn test_submit_default_ratings_recommends() {
    let mut app = AppState::new(create_test_recommender());
    assert_eq!(app.screen(), Screen::Form);

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen(), Screen::Result);
    assert!(app.modal().is_none());
    let result = app.result().unwrap();
    assert_eq!(result.recommendation.label.as_str(), "Software Developer");
    assert_eq!(result.recommendation.assets.image, AssetStatus::Unavailable);

    let text = render_app(&app);
    assert!(text.contains("Recommended Career Role: Software Developer"));
}

#[test]
fn test_digit_keys_change_prediction() {
    let mut app = AppState::new(create_test_recommender());

    for _ in 0..DATA_SCIENCE {
        press(&mut app, KeyCode::Char('j'));
    }
    press(&mut app, KeyCode::Char('6'));
    assert_eq!(
        app.form().ratings.get(DATA_SCIENCE),
        Some(SkillRating::Professional)
    );

    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.result().unwrap().recommendation.label.as_str(),
        "Data Scientist"
    );

    // Esc goes back to the form with ratings kept
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), Screen::Form);
    assert_eq!(app.form().selected, DATA_SCIENCE);
    assert!(!app.should_quit());
}

#[test]
fn test_low_readiness_shows_warning_modal() {
    let mut app = AppState::new(create_test_recommender());

    // 6 of 17 at Not Interested leaves 11/17 ready, under 70%
    for _ in 0..6 {
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Char('j'));
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen(), Screen::Form);
    assert!(app.result().is_none());
    let modal = app.modal().unwrap();
    assert_eq!(modal.title, "Check your ratings");
    assert!(modal.message.contains("Most of your skills"));

    let text = render_app(&app);
    assert!(text.contains("Check your ratings"));

    // Any key dismisses without acting on it
    let selected = app.form().selected;
    press(&mut app, KeyCode::Char('j'));
    assert!(app.modal().is_none());
    assert_eq!(app.form().selected, selected);
}

#[test]
fn test_all_zero_ratings_rejected() {
    let mut app = AppState::new(create_test_recommender());

    for _ in 0..SKILL_COUNT {
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);

    let modal = app.modal().unwrap();
    assert!(modal.message.contains("'Not Interested' for all skills"));
    assert!(app.result().is_none());
}

#[test]
fn test_help_toggle_and_quit() {
    let mut app = AppState::new(create_test_recommender());

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.screen(), Screen::Help);
    assert!(render_app(&app).contains("Help - Keybindings"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), Screen::Form);
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_reset_from_result_returns_to_form() {
    let mut app = AppState::new(create_test_recommender());

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::Result);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.screen(), Screen::Form);
    assert_eq!(app.form().selected_rating(), SkillRating::Beginner);
}

#[test]
fn test_high_contrast_toggle_renders() {
    let mut app = AppState::new(create_test_recommender());
    press(&mut app, KeyCode::Char('t'));
    assert!(app.high_contrast());

    let text = render_app(&app);
    assert!(text.contains("Your Skill Levels"));
}

#[test]
fn test_non_character_keys_dismiss_modal() {
    for key in [KeyCode::Down, KeyCode::Left, KeyCode::Tab, KeyCode::Up] {
        let mut app = AppState::new(create_test_recommender());
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('0'));
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.modal().unwrap().warning);

        // Each of these would move or change the selection if acted on
        press(&mut app, key);
        assert!(app.modal().is_none(), "{:?} left the modal open", key);
        assert_eq!(app.form().selected, 6);
        assert_eq!(app.form().selected_rating(), SkillRating::Beginner);
    }
}

#[test]
fn test_modal_fits_small_terminal() {
    let mut app = AppState::new(create_test_recommender());
    for _ in 0..SKILL_COUNT {
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);
    assert!(app.modal().is_some());

    let text = render_app(&app);
    assert!(text.contains("Check your ratings"));
    assert!(text.contains("Press any key to continue"));

    for (width, height) in [(20, 6), (3, 3), (1, 1)] {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
    }
}
