use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use nexus_site::catalog::CategoryFilter;
use nexus_site::contact::FormField;
use nexus_site::i18n::Translator;
use nexus_site::preferences::{Language, PreferenceStore, Theme};
use nexus_site::sections::Section;
use nexus_site::ui::components::section_lines;
use nexus_site::ui::{handle_events, render_ui, App, LayoutManager, SiteContext};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

fn test_app() -> App {
    let context = SiteContext::new(PreferenceStore::in_memory(), Translator::builtin().unwrap());
    App::new(context, Section::Home, 24)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_events(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), app)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn content_text(app: &App) -> String {
    section_lines(app)
        .iter()
        .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| render_ui(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer.content.iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_section_navigation() {
    let mut app = test_app();
    assert_eq!(app.section, Section::Home);

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.section, Section::About);

    press(&mut app, KeyCode::Char('5'));
    assert_eq!(app.section, Section::Projects);

    press(&mut app, KeyCode::End);
    assert_eq!(app.section, Section::Contact);

    // Navigation stops at the last section
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.section, Section::Contact);

    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.section, Section::Home);
}

#[test]
fn test_scroll_resets_on_navigation() {
    let mut app = test_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.scroll_offset, 2);

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.scroll_offset, 0);

    press(&mut app, KeyCode::Up);
    assert_eq!(app.scroll_offset, 0);
}

#[test]
fn test_theme_and_language_keys() {
    let mut app = test_app();
    assert_eq!(app.theme(), Theme::Dark);

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.theme(), Theme::Light);

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.language(), Language::Fr);
    assert_eq!(app.t("nav.home"), "Accueil");

    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.language(), Language::En);
    assert_eq!(app.t("nav.home"), "Home");
}

#[test]
fn test_filter_keys_only_apply_to_filterable_sections() {
    let mut app = test_app();
    assert!(!press(&mut app, KeyCode::Char('f')));
    assert!(app.active_filter().is_none());

    app.select_section(Section::Projects);
    assert!(press(&mut app, KeyCode::Char('f')));
    assert_eq!(app.project_filter.active(), CategoryFilter::Tag("fintech"));

    let text = content_text(&app);
    assert!(text.contains("Global Payment Network"));
    assert!(!text.contains("Smart Port System"));

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.project_filter.active(), CategoryFilter::All);
    assert!(content_text(&app).contains("Smart Port System"));

    // Each catalog keeps its own selection
    app.select_section(Section::Careers);
    press(&mut app, KeyCode::Char('F'));
    assert_eq!(app.position_filter.active(), CategoryFilter::Tag("product"));
    assert_eq!(app.project_filter.active(), CategoryFilter::All);
}

#[test]
fn test_contact_form_rejects_empty_submission() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.section, Section::Contact);
    assert_eq!(app.contact_focus, Some(FormField::FirstName));

    press(&mut app, KeyCode::Enter);
    assert!(app.error_message.is_some());
    assert!(app.contact_errors.contains(&FormField::FirstName));
    assert!(app.contact_errors.contains(&FormField::Email));

    // Other keys are blocked until the dialog is dismissed
    assert!(!press(&mut app, KeyCode::Char('x')));
    press(&mut app, KeyCode::Esc);
    assert!(app.error_message.is_none());
    assert_eq!(app.contact_focus, Some(FormField::FirstName));
}

#[test]
fn test_contact_form_submission() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('m'));

    type_text(&mut app, "Ada");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Lovelace");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "ada@example.com");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.contact_focus, Some(FormField::Industry));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Hello there");
    assert_eq!(app.contact_form.message, "Hello there");

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.contact_form.message, "Hello ther");

    press(&mut app, KeyCode::Enter);
    assert!(app.error_message.is_none());
    assert_eq!(app.info_message.as_deref(), Some(app.t("contact.sent")));
    assert!(app.contact_focus.is_none());
    assert!(app.contact_form.first_name.is_empty());
}

#[test]
fn test_typing_in_form_does_not_trigger_shortcuts() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('m'));
    type_text(&mut app, "tlq");
    assert_eq!(app.contact_form.first_name, "tlq");
    assert_eq!(app.theme(), Theme::Dark);
    assert!(!app.should_quit);

    press(&mut app, KeyCode::Esc);
    assert!(app.contact_focus.is_none());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_help_panel_blocks_navigation() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.section, Section::Home);
    assert_eq!(app.help_scroll_offset, 1);

    press(&mut app, KeyCode::Esc);
    assert!(!app.show_help);
}

#[test]
fn test_ctrl_c_quits_from_any_mode() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('m'));
    handle_events(
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        &mut app,
    );
    assert!(app.should_quit);
}

#[test]
fn test_render_shows_translated_navigation() {
    let mut app = test_app();
    let screen = screen_text(&app);
    assert!(screen.contains("NEXUS"));
    assert!(screen.contains("Home"));

    app.cycle_language();
    let screen = screen_text(&app);
    assert!(screen.contains("Accueil"));
}

#[test]
fn test_every_section_renders_in_every_language() {
    let mut app = test_app();
    for _ in Language::ALL {
        for section in Section::ALL {
            app.select_section(section);
            assert!(!content_text(&app).is_empty());
            screen_text(&app);
        }
        app.cycle_language();
    }
}

#[test]
fn test_sidebar_width_leaves_room_for_content() {
    assert_eq!(LayoutManager::sidebar_width(120, 24), 24);
    assert_eq!(LayoutManager::sidebar_width(40, 24), 20);
    assert_eq!(LayoutManager::sidebar_width(10, 24), 0);

    let chunks = LayoutManager::top_pane_layout(Rect::new(0, 0, 100, 30), 30);
    assert_eq!(chunks[0].width, 30);
    assert_eq!(chunks[1].width, 70);
}

#[test]
fn test_contact_errors_use_translated_labels() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('m'));
    type_text(&mut app, "Ada");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Lovelace");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "not-an-email");
    press(&mut app, KeyCode::Enter);

    let message = app.error_message.clone().unwrap();
    assert!(message.contains("Email Address: Enter a valid email address"));
    assert!(message.contains("Message: This field is required"));
    assert!(!message.contains("FirstName"));
    assert!(!message.contains("InvalidEmail"));

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Esc);
    app.cycle_language();
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Enter);
    let message = app.error_message.clone().unwrap();
    assert!(message.contains("Ce champ est obligatoire"));
}

#[test]
fn test_too_long_error_fills_in_limit() {
    use nexus_site::contact::{FieldError, FieldProblem, MAX_FIELD_LEN};

    let app = test_app();
    let error = FieldError {
        field: FormField::Company,
        problem: FieldProblem::TooLong { max: MAX_FIELD_LEN },
    };
    assert_eq!(app.describe_field_error(&error), "Company: Must be at most 120 characters");
}
