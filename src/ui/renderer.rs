//! Main UI rendering and coordination

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, style::Style, widgets::Block, Terminal};
use tokio::time::Duration;

use super::app::App;
use super::components::{HelpPanel, MessageDialog, SectionView, Sidebar, StatusBar};
use super::context::SiteContext;
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::{Config, StorageKind};
use crate::constants::UI_POLL_INTERVAL_MS;
use crate::i18n::Translator;
use crate::preferences::{FileStorage, MemoryStorage, PreferenceStorage, PreferenceStore};

/// Build the shared services described by `config`.
pub fn build_context(config: &Config) -> Result<SiteContext> {
    let storage: Box<dyn PreferenceStorage> = match config.preferences.storage {
        StorageKind::Memory => Box::new(MemoryStorage::new()),
        StorageKind::File => match config.preferences_path() {
            Ok(path) => {
                log::info!("Preferences stored in {}", path.display());
                Box::new(FileStorage::new(path))
            }
            Err(e) => {
                log::warn!("{e}; preferences will not persist");
                Box::new(MemoryStorage::new())
            }
        },
    };

    let preferences = PreferenceStore::new(storage);
    let translator = Translator::builtin().context("Failed to load translations")?;
    Ok(SiteContext::new(preferences, translator))
}

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    let context = build_context(&config)?;
    let mut app = App::new(context, config.start_section(), config.ui.sidebar_width);

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Poll with a timeout so the loop yields to the runtime between events
        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            let event = event::read()?;
            if let Event::Resize(width, height) = event {
                log::debug!("Terminal resized to {width}x{height}");
            } else {
                handle_events(event, app);
            }
        } else {
            tokio::task::yield_now().await;
        }

        if app.should_quit {
            log::info!("Quitting");
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
pub fn render_ui(f: &mut ratatui::Frame, app: &App) {
    let palette = app.palette();
    f.render_widget(Block::default().style(Style::default().bg(palette.background)), f.area());

    // Calculate layouts
    let chunks = LayoutManager::main_layout(f.area());
    let top_chunks = LayoutManager::top_pane_layout(chunks[0], app.sidebar_width);

    // Render components
    Sidebar::render(f, top_chunks[0], app);
    SectionView::render(f, top_chunks[1], app);
    StatusBar::render(f, chunks[1], app);

    // Render overlays - error messages have priority over info messages
    if app.error_message.is_some() || app.info_message.is_some() {
        MessageDialog::render(f, app);
    }

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
