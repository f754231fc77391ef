//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

const HELP_TEXT: &str = r"
NEXUS GLOBAL - Terminal Showcase
================================

NAVIGATION
----------
j / Tab       Next section
k / Shift+Tab Previous section
1-8           Jump to section
Home / End    First / last section
Up / Down     Scroll section content

PREFERENCES
-----------
t             Toggle dark / light theme
l             Cycle language (EN, FR, ES)

FILTERS (Projects, Insights, Careers)
-------------------------------------
f / Right     Next category
F / Left      Previous category
a             Show all

CONTACT FORM
------------
m / Enter     Request meeting (edit form)
Tab / Down    Next field
Shift+Tab     Previous field
Left / Right  Change industry
Enter         Send message
Esc           Leave form

GENERAL
-------
?             Toggle help panel
q / Ctrl+C    Quit
";

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel
    pub fn render(f: &mut Frame, app: &App) {
        let palette = app.palette();
        let screen = f.area();
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(screen.width, screen.height);
        let help_area = LayoutManager::centered_rect(help_width, help_height, screen);
        f.render_widget(Clear, help_area);

        let scroll = u16::try_from(app.help_scroll_offset).unwrap_or(u16::MAX);
        let help = Paragraph::new(HELP_TEXT.trim_start())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} - ? / Esc ", app.t("ui.help")))
                    .title_alignment(Alignment::Center)
                    .border_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().fg(palette.text).bg(palette.surface))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        f.render_widget(help, help_area);
    }
}
