//! Error and info message dialogs

use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use crate::constants::DIALOG_DISMISS_HINT;

/// Renders whichever message is pending; errors take priority over info.
pub struct MessageDialog;

impl MessageDialog {
    pub fn render(f: &mut Frame, app: &App) {
        let palette = app.palette();
        let (message, title, color) = match (&app.error_message, &app.info_message) {
            (Some(error), _) => (error, "Error", palette.error),
            (None, Some(info)) => (info, "Success", palette.success),
            (None, None) => return,
        };

        let area = LayoutManager::centered_rect(60, 30, f.area());
        f.render_widget(Clear, area);

        let display_text = format!("{message}\n\n{DIALOG_DISMISS_HINT}");
        let paragraph = Paragraph::new(display_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center)
                    .border_style(Style::default().fg(color)),
            )
            .style(Style::default().fg(color).bg(palette.surface))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}
