//! Status bar component

use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::{STATUS_HINTS, STATUS_HINTS_CONTACT};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let palette = app.palette();

        let (status_text, status_color) = if app.contact_focus.is_some() {
            (STATUS_HINTS_CONTACT.to_string(), palette.accent)
        } else if !app.context.preferences.is_persistent() {
            (
                format!("{} • {}", app.t("ui.storage_memory"), STATUS_HINTS),
                palette.error,
            )
        } else {
            (STATUS_HINTS.to_string(), palette.muted)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color).bg(palette.surface));

        f.render_widget(status_bar, area);
    }
}
