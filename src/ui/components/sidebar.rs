//! Navigation sidebar: brand, section links and current preferences.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::{BRAND_NAME, BRAND_TAGLINE};
use crate::sections::Section;

/// Navigation sidebar component
pub struct Sidebar;

impl Sidebar {
    /// Render the sidebar
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let palette = app.palette();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(4)])
            .split(area);

        let brand = Paragraph::new(vec![
            Line::from(Span::styled(
                BRAND_NAME,
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(BRAND_TAGLINE, Style::default().fg(palette.muted))),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border)),
        );
        f.render_widget(brand, chunks[0]);

        let items: Vec<ListItem> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", i + 1), Style::default().fg(palette.muted)),
                    Span::raw(app.t(section.nav_key())),
                ]))
            })
            .collect();

        let nav = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.border)),
            )
            .style(Style::default().fg(palette.text))
            .highlight_style(
                Style::default()
                    .bg(palette.highlight_bg)
                    .fg(palette.highlight_fg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(app.section.index()));
        f.render_stateful_widget(nav, chunks[1], &mut state);

        let theme = app.theme();
        let language = app.language();
        let preferences = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{}: ", app.t("ui.theme")), Style::default().fg(palette.muted)),
                Span::styled(app.t(theme.label_key()), Style::default().fg(palette.text)),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", app.t("ui.language")), Style::default().fg(palette.muted)),
                Span::styled(language.native_name(), Style::default().fg(palette.text)),
            ]),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border)),
        );
        f.render_widget(preferences, chunks[2]);
    }
}
