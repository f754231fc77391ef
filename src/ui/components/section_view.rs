//! Content pane for the selected section.
//!
//! Each section is rendered as a list of styled lines from the static catalogs
//! and the active translations, then shown in a scrollable paragraph.

use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::super::palette::category_color;
use crate::catalog::{
    self, FilterState, ARTICLES, CERTIFICATIONS, HEADLINE_STATS, HEADQUARTERS, INDUSTRIES, OFFICES, PERKS,
    POSITIONS, PROJECTS, SOLUTIONS, TICKER_STATS, TIMELINE,
};
use crate::constants::COPYRIGHT_HOLDER;
use crate::contact::FormField;
use crate::sections::Section;

/// Section content component
pub struct SectionView;

impl SectionView {
    /// Render the current section
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let palette = app.palette();
        let accent = palette.section_accent(app.section);

        let content = Paragraph::new(section_lines(app))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(accent))
                    .title(Span::styled(
                        format!(" {} ", app.t(app.section.nav_key())),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    )),
            )
            .style(Style::default().fg(palette.text).bg(palette.background))
            .wrap(Wrap { trim: false })
            .scroll((app.scroll_offset, 0));

        f.render_widget(content, area);
    }
}

/// Lines making up the current section.
#[must_use]
pub fn section_lines(app: &App) -> Vec<Line<'_>> {
    match app.section {
        Section::Home => home_lines(app),
        Section::About => about_lines(app),
        Section::Solutions => solutions_lines(app),
        Section::Industries => industries_lines(app),
        Section::Projects => projects_lines(app),
        Section::Insights => insights_lines(app),
        Section::Careers => careers_lines(app),
        Section::Contact => contact_lines(app),
    }
}

fn header<'a>(
    app: &'a App,
    badge_key: &'static str,
    title_key: &'static str,
    subtitle_key: &'static str,
) -> Vec<Line<'a>> {
    let palette = app.palette();
    let accent = palette.section_accent(app.section);
    let badge = app.t(badge_key).to_uppercase();

    vec![
        Line::from(Span::styled(format!("◆ {badge}"), Style::default().fg(accent).add_modifier(Modifier::BOLD))),
        Line::default(),
        Line::from(Span::styled(
            app.t(title_key),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(app.t(subtitle_key), Style::default().fg(palette.muted))),
        Line::default(),
    ]
}

fn filter_bar<'a>(app: &'a App, prefix: &str, filter: &FilterState) -> Line<'a> {
    let palette = app.palette();
    let label_key = format!("{prefix}.filter");
    let mut spans = vec![Span::styled(
        format!("{}: ", app.t(&label_key)),
        Style::default().fg(palette.muted),
    )];

    let active = filter.active().tag();
    for tag in filter.options() {
        let label = app.t(&format!("{prefix}.filters.{tag}")).to_string();
        let style = if tag == active {
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn tag_span<'a>(app: &App, prefix: &str, tag: &str) -> Span<'a> {
    let label = app.t(&format!("{prefix}.filters.{tag}")).to_string();
    Span::styled(format!("[{label}]"), Style::default().fg(category_color(tag)))
}

fn home_lines(app: &App) -> Vec<Line<'_>> {
    let palette = app.palette();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("◆ {}", app.t("hero.badge")),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            app.t("hero.title1"),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.t("hero.title2"),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.t("hero.title3"),
            Style::default().fg(palette.secondary).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(app.t("hero.subtitle"), Style::default().fg(palette.muted))),
        Line::default(),
    ];

    let stats: Vec<Span> = HEADLINE_STATS
        .iter()
        .flat_map(|stat| {
            [
                Span::styled(stat.value, Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}    ", app.t(stat.label)), Style::default().fg(palette.muted)),
            ]
        })
        .collect();
    lines.push(Line::from(stats));
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::styled(
            format!(" {} ", app.t("hero.cta1")),
            Style::default().fg(palette.highlight_fg).bg(palette.highlight_bg),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" [Enter] {} ", app.t("nav.cta")),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

fn about_lines(app: &App) -> Vec<Line<'_>> {
    let palette = app.palette();
    let mut lines = header(app, "about.badge", "about.title", "about.subtitle");

    lines.push(Line::from(Span::styled(
        app.t("about.timeline"),
        Style::default().fg(palette.secondary).add_modifier(Modifier::BOLD),
    )));
    for milestone in TIMELINE {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}  ", milestone.year), Style::default().fg(palette.accent)),
            Span::styled(milestone.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(": {}", milestone.description), Style::default().fg(palette.muted)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        app.t("about.ticker"),
        Style::default().fg(palette.secondary).add_modifier(Modifier::BOLD),
    )));
    for stat in TICKER_STATS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>7}  ", stat.value), Style::default().fg(palette.accent)),
            Span::styled(stat.label.to_uppercase(), Style::default().fg(palette.muted)),
        ]));
    }
    lines
}

fn solutions_lines(app: &App) -> Vec<Line<'_>> {
    let palette = app.palette();
    let mut lines = header(app, "solutions.badge", "solutions.title", "solutions.subtitle");

    for solution in SOLUTIONS {
        lines.push(Line::from(Span::styled(
            solution.title,
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(solution.description, Style::default().fg(palette.muted))));
        lines.push(Line::from(format!(
            "  {}: {}",
            app.t("solutions.features"),
            solution.features.join(" • ")
        )));
        let metrics: Vec<String> = solution
            .metrics
            .iter()
            .map(|(name, value)| format!("{value} {name}"))
            .collect();
        lines.push(Line::from(Span::styled(
            format!("  {}: {}", app.t("solutions.metrics"), metrics.join(" | ")),
            Style::default().fg(palette.secondary),
        )));
        lines.push(Line::default());
    }
    lines
}

fn industries_lines(app: &App) -> Vec<Line<'_>> {
    let palette = app.palette();
    let mut lines = header(app, "industries.badge", "industries.title", "industries.subtitle");
    lines.push(Line::from(Span::styled(
        format!("{}+ {}", catalog::industries::total_clients(), app.t("industries.clients")),
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    for industry in INDUSTRIES {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", industry.icon)),
            Span::styled(industry.name, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "   {}+ {}   {}+ {}",
                industry.clients,
                app.t("industries.clients"),
                industry.projects,
                app.t("industries.projects")
            ),
            Style::default().fg(palette.muted),
        )));
    }
    lines
}

fn projects_lines(app: &App) -> Vec<Line<'_>> {
    let palette = app.palette();
    let mut lines = header(app, "projects.badge", "projects.title", "projects.subtitle");
    lines.push(filter_bar(app, "projects", &app.project_filter));
    lines.push(Line::default());

    let projects = app.project_filter.apply(PROJECTS);
    if projects.is_empty() {
        lines.push(Line::from(Span::styled(app.t("projects.empty"), Style::default().fg(palette.muted))));
    }
    for project in projects {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", project.icon)),
            Span::styled(project.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            tag_span(app, "projects", project.category),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}: {}", app.t("projects.client"), project.client),
            Style::default().fg(palette.muted),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}: {}", app.t("projects.result"), project.result),
            Style::default().fg(palette.success),
        )));
    }
    lines
}

fn insights_lines(app: &App) -> Vec<Line<'_>> {
    let palette = app.palette();
    let mut lines = header(app, "insights.badge", "insights.title", "insights.subtitle");
    lines.push(filter_bar(app, "insights", &app.article_filter));
    lines.push(Line::default());

    let featured = catalog::insights::featured();
    for article in app.article_filter.apply(ARTICLES) {
        let mut title = vec![
            Span::raw(format!("{} ", article.icon)),
            Span::styled(article.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            tag_span(app, "insights", article.category),
        ];
        if featured == Some(article) {
            title.push(Span::styled(
                format!(" ★ {}", app.t("insights.featured")),
                Style::default().fg(palette.secondary),
            ));
        }
        lines.push(Line::from(title));
        lines.push(Line::from(Span::styled(
            format!(
                "   {} {} · {} · {} {}",
                app.t("insights.by"),
                article.author,
                article.date,
                article.read_time,
                app.t("insights.read")
            ),
            Style::default().fg(palette.muted),
        )));
    }
    lines
}

fn careers_lines(app: &App) -> Vec<Line<'_>> {
    let palette = app.palette();
    let mut lines = header(app, "careers.badge", "careers.title", "careers.subtitle");
    lines.push(filter_bar(app, "careers", &app.position_filter));
    lines.push(Line::default());

    for position in app.position_filter.apply(POSITIONS) {
        lines.push(Line::from(vec![
            Span::styled(position.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            tag_span(app, "careers", position.department),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "   {}: {} · {} · {}: {} · {}: {}",
                app.t("careers.location"),
                position.location,
                position.employment,
                app.t("careers.experience"),
                position.experience,
                app.t("careers.salary"),
                position.salary
            ),
            Style::default().fg(palette.muted),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        app.t("careers.perks"),
        Style::default().fg(palette.secondary).add_modifier(Modifier::BOLD),
    )));
    for perk in PERKS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", perk.title), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(perk.description, Style::default().fg(palette.muted)),
        ]));
    }
    lines
}

fn contact_lines(app: &App) -> Vec<Line<'_>> {
    let palette = app.palette();
    let mut lines = header(app, "contact.badge", "contact.title", "contact.subtitle");

    for field in FormField::ALL {
        let focused = app.contact_focus == Some(field);
        let invalid = app.contact_errors.contains(&field);
        let raw = app.contact_form.value(field);

        let (value, value_style) = if field == FormField::Industry {
            (format!("◀ {} ▶", app.t(raw)), Style::default().fg(palette.text))
        } else if raw.is_empty() {
            (field.placeholder().to_string(), Style::default().fg(palette.muted))
        } else {
            (raw.to_string(), Style::default().fg(palette.text))
        };

        let label_style = if invalid {
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };

        let marker = if focused { "▶ " } else { "  " };
        let cursor = if focused && field != FormField::Industry { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<16}", app.t(field.label_key())), label_style),
            Span::styled(value, value_style),
            Span::styled(cursor, Style::default().fg(palette.accent)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(" ➤ {} ", app.t("contact.send")),
        Style::default()
            .fg(palette.highlight_fg)
            .bg(palette.highlight_bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        app.t("contact.headquarters"),
        Style::default().fg(palette.secondary).add_modifier(Modifier::BOLD),
    )));
    for address_line in HEADQUARTERS.address {
        lines.push(Line::from(format!("  {address_line}")));
    }
    lines.push(Line::from(Span::styled(
        format!("  {}  {}", HEADQUARTERS.email, HEADQUARTERS.phone),
        Style::default().fg(palette.accent),
    )));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        app.t("contact.offices"),
        Style::default().fg(palette.secondary).add_modifier(Modifier::BOLD),
    )));
    let offices: Vec<String> = OFFICES.iter().map(|o| format!("{} {}", o.flag, o.city)).collect();
    lines.push(Line::from(format!("  {}", offices.join("   "))));
    lines.push(Line::default());

    lines.extend(footer_lines(app));
    lines
}

fn footer_lines(app: &App) -> Vec<Line<'_>> {
    let palette = app.palette();
    let year = chrono::Local::now().year();
    let links: Vec<&str> = Section::ALL.iter().map(|section| app.t(section.nav_key())).collect();
    vec![
        Line::from(Span::styled(app.t("footer.tagline"), Style::default().fg(palette.muted))),
        Line::from(Span::styled(links.join(" · "), Style::default().fg(palette.accent))),
        Line::from(Span::styled(
            format!("{}: {}", app.t("footer.certifications"), CERTIFICATIONS.join(" · ")),
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            format!(
                "© {}-{year} {COPYRIGHT_HOLDER}. {}",
                catalog::company::founded(),
                app.t("footer.rights")
            ),
            Style::default().fg(palette.muted),
        )),
    ]
}
