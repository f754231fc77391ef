//! Application state and business logic

use super::context::SiteContext;
use super::palette::Palette;
use crate::catalog::{FilterState, ARTICLE_TAGS, POSITION_TAGS, PROJECT_TAGS};
use crate::contact::{ContactForm, FieldError, FieldProblem, FormField};
use crate::preferences::{Language, Theme};
use crate::sections::Section;

/// Application state
pub struct App {
    pub should_quit: bool,
    pub context: SiteContext,
    pub section: Section,
    pub scroll_offset: u16,
    pub project_filter: FilterState,
    pub article_filter: FilterState,
    pub position_filter: FilterState,
    pub contact_form: ContactForm,
    /// Field being edited; `None` while the form is not focused
    pub contact_focus: Option<FormField>,
    pub contact_errors: Vec<FormField>,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
    pub show_help: bool,           // Toggle for help panel
    pub help_scroll_offset: usize, // Scroll position for help panel
    pub sidebar_width: u16,
}

impl App {
    /// Create a new App instance
    #[must_use]
    pub fn new(context: SiteContext, start_section: Section, sidebar_width: u16) -> Self {
        Self {
            should_quit: false,
            context,
            section: start_section,
            scroll_offset: 0,
            project_filter: FilterState::new(PROJECT_TAGS),
            article_filter: FilterState::new(ARTICLE_TAGS),
            position_filter: FilterState::new(POSITION_TAGS),
            contact_form: ContactForm::new(),
            contact_focus: None,
            contact_errors: Vec::new(),
            error_message: None,
            info_message: None,
            show_help: false,
            help_scroll_offset: 0,
            sidebar_width,
        }
    }

    /// Translate `key` into the active language
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.context.t(key)
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.context.theme())
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.context.theme()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.context.language()
    }

    pub fn select_section(&mut self, section: Section) {
        if self.section != section {
            log::debug!("Navigating to #{section}");
            self.section = section;
            self.scroll_offset = 0;
            self.contact_focus = None;
        }
    }

    pub fn next_section(&mut self) {
        self.select_section(self.section.next());
    }

    pub fn previous_section(&mut self) {
        self.select_section(self.section.previous());
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.context.preferences.toggle_theme();
        log::info!("Theme switched to {theme}");
        theme
    }

    pub fn cycle_language(&mut self) -> Language {
        let language = self.context.preferences.cycle_language();
        log::info!("Language switched to {language}");
        language
    }

    /// Filter selection for the current section, if it has a filterable catalog.
    #[must_use]
    pub fn active_filter(&self) -> Option<&FilterState> {
        match self.section {
            Section::Projects => Some(&self.project_filter),
            Section::Insights => Some(&self.article_filter),
            Section::Careers => Some(&self.position_filter),
            _ => None,
        }
    }

    fn active_filter_mut(&mut self) -> Option<&mut FilterState> {
        match self.section {
            Section::Projects => Some(&mut self.project_filter),
            Section::Insights => Some(&mut self.article_filter),
            Section::Careers => Some(&mut self.position_filter),
            _ => None,
        }
    }

    /// Advance the current section's filter. Returns false if the section has none.
    pub fn next_filter(&mut self) -> bool {
        match self.active_filter_mut() {
            Some(filter) => {
                let selected = filter.next();
                log::debug!("Filter set to {}", selected.tag());
                self.scroll_offset = 0;
                true
            }
            None => false,
        }
    }

    pub fn previous_filter(&mut self) -> bool {
        match self.active_filter_mut() {
            Some(filter) => {
                let selected = filter.previous();
                log::debug!("Filter set to {}", selected.tag());
                self.scroll_offset = 0;
                true
            }
            None => false,
        }
    }

    pub fn reset_filter(&mut self) -> bool {
        match self.active_filter_mut() {
            Some(filter) => {
                filter.reset();
                self.scroll_offset = 0;
                true
            }
            None => false,
        }
    }

    /// Focus the first contact field, jumping to the contact section.
    pub fn start_contact_edit(&mut self) {
        self.select_section(Section::Contact);
        self.contact_focus = Some(FormField::FirstName);
    }

    pub fn stop_contact_edit(&mut self) {
        self.contact_focus = None;
    }

    pub fn focus_next_field(&mut self) {
        if let Some(field) = self.contact_focus {
            self.contact_focus = Some(field.next());
        }
    }

    pub fn focus_previous_field(&mut self) {
        if let Some(field) = self.contact_focus {
            self.contact_focus = Some(field.previous());
        }
    }

    pub fn add_char_to_contact(&mut self, c: char) {
        if let Some(field) = self.contact_focus {
            self.contact_form.push_char(field, c);
            self.contact_errors.retain(|f| *f != field);
        }
    }

    pub fn remove_char_from_contact(&mut self) {
        if let Some(field) = self.contact_focus {
            self.contact_form.pop_char(field);
        }
    }

    pub fn cycle_contact_industry(&mut self) {
        self.contact_form.cycle_industry();
    }

    /// Validate and "send" the contact form.
    pub fn submit_contact(&mut self) {
        match self.contact_form.submit() {
            Ok(enquiry) => {
                match serde_json::to_string(&enquiry) {
                    Ok(json) => log::info!("Contact enquiry received: {json}"),
                    Err(e) => log::warn!("Contact enquiry received but could not be serialized: {e}"),
                }
                self.info_message = Some(self.t("contact.sent").to_string());
                self.contact_form.clear();
                self.contact_errors.clear();
                self.contact_focus = None;
            }
            Err(e) => {
                log::debug!("Contact form rejected: {e}");
                self.contact_errors = e.fields();
                self.contact_focus = self.contact_errors.first().copied().or(self.contact_focus);
                let details: Vec<String> = e.errors().iter().map(|error| self.describe_field_error(error)).collect();
                self.error_message = Some(format!("{}\n\n{}", self.t("contact.invalid"), details.join("\n")));
            }
        }
    }

    /// "Label: problem" in the active language.
    #[must_use]
    pub fn describe_field_error(&self, error: &FieldError) -> String {
        let problem = match error.problem {
            FieldProblem::TooLong { max } => self
                .t(error.problem.message_key())
                .replace("{max}", &max.to_string()),
            other => self.t(other.message_key()).to_string(),
        };
        format!("{}: {problem}", self.t(error.field.label_key()))
    }

    pub fn dismiss_message(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.help_scroll_offset = 0;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
