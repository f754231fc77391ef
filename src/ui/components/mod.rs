//! Reusable UI components

pub mod help_panel;
pub mod message_dialog;
pub mod section_view;
pub mod sidebar;
pub mod status_bar;

pub use help_panel::HelpPanel;
pub use message_dialog::MessageDialog;
pub use section_view::{section_lines, SectionView};
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
