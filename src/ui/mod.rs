//! UI module for the NEXUS showcase
//!
//! This module handles all user interface components, rendering, and user interactions.

pub mod app;
pub mod components;
pub mod context;
pub mod events;
pub mod layout;
pub mod palette;
pub mod renderer;

pub use app::App;
pub use context::SiteContext;
pub use events::handle_events;
pub use layout::LayoutManager;
pub use palette::Palette;
pub use renderer::{build_context, render_ui, run_app};
