//! Dashboard UI module
//!
//! State, render plan, renderer and components for the main screen

pub mod components;
pub mod plan;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

pub use plan::{Section, build_render_plan};
pub use renderer::render_dashboard;
pub use state::DashboardState;
