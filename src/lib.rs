pub mod core;
pub mod dashboard;
pub mod render;

pub use crate::core::{Dataset, JsonWorkspace, SampleWorkspace, WorkspaceProvider, preview_with_overflow};
pub use dashboard::{DashboardState, ViewMode};
pub use render::render_view;

#[cfg(feature = "gui")]
pub mod gui;
