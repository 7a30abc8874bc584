//! View models for the dashboard: pure functions of the dataset and the current
//! selection. Both the text renderer and the GUI draw from these.

pub mod board;
pub mod gallery;
pub mod navigation;
pub mod state;
pub mod team;

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::core::{Priority, ProjectStatus, Role};

pub use board::{Board, LANES, Lane, LaneColumn, TaskCard, build_board, tasks_by_status};
pub use gallery::{Gallery, GalleryStats, ProjectCard, build_gallery};
pub use navigation::{NAVIGATION, NavEntry, NavItem, ProjectEntry, Sidebar, build_sidebar};
pub use state::{DashboardState, ViewMode};
pub use team::{TeamCard, build_team};

/// Badge colour families used across the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Gray,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
}

pub fn project_status_tint(status: ProjectStatus) -> Tint {
    match status {
        ProjectStatus::Active => Tint::Green,
        ProjectStatus::Completed => Tint::Blue,
        ProjectStatus::Archived => Tint::Gray,
    }
}

pub fn priority_tint(priority: Priority) -> Tint {
    match priority {
        Priority::Urgent => Tint::Red,
        Priority::High => Tint::Orange,
        Priority::Medium => Tint::Yellow,
        Priority::Low => Tint::Green,
    }
}

pub fn role_tint(role: Role) -> Tint {
    match role {
        Role::Admin => Tint::Purple,
        Role::Member => Tint::Blue,
        Role::Viewer => Tint::Gray,
    }
}

const SHORT_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

/// `M/D/YYYY`, as shown on cards.
pub fn display_date(date: Date) -> String {
    date.format(SHORT_DATE).unwrap_or_else(|_| date.to_string())
}
