use crate::core::{MEMBER_PREVIEW_LIMIT, Preview, Project, User, Workspace, preview_with_overflow};
use crate::dashboard::ViewMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: ViewMode,
}

impl NavItem {
    /// Tasks only lights up once a project is selected.
    pub fn is_active(&self, mode: ViewMode, has_selection: bool) -> bool {
        self.target == mode && (self.target != ViewMode::Tasks || has_selection)
    }
}

pub const NAVIGATION: [NavItem; 5] = [
    NavItem {
        label: "Home",
        target: ViewMode::Projects,
    },
    NavItem {
        label: "Projects",
        target: ViewMode::Projects,
    },
    NavItem {
        label: "Tasks",
        target: ViewMode::Tasks,
    },
    NavItem {
        label: "Team",
        target: ViewMode::Team,
    },
    NavItem {
        label: "Settings",
        target: ViewMode::Projects,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub item: &'static NavItem,
    pub active: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectEntry<'a> {
    pub project: &'a Project,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct Sidebar<'a> {
    pub workspace_name: &'a str,
    pub member_count: usize,
    pub nav: Vec<NavEntry>,
    pub projects: Vec<ProjectEntry<'a>>,
    pub members: Preview<'a, User>,
}

impl Sidebar<'_> {
    pub fn member_summary(&self) -> String {
        format!("{} members", self.member_count)
    }

    pub fn more_members(&self) -> Option<String> {
        (self.members.overflow > 0).then(|| format!("+{} more", self.members.overflow))
    }
}

pub fn build_sidebar<'a>(
    workspace: &'a Workspace,
    selected: Option<&Project>,
    mode: ViewMode,
) -> Sidebar<'a> {
    let nav = NAVIGATION
        .iter()
        .map(|item| NavEntry {
            item,
            active: item.is_active(mode, selected.is_some()),
        })
        .collect();
    let projects = workspace
        .projects
        .iter()
        .map(|project| ProjectEntry {
            project,
            selected: selected.is_some_and(|current| current.id == project.id),
        })
        .collect();
    Sidebar {
        workspace_name: &workspace.name,
        member_count: workspace.members.len(),
        nav,
        projects,
        members: preview_with_overflow(&workspace.members, MEMBER_PREVIEW_LIMIT),
    }
}
