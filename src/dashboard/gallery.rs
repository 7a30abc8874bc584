use crate::core::{
    MEMBER_PREVIEW_LIMIT, Preview, Project, ProjectStatus, User, Workspace, preview_with_overflow,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub members: usize,
}

impl GalleryStats {
    pub fn compute(workspace: &Workspace) -> Self {
        workspace.projects.iter().fold(
            GalleryStats {
                members: workspace.members.len(),
                ..Default::default()
            },
            |mut stats, project| {
                stats.total += 1;
                match project.status {
                    ProjectStatus::Active => stats.active += 1,
                    ProjectStatus::Completed => stats.completed += 1,
                    ProjectStatus::Archived => {}
                }
                stats
            },
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectCard<'a> {
    pub project: &'a Project,
    pub selected: bool,
    pub avatars: Preview<'a, User>,
}

#[derive(Debug, Clone)]
pub struct Gallery<'a> {
    pub stats: GalleryStats,
    pub cards: Vec<ProjectCard<'a>>,
}

pub fn build_gallery<'a>(workspace: &'a Workspace, selected: Option<&Project>) -> Gallery<'a> {
    // Cards preview the workspace roster, not per-project member lists.
    let avatars = preview_with_overflow(&workspace.members, MEMBER_PREVIEW_LIMIT);
    let cards = workspace
        .projects
        .iter()
        .map(|project| ProjectCard {
            project,
            selected: selected.is_some_and(|current| current.id == project.id),
            avatars,
        })
        .collect();
    Gallery {
        stats: GalleryStats::compute(workspace),
        cards,
    }
}
