use std::fmt;

use crate::core::{Dataset, Project, Task, User, WorkspaceProvider, load_dataset};
use crate::dashboard::{
    Board, Gallery, Sidebar, TeamCard, build_board, build_gallery, build_sidebar, build_team,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum ViewMode {
    #[default]
    Projects,
    Tasks,
    Team,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Projects => "projects",
            ViewMode::Tasks => "tasks",
            ViewMode::Team => "team",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selection and view mode over an immutable dataset.
#[derive(Debug, Clone)]
pub struct DashboardState {
    dataset: Dataset,
    selected_project: Option<Project>,
    view_mode: ViewMode,
}

impl DashboardState {
    /// Starts in the projects view with the first project selected, if there is one.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_selection(dataset, None, ViewMode::default())
    }

    pub fn with_selection(
        dataset: Dataset,
        selected_project: Option<Project>,
        view_mode: ViewMode,
    ) -> Self {
        let selected_project =
            selected_project.or_else(|| dataset.workspace.projects.first().cloned());
        if let Some(project) = &selected_project {
            tracing::debug!(project = %project.id, "Initial project selection");
        }
        Self {
            dataset,
            selected_project,
            view_mode,
        }
    }

    pub fn from_provider<P: WorkspaceProvider + ?Sized>(
        provider: &P,
        strict: bool,
    ) -> anyhow::Result<Self> {
        Ok(Self::new(load_dataset(provider, strict)?))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected_project.as_ref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Replaces the selection. The project is not checked against the workspace.
    pub fn select_project(&mut self, project: Project) {
        tracing::debug!(project = %project.id, name = %project.name, "Select project");
        self.selected_project = Some(project);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        tracing::debug!(from = %self.view_mode, to = %mode, "Change view");
        self.view_mode = mode;
    }

    /// Tasks of the selected project, in dataset order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        match &self.selected_project {
            Some(project) => self
                .dataset
                .tasks
                .iter()
                .filter(|task| task.project_id == project.id)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        let id = self.dataset.current_user.as_ref()?;
        self.dataset.workspace.member(id)
    }

    pub fn header_title(&self) -> String {
        match (self.view_mode, &self.selected_project) {
            (ViewMode::Projects, _) => "Projects".to_string(),
            (ViewMode::Tasks, Some(project)) => format!("{} - Tasks", project.name),
            (ViewMode::Tasks, None) => String::new(),
            (ViewMode::Team, _) => "Team".to_string(),
        }
    }

    pub fn sidebar(&self) -> Sidebar<'_> {
        build_sidebar(
            &self.dataset.workspace,
            self.selected_project.as_ref(),
            self.view_mode,
        )
    }

    pub fn gallery(&self) -> Gallery<'_> {
        build_gallery(&self.dataset.workspace, self.selected_project.as_ref())
    }

    /// The board for the selected project; `None` when nothing is selected.
    pub fn board(&self) -> Option<Board<'_>> {
        let project = self.selected_project.as_ref()?;
        Some(build_board(
            project,
            &self.visible_tasks(),
            &self.dataset.workspace.members,
        ))
    }

    pub fn team(&self) -> Vec<TeamCard<'_>> {
        build_team(&self.dataset.workspace)
    }
}
