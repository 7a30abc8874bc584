use crate::{
    core::Project,
    dashboard::ViewMode,
    gui::screens::{
        ScreenMessage, projects::ProjectsScreen, tasks::TasksScreen, team::TeamScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    Projects(ScreenMessage<ProjectsScreen>),
    Tasks(ScreenMessage<TasksScreen>),
    Team(ScreenMessage<TeamScreen>),
    SelectProject(Project),
    ChangeView(ViewMode),
}
