use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{container, row, text},
};

use super::{AppState, Message};
use crate::{
    dashboard::{DashboardState, ViewMode},
    gui::{
        screens::{
            Screen, ScreenMessage, projects::ProjectsParentMessage, projects::ProjectsScreen,
            tasks::TasksScreen, team::TeamScreen,
        },
        widgets::{layout, sidebar},
    },
};

pub struct WorkboardApp {
    state: AppState,
    projects: ProjectsScreen,
    tasks: TasksScreen,
    team: TeamScreen,
}

impl WorkboardApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            projects: ProjectsScreen,
            tasks: TasksScreen,
            team: TeamScreen,
        }
    }

    pub fn title(&self) -> String {
        format!("{} - Workboard", self.state.dashboard.dataset().workspace.name)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let dashboard = &mut self.state.dashboard;
        match message {
            Message::SelectProject(project) => {
                dashboard.select_project(project);
                Task::none()
            }
            Message::ChangeView(mode) => {
                dashboard.set_view_mode(mode);
                Task::none()
            }
            Message::Projects(ScreenMessage::ParentMessage(
                ProjectsParentMessage::SelectProject(project),
            )) => {
                dashboard.select_project(project);
                Task::none()
            }
            Message::Projects(ScreenMessage::ScreenMessage(msg)) => self
                .projects
                .update(msg, &mut self.state)
                .map(Message::Projects),
            Message::Tasks(ScreenMessage::ScreenMessage(msg)) => self
                .tasks
                .update(msg, &mut self.state)
                .map(Message::Tasks),
            Message::Team(ScreenMessage::ScreenMessage(msg)) => self
                .team
                .update(msg, &mut self.state)
                .map(Message::Team),
            Message::Tasks(ScreenMessage::ParentMessage(never))
            | Message::Team(ScreenMessage::ParentMessage(never)) => match never {},
        }
    }

    fn header(&self) -> Element<'_, Message> {
        let dashboard = &self.state.dashboard;
        let user = dashboard
            .current_user()
            .map(|user| user.name.as_str())
            .unwrap_or("Guest");
        row![
            container(text(dashboard.header_title()).size(24)).width(Length::Fill),
            text(user).size(14),
        ]
        .align_y(Center)
        .into()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let dashboard = &self.state.dashboard;
        let content = match dashboard.view_mode() {
            ViewMode::Projects => self.projects.view(dashboard).map(Message::Projects),
            ViewMode::Tasks => self.tasks.view(dashboard).map(Message::Tasks),
            ViewMode::Team => self.team.view(dashboard).map(Message::Team),
        };
        layout(sidebar(dashboard.sidebar()), self.header(), content)
    }
}

/// Open the dashboard window.
pub fn run(dashboard: DashboardState) -> iced::Result {
    iced::application(
        move || WorkboardApp::new(AppState::new(dashboard.clone())),
        WorkboardApp::update,
        WorkboardApp::view,
    )
    .title(WorkboardApp::title)
    .run()
}
