use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, Row, button, column, container, row, scrollable, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::Project,
    dashboard::{DashboardState, GalleryStats, ProjectCard, Tint, display_date, project_status_tint},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{avatar, badge, card_style, overflow_menu, swatch, tint_color},
    },
};

const CARDS_PER_ROW: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct ProjectsScreen;

#[derive(Debug, Clone)]
pub enum ProjectsParentMessage {
    SelectProject(Project),
}

type Msg = ScreenMessage<ProjectsScreen>;

fn stat<'a>(label: &'a str, value: usize, tint: Tint) -> Element<'a, Msg> {
    container(
        column![
            text(label).size(14),
            text(value.to_string()).size(28).color(tint_color(tint)),
        ]
        .spacing(4),
    )
    .padding(20)
    .width(Length::Fill)
    .style(bordered_box)
    .into()
}

fn stats_row<'a>(stats: GalleryStats) -> Element<'a, Msg> {
    row![
        stat("Total Projects", stats.total, Tint::Gray),
        stat("Active", stats.active, Tint::Green),
        stat("Completed", stats.completed, Tint::Blue),
        stat("Team Members", stats.members, Tint::Purple),
    ]
    .spacing(24)
    .into()
}

fn project_card(card: ProjectCard<'_>) -> Element<'_, Msg> {
    let project = card.project;

    let mut avatars = Row::with_children(
        card.avatars
            .shown
            .iter()
            .map(|member| avatar(member.initial())),
    )
    .spacing(2);
    if let Some(more) = card.avatars.overflow_badge() {
        avatars = avatars.push(text(more).size(12));
    }

    let body = column![
        row![
            swatch(project.color, 16.0),
            container(text(project.name.as_str()).size(18)).width(Length::Fill),
            overflow_menu(),
        ]
        .spacing(12)
        .align_y(Center),
        text(project.description.as_str()).size(14),
        row![
            badge(project.status.as_str(), project_status_tint(project.status)),
            container(avatars).align_right(Length::Fill),
        ]
        .align_y(Center),
        text(format!("Created {}", display_date(project.created_at))).size(12),
    ]
    .spacing(12);

    let highlight = card.selected.then(|| tint_color(Tint::Blue));
    button(container(body).padding(20).style(card_style(highlight)))
        .padding(0)
        .width(Length::Fill)
        .style(button::text)
        .on_press(ScreenMessage::ParentMessage(
            ProjectsParentMessage::SelectProject(project.clone()),
        ))
        .into()
}

impl Screen for ProjectsScreen {
    type Message = Infallible;
    type ParentMessage = ProjectsParentMessage;

    fn view<'a>(&'a self, state: &'a DashboardState) -> Element<'a, Msg> {
        let gallery = state.gallery();

        let header = row![
            column![
                text("Projects").size(24),
                text("Manage your team projects and track progress").size(14),
            ]
            .width(Length::Fill),
            // Creating projects is not supported; the affordance stays disabled.
            button("New Project"),
        ]
        .align_y(Center);

        let grid = Column::with_children(gallery.cards.chunks(CARDS_PER_ROW).map(|chunk| {
            Row::with_children(chunk.iter().copied().map(project_card))
                .spacing(24)
                .into()
        }))
        .spacing(24);

        scrollable(column![header, stats_row(gallery.stats), grid].spacing(24)).into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<Msg> {
        match message {}
    }
}
