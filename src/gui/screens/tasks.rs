use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task, Theme,
    widget::{Column, Row, button, column, container, row, scrollable, text},
};
use iced_widget::container::bordered_box;

use crate::{
    dashboard::{DashboardState, LaneColumn, TaskCard, display_date, priority_tint},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{avatar, badge, card_style, overflow_menu, tint_color},
    },
};

const LANE_WIDTH: f32 = 320.0;

#[derive(Debug, Clone, Default)]
pub struct TasksScreen;

type Msg = ScreenMessage<TasksScreen>;

fn task_card(card: TaskCard<'_>) -> Element<'_, Msg> {
    let task = card.task;

    let mut body = Column::new()
        .spacing(10)
        .push(
            row![
                container(text(task.title.as_str()).size(14)).width(Length::Fill),
                overflow_menu(),
            ]
            .align_y(Center),
        );
    if !task.description.is_empty() {
        body = body.push(text(task.description.as_str()).size(12));
    }

    let mut meta = Row::new()
        .align_y(Center)
        .push(
            container(badge(task.priority.as_str(), priority_tint(task.priority)))
                .width(Length::Fill),
        );
    if let Some(assignee) = card.assignee {
        meta = meta.push(
            row![avatar(assignee.initial()), text(assignee.name.as_str()).size(12)]
                .spacing(6)
                .align_y(Center),
        );
    }
    body = body.push(meta);

    if !card.labels.shown.is_empty() {
        let mut labels = Row::with_children(
            card.labels
                .shown
                .iter()
                .map(|label| {
                    container(text(label.as_str()).size(12))
                        .padding([2, 6])
                        .style(bordered_box)
                        .into()
                }),
        )
        .spacing(4);
        if let Some(more) = card.labels.overflow_badge() {
            labels = labels.push(container(text(more).size(12)).padding([2, 6]).style(bordered_box));
        }
        body = body.push(labels);
    }

    let mut dates = Row::new().push(
        container(text(display_date(task.created_at)).size(12)).width(Length::Fill),
    );
    if let Some(due) = task.due_date {
        dates = dates.push(text(format!("Due: {}", display_date(due))).size(12));
    }
    body = body.push(dates);

    container(body)
        .padding(14)
        .width(Length::Fill)
        .style(card_style(None))
        .into()
}

fn lane(lane_column: LaneColumn<'_>) -> Element<'_, Msg> {
    let tint = tint_color(lane_column.lane.tint);
    let header = row![
        container(text(lane_column.lane.title).size(16)).width(Length::Fill),
        badge(lane_column.cards.len().to_string(), lane_column.lane.tint),
    ]
    .align_y(Center);

    let cards = Column::with_children(lane_column.cards.into_iter().map(task_card))
        .spacing(10)
        // Status transitions are not supported; the placeholder stays disabled.
        .push(button(text("+ Add a task").size(14)).width(Length::Fill));

    container(column![header, cards].spacing(14))
        .padding(14)
        .width(Length::Fixed(LANE_WIDTH))
        .style(move |theme: &Theme| {
            bordered_box(theme).border(iced::border::rounded(8).width(2).color(tint))
        })
        .into()
}

impl Screen for TasksScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a DashboardState) -> Element<'a, Msg> {
        let Some(board) = state.board() else {
            return Column::new().into();
        };

        let header = row![
            column![
                text(format!("{} - Tasks", board.project.name)).size(24),
                text("Track and manage tasks for your project").size(14),
            ]
            .width(Length::Fill),
            button("New Task"),
        ]
        .align_y(Center);

        let lanes = Row::with_children(board.lanes.into_iter().map(lane)).spacing(24);

        column![
            header,
            scrollable(lanes).direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::default()
            )),
        ]
        .spacing(24)
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<Msg> {
        match message {}
    }
}
