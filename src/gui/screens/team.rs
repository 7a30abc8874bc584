use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, Row, column, container, row, scrollable, text},
};

use crate::{
    dashboard::{DashboardState, TeamCard},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{avatar, badge, card_style},
    },
};

const CARDS_PER_ROW: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct TeamScreen;

type Msg = ScreenMessage<TeamScreen>;

fn member_card(card: TeamCard<'_>) -> Element<'_, Msg> {
    let user = card.user;
    container(
        row![
            avatar(user.initial()),
            column![
                text(user.name.as_str()).size(16),
                text(user.email.as_str()).size(12),
                badge(user.role.as_str(), card.role_tint),
            ]
            .spacing(4),
        ]
        .spacing(12)
        .align_y(Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(card_style(None))
    .into()
}

impl Screen for TeamScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a DashboardState) -> Element<'a, Msg> {
        let team = state.team();
        let grid = Column::with_children(team.chunks(CARDS_PER_ROW).map(|chunk| {
            Row::with_children(chunk.iter().copied().map(member_card))
                .spacing(16)
                .into()
        }))
        .spacing(16);

        scrollable(column![text("Team Members").size(18), grid].spacing(16)).into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<Msg> {
        match message {}
    }
}
