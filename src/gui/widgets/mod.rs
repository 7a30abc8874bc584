use iced::{
    Alignment::Center,
    Color, Element, Length, Theme, border,
    widget::{Column, button, column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::Color as ProjectColor,
    dashboard::{Sidebar, Tint},
    gui::Message,
};

pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Gray => Color::from_rgb8(0x6B, 0x72, 0x80),
        Tint::Blue => Color::from_rgb8(0x25, 0x63, 0xEB),
        Tint::Green => Color::from_rgb8(0x16, 0xA3, 0x4A),
        Tint::Yellow => Color::from_rgb8(0xCA, 0x8A, 0x04),
        Tint::Orange => Color::from_rgb8(0xEA, 0x58, 0x0C),
        Tint::Red => Color::from_rgb8(0xDC, 0x26, 0x26),
        Tint::Purple => Color::from_rgb8(0x93, 0x33, 0xEA),
    }
}

pub fn project_color(color: ProjectColor) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

/// Card frame; `highlight` draws the selection ring.
pub fn card_style(highlight: Option<Color>) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = bordered_box(theme);
        match highlight {
            Some(color) => style.border(border::rounded(8).width(2).color(color)),
            None => style.border(border::rounded(8).width(1)),
        }
    }
}

pub fn swatch<'a, M: 'a>(color: ProjectColor, size: f32) -> Element<'a, M> {
    let fill = project_color(color);
    container(text(""))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |theme: &Theme| {
            bordered_box(theme)
                .background(fill)
                .border(border::rounded(size / 2.0))
        })
        .into()
}

pub fn badge<'a, M: 'a>(label: impl text::IntoFragment<'a>, tint: Tint) -> Element<'a, M> {
    container(text(label).size(12).color(tint_color(tint)))
        .padding([2, 8])
        .style(move |theme: &Theme| {
            bordered_box(theme).border(border::rounded(10).width(1).color(tint_color(tint)))
        })
        .into()
}

pub fn avatar<'a, M: 'a>(initial: char) -> Element<'a, M> {
    container(text(initial.to_string()).size(12))
        .center_x(Length::Fixed(24.0))
        .center_y(Length::Fixed(24.0))
        .style(|theme: &Theme| bordered_box(theme).border(border::rounded(12)))
        .into()
}

/// Card menu; there are no card actions, so it never receives `on_press`.
pub fn overflow_menu<'a, M: 'a + Clone>() -> Element<'a, M> {
    button(text("...").size(14))
        .padding([0, 6])
        .style(button::text)
        .into()
}

pub fn sidebar(model: Sidebar<'_>) -> Element<'_, Message> {
    let summary = model.member_summary();
    let more_members = model.more_members();
    let Sidebar {
        workspace_name,
        nav,
        projects,
        members,
        ..
    } = model;

    let header = column![
        text(workspace_name).size(18),
        text(summary).size(12),
    ]
    .spacing(2);

    let nav = Column::with_children(nav.into_iter().map(|entry| {
        let style: fn(&Theme, button::Status) -> button::Style = if entry.active {
            button::primary
        } else {
            button::text
        };
        button(text(entry.item.label))
            .width(Length::Fill)
            .style(style)
            .on_press(Message::ChangeView(entry.item.target))
            .into()
    }))
    .spacing(4);

    let projects = Column::with_children(projects.into_iter().map(|entry| {
        let style: fn(&Theme, button::Status) -> button::Style = if entry.selected {
            button::secondary
        } else {
            button::text
        };
        button(
            row![swatch(entry.project.color, 12.0), text(entry.project.name.as_str())]
                .spacing(8)
                .align_y(Center),
        )
        .width(Length::Fill)
        .style(style)
        .on_press(Message::SelectProject(entry.project.clone()))
        .into()
    }))
    .spacing(4);

    let mut member_list = Column::with_children(members.shown.iter().map(|member| {
        row![avatar(member.initial()), text(member.name.as_str()).size(14)]
            .spacing(8)
            .align_y(Center)
            .into()
    }))
    .spacing(6);
    if let Some(more) = more_members {
        member_list = member_list.push(text(more).size(12));
    }

    column![
        header,
        nav,
        row![
            container(text("PROJECTS").size(12)).width(Length::Fill),
            // Creating projects is not supported.
            button(text("+").size(12)).padding([0, 6]).style(button::text),
        ]
        .align_y(Center),
        projects,
        text("TEAM MEMBERS").size(12),
        member_list,
    ]
    .spacing(16)
    .padding(16)
    .into()
}

pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    header: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(row![
        container(sidebar.into())
            .width(Length::Fixed(256.0))
            .height(Length::Fill)
            .style(bordered_box),
        column![
            container(header.into())
                .padding([16, 24])
                .width(Length::Fill)
                .style(bordered_box),
            container(main_content.into())
                .padding(24)
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .width(Length::Fill),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
