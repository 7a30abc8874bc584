//! Plain-text rendering of the dashboard, used by the `show` command.

use std::fmt;

use crate::dashboard::{
    Board, DashboardState, Gallery, Sidebar, TeamCard, ViewMode, display_date,
};

/// Header, sidebar and the active view.
pub fn render_view(state: &DashboardState) -> String {
    DashboardText(state).to_string()
}

/// [`fmt::Display`] adapter over the whole dashboard.
pub struct DashboardText<'a>(pub &'a DashboardState);

impl fmt::Display for DashboardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        let user = state
            .current_user()
            .map(|user| user.name.as_str())
            .unwrap_or("Guest");
        writeln!(f, "# {}    [{}]", state.header_title(), user)?;
        writeln!(f)?;
        write_sidebar(f, &state.sidebar())?;
        writeln!(f)?;
        match state.view_mode() {
            ViewMode::Projects => write_gallery(f, &state.gallery()),
            ViewMode::Tasks => match state.board() {
                Some(board) => write_board(f, &board),
                None => Ok(()),
            },
            ViewMode::Team => write_team(f, &state.team()),
        }
    }
}

fn write_sidebar(f: &mut fmt::Formatter<'_>, sidebar: &Sidebar<'_>) -> fmt::Result {
    writeln!(f, "{} ({})", sidebar.workspace_name, sidebar.member_summary())?;
    for entry in &sidebar.nav {
        let marker = if entry.active { '>' } else { ' ' };
        writeln!(f, " {} {}", marker, entry.item.label)?;
    }
    writeln!(f, "PROJECTS")?;
    for entry in &sidebar.projects {
        let marker = if entry.selected { '*' } else { ' ' };
        writeln!(
            f,
            " {} {} {}",
            marker,
            entry.project.color.to_hex_string(),
            entry.project.name
        )?;
    }
    writeln!(f, "TEAM MEMBERS")?;
    for member in sidebar.members.shown {
        writeln!(f, "   ({}) {}", member.initial(), member.name)?;
    }
    if let Some(more) = sidebar.more_members() {
        writeln!(f, "   {}", more)?;
    }
    Ok(())
}

fn write_gallery(f: &mut fmt::Formatter<'_>, gallery: &Gallery<'_>) -> fmt::Result {
    let stats = gallery.stats;
    writeln!(
        f,
        "Total Projects: {} | Active: {} | Completed: {} | Team Members: {}",
        stats.total, stats.active, stats.completed, stats.members
    )?;
    for card in &gallery.cards {
        let marker = if card.selected { '*' } else { ' ' };
        let avatars: String = card
            .avatars
            .shown
            .iter()
            .map(|user| user.initial())
            .collect();
        writeln!(
            f,
            "{} [{}] {} ({})",
            marker,
            card.project.status.as_str(),
            card.project.name,
            card.project.color.to_hex_string()
        )?;
        writeln!(f, "    {}", card.project.description)?;
        match card.avatars.overflow_badge() {
            Some(badge) => writeln!(f, "    members: {} {}", avatars, badge)?,
            None => writeln!(f, "    members: {}", avatars)?,
        }
        writeln!(f, "    Created {}", display_date(card.project.created_at))?;
    }
    Ok(())
}

fn write_board(f: &mut fmt::Formatter<'_>, board: &Board<'_>) -> fmt::Result {
    for column in &board.lanes {
        writeln!(f, "== {} ({})", column.lane.title, column.cards.len())?;
        for card in &column.cards {
            let task = card.task;
            writeln!(f, "  - {} [{}]", task.title, task.priority.as_str())?;
            if !task.description.is_empty() {
                writeln!(f, "    {}", task.description)?;
            }
            if let Some(assignee) = card.assignee {
                writeln!(f, "    assignee: {}", assignee.name)?;
            }
            if !card.labels.shown.is_empty() {
                write!(f, "    labels: {}", card.labels.shown.join(", "))?;
                if let Some(badge) = card.labels.overflow_badge() {
                    write!(f, " {}", badge)?;
                }
                writeln!(f)?;
            }
            write!(f, "    {}", display_date(task.created_at))?;
            if let Some(due) = task.due_date {
                write!(f, "  Due: {}", display_date(due))?;
            }
            writeln!(f)?;
        }
    }
    Ok(())
}

fn write_team(f: &mut fmt::Formatter<'_>, team: &[TeamCard<'_>]) -> fmt::Result {
    writeln!(f, "Team Members")?;
    for card in team {
        writeln!(
            f,
            "  {} <{}> [{}]",
            card.user.name,
            card.user.email,
            card.user.role.as_str()
        )?;
    }
    Ok(())
}
