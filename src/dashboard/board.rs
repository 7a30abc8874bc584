use crate::core::{
    LABEL_PREVIEW_LIMIT, Preview, Project, Task, TaskStatus, User, UserId, preview_with_overflow,
};
use crate::dashboard::Tint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    pub status: TaskStatus,
    pub title: &'static str,
    pub tint: Tint,
}

/// Board columns, left to right.
pub const LANES: [Lane; 4] = [
    Lane {
        status: TaskStatus::Todo,
        title: "To Do",
        tint: Tint::Gray,
    },
    Lane {
        status: TaskStatus::InProgress,
        title: "In Progress",
        tint: Tint::Blue,
    },
    Lane {
        status: TaskStatus::Review,
        title: "Review",
        tint: Tint::Yellow,
    },
    Lane {
        status: TaskStatus::Done,
        title: "Done",
        tint: Tint::Green,
    },
];

#[derive(Debug, Clone)]
pub struct TaskCard<'a> {
    pub task: &'a Task,
    /// `None` when the task is unassigned or the assignee is not a member.
    pub assignee: Option<&'a User>,
    pub labels: Preview<'a, String>,
}

#[derive(Debug, Clone)]
pub struct LaneColumn<'a> {
    pub lane: &'static Lane,
    pub cards: Vec<TaskCard<'a>>,
}

#[derive(Debug, Clone)]
pub struct Board<'a> {
    pub project: &'a Project,
    pub lanes: Vec<LaneColumn<'a>>,
}

impl<'a> Board<'a> {
    pub fn lane(&self, status: TaskStatus) -> Option<&LaneColumn<'a>> {
        self.lanes.iter().find(|column| column.lane.status == status)
    }
}

pub fn tasks_by_status<'a>(tasks: &[&'a Task], status: TaskStatus) -> Vec<&'a Task> {
    tasks
        .iter()
        .copied()
        .filter(|task| task.status == status)
        .collect()
}

fn resolve_user<'a>(members: &'a [User], id: Option<&UserId>) -> Option<&'a User> {
    let id = id?;
    members.iter().find(|user| &user.id == id)
}

pub fn build_card<'a>(task: &'a Task, members: &'a [User]) -> TaskCard<'a> {
    TaskCard {
        task,
        assignee: resolve_user(members, task.assignee_id.as_ref()),
        labels: preview_with_overflow(&task.labels, LABEL_PREVIEW_LIMIT),
    }
}

pub fn build_board<'a>(project: &'a Project, tasks: &[&'a Task], members: &'a [User]) -> Board<'a> {
    let lanes = LANES
        .iter()
        .map(|lane| LaneColumn {
            lane,
            cards: tasks_by_status(tasks, lane.status)
                .into_iter()
                .map(|task| build_card(task, members))
                .collect(),
        })
        .collect();
    Board { project, lanes }
}
