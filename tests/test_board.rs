//! Integration tests for the task board.
//!
//! Tests cover:
//! - Fixed lane order and titles
//! - Each task appearing in exactly one lane
//! - Assignee resolution and omission
//! - Label truncation

mod common;

use common::*;
use workboard::dashboard::{LANES, build_board, tasks_by_status};

#[test]
fn test_lane_order_is_fixed() {
    let titles: Vec<&str> = LANES.iter().map(|lane| lane.title).collect();
    assert_eq!(titles, vec!["To Do", "In Progress", "Review", "Done"]);

    let statuses: Vec<TaskStatus> = LANES.iter().map(|lane| lane.status).collect();
    assert_eq!(
        statuses,
        vec![
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Review,
            TaskStatus::Done
        ]
    );
}

#[test]
fn test_every_task_lands_in_exactly_one_lane() {
    let statuses = [
        TaskStatus::Done,
        TaskStatus::Todo,
        TaskStatus::Review,
        TaskStatus::InProgress,
        TaskStatus::Todo,
        TaskStatus::Done,
        TaskStatus::Todo,
    ];
    let tasks: Vec<Task> = statuses
        .iter()
        .enumerate()
        .map(|(i, status)| make_task(&format!("t{}", i), "p1", *status))
        .collect();
    let project = make_project("p1", "Alpha", ProjectStatus::Active);
    let refs: Vec<&Task> = tasks.iter().collect();

    let board = build_board(&project, &refs, &[]);

    assert_eq!(board.lanes.len(), 4);
    for task in &tasks {
        let homes: Vec<TaskStatus> = board
            .lanes
            .iter()
            .filter(|column| column.cards.iter().any(|card| card.task.id == task.id))
            .map(|column| column.lane.status)
            .collect();
        assert_eq!(homes, vec![task.status], "task {} misplaced", task.id);
    }

    let todo: Vec<&str> = board
        .lane(TaskStatus::Todo)
        .expect("todo lane")
        .cards
        .iter()
        .map(|card| card.task.id.as_str())
        .collect();
    assert_eq!(todo, vec!["t1", "t4", "t6"]);
}

#[test]
fn test_tasks_by_status_filters_by_equality() {
    let tasks = vec![
        make_task("a", "p1", TaskStatus::Review),
        make_task("b", "p1", TaskStatus::Done),
        make_task("c", "p1", TaskStatus::Review),
    ];
    let refs: Vec<&Task> = tasks.iter().collect();

    let review = tasks_by_status(&refs, TaskStatus::Review);
    assert_eq!(review.len(), 2);
    assert!(tasks_by_status(&refs, TaskStatus::InProgress).is_empty());
}

#[test]
fn test_sample_board_for_mobile_app() {
    let mut state = DashboardState::new(sample());
    let mobile = state.dataset().workspace.projects[1].clone();
    assert_eq!(mobile.name, "Mobile App");
    state.select_project(mobile);

    let board = state.board().expect("project selected");
    let counts: Vec<(&str, usize)> = board
        .lanes
        .iter()
        .map(|column| (column.lane.title, column.cards.len()))
        .collect();
    assert_eq!(
        counts,
        vec![("To Do", 1), ("In Progress", 0), ("Review", 0), ("Done", 0)]
    );

    let card = &board.lanes[0].cards[0];
    assert_eq!(card.task.title, "Setup Authentication");
    assert_eq!(card.assignee.map(|u| u.name.as_str()), Some("John Doe"));
}

#[test]
fn test_assignee_is_omitted_when_missing_or_unknown() {
    let members = vec![make_user("u1", "Ann Lee")];
    let mut assigned = make_task("t1", "p1", TaskStatus::Todo);
    assigned.assignee_id = Some(UserId::new("u1"));
    let unassigned = make_task("t2", "p1", TaskStatus::Todo);
    let mut dangling = make_task("t3", "p1", TaskStatus::Todo);
    dangling.assignee_id = Some(UserId::new("ghost"));

    let tasks = vec![assigned, unassigned, dangling];
    let refs: Vec<&Task> = tasks.iter().collect();
    let project = make_project("p1", "Alpha", ProjectStatus::Active);
    let board = build_board(&project, &refs, &members);

    let assignees: Vec<Option<&str>> = board.lanes[0]
        .cards
        .iter()
        .map(|card| card.assignee.map(|u| u.name.as_str()))
        .collect();
    assert_eq!(assignees, vec![Some("Ann Lee"), None, None]);
}

#[test]
fn test_labels_collapse_after_three() {
    let mut task = make_task("t1", "p1", TaskStatus::Done);
    task.labels = ["ui", "ui", "api", "infra", "docs"]
        .iter()
        .map(|label| label.to_string())
        .collect();
    let project = make_project("p1", "Alpha", ProjectStatus::Active);
    let board = build_board(&project, &[&task], &[]);

    let card = &board.lane(TaskStatus::Done).expect("done lane").cards[0];
    assert_eq!(card.labels.shown, &["ui", "ui", "api"]);
    assert_eq!(card.labels.overflow, 2);
    assert_eq!(card.labels.overflow_badge().as_deref(), Some("+2"));
}
