mod common;

use common::*;
use workboard::render_view;

#[test]
fn test_projects_view_text() {
    let state = DashboardState::new(sample());
    let out = render_view(&state);

    assert!(out.starts_with("# Projects    [John Doe]"));
    assert!(out.contains("Huly Workspace (3 members)"));
    assert!(out.contains("Total Projects: 3 | Active: 3 | Completed: 0 | Team Members: 3"));
    assert!(out.contains("* [active] Website Redesign (#3B82F6)"));
    assert!(out.contains("    members: JJB\n"));
    assert!(out.contains("Created 1/15/2024"));
    assert!(out.contains(" > Home\n"));
    assert!(out.contains("   Tasks\n"));
}

#[test]
fn test_tasks_view_text() {
    let mut state = DashboardState::new(sample());
    let mobile = state.dataset().workspace.projects[1].clone();
    state.select_project(mobile);
    state.set_view_mode(ViewMode::Tasks);
    let out = render_view(&state);

    assert!(out.starts_with("# Mobile App - Tasks"));
    assert!(out.contains("== To Do (1)\n  - Setup Authentication [high]"));
    assert!(out.contains("== In Progress (0)"));
    assert!(out.contains("== Review (0)"));
    assert!(out.contains("== Done (0)"));
    assert!(out.contains("    assignee: John Doe"));
    assert!(out.contains("    labels: backend, security\n"));
    assert!(!out.contains("Design Homepage"));
}

#[test]
fn test_due_date_and_label_overflow_text() {
    let mut task = make_task("t1", "p1", TaskStatus::Review);
    task.due_date = Some(time::macros::date!(2024 - 12 - 09));
    task.labels = vec!["a".into(), "b".into(), "c".into(), "d".into()];
    let dataset = make_dataset(
        vec![make_project("p1", "Alpha", ProjectStatus::Active)],
        Vec::new(),
        vec![task],
    );
    let mut state = DashboardState::new(dataset);
    state.set_view_mode(ViewMode::Tasks);
    let out = render_view(&state);

    assert!(out.contains("    labels: a, b, c +1\n"));
    assert!(out.contains("    2/3/2024  Due: 12/9/2024\n"));
    assert!(!out.contains("assignee:"));
    assert!(out.starts_with("# Alpha - Tasks    [Guest]"));
}

#[test]
fn test_team_view_text() {
    let mut state = DashboardState::new(sample());
    state.set_view_mode(ViewMode::Team);
    let out = render_view(&state);

    assert!(out.contains("Team Members\n"));
    assert!(out.contains("  Jane Smith <jane@huly.com> [member]"));
    assert!(out.contains("  John Doe <user@huly.com> [admin]"));
}
