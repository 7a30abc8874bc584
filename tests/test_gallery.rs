//! Integration tests for the project gallery, sidebar and team views.

mod common;

use common::*;
use workboard::dashboard::{GalleryStats, NAVIGATION, build_sidebar};

#[test]
fn test_sample_counters() {
    let state = DashboardState::new(sample());
    let stats = state.gallery().stats;

    assert_eq!(
        stats,
        GalleryStats {
            total: 3,
            active: 3,
            completed: 0,
            members: 3,
        }
    );
}

#[test]
fn test_counters_with_mixed_statuses() {
    let dataset = make_dataset(
        vec![
            make_project("p1", "One", ProjectStatus::Active),
            make_project("p2", "Two", ProjectStatus::Completed),
            make_project("p3", "Three", ProjectStatus::Archived),
            make_project("p4", "Four", ProjectStatus::Completed),
        ],
        vec![make_user("u1", "Ann Lee"), make_user("u2", "Bo Chan")],
        Vec::new(),
    );
    let stats = GalleryStats::compute(&dataset.workspace);

    assert_eq!(stats.total, 4);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.members, 2);
}

#[test]
fn test_cards_follow_insertion_order_and_mark_selection() {
    let mut state = DashboardState::new(sample());
    let marketing = state.dataset().workspace.projects[2].clone();
    state.select_project(marketing);

    let gallery = state.gallery();
    let names: Vec<&str> = gallery.cards.iter().map(|c| c.project.name.as_str()).collect();
    assert_eq!(names, vec!["Website Redesign", "Mobile App", "Marketing Campaign"]);

    let selected: Vec<bool> = gallery.cards.iter().map(|c| c.selected).collect();
    assert_eq!(selected, vec![false, false, true]);
}

#[test]
fn test_card_avatars_preview_workspace_members() {
    let members = (1..=5)
        .map(|i| make_user(&format!("u{}", i), &format!("Member {}", i)))
        .collect();
    let dataset = make_dataset(
        vec![make_project("p1", "One", ProjectStatus::Active)],
        members,
        Vec::new(),
    );
    let state = DashboardState::new(dataset);
    let gallery = state.gallery();

    let card = &gallery.cards[0];
    assert_eq!(card.avatars.shown.len(), 3);
    assert_eq!(card.avatars.overflow_badge().as_deref(), Some("+2"));
}

#[test]
fn test_nav_activity_rule() {
    let mut state = DashboardState::new(sample());

    let active: Vec<&str> = state
        .sidebar()
        .nav
        .iter()
        .filter(|entry| entry.active)
        .map(|entry| entry.item.label)
        .collect();
    assert_eq!(active, vec!["Home", "Projects", "Settings"]);

    state.set_view_mode(ViewMode::Tasks);
    let active: Vec<&str> = state
        .sidebar()
        .nav
        .iter()
        .filter(|entry| entry.active)
        .map(|entry| entry.item.label)
        .collect();
    assert_eq!(active, vec!["Tasks"]);

    let tasks = NAVIGATION.iter().find(|item| item.label == "Tasks").expect("tasks nav");
    assert!(!tasks.is_active(ViewMode::Tasks, false));
}

#[test]
fn test_sidebar_member_preview() {
    let members = (1..=4)
        .map(|i| make_user(&format!("u{}", i), &format!("Member {}", i)))
        .collect();
    let dataset = make_dataset(
        vec![make_project("p1", "One", ProjectStatus::Active)],
        members,
        Vec::new(),
    );
    let selected = dataset.workspace.projects.first();
    let sidebar = build_sidebar(&dataset.workspace, selected, ViewMode::Projects);

    assert_eq!(sidebar.member_summary(), "4 members");
    assert_eq!(sidebar.members.shown.len(), 3);
    assert_eq!(sidebar.more_members().as_deref(), Some("+1 more"));
    assert!(sidebar.projects[0].selected);
}

#[test]
fn test_sidebar_without_overflow() {
    let state = DashboardState::new(sample());
    let sidebar = state.sidebar();

    assert_eq!(sidebar.workspace_name, "Huly Workspace");
    assert_eq!(sidebar.more_members(), None);
    let selected: Vec<bool> = sidebar.projects.iter().map(|entry| entry.selected).collect();
    assert_eq!(selected, vec![true, false, false]);
}

#[test]
fn test_team_lists_members_in_order() {
    let state = DashboardState::new(sample());
    let team = state.team();

    let rows: Vec<(&str, Role)> = team.iter().map(|c| (c.user.name.as_str(), c.user.role)).collect();
    assert_eq!(
        rows,
        vec![
            ("John Doe", Role::Admin),
            ("Jane Smith", Role::Member),
            ("Bob Johnson", Role::Member),
        ]
    );
}
