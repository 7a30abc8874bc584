use time::macros::date;

use crate::core::model::{
    Color, Dataset, Priority, Project, ProjectId, ProjectStatus, Role, Task, TaskId, TaskStatus,
    User, UserId, Workspace, WorkspaceId,
};

fn user(id: &str, email: &str, name: &str, role: Role) -> User {
    User {
        id: UserId::new(id),
        email: email.to_string(),
        name: name.to_string(),
        avatar: None,
        role,
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|label| label.to_string()).collect()
}

/// The built-in demo workspace: three active projects, three members, one task per project.
pub fn sample_dataset() -> Dataset {
    let members = vec![
        user("1", "user@huly.com", "John Doe", Role::Admin),
        user("2", "jane@huly.com", "Jane Smith", Role::Member),
        user("3", "bob@huly.com", "Bob Johnson", Role::Member),
    ];

    let projects = vec![
        Project {
            id: ProjectId::new("1"),
            name: "Website Redesign".to_string(),
            description: "Complete redesign of company website".to_string(),
            status: ProjectStatus::Active,
            created_at: date!(2024 - 01 - 15),
            updated_at: date!(2024 - 01 - 20),
            owner_id: UserId::new("1"),
            members: Vec::new(),
            color: Color { r: 0x3B, g: 0x82, b: 0xF6 },
        },
        Project {
            id: ProjectId::new("2"),
            name: "Mobile App".to_string(),
            description: "Development of iOS and Android apps".to_string(),
            status: ProjectStatus::Active,
            created_at: date!(2024 - 01 - 10),
            updated_at: date!(2024 - 01 - 18),
            owner_id: UserId::new("2"),
            members: Vec::new(),
            color: Color { r: 0x10, g: 0xB9, b: 0x81 },
        },
        Project {
            id: ProjectId::new("3"),
            name: "Marketing Campaign".to_string(),
            description: "Q1 marketing initiatives".to_string(),
            status: ProjectStatus::Active,
            created_at: date!(2024 - 01 - 05),
            updated_at: date!(2024 - 01 - 22),
            owner_id: UserId::new("1"),
            members: Vec::new(),
            color: Color { r: 0xF5, g: 0x9E, b: 0x0B },
        },
    ];

    let tasks = vec![
        Task {
            id: TaskId::new("1"),
            title: "Design Homepage".to_string(),
            description: "Create wireframes and mockups for homepage".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            assignee_id: Some(UserId::new("2")),
            project_id: ProjectId::new("1"),
            created_at: date!(2024 - 01 - 15),
            updated_at: date!(2024 - 01 - 20),
            due_date: None,
            labels: labels(&["design", "frontend"]),
        },
        Task {
            id: TaskId::new("2"),
            title: "Setup Authentication".to_string(),
            description: "Implement user authentication system".to_string(),
            status: TaskStatus::Todo,
            priority: Priority::High,
            assignee_id: Some(UserId::new("1")),
            project_id: ProjectId::new("2"),
            created_at: date!(2024 - 01 - 10),
            updated_at: date!(2024 - 01 - 10),
            due_date: None,
            labels: labels(&["backend", "security"]),
        },
        Task {
            id: TaskId::new("3"),
            title: "Content Strategy".to_string(),
            description: "Develop content marketing strategy".to_string(),
            status: TaskStatus::Review,
            priority: Priority::Medium,
            assignee_id: Some(UserId::new("3")),
            project_id: ProjectId::new("3"),
            created_at: date!(2024 - 01 - 05),
            updated_at: date!(2024 - 01 - 22),
            due_date: None,
            labels: labels(&["marketing", "content"]),
        },
    ];

    Dataset {
        workspace: Workspace {
            id: WorkspaceId::new("1"),
            name: "Huly Workspace".to_string(),
            description: "Team collaboration and project management".to_string(),
            projects,
            members,
            created_at: date!(2024 - 01 - 01),
        },
        tasks,
        comments: Vec::new(),
        current_user: Some(UserId::new("1")),
    }
}
