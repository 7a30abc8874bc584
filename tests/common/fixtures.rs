use time::macros::date;
use workboard::core::{
    Color, Dataset, Priority, Project, ProjectId, ProjectStatus, Role, Task, TaskId, TaskStatus,
    User, UserId, Workspace, WorkspaceId, sample_dataset,
};

/// Color constants for tests
pub const TEST_BLUE: Color = Color { r: 0x3B, g: 0x82, b: 0xF6 };

pub fn make_user(id: &str, name: &str) -> User {
    User {
        id: UserId::new(id),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        name: name.to_string(),
        avatar: None,
        role: Role::Member,
    }
}

pub fn make_project(id: &str, name: &str, status: ProjectStatus) -> Project {
    Project {
        id: ProjectId::new(id),
        name: name.to_string(),
        description: format!("{} description", name),
        status,
        created_at: date!(2024 - 02 - 01),
        updated_at: date!(2024 - 02 - 02),
        owner_id: UserId::new("u1"),
        members: Vec::new(),
        color: TEST_BLUE,
    }
}

pub fn make_task(id: &str, project: &str, status: TaskStatus) -> Task {
    Task {
        id: TaskId::new(id),
        title: format!("Task {}", id),
        description: String::new(),
        status,
        priority: Priority::Medium,
        assignee_id: None,
        project_id: ProjectId::new(project),
        created_at: date!(2024 - 02 - 03),
        updated_at: date!(2024 - 02 - 03),
        due_date: None,
        labels: Vec::new(),
    }
}

/// A workspace built from the given parts, with no comments or current user.
pub fn make_dataset(projects: Vec<Project>, members: Vec<User>, tasks: Vec<Task>) -> Dataset {
    Dataset {
        workspace: Workspace {
            id: WorkspaceId::new("w1"),
            name: "Test Workspace".to_string(),
            description: "Workspace used in tests".to_string(),
            projects,
            members,
            created_at: date!(2024 - 01 - 01),
        },
        tasks,
        comments: Vec::new(),
        current_user: None,
    }
}

/// The built-in sample, used for the documented example scenario.
pub fn sample() -> Dataset {
    sample_dataset()
}

/// Writes a dataset to a temporary JSON file.
/// The file will be automatically cleaned up when dropped.
pub fn write_dataset_file(dataset: &Dataset) -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp dataset file");
    serde_json::to_writer_pretty(file.as_file(), dataset).expect("Failed to write dataset");
    file
}

pub fn write_raw_file(contents: &str) -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp dataset file");
    std::fs::write(file.path(), contents).expect("Failed to write dataset");
    file
}
