#![allow(dead_code)]
#![allow(unused_imports)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from workboard for tests
pub use workboard::core::{
    Dataset, Priority, Project, ProjectId, ProjectStatus, Role, Task, TaskId, TaskStatus, User,
    UserId,
};
pub use workboard::dashboard::{DashboardState, ViewMode};
