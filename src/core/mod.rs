pub mod model;
pub mod preview;
pub mod provider;
pub mod sample;
pub mod validate;

pub use model::{
    Color, Comment, CommentId, Dataset, Priority, Project, ProjectId, ProjectStatus, Role, Task,
    TaskId, TaskStatus, User, UserId, Workspace, WorkspaceId,
};
pub use preview::{LABEL_PREVIEW_LIMIT, MEMBER_PREVIEW_LIMIT, Preview, preview_with_overflow};
pub use provider::{JsonWorkspace, SampleWorkspace, WorkspaceProvider, load_dataset};
pub use sample::sample_dataset;
pub use validate::{Issue, dangling_references};
