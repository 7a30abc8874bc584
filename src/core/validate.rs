//! Referential checks over a loaded [`Dataset`].
//!
//! Rendering never fails on a broken reference: an unknown assignee, owner or
//! project simply renders as absent. These checks make the breakage visible so a
//! caller can log it or reject the dataset outright.

use std::collections::HashSet;
use std::fmt;

use crate::core::model::{CommentId, Dataset, ProjectId, TaskId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DuplicateUser(UserId),
    DuplicateProject(ProjectId),
    DuplicateTask(TaskId),
    DuplicateComment(CommentId),
    UnknownOwner { project: ProjectId, owner: UserId },
    UnknownProjectMember { project: ProjectId, member: UserId },
    UnknownProject { task: TaskId, project: ProjectId },
    UnknownAssignee { task: TaskId, assignee: UserId },
    UnknownCommentTask { comment: CommentId, task: TaskId },
    UnknownCommentAuthor { comment: CommentId, user: UserId },
    UnknownCurrentUser(UserId),
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::DuplicateUser(id) => write!(f, "user id {} is used more than once", id),
            Issue::DuplicateProject(id) => write!(f, "project id {} is used more than once", id),
            Issue::DuplicateTask(id) => write!(f, "task id {} is used more than once", id),
            Issue::DuplicateComment(id) => write!(f, "comment id {} is used more than once", id),
            Issue::UnknownOwner { project, owner } => {
                write!(f, "project {} is owned by unknown user {}", project, owner)
            }
            Issue::UnknownProjectMember { project, member } => {
                write!(f, "project {} lists unknown member {}", project, member)
            }
            Issue::UnknownProject { task, project } => {
                write!(f, "task {} belongs to unknown project {}", task, project)
            }
            Issue::UnknownAssignee { task, assignee } => {
                write!(f, "task {} is assigned to unknown user {}", task, assignee)
            }
            Issue::UnknownCommentTask { comment, task } => {
                write!(f, "comment {} refers to unknown task {}", comment, task)
            }
            Issue::UnknownCommentAuthor { comment, user } => {
                write!(f, "comment {} was written by unknown user {}", comment, user)
            }
            Issue::UnknownCurrentUser(id) => write!(f, "current user {} is not a member", id),
        }
    }
}

fn duplicates<'a, T, I>(ids: I) -> Vec<T>
where
    T: Clone + Eq + std::hash::Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut out = Vec::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            out.push(id.clone());
        }
    }
    out
}

/// Every duplicated id and unresolved reference, in dataset order.
pub fn dangling_references(dataset: &Dataset) -> Vec<Issue> {
    let workspace = &dataset.workspace;
    let mut issues = Vec::new();

    issues.extend(
        duplicates(workspace.members.iter().map(|user| &user.id))
            .into_iter()
            .map(Issue::DuplicateUser),
    );
    issues.extend(
        duplicates(workspace.projects.iter().map(|project| &project.id))
            .into_iter()
            .map(Issue::DuplicateProject),
    );
    issues.extend(
        duplicates(dataset.tasks.iter().map(|task| &task.id))
            .into_iter()
            .map(Issue::DuplicateTask),
    );
    issues.extend(
        duplicates(dataset.comments.iter().map(|comment| &comment.id))
            .into_iter()
            .map(Issue::DuplicateComment),
    );

    let users: HashSet<&UserId> = workspace.members.iter().map(|user| &user.id).collect();
    let projects: HashSet<&ProjectId> =
        workspace.projects.iter().map(|project| &project.id).collect();
    let tasks: HashSet<&TaskId> = dataset.tasks.iter().map(|task| &task.id).collect();

    for project in &workspace.projects {
        if !users.contains(&project.owner_id) {
            issues.push(Issue::UnknownOwner {
                project: project.id.clone(),
                owner: project.owner_id.clone(),
            });
        }
        for member in &project.members {
            if !users.contains(&member.id) {
                issues.push(Issue::UnknownProjectMember {
                    project: project.id.clone(),
                    member: member.id.clone(),
                });
            }
        }
    }

    for task in &dataset.tasks {
        if !projects.contains(&task.project_id) {
            issues.push(Issue::UnknownProject {
                task: task.id.clone(),
                project: task.project_id.clone(),
            });
        }
        if let Some(assignee) = &task.assignee_id {
            if !users.contains(assignee) {
                issues.push(Issue::UnknownAssignee {
                    task: task.id.clone(),
                    assignee: assignee.clone(),
                });
            }
        }
    }

    for comment in &dataset.comments {
        if !tasks.contains(&comment.task_id) {
            issues.push(Issue::UnknownCommentTask {
                comment: comment.id.clone(),
                task: comment.task_id.clone(),
            });
        }
        if !users.contains(&comment.user_id) {
            issues.push(Issue::UnknownCommentAuthor {
                comment: comment.id.clone(),
                user: comment.user_id.clone(),
            });
        }
    }

    if let Some(current) = &dataset.current_user {
        if !users.contains(current) {
            issues.push(Issue::UnknownCurrentUser(current.clone()));
        }
    }

    issues
}
