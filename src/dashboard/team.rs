use crate::core::{User, Workspace};
use crate::dashboard::{Tint, role_tint};

#[derive(Debug, Clone, Copy)]
pub struct TeamCard<'a> {
    pub user: &'a User,
    pub role_tint: Tint,
}

pub fn build_team(workspace: &Workspace) -> Vec<TeamCard<'_>> {
    workspace
        .members
        .iter()
        .map(|user| TeamCard {
            user,
            role_tint: role_tint(user.role),
        })
        .collect()
}
