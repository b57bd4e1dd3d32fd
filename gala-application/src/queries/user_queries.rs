use gala_domain::{Role, UserId};

use crate::AppState;

/// Listing view; passwords never leave the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub role: Role,
}

pub fn list_users(state: &AppState) -> Vec<UserSummary> {
    state
        .store
        .borrow()
        .users
        .iter()
        .map(|user| UserSummary {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        })
        .collect()
}
