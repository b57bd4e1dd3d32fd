use tracing::info;

use gala_domain::{Role, UserId};

use crate::commands::auth_commands;
use crate::{AppError, AppState};

/// Admin-only registration with an explicit role.
pub fn register_user(
    state: &AppState,
    username: &str,
    password: &str,
    role: Role,
) -> Result<UserId, AppError> {
    state.require_admin()?;
    auth_commands::create_user(state, username, password, role)
}

/// Deleting the account you are logged in with is refused; every other
/// account goes, and its id is never handed out again.
pub fn delete_user(state: &AppState, user_id: UserId) -> Result<(), AppError> {
    let session = state.require_admin()?;
    if session.user_id == user_id {
        return Err(AppError::Validation(
            "cannot delete the account that is currently logged in".to_string(),
        ));
    }
    let removed = {
        let mut store = state.store.borrow_mut();
        store
            .users
            .remove(user_id)
            .ok_or_else(|| AppError::NotFound(format!("no user with id {}", user_id)))?
    };
    state.persist()?;
    info!("deleted user '{}' (id {})", removed.username, removed.id);
    Ok(())
}
