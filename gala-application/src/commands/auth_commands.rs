use tracing::info;

use gala_domain::{Role, User, UserId};

use crate::validation::{validate_password, validate_username};
use crate::{AppError, AppState, Session};

/// Plaintext comparison against the stored password; this is the persisted
/// format, not an oversight. Unknown username and wrong password produce
/// the same message.
pub fn login(state: &AppState, username: &str, password: &str) -> Result<Session, AppError> {
    let session = {
        let store = state.store.borrow();
        let user = store
            .find_user_by_username(username.trim())
            .filter(|user| user.password == password)
            .ok_or_else(|| AppError::Auth("invalid username or password".to_string()))?;
        Session {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    };
    info!("user '{}' logged in as {}", session.username, session.role.as_str());
    *state.session.borrow_mut() = Some(session.clone());
    Ok(session)
}

pub fn logout(state: &AppState) -> Option<Session> {
    let previous = state.session.borrow_mut().take();
    if let Some(session) = &previous {
        info!("user '{}' logged out", session.username);
    }
    previous
}

/// Self-service registration always creates a regular user.
pub fn register_account(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<UserId, AppError> {
    create_user(state, username, password, Role::RegularUser)
}

pub(crate) fn create_user(
    state: &AppState,
    username: &str,
    password: &str,
    role: Role,
) -> Result<UserId, AppError> {
    let username = validate_username(username)?;
    let password = validate_password(password)?;

    let id = {
        let mut store = state.store.borrow_mut();
        if store.find_user_by_username(&username).is_some() {
            return Err(AppError::Validation(format!(
                "username '{}' is already taken",
                username
            )));
        }
        store.users.insert(User {
            id: 0,
            username: username.clone(),
            password,
            role,
        })
    };
    state.persist()?;
    info!("registered user '{}' ({})", username, role.as_str());
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_state;

    #[test]
    fn login_checks_exact_username_and_password() {
        let state = test_state();
        create_user(&state, "alice", "secret1", Role::RegularUser).expect("create user");

        assert!(login(&state, "alice", "secret1").is_ok());
        assert!(matches!(
            login(&state, "alice", "wrong"),
            Err(AppError::Auth(_))
        ));
        assert!(matches!(
            login(&state, "Alice", "secret1"),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn login_installs_session_and_logout_clears_it() {
        let state = test_state();
        create_user(&state, "alice", "secret1", Role::RegularUser).expect("create user");

        let session = login(&state, "alice", "secret1").expect("login");
        assert_eq!(state.current_session(), Some(session));

        let previous = logout(&state).expect("session to clear");
        assert_eq!(previous.username, "alice");
        assert_eq!(state.current_session(), None);
    }

    #[test]
    fn duplicate_username_is_refused() {
        let state = test_state();
        register_account(&state, "alice", "secret1").expect("first registration");
        let err = register_account(&state, "alice", "other123").expect_err("duplicate");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn self_registration_creates_regular_users() {
        let state = test_state();
        let id = register_account(&state, "alice", "secret1").expect("register");
        let store = state.store.borrow();
        let user = store.users.get(id).expect("stored user");
        assert_eq!(user.role, Role::RegularUser);
    }
}
