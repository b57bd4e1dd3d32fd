// Menu loops

pub mod admin_menu;
pub mod auth_menu;
pub mod user_menu;

use gala_application::AppState;

use crate::error::{render_error, ConsoleError};
use crate::prompts::Prompter;

/// What one menu pass decided about the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Top-level loop: shows the menu for the current session's role until
/// the operator exits. Recoverable errors never escape a menu pass.
pub fn run_console(state: &AppState, prompter: &mut Prompter) -> anyhow::Result<()> {
    loop {
        let flow = match state.current_session() {
            None => auth_menu::run(state, prompter)?,
            Some(session) if session.is_admin() => admin_menu::run(state, prompter)?,
            Some(_) => user_menu::run(state, prompter)?,
        };
        if flow == Flow::Exit {
            return Ok(());
        }
    }
}

/// Settles one menu action: cancellation and application errors are
/// reported and swallowed so the loop shows the menu again; anything
/// else ends the program.
pub(crate) fn settle(result: Result<(), ConsoleError>) -> Result<(), ConsoleError> {
    match result {
        Ok(()) => Ok(()),
        Err(ConsoleError::Cancelled) => {
            println!("(cancelled)");
            Ok(())
        }
        Err(ConsoleError::App(err)) => {
            println!("{}", render_error(&err));
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Reads the menu choice; cancelling at a menu prompt exits the program.
pub(crate) fn menu_choice(prompter: &mut Prompter, max: u32) -> Result<Option<u32>, ConsoleError> {
    match prompter.read_choice(max) {
        Ok(choice) => Ok(Some(choice)),
        Err(ConsoleError::Cancelled) => Ok(None),
        Err(err) => Err(err),
    }
}
