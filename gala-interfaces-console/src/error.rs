use thiserror::Error;

use gala_application::AppError;

/// Errors a menu action can surface. `Cancelled` means the operator hit
/// Ctrl-C or Ctrl-D inside a form; the menu loop swallows it and shows
/// the menu again. Application errors render as one line. Readline
/// failures are the only thing that ends the program.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("cancelled")]
    Cancelled,

    #[error("{0}")]
    App(#[from] AppError),

    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// One-line operator-facing rendering of an application error.
pub fn render_error(err: &AppError) -> String {
    match err {
        AppError::Validation(msg) => format!("Invalid input: {}", msg),
        AppError::NotFound(msg) => format!("Not found: {}", msg),
        AppError::Capacity(msg) => format!("Refused: {}", msg),
        AppError::Auth(msg) => format!("Access denied: {}", msg),
        AppError::Internal(err) => format!("Internal error: {}", err),
    }
}
