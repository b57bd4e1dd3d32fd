// Login and account registration

use gala_application::commands::auth_commands;
use gala_application::AppState;

use crate::error::ConsoleError;
use crate::menus::{menu_choice, settle, Flow};
use crate::prompts::Prompter;

pub fn run(state: &AppState, prompter: &mut Prompter) -> Result<Flow, ConsoleError> {
    println!();
    println!("=== Gala Event Management ===");
    println!(" 1) Log in");
    println!(" 2) Register an account");
    println!(" 0) Exit");
    let choice = match menu_choice(prompter, 2)? {
        Some(choice) => choice,
        None => return Ok(Flow::Exit),
    };
    match choice {
        1 => settle(login(state, prompter))?,
        2 => settle(register(state, prompter))?,
        _ => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

fn login(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let username = prompter.read_nonempty("Username: ")?;
    let password = prompter.read_secret("Password: ")?;
    let session = auth_commands::login(state, &username, &password)?;
    println!(
        "Logged in as {} ({}).",
        session.username,
        session.role.as_str()
    );
    Ok(())
}

fn register(state: &AppState, prompter: &mut Prompter) -> Result<(), ConsoleError> {
    let username = prompter.read_nonempty("Username (4-100 characters): ")?;
    let password = prompter.read_secret("Password (6-100 characters): ")?;
    auth_commands::register_account(state, &username, &password)?;
    println!("Account created. You can log in now.");
    Ok(())
}
