// src/modules/auth/user_interface.rs
use log::{error, info};
use std::io::{self, BufRead, Write};

use super::store::User;
use crate::modules::database::Gateway;
use crate::modules::tasks::user_interface::{
    handle_add_command, handle_delete_command, handle_list_command,
};
use crate::modules::utils::io::Console;

/// Where the menu loop currently is
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticated(User),
    Exited,
}

/// Function to show the options available before logging in
pub fn show_initial_options<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.say("")?;
    console.say("1. Register   (or type 'register')")?;
    console.say("2. Login      (or type 'login')")?;
    console.say("3. Exit       (or type 'exit')")
}

/// Function to show the options available to a logged in user
pub fn show_session_options<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    user: &User,
) -> io::Result<()> {
    console.say("")?;
    console.say(&format!("Welcome, {}!", user.username))?;
    console.say("4. Add task      (or type 'add')")?;
    console.say("5. Delete task   (or type 'delete')")?;
    console.say("6. List tasks    (or type 'list')")?;
    console.say("7. Log out       (or type 'logout')")
}

/// Run the menu loop until the user exits or the console input ends.
///
/// Store failures are reported and the loop carries on; only console I/O
/// errors end the session early.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    gateway: &Gateway,
) -> io::Result<()> {
    console.say("Welcome to Daily Planner!")?;
    let mut state = SessionState::Anonymous;

    loop {
        let next = match state {
            SessionState::Anonymous => handle_anonymous_choice(console, gateway),
            SessionState::Authenticated(user) => handle_session_choice(console, gateway, user),
            SessionState::Exited => {
                info!("Session exited");
                return Ok(());
            }
        };

        state = match next {
            Ok(next) => next,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("Console input closed, ending session");
                return Ok(());
            }
            Err(e) => return Err(e),
        };
    }
}

/// Handle one command from the logged out menu
pub fn handle_anonymous_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    gateway: &Gateway,
) -> io::Result<SessionState> {
    show_initial_options(console)?;
    let choice = console.read_line()?;

    match choice.trim().to_lowercase().as_str() {
        "1" | "register" => {
            handle_registration(console, gateway)?;
            Ok(SessionState::Anonymous)
        }
        "2" | "login" => match handle_login(console, gateway)? {
            Some(user) => Ok(SessionState::Authenticated(user)),
            None => Ok(SessionState::Anonymous),
        },
        "3" | "exit" | "quit" => {
            console.say("Goodbye!")?;
            Ok(SessionState::Exited)
        }
        _ => {
            console.say("Invalid choice. Please pick an option from the list.")?;
            Ok(SessionState::Anonymous)
        }
    }
}

/// Handle one command from the logged in menu
pub fn handle_session_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    gateway: &Gateway,
    user: User,
) -> io::Result<SessionState> {
    show_session_options(console, &user)?;
    let choice = console.read_line()?;

    match choice.trim().to_lowercase().as_str() {
        "4" | "add" => handle_add_command(console, gateway, &user)?,
        "5" | "delete" => handle_delete_command(console, gateway, &user)?,
        "6" | "list" => handle_list_command(console, gateway, &user)?,
        "7" | "logout" => {
            info!("User logged out");
            console.say("Successfully logged out.")?;
            return Ok(SessionState::Anonymous);
        }
        _ => console.say("Invalid choice. Please pick an option from the list.")?,
    }

    Ok(SessionState::Authenticated(user))
}

/// Prompt for credentials and register a new account
pub fn handle_registration<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    gateway: &Gateway,
) -> io::Result<bool> {
    let username = console.prompt("Enter username:")?;
    let password = console.prompt_secret("Enter password:")?;

    match gateway.register(&username, &password) {
        Ok(true) => {
            console.say("Registration successful.")?;
            Ok(true)
        }
        Ok(false) => {
            console.say("A user with that name already exists.")?;
            Ok(false)
        }
        Err(e) => {
            error!("Registration failed: {}", e);
            console.say(&format!("Registration failed: {}", e))?;
            Ok(false)
        }
    }
}

/// Prompt for credentials and try to log in
pub fn handle_login<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    gateway: &Gateway,
) -> io::Result<Option<User>> {
    let username = console.prompt("Enter username:")?;
    let password = console.prompt_secret("Enter password:")?;

    match gateway.authenticate(&username, &password) {
        Ok(Some(user)) => Ok(Some(user)),
        Ok(None) => {
            console.say("Invalid username or password.")?;
            Ok(None)
        }
        Err(e) => {
            error!("Login failed: {}", e);
            console.say(&format!("Login failed: {}", e))?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn setup_test_gateway() -> (Gateway, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("planner.db");
        let gateway = Gateway::open(path.to_str().unwrap()).unwrap();
        (gateway, dir)
    }

    fn run_script(gateway: &Gateway, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run_session(&mut console, gateway).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_register_twice_and_exit() {
        let (gateway, _dir) = setup_test_gateway();
        let output = run_script(
            &gateway,
            "register\nalice\npw1\n1\nalice\npw2\nexit\n",
        );

        assert!(output.starts_with("Welcome to Daily Planner!"));
        assert_eq!(output.matches("Registration successful.").count(), 1);
        assert_eq!(
            output.matches("A user with that name already exists.").count(),
            1
        );
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_login_failure_message_is_the_same() {
        let (gateway, _dir) = setup_test_gateway();
        gateway.register("alice", "pw1").unwrap();

        let output = run_script(&gateway, "2\nalice\nwrong\n2\nnobody\npw1\n3\n");
        assert_eq!(output.matches("Invalid username or password.").count(), 2);
        assert!(!output.contains("Welcome, "));
    }

    #[test]
    fn test_login_then_logout() {
        let (gateway, _dir) = setup_test_gateway();
        gateway.register("alice", "pw1").unwrap();

        let output = run_script(&gateway, "login\nalice\npw1\nlogout\nexit\n");
        assert!(output.contains("Welcome, alice!"));
        assert!(output.contains("Successfully logged out."));
        // Back at the anonymous menu after logout
        let after_logout = output.split("Successfully logged out.").nth(1).unwrap();
        assert!(after_logout.contains("1. Register"));
        assert!(after_logout.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_invalid_choices_reprompt() {
        let (gateway, _dir) = setup_test_gateway();
        gateway.register("alice", "pw1").unwrap();

        let output = run_script(&gateway, "9\n2\nalice\npw1\n1\n7\n3\n");
        // '9' is invalid anonymously, '1' is invalid once logged in
        assert_eq!(
            output
                .matches("Invalid choice. Please pick an option from the list.")
                .count(),
            2
        );
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (gateway, _dir) = setup_test_gateway();
        let output = run_script(&gateway, "register\nalice\n");
        assert!(output.contains("Enter password:"));
        assert!(!output.contains("Registration successful."));
    }

    #[test]
    fn test_store_failure_keeps_session_alive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("planner.db");
        let gateway = Gateway::new(path.to_str().unwrap());

        let output = run_script(&gateway, "1\nalice\npw1\n2\nalice\npw1\n3\n");
        assert!(output.contains("Registration failed: Database connection failed"));
        assert!(output.contains("Login failed: Database connection failed"));
        assert!(output.ends_with("Goodbye!\n"));
    }
}
