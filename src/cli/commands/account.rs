use crate::cli::commands::required;
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::core::services::IdentityService;

const REGISTER_USAGE: &str = "register <username> [password]";
const LOGIN_USAGE: &str = "login <username> [password]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "register",
            "Create a local user and log in",
            REGISTER_USAGE,
            cmd_register,
        ),
        CommandEntry::new("login", "Log in as an existing user", LOGIN_USAGE, cmd_login),
        CommandEntry::new("logout", "Close the current session", "logout", cmd_logout),
    ]
}

fn cmd_register(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let username = required(args, 0, REGISTER_USAGE)?;
    let password = password_arg(context, args, REGISTER_USAGE, true)?;
    let session = IdentityService::register(context.store.as_ref(), username, &password)?;
    context.sign_in(session)?;
    io::print_success(format!("Registered and logged in as `{}`.", username.trim()));
    Ok(())
}

fn cmd_login(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let username = required(args, 0, LOGIN_USAGE)?;
    let password = password_arg(context, args, LOGIN_USAGE, false)?;
    let session = IdentityService::login(context.store.as_ref(), username, &password)?;
    context.sign_in(session)?;
    io::print_success(format!("Welcome back, {}.", username.trim()));
    Ok(())
}

fn cmd_logout(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.sign_out() {
        Some(user) => io::print_info(format!("Logged out `{}`.", user)),
        None => io::print_warning("No user is logged in."),
    }
    Ok(())
}

/// Takes the password from the second argument, or prompts for it when the
/// shell is interactive.
fn password_arg(
    context: &ShellContext,
    args: &[&str],
    usage: &str,
    confirm: bool,
) -> Result<String, CommandError> {
    if let Some(password) = args.get(1) {
        return Ok((*password).to_string());
    }
    match context.mode() {
        CliMode::Interactive => io::prompt_password(&context.theme, "Password", confirm),
        CliMode::Script => Err(CommandError::InvalidArguments(format!("usage: {}", usage))),
    }
}
