//! Command dispatch, error reporting, and shell context helpers.

use std::{io, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;

use crate::{
    config::ConfigManager,
    core::{
        errors::{CliError, FinanceError},
        services::ServiceError,
        FinanceWorkspace,
    },
    currency,
    ledger::Session,
    storage::JsonFileStore,
};

use crate::cli::commands;
use crate::cli::io as cli_io;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub use crate::cli::shell_context::{CliMode, ShellContext};

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Not logged in. Use `login` or `register` first.")]
    NotLoggedIn,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(err) => CommandError::Core(err),
            ServiceError::Invalid(message) => CommandError::InvalidArguments(message),
        }
    }
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let store = Arc::new(JsonFileStore::new_default()?);
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        if mode == CliMode::Script || !config.ui_color_enabled {
            colored::control::set_override(false);
        }
        tracing::debug!(base = %store.base_dir().display(), ?mode, "shell context ready");

        Ok(ShellContext {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            store,
            config_manager,
            config,
            workspace: None,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn prompt(&self) -> String {
        match self.username() {
            Some(user) => format!("cash_run({})> ", user),
            None => "cash_run> ".into(),
        }
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some((handler, requires_session)) = self
            .registry
            .get(command)
            .map(|entry| (entry.handler, entry.requires_session))
        else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        if requires_session && !self.is_signed_in() {
            return Err(CommandError::NotLoggedIn);
        }
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &input.to_lowercase()), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(cli_error)
    }

    /// Asks before a destructive action. Script mode always proceeds.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, prompt, false)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::NotLoggedIn => {
                cli_io::print_error("Not logged in.");
                cli_io::print_hint("Use `register <user>` or `login <user>` first.");
            }
            CommandError::Core(FinanceError::NotComputed) => {
                cli_io::print_error(FinanceError::NotComputed);
                cli_io::print_hint("Enter your budget with `set`, then run `compute`.");
            }
            other => {
                tracing::warn!(command = ?self.last_command, error = %other, "command failed");
                cli_io::print_error(other);
            }
        }
        Ok(())
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn workspace(&self) -> Result<&FinanceWorkspace, CommandError> {
        self.workspace.as_ref().ok_or(CommandError::NotLoggedIn)
    }

    pub(crate) fn workspace_mut(&mut self) -> Result<&mut FinanceWorkspace, CommandError> {
        self.workspace.as_mut().ok_or(CommandError::NotLoggedIn)
    }

    /// Opens the user's workspace and remembers them as the last user.
    pub(crate) fn sign_in(&mut self, session: Session) -> CommandResult {
        let username = session.username.clone();
        let workspace = FinanceWorkspace::open(self.store.clone(), session)?;
        self.workspace = Some(workspace);
        self.config.last_user = Some(username);
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn sign_out(&mut self) -> Option<String> {
        self.workspace
            .take()
            .map(|workspace| workspace.session().username.clone())
    }

    pub(crate) fn money(&self, value: f64) -> String {
        currency::format_currency(value, &self.config.currency, &self.config.locale)
    }
}

fn cli_error(err: CommandError) -> CliError {
    match err {
        CommandError::Io(err) => CliError::Io(err),
        CommandError::Core(err) => CliError::Core(err),
        CommandError::Dialoguer(err) => CliError::Prompt(err),
        other => CliError::Core(FinanceError::InvalidInput(other.to_string())),
    }
}

/// Runs `lines` through a fresh script-mode context.
#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> Result<ShellContext, CliError> {
    let mut context = ShellContext::new(CliMode::Script)?;
    for line in lines {
        match crate::cli::shell::handle_line(&mut context, line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(context)
}
