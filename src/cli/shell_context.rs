//! Runtime state shared by every shell command.

use std::sync::Arc;

use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    core::FinanceWorkspace,
    storage::JsonFileStore,
};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub store: Arc<JsonFileStore>,
    pub config_manager: ConfigManager,
    pub config: Config,
    /// Present only while a user is logged in.
    pub workspace: Option<FinanceWorkspace>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn is_signed_in(&self) -> bool {
        self.workspace.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.workspace
            .as_ref()
            .map(|workspace| workspace.session().username.as_str())
    }
}
