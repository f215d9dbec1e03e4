use std::io;

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::cli::{commands, io as cli_io, output, registry::CommandRegistry};
use crate::config::{Config, ConfigError, ConfigManager};
use crate::core::services::ServiceError;
use crate::core::validation::ValidationErrors;
use crate::core::{Clock, Dashboard, SystemClock};
use crate::currency::{CurrencyCode, LocaleConfig};
use crate::errors::FinanceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Failures that abort the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Core(#[from] FinanceError),
}

/// Failures of a single command; reported and the loop continues.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => CommandError::Validation(errors),
        }
    }
}

pub type CommandResult = Result<LoopControl, CommandError>;

pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) dashboard: Dashboard,
    pub(crate) config: Config,
    pub(crate) locale: LocaleConfig,
    pub(crate) currency: CurrencyCode,
    pub(crate) last_command: Option<String>,
    pub(crate) running: bool,
}

impl ShellContext {
    /// Loads the stored config (or defaults) and builds a fresh dashboard.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::from_env()?.load()?;
        config.validate()?;
        Ok(Self::with_config(mode, config, Box::new(SystemClock)))
    }

    pub fn with_config(mode: CliMode, config: Config, clock: Box<dyn Clock>) -> Self {
        output::set_preferences(output::OutputPreferences {
            color_enabled: config.ui_color_enabled && mode == CliMode::Interactive,
        });

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let dashboard = Dashboard::from_config_with_clock(&config, clock);
        tracing::debug!(?mode, filter = %dashboard.filter(), "shell context ready");

        Self {
            mode,
            registry,
            locale: config.locale_config(),
            currency: config.currency_code(),
            dashboard,
            config,
            last_command: None,
            running: true,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn prompt(&self) -> String {
        let filter = self.dashboard.filter();
        format!("finance [{} {}]> ", filter.year, filter.month)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match self.registry.handler(command) {
            Some(handler) => match handler(self, args) {
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                other => other,
            },
            None => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    /// Parses and runs one line, the same path the shell loop takes.
    pub fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        crate::cli::shell::handle_line(self, line)
    }

    fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        let lowered = input.to_ascii_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &lowered), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Did you mean `{name}`?"));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action("Exit finance shell?", true)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Validation(errors) => {
                for message in &errors.messages {
                    output::error(message);
                }
                Ok(())
            }
            CommandError::Cli(err) => Err(err),
        }
    }

    pub(crate) fn print_warning(&self, message: &str) {
        output::warning(message);
    }
}
