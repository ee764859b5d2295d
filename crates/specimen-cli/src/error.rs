//! CLI errors, their exit codes and how they are shown on stderr.

use std::error::Error as _;
use std::fmt::Write as _;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use specimen_core::error::{ErrorCategory as CoreCategory, SpecimenError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The requested root type is not in the loaded manifests.
    #[error("Type not found: {name}")]
    TypeNotFound {
        name: String,
        /// Loaded names that differ from `name` only by case or by a prefix.
        similar: Vec<String>,
    },

    /// Neither the type nor any supertype declares the field.
    #[error("Type '{type_name}' has no field '{field}'")]
    FieldNotFound {
        type_name: String,
        field: String,
        available: Vec<String>,
    },

    /// Unreadable config file, bad value, or unknown key.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Raised by the core or an adapter: manifests, registry, rendering.
    #[error("{0}")]
    Core(#[from] SpecimenError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// How an error is classified for the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec!["Run `specimen render --help` for usage".into()],

            Self::TypeNotFound { name, similar } => {
                let mut out = vec![format!("No manifest declares a type named '{name}'")];
                if !similar.is_empty() {
                    out.push("Did you mean:".into());
                    out.extend(similar.iter().map(|s| format!("  • {s}")));
                }
                out.push("List loaded types: specimen types --manifest <PATH>".into());
                out
            }

            Self::FieldNotFound {
                type_name,
                available,
                ..
            } => {
                let mut out = vec![format!("Fields of '{type_name}', inherited ones included:")];
                if available.is_empty() {
                    out.push("  (none)".into());
                }
                out.extend(available.iter().map(|f| format!("  • {f}")));
                out
            }

            Self::ConfigError { .. } => vec![
                "Show the effective settings: specimen config list".into(),
                "Show the default file location: specimen config path".into(),
            ],

            Self::Core(err) => err.suggestions(),

            Self::IoError(_) => vec!["Check that stdout is writable".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::TypeNotFound { .. } | Self::FieldNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(err) => match err.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError(_) => ErrorCategory::Internal,
        }
    }

    /// 2 user error, 3 not found, 4 configuration, 1 anything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// The stderr report: message, causes (verbose only), then suggestions.
    pub fn report(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| {
            if color {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };

        let mut out = String::new();
        let _ = writeln!(out, "\n{} {self}", paint("error:", Style::new().red().bold()));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("caused by: {err}");
                let _ = writeln!(out, "  {}", paint(&line, Style::new().dimmed()));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "\n{}", paint("Suggestions:", Style::new().yellow().bold()));
            for line in suggestions {
                let _ = writeln!(out, "  {line}");
            }
        }

        if !verbose {
            let _ = writeln!(
                out,
                "\n{}",
                paint("Re-run with --verbose for more detail.", Style::new().dimmed())
            );
        }
        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(exit_code = self.exit_code(), "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code = self.exit_code(), "{self}");
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "error source");
        }
    }
}
