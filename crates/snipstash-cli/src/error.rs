// CLI error types

use snipstash_catalog::CatalogError;
use snipstash_templates::TemplateError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Could not {action}: {source}")]
    Template {
        action: String,
        #[source]
        source: TemplateError,
    },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("No template named '{0}'")]
    UnknownTemplate(String),

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Wrap a store error with the action that failed
    pub fn template(action: impl Into<String>, source: TemplateError) -> Self {
        CliError::Template {
            action: action.into(),
            source,
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::Template { action, source } => {
                let hint = match source {
                    TemplateError::DuplicateName(_) => {
                        "\n\nChoose another name or edit the existing template."
                    }
                    TemplateError::NotFound(_) => {
                        "\n\nRun 'snip list' to see template ids."
                    }
                    TemplateError::InvalidFormat(_) => {
                        "\n\nThe file must contain a 'templates' array."
                    }
                    TemplateError::Persist { .. } => {
                        "\n\nCheck that the storage directory is writable."
                    }
                    _ => "",
                };
                format!("Could not {}: {}{}", action, source, hint)
            }
            CliError::Catalog(e) => {
                format!("Built-in templates are unavailable: {}\n\nPlease report this issue.", e)
            }
            CliError::UnknownTemplate(name) => {
                format!(
                    "No template named '{}'.\n\nRun 'snip search {}' to find similar templates.",
                    name, name
                )
            }
            CliError::InvalidArgument { message } => {
                format!("Invalid argument: {}\n\nRun 'snip --help' for usage information.", message)
            }
            CliError::Io(e) => {
                format!("Input/output failed: {}", e)
            }
            CliError::Config(msg) => {
                format!("Configuration error: {}\n\nSet SNIPSTASH_HOME or pass --storage-dir.", msg)
            }
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

pub type CliResult<T> = Result<T, CliError>;
