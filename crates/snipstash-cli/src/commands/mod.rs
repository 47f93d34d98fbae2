// Command handlers for the snip CLI

pub mod browse;
pub mod info;
pub mod manage;
pub mod transfer;

pub use browse::{BrowseAction, BrowseCommand};
pub use info::{InfoAction, InfoCommand};
pub use manage::{ContentSource, ManageAction, ManageCommand, TemplateChanges, TemplateInput};
pub use transfer::{TransferAction, TransferCommand};

use crate::error::CliResult;
use snipstash_catalog::TemplateCatalog;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command against the open catalog
    async fn execute(&self, catalog: &mut TemplateCatalog) -> CliResult<()>;
}
