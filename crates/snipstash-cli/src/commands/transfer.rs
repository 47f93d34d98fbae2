// Import and export of collection files

use super::Command;
use crate::error::{CliError, CliResult};
use crate::output;
use snipstash_catalog::TemplateCatalog;
use snipstash_templates::ImportSummary;
use std::path::PathBuf;

/// Action for the transfer handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferAction {
    Import(PathBuf),
    Export(PathBuf),
}

/// Handler for moving templates in and out of the store
pub struct TransferCommand {
    action: TransferAction,
}

impl TransferCommand {
    pub fn new(action: TransferAction) -> Self {
        Self { action }
    }
}

#[async_trait::async_trait]
impl Command for TransferCommand {
    async fn execute(&self, catalog: &mut TemplateCatalog) -> CliResult<()> {
        match &self.action {
            TransferAction::Import(path) => {
                let summary = catalog
                    .store_mut()
                    .import_from(path)
                    .await
                    .map_err(|e| CliError::template("import templates", e))?;
                output::print_success(&import_message(&summary));
                Ok(())
            }
            TransferAction::Export(path) => {
                if catalog.store().is_empty() {
                    output::print_info("There are no user templates; writing an empty collection.");
                }
                let summary = catalog
                    .store()
                    .export_to(path)
                    .await
                    .map_err(|e| CliError::template("export templates", e))?;
                output::print_success(&format!(
                    "Exported {} template(s) to {}",
                    summary.exported,
                    summary.path.display()
                ));
                Ok(())
            }
        }
    }
}

/// Confirmation line for an import, naming both counts
pub fn import_message(summary: &ImportSummary) -> String {
    format!(
        "Imported {} template(s), skipped {} (duplicate or invalid)",
        summary.imported, summary.skipped
    )
}
