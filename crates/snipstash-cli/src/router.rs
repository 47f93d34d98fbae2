// Command routing and dispatch

use crate::commands::*;
use crate::config::{HostConfig, PathResolver};
use crate::error::CliResult;
use crate::output;
use clap::{Parser, Subcommand};
use snipstash_catalog::TemplateCatalog;
use std::path::PathBuf;
use tracing::debug;

/// SnipStash - reusable code templates from the terminal
#[derive(Parser, Debug)]
#[command(name = "snip")]
#[command(bin_name = "snip")]
#[command(about = "Browse, create and share reusable code templates")]
#[command(
    long_about = "SnipStash keeps a catalog of built-in snippets alongside your own templates.\n\nQuick Start:\n  • snip list --language python   Templates for a language\n  • snip search debug             Search names, descriptions and categories\n  • snip show console.log         Print a template\n  • snip create --name hello --content 'print(1)'\n  • snip export backup.json       Share your templates"
)]
#[command(version)]
#[command(author = "SnipStash Contributors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory holding user-templates.json (overrides SNIPSTASH_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub storage_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List templates
    #[command(about = "List built-in and user templates")]
    List {
        /// Only templates for this language (language-agnostic ones included)
        #[arg(short, long)]
        language: Option<String>,

        /// Only templates in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Search templates
    #[command(about = "Search names, descriptions, categories and prefixes")]
    Search {
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Show one template
    #[command(about = "Show a template and its content")]
    Show {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// List categories in use
    Categories,

    /// List languages in use
    Languages,

    /// Create a user template
    #[command(about = "Create a user template")]
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "Custom")]
        category: String,

        #[arg(long)]
        description: Option<String>,

        /// Language tag; "other" means no language
        #[arg(long)]
        language: Option<String>,

        #[arg(long)]
        prefix: Option<String>,

        /// Template body; read from stdin when neither this nor --from-file is given
        #[arg(long, conflicts_with = "from_file")]
        content: Option<String>,

        /// Read the template body from a file
        #[arg(long, value_name = "FILE")]
        from_file: Option<PathBuf>,
    },

    /// Edit a user template
    #[command(about = "Edit a user template; omitted fields are kept")]
    Edit {
        #[arg(value_name = "ID")]
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Language tag; "other" or "" clears it
        #[arg(long)]
        language: Option<String>,

        /// Prefix; "" clears it
        #[arg(long)]
        prefix: Option<String>,

        #[arg(long, conflicts_with = "from_file")]
        content: Option<String>,

        #[arg(long, value_name = "FILE")]
        from_file: Option<PathBuf>,
    },

    /// Delete a user template
    #[command(about = "Delete a user template")]
    Delete {
        #[arg(value_name = "ID")]
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Import templates from a collection file
    #[command(about = "Import templates; names already present are skipped")]
    Import {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Export user templates to a collection file
    #[command(about = "Export all user templates to a file")]
    Export {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Show statistics
    #[command(about = "Count user templates by language and category")]
    Stats,

    /// Show the templates file location
    #[command(about = "Print the path of the user templates file")]
    Path,
}

/// Command router for dispatching commands
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        crate::logging::init_logging(cli.verbose, cli.quiet);

        let mut catalog = Self::open_catalog(&cli).await?;
        Self::execute(&cli, &mut catalog).await
    }

    /// Resolve storage, read host settings and open the catalog.
    ///
    /// Load problems are reported as warnings; the session continues.
    pub async fn open_catalog(cli: &Cli) -> CliResult<TemplateCatalog> {
        let storage_dir = PathResolver::resolve_storage_dir(cli.storage_dir.as_deref())?;
        debug!("Using storage directory {:?}", storage_dir);

        let (host, warning) = HostConfig::load(&storage_dir);
        if let Some(warning) = warning {
            output::print_warning(&warning);
        }

        let catalog = TemplateCatalog::open(host.store_config(storage_dir)).await?;
        if let Some(reason) = catalog.store().load_outcome().warning() {
            output::print_warning(&format!(
                "User templates could not be loaded; starting empty ({})",
                reason
            ));
        }
        Ok(catalog)
    }

    /// Execute a command
    pub async fn execute(cli: &Cli, catalog: &mut TemplateCatalog) -> CliResult<()> {
        let command = cli.command.clone().unwrap_or(Commands::List {
            language: None,
            category: None,
        });

        match command {
            Commands::List { language, category } => {
                BrowseCommand::new(BrowseAction::List { language, category })
                    .execute(catalog)
                    .await
            }
            Commands::Search { query } => {
                BrowseCommand::new(BrowseAction::Search(query))
                    .execute(catalog)
                    .await
            }
            Commands::Show { name } => {
                BrowseCommand::new(BrowseAction::Show(name))
                    .execute(catalog)
                    .await
            }
            Commands::Categories => {
                BrowseCommand::new(BrowseAction::Categories)
                    .execute(catalog)
                    .await
            }
            Commands::Languages => {
                BrowseCommand::new(BrowseAction::Languages)
                    .execute(catalog)
                    .await
            }
            Commands::Create {
                name,
                category,
                description,
                language,
                prefix,
                content,
                from_file,
            } => {
                let input = TemplateInput {
                    name,
                    category,
                    description: description.unwrap_or_default(),
                    language,
                    prefix,
                    content: ContentSource::from_args(content, from_file),
                };
                ManageCommand::new(ManageAction::Create(input))
                    .execute(catalog)
                    .await
            }
            Commands::Edit {
                id,
                name,
                category,
                description,
                language,
                prefix,
                content,
                from_file,
            } => {
                let changes = TemplateChanges {
                    name,
                    category,
                    description,
                    language,
                    prefix,
                    content: match (content, from_file) {
                        (None, None) => None,
                        (content, from_file) => Some(ContentSource::from_args(content, from_file)),
                    },
                };
                ManageCommand::new(ManageAction::Edit { id, changes })
                    .execute(catalog)
                    .await
            }
            Commands::Delete { id, yes } => {
                ManageCommand::new(ManageAction::Delete { id, confirmed: yes })
                    .execute(catalog)
                    .await
            }
            Commands::Import { path } => {
                TransferCommand::new(TransferAction::Import(path))
                    .execute(catalog)
                    .await
            }
            Commands::Export { path } => {
                TransferCommand::new(TransferAction::Export(path))
                    .execute(catalog)
                    .await
            }
            Commands::Stats => InfoCommand::new(InfoAction::Stats).execute(catalog).await,
            Commands::Path => InfoCommand::new(InfoAction::Path).execute(catalog).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["snip"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["snip", "stats", "-q", "--storage-dir", "/tmp/s"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.storage_dir, Some(PathBuf::from("/tmp/s")));
        assert_eq!(cli.command, Some(Commands::Stats));
    }

    #[test]
    fn test_create_defaults_category() {
        let cli = Cli::try_parse_from(["snip", "create", "--name", "hi", "--content", "x"]).unwrap();
        match cli.command {
            Some(Commands::Create { category, .. }) => assert_eq!(category, "Custom"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_content_conflicts_with_file() {
        let result = Cli::try_parse_from([
            "snip",
            "create",
            "--name",
            "hi",
            "--content",
            "x",
            "--from-file",
            "body.txt",
        ]);
        assert!(result.is_err());
    }
}
