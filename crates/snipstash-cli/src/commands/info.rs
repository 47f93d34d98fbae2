// Statistics and storage location

use super::Command;
use crate::error::CliResult;
use crate::output::OutputStyle;
use snipstash_catalog::TemplateCatalog;
use snipstash_templates::TemplateStats;

/// Action for the info handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoAction {
    Stats,
    Path,
}

/// Handler for store information
pub struct InfoCommand {
    action: InfoAction,
    style: OutputStyle,
}

impl InfoCommand {
    pub fn new(action: InfoAction) -> Self {
        Self {
            action,
            style: OutputStyle::default(),
        }
    }
}

#[async_trait::async_trait]
impl Command for InfoCommand {
    async fn execute(&self, catalog: &mut TemplateCatalog) -> CliResult<()> {
        match self.action {
            InfoAction::Stats => {
                let stats = catalog.store().stats();
                for line in render_stats(&self.style, &stats) {
                    println!("{}", line);
                }
            }
            InfoAction::Path => {
                println!("{}", catalog.store().templates_path().display());
            }
        }
        Ok(())
    }
}

/// Lines describing `stats`
pub fn render_stats(style: &OutputStyle, stats: &TemplateStats) -> Vec<String> {
    let mut lines = vec![style.key_value("Total", &stats.total.to_string())];

    if stats.total == 0 {
        lines.push(style.info("No user templates yet. Create one with 'snip create'."));
        return lines;
    }

    lines.push(style.section("By language"));
    for (language, count) in &stats.by_language {
        lines.push(style.key_value(language, &count.to_string()));
    }
    lines.push(style.section("By category"));
    for (category, count) in &stats.by_category {
        lines.push(style.key_value(category, &count.to_string()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_render_empty_stats() {
        let style = OutputStyle { use_colors: false };
        let lines = render_stats(&style, &TemplateStats::default());
        assert_eq!(lines[0], "  Total: 0");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_render_stats_groups() {
        let style = OutputStyle { use_colors: false };
        let stats = TemplateStats {
            total: 3,
            by_language: BTreeMap::from([
                ("python".to_string(), 2),
                ("unspecified".to_string(), 1),
            ]),
            by_category: BTreeMap::from([("Custom".to_string(), 3)]),
        };

        let lines = render_stats(&style, &stats);
        assert!(lines.contains(&"  python: 2".to_string()));
        assert!(lines.contains(&"  unspecified: 1".to_string()));
        assert!(lines.contains(&"  Custom: 3".to_string()));
    }
}
