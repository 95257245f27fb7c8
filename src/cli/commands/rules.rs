//! Rules command - List the effective rule set

use std::path::PathBuf;

use colored::Colorize;

use super::RulesArgs;
use crate::config::Config;
use crate::error::ZonelintError;
use crate::exit_codes;
use crate::rules::Severity;

pub async fn execute(
    _args: RulesArgs,
    root: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<i32, ZonelintError> {
    let config = match &config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(&root)?,
    };
    let ruleset = config.build_ruleset();

    println!(
        "\n{} effective rules\n",
        ruleset.rules.len().to_string().bold()
    );

    for rule in &ruleset.rules {
        let severity = match rule.severity {
            Severity::Error => "error  ".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info   ".blue().bold(),
        };

        println!(
            "  {} [{}] {}\n    {}",
            severity,
            rule.category.name().cyan(),
            rule.name.bold(),
            rule.message.dimmed()
        );
    }

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_rules_command_succeeds() {
        let dir = TempDir::new().unwrap();
        let code = execute(RulesArgs {}, dir.path().to_path_buf(), None)
            .await
            .unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }
}
