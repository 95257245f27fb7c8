//! Init command - Write a starter configuration file

use std::path::PathBuf;

use colored::Colorize;

use super::InitArgs;
use crate::config::loader::CONFIG_FILENAME;
use crate::error::{ConfigError, ZonelintError};
use crate::exit_codes;

const STARTER_CONFIG: &str = r#"# zonelint configuration
#
# extensions = ["ts", "tsx", "js", "jsx"]
# ignore = ["dist/**", "coverage/**"]

# Disable or re-level a built-in rule by name:
# [rules."No console.log"]
# enabled = false
#
# [rules."No any"]
# severity = "error"

# Add a custom regex rule:
# [custom."No moment.js"]
# pattern = "from 'moment'"
# severity = "warning"
# category = "imports"
# message = "Use date-fns instead of moment"
"#;

pub async fn execute(args: InitArgs, root: PathBuf) -> Result<i32, ZonelintError> {
    let path = root.join(CONFIG_FILENAME);

    if path.exists() && !args.force {
        return Err(ConfigError::AlreadyExists {
            path: path.display().to_string(),
        }
        .into());
    }

    std::fs::write(&path, STARTER_CONFIG).map_err(|e| {
        ZonelintError::Config(ConfigError::FileWrite {
            path: path.display().to_string(),
            source: e,
        })
    })?;

    println!(
        "{} Wrote {}",
        "Success:".green().bold(),
        path.display().to_string().cyan()
    );

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_writes_parseable_config() {
        let dir = TempDir::new().unwrap();

        let code = execute(InitArgs { force: false }, dir.path().to_path_buf())
            .await
            .unwrap();

        assert_eq!(code, exit_codes::SUCCESS);
        let config = Config::load_or_default(dir.path()).unwrap();
        assert!(config.rules.is_empty());
    }

    #[tokio::test]
    async fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let result = execute(InitArgs { force: false }, dir.path().to_path_buf()).await;
        assert!(result.is_err());

        let result = execute(InitArgs { force: true }, dir.path().to_path_buf()).await;
        assert!(result.is_ok());
    }
}
