// verdict/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "Validates account documents and reports the typed error of the violated constraint", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🔎 Validates an account registration document (YAML)
    Check {
        /// Document to validate
        file: PathBuf,

        /// Validation group (repeatable)
        #[arg(long = "group", short)]
        groups: Vec<String>,

        /// Directory holding verdict.yaml
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 📋 Lists constraint kinds and the errors bound to them
    Bindings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_check_defaults() {
        let args = Cli::parse_from(["verdict", "check", "account.yaml"]);
        match args.command {
            Commands::Check {
                file,
                groups,
                project_dir,
            } => {
                assert_eq!(file.to_string_lossy(), "account.yaml");
                assert!(groups.is_empty());
                assert_eq!(project_dir.to_string_lossy(), ".");
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_check_groups() {
        let args = Cli::parse_from([
            "verdict",
            "check",
            "account.yaml",
            "--group",
            "signup",
            "-g",
            "strict",
            "--project-dir",
            "/tmp",
        ]);
        match args.command {
            Commands::Check {
                groups,
                project_dir,
                ..
            } => {
                assert_eq!(groups, vec!["signup".to_string(), "strict".to_string()]);
                assert_eq!(project_dir.to_string_lossy(), "/tmp");
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_bindings() {
        let args = Cli::parse_from(["verdict", "bindings"]);
        assert!(matches!(args.command, Commands::Bindings));
    }
}
