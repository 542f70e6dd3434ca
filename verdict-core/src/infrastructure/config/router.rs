// verdict-core/src/infrastructure/config/router.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, instrument};

use crate::domain::configuration::RouterConfig;
use crate::domain::violation::SelectionPolicy;
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["verdict.yaml", "verdict.yml"];
pub const SELECTION_ENV: &str = "VERDICT_SELECTION";

#[instrument(skip(project_dir))]
pub fn load_router_config(project_dir: &Path) -> Result<RouterConfig, InfrastructureError> {
    let config_path = find_config(project_dir)?;
    info!(path = ?config_path, "Loading router configuration");

    let content = fs::read_to_string(&config_path)?;
    let mut config: RouterConfig = if content.trim().is_empty() {
        RouterConfig::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    apply_env_overrides(&mut config, std::env::var(SELECTION_ENV).ok())?;
    Ok(config)
}

/// Same as `load_router_config`, but a missing file means defaults
/// (environment overrides still apply).
pub fn load_router_config_or_default(
    project_dir: &Path,
) -> Result<RouterConfig, InfrastructureError> {
    match load_router_config(project_dir) {
        Err(InfrastructureError::ConfigNotFound(reason)) => {
            info!(%reason, "No router configuration, using defaults");
            let mut config = RouterConfig::default();
            apply_env_overrides(&mut config, std::env::var(SELECTION_ENV).ok())?;
            Ok(config)
        }
        other => other,
    }
}

fn find_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    for filename in CONFIG_CANDIDATES {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, CONFIG_CANDIDATES
    )))
}

// Permet de faire: VERDICT_SELECTION=field_path_order verdict check ...
fn apply_env_overrides(
    config: &mut RouterConfig,
    selection: Option<String>,
) -> Result<(), InfrastructureError> {
    if let Some(val) = selection {
        let policy = SelectionPolicy::from_str(&val).map_err(InfrastructureError::ConfigError)?;
        info!(old = %config.selection, new = %policy, "Overriding selection policy via ENV");
        config.selection = policy;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_config_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = find_config(dir.path());
        assert!(matches!(result, Err(InfrastructureError::ConfigNotFound(_))));
    }

    #[test]
    fn test_yml_extension_is_discovered() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("verdict.yml"), "selection: field_path_order\n")?;
        assert_eq!(find_config(dir.path())?, dir.path().join("verdict.yml"));
        Ok(())
    }

    #[test]
    fn test_env_override_replaces_file_value() {
        let mut config = RouterConfig::default();
        apply_env_overrides(&mut config, Some("field_path_order".into())).unwrap();
        assert_eq!(config.selection, SelectionPolicy::FieldPathOrder);

        apply_env_overrides(&mut config, None).unwrap();
        assert_eq!(config.selection, SelectionPolicy::FieldPathOrder);
    }

    #[test]
    fn test_invalid_env_value_is_a_config_error() {
        let mut config = RouterConfig::default();
        let result = apply_env_overrides(&mut config, Some("shuffle".into()));
        assert!(matches!(result, Err(InfrastructureError::ConfigError(_))));
        assert_eq!(config.selection, SelectionPolicy::FirstEncountered);
    }

    #[test]
    fn test_malformed_yaml_is_reported() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("verdict.yaml"), "selection: [unclosed\n")?;
        let result = load_router_config(dir.path());
        assert!(matches!(result, Err(InfrastructureError::YamlError(_))));
        Ok(())
    }
}
