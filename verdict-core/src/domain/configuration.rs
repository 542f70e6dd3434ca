// verdict-core/src/domain/configuration.rs

use serde::{Deserialize, Serialize};

use super::violation::SelectionPolicy;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RouterConfig {
    /// Which violation gets reported when the engine returns several.
    #[serde(default)]
    pub selection: SelectionPolicy,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: RouterConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, RouterConfig::default());
        assert_eq!(config.selection, SelectionPolicy::FirstEncountered);
    }

    #[test]
    fn test_selection_from_yaml() {
        let config: RouterConfig = serde_yaml::from_str("selection: field_path_order").unwrap();
        assert_eq!(config.selection, SelectionPolicy::FieldPathOrder);
    }

    #[test]
    fn test_unknown_selection_is_rejected() {
        let result: Result<RouterConfig, _> = serde_yaml::from_str("selection: shuffle");
        assert!(result.is_err());
    }
}
