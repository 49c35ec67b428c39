use std::str::FromStr;

use crate::parse_or;

/// How new hierarchy node ids are issued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    #[default]
    Random,
    /// Counter-backed ids, reproducible across runs.
    Sequential,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "v4" => Ok(Self::Random),
            "sequential" | "seq" => Ok(Self::Sequential),
            other => Err(format!("unknown id strategy: {other}")),
        }
    }
}

/// Store configuration.
///
/// # Environment Variables
///
/// - `CLASS_PATH_SEPARATOR`: separator for derived class breadcrumbs (default: `" / "`)
/// - `ID_STRATEGY`: `random` or `sequential` (default: `random`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub path_separator: String,
    pub id_strategy: IdStrategy,
}

pub const DEFAULT_PATH_SEPARATOR: &str = " / ";

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path_separator: DEFAULT_PATH_SEPARATOR.to_string(),
            id_strategy: IdStrategy::Random,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            // Whitespace is significant here, so an empty value is the only
            // thing treated as unset.
            path_separator: lookup("CLASS_PATH_SEPARATOR")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PATH_SEPARATOR.to_string()),
            id_strategy: parse_or(&lookup, "ID_STRATEGY", IdStrategy::Random),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StoreConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.path_separator, " / ");
    }

    #[test]
    fn test_reads_values() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("CLASS_PATH_SEPARATOR", " > "),
            ("ID_STRATEGY", "Sequential"),
        ]));
        assert_eq!(config.path_separator, " > ");
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn test_invalid_strategy_falls_back() {
        let config = StoreConfig::from_lookup(lookup_from(&[("ID_STRATEGY", "snowflake")]));
        assert_eq!(config.id_strategy, IdStrategy::Random);
    }
}
