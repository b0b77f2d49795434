use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

///
/// FloatOrder
///
/// Natural     → IEEE-754 comparison; NaN is unordered, -0.0 == 0.0.
/// Total       → `total_cmp`; every float pair is ordered.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatOrder {
    #[default]
    Natural,
    Total,
}

///
/// CompareConfig
///
/// Engine settings. The default matches the unconfigured `compare` entry
/// point: natural float order and unbounded recursion.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct CompareConfig {
    pub float_order: FloatOrder,

    /// Deepest nesting level the engine descends to. `None` is unbounded;
    /// inputs are then assumed to be acyclic.
    pub max_depth: Option<usize>,
}

impl CompareConfig {
    pub const DEFAULT: Self = Self {
        float_order: FloatOrder::Natural,
        max_depth: None,
    };

    #[must_use]
    pub const fn with_float_order(mut self, float_order: FloatOrder) -> Self {
        self.float_order = float_order;
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub const fn validate(&self) -> Result<(), ConfigError> {
        if matches!(self.max_depth, Some(0)) {
            return Err(ConfigError::ZeroDepth);
        }

        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_natural_and_unbounded() {
        let config = CompareConfig::default();

        assert_eq!(config.float_order, FloatOrder::Natural);
        assert_eq!(config.max_depth, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_depth_is_rejected() {
        let config = CompareConfig::DEFAULT.with_max_depth(0);

        assert_eq!(config.validate(), Err(ConfigError::ZeroDepth));
    }

    #[test]
    fn config_deserializes_with_missing_fields() {
        let config: CompareConfig =
            serde_json::from_str(r#"{ "float_order": "total" }"#).expect("config should parse");

        assert_eq!(config.float_order, FloatOrder::Total);
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn config_serializes_round_trip() {
        let config = CompareConfig::DEFAULT
            .with_float_order(FloatOrder::Total)
            .with_max_depth(32);

        let json = serde_json::to_string(&config).expect("config should serialize");
        let decoded: CompareConfig = serde_json::from_str(&json).expect("config should parse");

        assert_eq!(decoded, config);
    }
}
