//! Navigator configuration.

/// How the distance field is flooded.
///
/// Both strategies produce identical distance fields and therefore identical
/// paths; they differ only in cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FloodStrategy {
    /// FIFO frontier, `O(W·H)` total work.
    #[default]
    Queue,
    /// Rescan the whole grid once per distance layer, `O((W·H)²)` worst case.
    /// Stops as soon as a layer discovers nothing.
    LayerScan,
}

/// Tunables for a [`GridNavigator`](crate::GridNavigator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigatorConfig {
    /// Flood-fill strategy.
    pub strategy: FloodStrategy,
    /// Consult the step predicate during flood fill and reconstruction.
    ///
    /// With `false` the predicate is stored but never called, so only node
    /// validity shapes the result.
    pub honor_step_predicate: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            strategy: FloodStrategy::Queue,
            honor_step_predicate: true,
        }
    }
}

impl NavigatorConfig {
    /// Use the given flood strategy.
    pub fn with_strategy(mut self, strategy: FloodStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable the step predicate.
    pub fn with_honor_step_predicate(mut self, honor: bool) -> Self {
        self.honor_step_predicate = honor;
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = NavigatorConfig::default().with_strategy(FloodStrategy::LayerScan);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"strategy":"layer_scan","honor_step_predicate":true}"#);
        let back: NavigatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let back: NavigatorConfig = serde_json::from_str(r#"{"honor_step_predicate":false}"#).unwrap();
        assert_eq!(back.strategy, FloodStrategy::Queue);
        assert!(!back.honor_step_predicate);
    }
}
