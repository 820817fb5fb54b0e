use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Scene dressing parameters.
pub struct SceneOptions {
    /// Number of random columns.
    pub columns: usize,
    /// Fixed RNG seed for a reproducible layout (`None` = random).
    pub seed: Option<u64>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            columns: crate::scene::MAX_COLUMNS,
            seed: None,
        }
    }
}
