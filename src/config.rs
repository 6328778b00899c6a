use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the next vertex to contract is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingStrategy {
    /// Recompute the importance of every remaining vertex before each
    /// contraction and take the global minimum.
    #[default]
    FullRescan,
    /// Keep vertices in a min-heap and only re-evaluate the popped vertex. A
    /// vertex whose importance got worse is pushed back instead of contracted.
    LazyUpdate,
}

/// How the number of shortcuts a contraction would need is estimated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutEstimate {
    /// `k * (k - 1)` for `k` uncontracted neighbors.
    #[default]
    Pessimistic,
    /// Count only neighbor pairs for which a bounded local search finds no
    /// witness path.
    WitnessSearch { settled_limit: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub ordering: OrderingStrategy,
    pub shortcut_estimate: ShortcutEstimate,
    /// Draw a progress bar while contracting.
    pub progress: bool,
}

impl BuildConfig {
    pub fn from_json_file(path: &Path) -> Result<BuildConfig> {
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<BuildConfig> {
        Ok(serde_json::from_str(json)?)
    }
}
