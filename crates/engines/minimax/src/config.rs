//! Depth policy for the minimax search.

use serde::{Deserialize, Serialize};

/// Depth limits, counted in search levels: the root is level 1, so a
/// `max_depth` of 7 looks six plies ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth limit while the game is far from finished
    pub max_depth: u8,
    /// Deeper limit used once few cells remain empty
    pub endgame_depth: u8,
    /// Empty-cell threshold for the deeper limit and for count scoring
    pub endgame_empties: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 7,
            endgame_depth: 10,
            endgame_empties: 10,
        }
    }
}

impl SearchConfig {
    /// Depth limit for a search whose root board has `root_empties` free cells.
    ///
    /// Never below 2, so the root always gets to compare its moves.
    pub fn depth_for(&self, root_empties: u32) -> u8 {
        let depth = if root_empties <= self.endgame_empties {
            self.endgame_depth
        } else {
            self.max_depth
        };
        depth.max(2)
    }

    /// Apply a named option. Returns false for unknown names or bad values.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        match name.to_ascii_lowercase().as_str() {
            "maxdepth" | "max_depth" => match value.parse() {
                Ok(v) => self.max_depth = v,
                Err(_) => return false,
            },
            "endgamedepth" | "endgame_depth" => match value.parse() {
                Ok(v) => self.endgame_depth = v,
                Err(_) => return false,
            },
            "endgameempties" | "endgame_empties" => match value.parse() {
                Ok(v) => self.endgame_empties = v,
                Err(_) => return false,
            },
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_policy() {
        let config = SearchConfig::default();
        assert_eq!(config.depth_for(60), 7);
        assert_eq!(config.depth_for(11), 7);
        assert_eq!(config.depth_for(10), 10);
        assert_eq!(config.depth_for(0), 10);
    }

    #[test]
    fn test_depth_never_below_two() {
        let config = SearchConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert_eq!(config.depth_for(60), 2);
    }

    #[test]
    fn test_set_option() {
        let mut config = SearchConfig::default();
        assert!(config.set("MaxDepth", "5"));
        assert!(config.set("endgame_empties", "12"));
        assert!(!config.set("MaxDepth", "deep"));
        assert!(!config.set("Hash", "64"));
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.endgame_empties, 12);
    }

    #[test]
    fn test_partial_toml() {
        let config: SearchConfig = toml::from_str("max_depth = 4").unwrap();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.endgame_depth, 10);
    }
}
