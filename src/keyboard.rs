//! Arrow-key navigation.
//!
//! Only one gallery is keyboard-reachable: the one inside the currently open
//! subcollection. Galleries of open collections are not.

use crate::config::KeyboardConfig;
use crate::gallery::Direction;

#[derive(Debug, Clone)]
pub struct KeyboardRouter {
    config: KeyboardConfig,
}

impl KeyboardRouter {
    pub fn new(config: &KeyboardConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Map a `KeyboardEvent.key` value to a direction.
    pub fn direction(&self, key: &str) -> Option<Direction> {
        if !self.config.enabled {
            return None;
        }
        if key == self.config.previous {
            Some(Direction::Previous)
        } else if key == self.config.next {
            Some(Direction::Next)
        } else {
            None
        }
    }
}
