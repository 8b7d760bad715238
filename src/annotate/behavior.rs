//! Behavior classification from a ship's blocks

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Substring that marks a block as an engine
const ENGINE_MARKER: &str = "engine";

/// Runtime behavior category injected into a ship document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BehaviorType {
    /// Ship with at least one engine
    Default,
    /// Immobile ship
    SpaceStation,
}

impl BehaviorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorType::Default => "default",
            BehaviorType::SpaceStation => "spaceStation",
        }
    }

    /// The `behavior` object stored in the document
    pub fn to_value(&self) -> Value {
        json!({ "type": self.as_str() })
    }
}

impl fmt::Display for BehaviorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when the block has a string `id` containing "engine" in any case
pub fn is_engine_block(block: &Value) -> bool {
    block
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| id.to_lowercase().contains(ENGINE_MARKER))
}

/// Classify a `blocks` sequence
pub fn classify_blocks(blocks: &[Value]) -> BehaviorType {
    if blocks.iter().any(is_engine_block) {
        BehaviorType::Default
    } else {
        BehaviorType::SpaceStation
    }
}
