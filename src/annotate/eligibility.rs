//! Decides whether a ship document may receive a behavior

use serde_json::Value;

/// Outcome of inspecting a document before mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    /// `blocks` is absent or not an array
    MissingBlocks,
    /// `behavior` is already set
    BehaviorPresent,
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    /// Reason printed when a file is skipped
    pub fn describe(&self) -> &'static str {
        match self {
            Eligibility::Eligible => "Eligible for annotation",
            Eligibility::MissingBlocks => "No blocks array found",
            Eligibility::BehaviorPresent => "Behavior already exists",
        }
    }
}

/// Inspect a parsed document. Non-object documents have no `blocks`.
pub fn check_eligibility(document: &Value) -> Eligibility {
    if !document.get("blocks").is_some_and(Value::is_array) {
        return Eligibility::MissingBlocks;
    }
    // a `"behavior": null` entry still counts as present
    if document.get("behavior").is_some() {
        return Eligibility::BehaviorPresent;
    }
    Eligibility::Eligible
}

pub fn is_eligible(document: &Value) -> bool {
    check_eligibility(document).is_eligible()
}
