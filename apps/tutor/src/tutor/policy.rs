//! Per-action recovery policy.
//!
//! Grammar failures are replaced by a static exercise. Vocabulary and
//! conversation failures reach the caller as a 500.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Conversation,
    Vocabulary,
    Grammar,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Conversation => "conversation",
            Action::Vocabulary => "vocabulary",
            Action::Grammar => "grammar",
        }
    }

    /// The only failure text a caller ever sees for this action.
    pub fn failure_message(self) -> &'static str {
        match self {
            Action::Conversation => "Failed to generate AI response",
            Action::Vocabulary => "Failed to generate word exercises",
            Action::Grammar => "Failed to generate grammar exercise",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownAction;

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conversation" => Ok(Action::Conversation),
            "vocabulary" => Ok(Action::Vocabulary),
            "grammar" => Ok(Action::Grammar),
            _ => Err(UnknownAction),
        }
    }
}

/// What the service does when any stage of an action's pipeline fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStrategy {
    /// Propagate the failure to the caller.
    Surface,
    /// Replace the failed artifact with the static fallback.
    SubstituteFallback,
}

pub const RECOVERY_POLICY: [(Action, RecoveryStrategy); 3] = [
    (Action::Conversation, RecoveryStrategy::Surface),
    (Action::Vocabulary, RecoveryStrategy::Surface),
    (Action::Grammar, RecoveryStrategy::SubstituteFallback),
];

pub fn recovery_strategy(action: Action) -> RecoveryStrategy {
    RECOVERY_POLICY
        .iter()
        .find(|(a, _)| *a == action)
        .map(|(_, strategy)| *strategy)
        .unwrap_or(RecoveryStrategy::Surface)
}
