//! Parameter validity states

use crate::schema::Category;
use serde::Serialize;
use std::fmt;

/// Validity of a single parameter.
///
/// Ordered by precedence: `Error` outranks `Warning` outranks `Valid`, so
/// combining states is `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    Valid,
    /// Assigned although none of its dependencies is met
    Warning,
    /// Required, unassigned and without default
    Error,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Valid => "VALID",
            State::Warning => "WARNING",
            State::Error => "ERROR",
        }
    }

    /// Worst of a set of states; `Valid` when empty.
    pub fn combine(states: impl IntoIterator<Item = State>) -> State {
        states.into_iter().max().unwrap_or(State::Valid)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State of one parameter together with the explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterState {
    pub state: State,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ParameterState {
    pub fn valid() -> Self {
        Self {
            state: State::Valid,
            message: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            state: State::Warning,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            state: State::Error,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.state == State::Valid
    }

    /// Keep the substate with the highest precedence. On a tie the first
    /// message wins.
    pub fn merge(self, other: ParameterState) -> ParameterState {
        if other.state > self.state { other } else { self }
    }
}

/// A non-valid parameter surfaced by a registry-wide check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateReport {
    pub name: String,
    pub category: Category,
    pub state: State,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert!(State::Error > State::Warning);
        assert!(State::Warning > State::Valid);
    }

    #[test]
    fn test_combine() {
        assert_eq!(State::combine([]), State::Valid);
        assert_eq!(State::combine([State::Valid, State::Warning]), State::Warning);
        assert_eq!(
            State::combine([State::Warning, State::Error, State::Valid]),
            State::Error
        );
    }

    #[test]
    fn test_merge_keeps_higher_state() {
        let merged = ParameterState::warning("w").merge(ParameterState::error("e"));
        assert_eq!(merged, ParameterState::error("e"));

        let merged = ParameterState::warning("first").merge(ParameterState::warning("second"));
        assert_eq!(merged.message.as_deref(), Some("first"));

        let merged = ParameterState::valid().merge(ParameterState::valid());
        assert!(merged.is_valid());
    }
}
