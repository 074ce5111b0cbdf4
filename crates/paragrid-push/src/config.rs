//! Engine limits, validation, and error types.

use std::error::Error;
use std::fmt;

use paragrid_nav::NavOptions;

use crate::rules::RefStrategy;

// ── PushConfig ─────────────────────────────────────────────────────

/// Limits and navigation options for a [`PushEngine`](crate::PushEngine).
///
/// Both limits exist to guarantee termination on adversarial stores; the
/// defaults are generous for hand-authored puzzles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushConfig {
    /// Most non-empty cells a push chain may hold, counting the initiating
    /// cell; the empty cell that ends a chain is not counted. Also the most
    /// cells a pull may gather behind the start. Default: 1000.
    pub max_chain_len: usize,
    /// Most backtracks a push may make: returns to an earlier decision
    /// after a failed branch. Simple pushes never backtrack and ignore it.
    /// Default: 10.
    pub max_decisions: usize,
    /// Navigator behaviour. Auto-entry is ignored: the engine decides
    /// entries through its strategies.
    pub nav: NavOptions,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            max_chain_len: 1000,
            max_decisions: 10,
            nav: NavOptions::default(),
        }
    }
}

impl PushConfig {
    /// Check the limits are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chain_len == 0 {
            return Err(ConfigError::ZeroLimit {
                name: "max_chain_len",
            });
        }
        if self.max_decisions == 0 {
            return Err(ConfigError::ZeroLimit {
                name: "max_decisions",
            });
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building a [`PushConfig`] or
/// [`RuleSet`](crate::RuleSet).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A limit that must be at least 1 was zero.
    ZeroLimit {
        /// Name of the offending field.
        name: &'static str,
    },
    /// A rule set with no strategies.
    EmptyRuleSet,
    /// A strategy listed twice in one rule set.
    DuplicateStrategy {
        /// The repeated strategy.
        strategy: RefStrategy,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLimit { name } => write!(f, "{name} must be at least 1"),
            Self::EmptyRuleSet => write!(f, "rule set must name at least one strategy"),
            Self::DuplicateStrategy { strategy } => {
                write!(f, "strategy '{strategy}' listed more than once")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(PushConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_limits_rejected() {
        let config = PushConfig {
            max_chain_len: 0,
            ..PushConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroLimit {
                name: "max_chain_len"
            })
        );
        let config = PushConfig {
            max_decisions: 0,
            ..PushConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroLimit { name: "max_decisions" })
        ));
    }

    #[test]
    fn display() {
        assert_eq!(
            ConfigError::DuplicateStrategy {
                strategy: RefStrategy::Portal
            }
            .to_string(),
            "strategy 'portal' listed more than once"
        );
    }
}
