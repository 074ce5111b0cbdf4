//! Reference-cell strategies and their ordering.

use std::fmt;

use smallvec::SmallVec;

use crate::config::ConfigError;

/// How a reference cell participates in a push.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefStrategy {
    /// Transparent: enter the referenced grid and push through it.
    Portal,
    /// Opaque: the reference moves like any concrete object.
    Solid,
    /// Container: the reference absorbs the cell it is pushed into, which
    /// lands on the entry edge of the referenced grid.
    Swallow,
}

impl fmt::Display for RefStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Portal => "portal",
            Self::Solid => "solid",
            Self::Swallow => "swallow",
        };
        f.write_str(s)
    }
}

/// An ordered preference over [`RefStrategy`] values.
///
/// The engine tries strategies in this order at every decision point and,
/// when backtracking, falls through to later ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    order: SmallVec<[RefStrategy; 3]>,
}

impl RuleSet {
    /// A custom ordering.
    ///
    /// Returns `Err(ConfigError::EmptyRuleSet)` for an empty order and
    /// `Err(ConfigError::DuplicateStrategy)` if a strategy repeats.
    pub fn new(order: impl IntoIterator<Item = RefStrategy>) -> Result<Self, ConfigError> {
        let mut seen: SmallVec<[RefStrategy; 3]> = SmallVec::new();
        for strategy in order {
            if seen.contains(&strategy) {
                return Err(ConfigError::DuplicateStrategy { strategy });
            }
            seen.push(strategy);
        }
        if seen.is_empty() {
            return Err(ConfigError::EmptyRuleSet);
        }
        Ok(Self { order: seen })
    }

    fn fixed(order: [RefStrategy; 3]) -> Self {
        Self {
            order: SmallVec::from_buf(order),
        }
    }

    /// `[Solid, Portal, Swallow]`: push references as objects first.
    pub fn push_first() -> Self {
        Self::fixed([RefStrategy::Solid, RefStrategy::Portal, RefStrategy::Swallow])
    }

    /// `[Portal, Solid, Swallow]`: enter references first.
    pub fn try_enter_first() -> Self {
        Self::fixed([RefStrategy::Portal, RefStrategy::Solid, RefStrategy::Swallow])
    }

    /// `[Swallow, Portal, Solid]`: let references absorb what they hit.
    pub fn swallow_first() -> Self {
        Self::fixed([RefStrategy::Swallow, RefStrategy::Portal, RefStrategy::Solid])
    }

    /// Strategies in preference order.
    pub fn order(&self) -> &[RefStrategy] {
        &self.order
    }
}

impl Default for RuleSet {
    /// Same as [`RuleSet::push_first`].
    fn default() -> Self {
        Self::push_first()
    }
}
