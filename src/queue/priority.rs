//! Priority ranking for queue elements

use std::fmt;

/// Rank of a queue element.
///
/// Variants are declared in ascending order so the derived `Ord` yields
/// `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Least ranking priority
    Low,
    /// Mid-ranking priority, the default
    Medium,
    /// Highest ranking priority
    High,
}

impl Priority {
    /// All priorities in ascending order.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Ordinal of the priority, used to index per-tier storage.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        write!(f, "{}", name)
    }
}
