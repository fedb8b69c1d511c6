use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

// ============================================================================
// JobClass
// ============================================================================

/// The six mutually exclusive character archetypes.
///
/// Selecting a class never changes the level; it only swaps which title ladder
/// is used to derive the job title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum JobClass {
    #[default]
    Swordsman,
    Archer,
    Mage,
    Thief,
    Acolyte,
    Merchant,
}

impl JobClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            JobClass::Swordsman => "Swordsman",
            JobClass::Archer => "Archer",
            JobClass::Mage => "Mage",
            JobClass::Thief => "Thief",
            JobClass::Acolyte => "Acolyte",
            JobClass::Merchant => "Merchant",
        }
    }

    /// Returns all classes in selector order.
    pub fn all() -> [JobClass; 6] {
        [
            JobClass::Swordsman,
            JobClass::Archer,
            JobClass::Mage,
            JobClass::Thief,
            JobClass::Acolyte,
            JobClass::Merchant,
        ]
    }

    /// Resolve a class name, falling back to `Swordsman` for anything unknown.
    ///
    /// Title lookups and persisted snapshots go through this so a stale or
    /// hand-edited class name still yields a usable progression table.
    pub fn from_name_or_default(name: &str) -> JobClass {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for JobClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for JobClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "swordsman" => Ok(JobClass::Swordsman),
            "archer" => Ok(JobClass::Archer),
            "mage" => Ok(JobClass::Mage),
            "thief" => Ok(JobClass::Thief),
            "acolyte" => Ok(JobClass::Acolyte),
            "merchant" => Ok(JobClass::Merchant),
            _ => Err(DomainError::parse(format!("Unknown job class: {}", s))),
        }
    }
}
