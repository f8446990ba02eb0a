//! Provider entity and its closed service enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Occupation category a provider offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    Doctor,
    Nurse,
    Engineer,
    Teacher,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::Doctor,
        Service::Nurse,
        Service::Engineer,
        Service::Teacher,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Doctor => "Doctor",
            Service::Nurse => "Nurse",
            Service::Engineer => "Engineer",
            Service::Teacher => "Teacher",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the variant name.
impl FromStr for Service {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|svc| svc.as_str() == s)
            .ok_or(crate::error::ValidationError::InvalidService)
    }
}

/// A persisted provider. `id` is assigned by storage and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub service: Service,
}

/// Validated create/update payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProvider {
    pub name: String,
    pub service: Service,
}

impl NewProvider {
    pub fn with_id(self, id: i64) -> Provider {
        Provider {
            id,
            name: self.name,
            service: self.service,
        }
    }
}
