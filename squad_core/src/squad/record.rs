//! Flat persistence records

use crate::types::Faction;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member as ids: enough to rebuild it against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub uuid: Uuid,
    pub ship: String,
    pub pilot: String,
    /// Upgrade ids in slot order
    #[serde(default)]
    pub upgrades: Vec<String>,
}

/// A squad as ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadRecord {
    pub id: Uuid,
    pub name: String,
    pub faction: Faction,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
}

impl SquadRecord {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Called with a snapshot of the squad after every successful mutation
pub trait SaveHook {
    fn save(&mut self, record: &SquadRecord);
}

impl<F> SaveHook for F
where
    F: FnMut(&SquadRecord),
{
    fn save(&mut self, record: &SquadRecord) {
        self(record)
    }
}
