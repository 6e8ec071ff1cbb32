//! Point cost declarations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a variable cost is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKey {
    /// Ship XWS id
    Ship,
    /// Ship size ("small", "medium", ...)
    Size,
    /// Printed agility value
    Agility,
    /// Pilot initiative
    Initiative,
}

/// Cost that depends on who equips the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTable {
    pub key: CostKey,
    /// Used when no entry matches
    pub base: u32,
    #[serde(default)]
    pub values: BTreeMap<String, u32>,
}

impl CostTable {
    /// Cost for a context key, falling back to the base cost
    pub fn lookup(&self, key: &str) -> u32 {
        self.values.get(key).copied().unwrap_or(self.base)
    }
}

/// Printed point cost: a number or a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointCost {
    Fixed(u32),
    Variable(CostTable),
}

impl PointCost {
    /// Cost shown when there is no equipping context
    pub fn base(&self) -> u32 {
        match self {
            PointCost::Fixed(cost) => *cost,
            PointCost::Variable(table) => table.base,
        }
    }
}

impl Default for PointCost {
    fn default() -> Self {
        PointCost::Fixed(0)
    }
}
