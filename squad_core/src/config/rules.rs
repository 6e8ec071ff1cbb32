//! Game rules that are not printed on any single card

use crate::types::SlotType;
use serde::{Deserialize, Serialize};

/// Tunable squad-building rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Squad point budget
    #[serde(default = "default_point_limit")]
    pub point_limit: u32,
    #[serde(default)]
    pub hardpoint: HardpointRule,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            point_limit: default_point_limit(),
            hardpoint: HardpointRule::default(),
        }
    }
}

fn default_point_limit() -> u32 {
    200
}

/// Ship ability that adds one flexible weapon slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardpointRule {
    /// Ship ability name that enables the hardpoint
    #[serde(default = "default_hardpoint_ability")]
    pub ability: String,
    /// Slot types the hardpoint can hold
    #[serde(default = "default_hardpoint_slots")]
    pub slots: Vec<SlotType>,
}

impl Default for HardpointRule {
    fn default() -> Self {
        HardpointRule {
            ability: default_hardpoint_ability(),
            slots: default_hardpoint_slots(),
        }
    }
}

fn default_hardpoint_ability() -> String {
    "Weapon Hardpoint".to_string()
}

fn default_hardpoint_slots() -> Vec<SlotType> {
    vec![SlotType::Cannon, SlotType::Torpedo, SlotType::Missile]
}
