//! XWS export
//!
//! XWS is the community interchange format for squads; ids and enum names
//! already use its vocabulary, so export is a straight projection.

use super::Squad;
use crate::types::{Faction, SlotType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const XWS_VERSION: &str = "2.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XwsPilot {
    pub id: String,
    pub ship: String,
    pub points: u32,
    /// Upgrade ids grouped by the slot they occupy
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub upgrades: BTreeMap<SlotType, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XwsSquad {
    pub name: String,
    pub faction: Faction,
    pub points: u32,
    pub version: String,
    pub pilots: Vec<XwsPilot>,
}

impl XwsSquad {
    pub fn from_squad(squad: &Squad<'_>) -> Self {
        let pilots = squad
            .members()
            .iter()
            .map(|member| {
                let mut upgrades: BTreeMap<SlotType, Vec<String>> = BTreeMap::new();
                for upgrade in member.upgrades() {
                    upgrades
                        .entry(upgrade.slot_type())
                        .or_default()
                        .push(upgrade.id.clone());
                }
                XwsPilot {
                    id: member.pilot().id.clone(),
                    ship: member.ship().id.clone(),
                    points: member.point_cost(),
                    upgrades,
                }
            })
            .collect();

        XwsSquad {
            name: squad.name().to_string(),
            faction: squad.faction(),
            points: squad.point_cost(),
            version: XWS_VERSION.to_string(),
            pilots,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
