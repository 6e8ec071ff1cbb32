//! Card definitions: ships, pilots and upgrades

use super::points::PointCost;
use super::restriction::RestrictionSet;
use crate::types::{Action, ArcType, Faction, ForceSide, ShipSize, SlotType, Stat, StatKind};
use serde::{Deserialize, Serialize};

/// A ship chassis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// XWS identifier (e.g., "t65xwing")
    pub id: String,
    pub name: String,
    pub faction: Faction,
    pub size: ShipSize,
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Printed action bar
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Ship {
    /// Value of the first printed stat of the given kind
    pub fn stat(&self, kind: StatKind) -> Option<u32> {
        self.stats.iter().find(|s| s.kind == kind).map(|s| s.value)
    }

    /// Whether any printed attack uses the given arc
    pub fn has_arc(&self, arc: ArcType) -> bool {
        self.stats.iter().filter_map(|s| s.arc).any(|a| a == arc)
    }
}

/// Force capacity printed on a pilot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Force {
    pub value: u32,
    #[serde(default)]
    pub sides: Vec<ForceSide>,
}

/// Named ability printed on the ship portion of a pilot card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipAbility {
    pub name: String,
    #[serde(default)]
    pub text: String,
}

/// A pilot card; flying a pilot puts its ship in the squad
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pilot {
    /// XWS identifier (e.g., "lukeskywalker")
    pub id: String,
    pub name: String,
    /// XWS identifier of the ship this pilot flies
    pub ship: String,
    pub initiative: u32,
    /// Maximum copies per squad (0 = unlimited)
    #[serde(default)]
    pub limited: u32,
    pub cost: PointCost,
    /// Printed upgrade bar
    #[serde(default)]
    pub slots: Vec<SlotType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force: Option<Force>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_ability: Option<ShipAbility>,
}

impl Pilot {
    pub fn is_unique(&self) -> bool {
        self.limited == 1
    }

    /// Force sides printed on the pilot
    pub fn force_sides(&self) -> &[ForceSide] {
        self.force.as_ref().map(|f| f.sides.as_slice()).unwrap_or(&[])
    }
}

/// Effect a card side applies to the member that equips it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Grant {
    /// Add (+1) or remove (-1) one slot of the given type
    Slot { slot: SlotType, amount: i8 },
    /// Add an action to the action bar
    Action { action: Action },
    /// Add force sides
    Force { sides: Vec<ForceSide> },
}

/// One printed face of an upgrade card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Side {
    pub title: String,
    /// Slot type this side is equipped into
    #[serde(rename = "type")]
    pub kind: SlotType,
    /// Every slot consumed when equipped; empty means just `kind`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<SlotType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grants: Vec<Grant>,
    /// AND of OR-groups
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<RestrictionSet>,
}

impl Side {
    /// Slots this side occupies on the member
    pub fn occupies(&self) -> &[SlotType] {
        if self.slots.is_empty() {
            std::slice::from_ref(&self.kind)
        } else {
            &self.slots
        }
    }

    /// Slot grants as (slot, amount) pairs
    pub fn slot_grants(&self) -> impl Iterator<Item = (SlotType, i8)> + '_ {
        self.grants.iter().filter_map(|g| match g {
            Grant::Slot { slot, amount } => Some((*slot, *amount)),
            _ => None,
        })
    }

    pub fn action_grants(&self) -> impl Iterator<Item = Action> + '_ {
        self.grants.iter().filter_map(|g| match g {
            Grant::Action { action } => Some(*action),
            _ => None,
        })
    }

    pub fn force_grants(&self) -> impl Iterator<Item = ForceSide> + '_ {
        self.grants
            .iter()
            .filter_map(|g| match g {
                Grant::Force { sides } => Some(sides.iter().copied()),
                _ => None,
            })
            .flatten()
    }
}

/// An upgrade card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upgrade {
    /// XWS identifier (e.g., "protontorpedoes")
    pub id: String,
    pub name: String,
    /// Maximum copies per squad (0 = unlimited)
    #[serde(default)]
    pub limited: u32,
    pub cost: PointCost,
    /// Printed faces; the first is the active side
    pub sides: Vec<Side>,
}

impl Upgrade {
    /// The active side. Catalog validation guarantees at least one side.
    pub fn primary_side(&self) -> &Side {
        &self.sides[0]
    }

    /// Slot type of the active side
    pub fn slot_type(&self) -> SlotType {
        self.primary_side().kind
    }

    pub fn is_unique(&self) -> bool {
        self.limited == 1
    }
}

impl PartialEq for Upgrade {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Upgrade {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionType;

    fn side(kind: SlotType) -> Side {
        Side {
            title: "Test".to_string(),
            kind,
            slots: vec![],
            grants: vec![],
            restrictions: vec![],
        }
    }

    #[test]
    fn test_side_occupies_defaults_to_kind() {
        let single = side(SlotType::Crew);
        assert_eq!(single.occupies(), &[SlotType::Crew]);

        let mut double = side(SlotType::Cannon);
        double.slots = vec![SlotType::Cannon, SlotType::Cannon];
        assert_eq!(double.occupies().len(), 2);
    }

    #[test]
    fn test_grant_iterators() {
        let mut s = side(SlotType::Title);
        s.grants = vec![
            Grant::Slot { slot: SlotType::Crew, amount: 1 },
            Grant::Action { action: Action::white(ActionType::Boost) },
            Grant::Force { sides: vec![ForceSide::Dark] },
        ];

        assert_eq!(s.slot_grants().collect::<Vec<_>>(), vec![(SlotType::Crew, 1)]);
        assert_eq!(s.action_grants().count(), 1);
        assert_eq!(s.force_grants().collect::<Vec<_>>(), vec![ForceSide::Dark]);
    }

    #[test]
    fn test_grant_serialization() {
        let grant = Grant::Slot { slot: SlotType::Gunner, amount: -1 };
        let json = serde_json::to_string(&grant).unwrap();
        assert!(json.contains("\"type\":\"slot\""));
        assert!(json.contains("gunner"));
    }
}
