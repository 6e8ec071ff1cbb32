//! Restriction declarations carried by upgrade sides

use crate::types::{Action, ArcType, Faction, ForceSide, ShipSize};
use serde::{Deserialize, Serialize};

/// A single equip condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Restriction {
    /// Squad faction is one of these
    Factions { factions: Vec<Faction> },
    /// Member has this action (type and difficulty) available
    Action { action: Action },
    /// Member flies one of these ships (XWS ids)
    Ships { ships: Vec<String> },
    /// Member's ship is one of these sizes
    Sizes { sizes: Vec<ShipSize> },
    /// Some card in the squad carries one of these names
    Names { names: Vec<String> },
    /// Member's ship has an attack in one of these arcs
    Arcs { arcs: Vec<ArcType> },
    /// Member has one of these force sides available
    ForceSides { force_sides: Vec<ForceSide> },
}

/// OR-group of restrictions: satisfied if any one restriction is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestrictionSet {
    pub any_of: Vec<Restriction>,
}

impl RestrictionSet {
    pub fn new(any_of: Vec<Restriction>) -> Self {
        RestrictionSet { any_of }
    }

    /// Set with a single restriction
    pub fn single(restriction: Restriction) -> Self {
        RestrictionSet { any_of: vec![restriction] }
    }
}
