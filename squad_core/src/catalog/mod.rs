//! Card catalog - immutable ship, pilot and upgrade definitions
//!
//! The catalog is built once from a [`CatalogFile`] and then only read.
//! Every id is unique across all three card kinds so [`Catalog::lookup`]
//! never has to guess.

mod card;
mod points;
mod restriction;

pub use card::{Force, Grant, Pilot, Ship, ShipAbility, Side, Upgrade};
pub use points::{CostKey, CostTable, PointCost};
pub use restriction::{Restriction, RestrictionSet};

use crate::config::RulesConfig;
use crate::types::Faction;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;
use thiserror::Error;

/// Catalog construction and lookup error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate card id: {0}")]
    DuplicateId(String),
    #[error("Unknown ship: {0}")]
    UnknownShip(String),
    #[error("Unknown pilot: {0}")]
    UnknownPilot(String),
    #[error("Unknown upgrade: {0}")]
    UnknownUpgrade(String),
    #[error("Upgrade {0} has no sides")]
    NoSides(String),
    #[error("Upgrade {id} grants slot amount {amount}; only +1 and -1 are allowed")]
    InvalidGrantAmount { id: String, amount: i8 },
    #[error("Pilot {pilot} flies {expected}, not {found}")]
    ShipMismatch {
        pilot: String,
        expected: String,
        found: String,
    },
}

/// Serialized catalog contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub ships: Vec<Ship>,
    #[serde(default)]
    pub pilots: Vec<Pilot>,
    #[serde(default)]
    pub upgrades: Vec<Upgrade>,
}

/// Any catalog card
#[derive(Debug, Clone, Copy)]
pub enum Card<'c> {
    Ship(&'c Ship),
    Pilot(&'c Pilot),
    Upgrade(&'c Upgrade),
}

impl<'c> Card<'c> {
    pub fn id(&self) -> &'c str {
        match *self {
            Card::Ship(ship) => &ship.id,
            Card::Pilot(pilot) => &pilot.id,
            Card::Upgrade(upgrade) => &upgrade.id,
        }
    }

    pub fn name(&self) -> &'c str {
        match *self {
            Card::Ship(ship) => &ship.name,
            Card::Pilot(pilot) => &pilot.name,
            Card::Upgrade(upgrade) => &upgrade.name,
        }
    }

    /// Copies allowed per squad (0 = unlimited, ships are never limited)
    pub fn limited(&self) -> u32 {
        match self {
            Card::Ship(_) => 0,
            Card::Pilot(pilot) => pilot.limited,
            Card::Upgrade(upgrade) => upgrade.limited,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Entry {
    Ship(usize),
    Pilot(usize),
    Upgrade(usize),
}

/// Read-only card catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: RulesConfig,
    ships: Vec<Ship>,
    pilots: Vec<Pilot>,
    upgrades: Vec<Upgrade>,
    index: HashMap<String, Entry>,
}

impl Catalog {
    /// Build and validate a catalog
    pub fn new(file: CatalogFile) -> Result<Self, CatalogError> {
        let CatalogFile {
            rules,
            ships,
            pilots,
            upgrades,
        } = file;

        let mut index = HashMap::new();
        let ids = ships
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.as_str(), Entry::Ship(i)))
            .chain(pilots.iter().enumerate().map(|(i, p)| (p.id.as_str(), Entry::Pilot(i))))
            .chain(upgrades.iter().enumerate().map(|(i, u)| (u.id.as_str(), Entry::Upgrade(i))));
        for (id, slot) in ids {
            if index.insert(id.to_string(), slot).is_some() {
                return Err(CatalogError::DuplicateId(id.to_string()));
            }
        }

        for pilot in &pilots {
            if !matches!(index.get(&pilot.ship), Some(Entry::Ship(_))) {
                return Err(CatalogError::UnknownShip(pilot.ship.clone()));
            }
        }

        for upgrade in &upgrades {
            if upgrade.sides.is_empty() {
                return Err(CatalogError::NoSides(upgrade.id.clone()));
            }
            for side in &upgrade.sides {
                if let Some((_, amount)) = side.slot_grants().find(|(_, a)| !matches!(*a, 1 | -1)) {
                    return Err(CatalogError::InvalidGrantAmount {
                        id: upgrade.id.clone(),
                        amount,
                    });
                }
            }
        }

        Ok(Catalog {
            rules,
            ships,
            pilots,
            upgrades,
            index,
        })
    }

    /// Rules the catalog was published with
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Look up any card by id
    pub fn lookup(&self, id: &str) -> Option<Card<'_>> {
        self.index.get(id).map(|slot| match *slot {
            Entry::Ship(i) => Card::Ship(&self.ships[i]),
            Entry::Pilot(i) => Card::Pilot(&self.pilots[i]),
            Entry::Upgrade(i) => Card::Upgrade(&self.upgrades[i]),
        })
    }

    pub fn ship(&self, id: &str) -> Option<&Ship> {
        match self.lookup(id) {
            Some(Card::Ship(ship)) => Some(ship),
            _ => None,
        }
    }

    pub fn pilot(&self, id: &str) -> Option<&Pilot> {
        match self.lookup(id) {
            Some(Card::Pilot(pilot)) => Some(pilot),
            _ => None,
        }
    }

    pub fn upgrade(&self, id: &str) -> Option<&Upgrade> {
        match self.lookup(id) {
            Some(Card::Upgrade(upgrade)) => Some(upgrade),
            _ => None,
        }
    }

    /// Ship for an id, as a result
    pub fn require_ship(&self, id: &str) -> Result<&Ship, CatalogError> {
        self.ship(id).ok_or_else(|| CatalogError::UnknownShip(id.to_string()))
    }

    /// Pilot for an id, as a result
    pub fn require_pilot(&self, id: &str) -> Result<&Pilot, CatalogError> {
        self.pilot(id).ok_or_else(|| CatalogError::UnknownPilot(id.to_string()))
    }

    /// Upgrade for an id, as a result
    pub fn require_upgrade(&self, id: &str) -> Result<&Upgrade, CatalogError> {
        self.upgrade(id).ok_or_else(|| CatalogError::UnknownUpgrade(id.to_string()))
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn pilots(&self) -> &[Pilot] {
        &self.pilots
    }

    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    /// Ship flown by a pilot
    pub fn ship_of(&self, pilot: &Pilot) -> Result<&Ship, CatalogError> {
        self.require_ship(&pilot.ship)
    }

    /// Faction of a pilot (the faction of its ship)
    pub fn faction_of(&self, pilot: &Pilot) -> Option<Faction> {
        self.ship(&pilot.ship).map(|s| s.faction)
    }

    /// Ships of a faction, most pilots first, then by name
    pub fn ships_for(&self, faction: Faction) -> Vec<&Ship> {
        let mut ships: Vec<(&Ship, usize)> = self
            .ships
            .iter()
            .filter(|s| s.faction == faction)
            .map(|s| (s, self.pilots.iter().filter(|p| p.ship == s.id).count()))
            .collect();
        ships.sort_by(|(a, a_pilots), (b, b_pilots)| {
            b_pilots.cmp(a_pilots).then_with(|| a.name.cmp(&b.name))
        });
        ships.into_iter().map(|(s, _)| s).collect()
    }

    /// Pilots of a ship ranked by initiative, then cost, then name
    pub fn pilots_for(&self, ship_id: &str) -> Vec<&Pilot> {
        let mut pilots: Vec<&Pilot> = self.pilots.iter().filter(|p| p.ship == ship_id).collect();
        pilots.sort_by_key(|p| (Reverse(p.initiative), Reverse(p.cost.base()), p.name.clone()));
        pilots
    }
}
