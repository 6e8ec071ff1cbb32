//! Member - One pilot, its ship and its equipped upgrades

use super::record::MemberRecord;
use crate::catalog::{Catalog, CatalogError, Pilot, Ship, Upgrade};
use crate::config::RulesConfig;
use crate::cost;
use crate::loadout::Loadout;
use crate::slots;
use crate::types::SlotType;
use uuid::Uuid;

/// A pilot flying its ship with zero or more upgrades
///
/// Ship, pilot and upgrades are resolved against the catalog when the member
/// is built; a member is fully described by its ids.
#[derive(Debug, Clone)]
pub struct Member<'c> {
    uuid: Uuid,
    ship: &'c Ship,
    pilot: &'c Pilot,
    upgrades: Vec<&'c Upgrade>,
}

impl<'c> Member<'c> {
    /// Create a member with no upgrades
    pub fn new(uuid: Uuid, catalog: &'c Catalog, pilot: &'c Pilot) -> Result<Self, CatalogError> {
        Ok(Member {
            uuid,
            ship: catalog.ship_of(pilot)?,
            pilot,
            upgrades: Vec::new(),
        })
    }

    /// Rebuild a member from its persisted ids
    pub fn from_record(catalog: &'c Catalog, record: &MemberRecord) -> Result<Self, CatalogError> {
        let pilot = catalog.require_pilot(&record.pilot)?;
        if pilot.ship != record.ship {
            return Err(CatalogError::ShipMismatch {
                pilot: pilot.id.clone(),
                expected: pilot.ship.clone(),
                found: record.ship.clone(),
            });
        }

        let upgrades = record
            .upgrades
            .iter()
            .map(|id| catalog.require_upgrade(id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Member {
            uuid: record.uuid,
            ship: catalog.require_ship(&record.ship)?,
            pilot,
            upgrades,
        })
    }

    /// Flat record of ids for persistence
    pub fn record(&self) -> MemberRecord {
        MemberRecord {
            uuid: self.uuid,
            ship: self.ship.id.clone(),
            pilot: self.pilot.id.clone(),
            upgrades: self.upgrades.iter().map(|u| u.id.clone()).collect(),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn ship(&self) -> &'c Ship {
        self.ship
    }

    pub fn pilot(&self) -> &'c Pilot {
        self.pilot
    }

    /// Equipped upgrades in slot order
    pub fn upgrades(&self) -> &[&'c Upgrade] {
        &self.upgrades
    }

    /// Whether an upgrade with this id is equipped
    pub fn has_upgrade(&self, id: &str) -> bool {
        self.upgrades.iter().any(|u| u.id == id)
    }

    /// Equipped upgrades without the first instance of `excluding`
    pub fn upgrades_excluding<'m>(
        &'m self,
        excluding: Option<&'m Upgrade>,
    ) -> impl Iterator<Item = &'c Upgrade> + 'm {
        let mut skipped = false;
        self.upgrades.iter().copied().filter(move |upgrade| {
            let is_excluded = !skipped && excluding.map_or(false, |e| e.id == upgrade.id);
            if is_excluded {
                skipped = true;
            }
            !is_excluded
        })
    }

    /// Current loadout (slots, actions, force sides)
    pub fn loadout(&self, rules: &RulesConfig) -> Loadout {
        Loadout::for_member(self, None, rules)
    }

    /// Every slot the member has, occupied or not
    pub fn available_slots(&self, rules: &RulesConfig) -> Vec<SlotType> {
        slots::available_slots(self, None, rules)
    }

    /// Points for the pilot plus every equipped upgrade
    pub fn point_cost(&self) -> u32 {
        cost::member_cost(self)
    }

    pub(crate) fn push_upgrade(&mut self, upgrade: &'c Upgrade) {
        self.upgrades.push(upgrade);
    }

    /// Remove the first instance of an upgrade; returns it if it was equipped
    pub(crate) fn take_upgrade(&mut self, id: &str) -> Option<&'c Upgrade> {
        let index = self.upgrades.iter().position(|u| u.id == id)?;
        Some(self.upgrades.remove(index))
    }

    pub(crate) fn remove_upgrade_at(&mut self, index: usize) -> &'c Upgrade {
        self.upgrades.remove(index)
    }

    /// Order upgrades by where their slot first appears, then by name
    pub(crate) fn sort_upgrades(&mut self, rules: &RulesConfig) {
        let order = self.available_slots(rules);
        let position = |upgrade: &Upgrade| {
            order
                .iter()
                .position(|s| *s == upgrade.slot_type())
                .unwrap_or(usize::MAX)
        };
        self.upgrades
            .sort_by(|a, b| position(*a).cmp(&position(*b)).then_with(|| a.name.cmp(&b.name)));
    }
}

impl PartialEq for Member<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for Member<'_> {}
