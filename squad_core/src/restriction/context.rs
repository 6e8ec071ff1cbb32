//! What a restriction is checked against

use crate::catalog::{Catalog, Ship, Upgrade};
use crate::loadout::Loadout;
use crate::squad::{Member, Squad};
use crate::types::Faction;
use std::collections::HashSet;

/// Snapshot of a member within its squad
#[derive(Debug, Clone)]
pub struct RestrictionContext<'a> {
    pub faction: Faction,
    pub ship: &'a Ship,
    /// Member loadout after grants
    pub loadout: Loadout,
    /// Pilot and upgrade names present anywhere in the squad
    pub names: HashSet<&'a str>,
}

impl<'a> RestrictionContext<'a> {
    /// Context for a member, with `excluding` treated as unequipped
    pub fn new(squad: &'a Squad<'_>, member: &'a Member<'_>, excluding: Option<&Upgrade>) -> Self {
        let catalog: &Catalog = squad.catalog();

        let mut names = HashSet::new();
        for other in squad.members() {
            names.insert(other.pilot().name.as_str());
            if other.uuid() == member.uuid() {
                names.extend(other.upgrades_excluding(excluding).map(|u| u.name.as_str()));
            } else {
                names.extend(other.upgrades().iter().map(|u| u.name.as_str()));
            }
        }

        RestrictionContext {
            faction: squad.faction(),
            ship: member.ship(),
            loadout: Loadout::for_member(member, excluding, catalog.rules()),
            names,
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
