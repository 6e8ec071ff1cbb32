//! Loadout - What a member currently has available after all grants

use crate::catalog::Upgrade;
use crate::config::RulesConfig;
use crate::source::{GrantSource, HardpointSource, PilotSource, UpgradeSource};
use crate::squad::Member;
use crate::types::{Action, ForceSide, SlotType};

/// Accumulates slots, actions and force sides from every source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loadout {
    /// Available upgrade slots (a multiset, in grant order)
    pub slots: Vec<SlotType>,
    pub actions: Vec<Action>,
    pub force_sides: Vec<ForceSide>,
    /// Ids of the sources applied, in application order
    pub sources: Vec<String>,
}

impl Loadout {
    /// Create an empty loadout
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_slot(&mut self, slot: SlotType) {
        self.slots.push(slot);
    }

    /// Remove one instance of a slot; returns false if none was present
    pub fn remove_slot(&mut self, slot: SlotType) -> bool {
        match self.slots.iter().position(|s| *s == slot) {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    /// Apply sources in priority order (stable, so equal priorities keep their order)
    pub fn from_sources(sources: &[&dyn GrantSource]) -> Self {
        let mut sorted: Vec<_> = sources.to_vec();
        sorted.sort_by_key(|s| s.priority());

        let mut loadout = Loadout::new();
        for source in sorted {
            log::trace!("Applying {} (priority {})", source.id(), source.priority());
            source.apply(&mut loadout);
            loadout.sources.push(source.id().to_string());
        }
        loadout
    }

    /// Rebuild a member's loadout, leaving out one equipped upgrade
    ///
    /// `excluding` is the upgrade being replaced (or re-tested); it
    /// contributes no grants and is not considered for the hardpoint.
    pub fn for_member(member: &Member<'_>, excluding: Option<&Upgrade>, rules: &RulesConfig) -> Self {
        let pilot = PilotSource::new(member.pilot(), member.ship());
        let upgrades: Vec<UpgradeSource<'_>> = member
            .upgrades_excluding(excluding)
            .map(UpgradeSource::new)
            .collect();
        let hardpoint =
            HardpointSource::for_pilot(&rules.hardpoint, member.pilot(), member.upgrades_excluding(excluding));

        let mut sources: Vec<&dyn GrantSource> = Vec::with_capacity(upgrades.len() + 2);
        sources.push(&pilot);
        sources.extend(upgrades.iter().map(|u| u as &dyn GrantSource));
        if let Some(ref hardpoint) = hardpoint {
            sources.push(hardpoint);
        }

        Loadout::from_sources(&sources)
    }

    pub fn has_action(&self, action: &Action) -> bool {
        self.actions.contains(action)
    }

    pub fn has_force_side(&self, side: ForceSide) -> bool {
        self.force_sides.contains(&side)
    }
}
