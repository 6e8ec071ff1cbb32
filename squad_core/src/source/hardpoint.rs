//! HardpointSource - The "Weapon Hardpoint" ship ability

use crate::catalog::{Pilot, Upgrade};
use crate::config::HardpointRule;
use crate::loadout::Loadout;
use crate::source::GrantSource;
use crate::types::SlotType;

/// Flexible weapon slot
///
/// With no hardpoint weapon equipped every hardpoint type is offered. Once a
/// cannon, torpedo or missile is equipped only that weapon's own slot type is
/// offered, so the hardpoint cannot be filled twice.
pub struct HardpointSource {
    pub slots: Vec<SlotType>,
}

impl HardpointSource {
    /// Build the source for a pilot, if its ship has the hardpoint ability
    pub fn for_pilot<'a>(
        rule: &HardpointRule,
        pilot: &Pilot,
        mut equipped: impl Iterator<Item = &'a Upgrade>,
    ) -> Option<Self> {
        let ability = pilot.ship_ability.as_ref()?;
        if ability.name != rule.ability {
            return None;
        }

        let weapon = equipped.find(|u| u.sides.iter().any(|s| rule.slots.contains(&s.kind)));
        let slots = match weapon {
            Some(upgrade) => vec![upgrade.slot_type()],
            None => rule.slots.clone(),
        };
        Some(HardpointSource { slots })
    }
}

impl GrantSource for HardpointSource {
    fn id(&self) -> &str {
        "weapon_hardpoint"
    }

    fn priority(&self) -> i32 {
        100 // After every upgrade grant
    }

    fn apply(&self, loadout: &mut Loadout) {
        loadout.slots.extend(self.slots.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_catalog, RulesConfig};

    #[test]
    fn test_hardpoint_narrows_to_equipped_weapon() {
        let catalog = default_catalog().unwrap();
        let rules = RulesConfig::default();
        let spacer = catalog.pilot("cartelspacer").unwrap();
        let torpedo = catalog.upgrade("protontorpedoes").unwrap();
        let hull = catalog.upgrade("hullupgrade").unwrap();

        let open = HardpointSource::for_pilot(&rules.hardpoint, spacer, [hull].into_iter()).unwrap();
        assert_eq!(open.slots, vec![SlotType::Cannon, SlotType::Torpedo, SlotType::Missile]);

        let filled = HardpointSource::for_pilot(&rules.hardpoint, spacer, [hull, torpedo].into_iter()).unwrap();
        assert_eq!(filled.slots, vec![SlotType::Torpedo]);
    }

    #[test]
    fn test_no_hardpoint_without_ability() {
        let catalog = default_catalog().unwrap();
        let rules = RulesConfig::default();
        let luke = catalog.pilot("lukeskywalker").unwrap();

        assert!(HardpointSource::for_pilot(&rules.hardpoint, luke, std::iter::empty()).is_none());
    }
}
