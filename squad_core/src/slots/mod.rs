//! Slot resolution - which upgrade slots a member has right now
//!
//! Slots are never cached: every query rebuilds the loadout from the
//! pilot's printed bar and the grants of the equipped upgrades.

use crate::catalog::Upgrade;
use crate::config::RulesConfig;
use crate::loadout::Loadout;
use crate::squad::Member;
use crate::types::SlotType;

/// Every slot the member has, occupied or not
///
/// `excluding` leaves one equipped upgrade out of the fold, as if it had
/// been unequipped.
pub fn available_slots(member: &Member<'_>, excluding: Option<&Upgrade>, rules: &RulesConfig) -> Vec<SlotType> {
    Loadout::for_member(member, excluding, rules).slots
}

/// Slots left over once every equipped upgrade (except `excluding`) has
/// taken its slots
pub fn free_slots(member: &Member<'_>, excluding: Option<&Upgrade>, rules: &RulesConfig) -> Vec<SlotType> {
    let mut pool = available_slots(member, excluding, rules);
    for upgrade in member.upgrades_excluding(excluding) {
        for slot in upgrade.primary_side().occupies() {
            // Occupants without a slot left are caught by pruning, not here
            if let Some(index) = pool.iter().position(|s| s == slot) {
                pool.remove(index);
            }
        }
    }
    pool
}

/// Draw slots from a pool; leaves the pool untouched and returns false on underflow
pub fn take_slots(pool: &mut Vec<SlotType>, wanted: &[SlotType]) -> bool {
    let mut remaining = pool.clone();
    for slot in wanted {
        match remaining.iter().position(|s| s == slot) {
            Some(index) => {
                remaining.remove(index);
            }
            None => return false,
        }
    }
    *pool = remaining;
    true
}

/// Whether the candidate's slots are free once `replacing` is taken off
pub fn fits(member: &Member<'_>, candidate: &Upgrade, replacing: Option<&Upgrade>, rules: &RulesConfig) -> bool {
    let mut pool = free_slots(member, replacing, rules);
    take_slots(&mut pool, candidate.primary_side().occupies())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_catalog;
    use crate::squad::Squad;
    use crate::types::Faction;

    #[test]
    fn test_take_slots_is_all_or_nothing() {
        let mut pool = vec![SlotType::Cannon, SlotType::Crew];

        assert!(!take_slots(&mut pool, &[SlotType::Crew, SlotType::Crew]));
        assert_eq!(pool, vec![SlotType::Cannon, SlotType::Crew]);

        assert!(take_slots(&mut pool, &[SlotType::Crew]));
        assert_eq!(pool, vec![SlotType::Cannon]);
    }

    #[test]
    fn test_hardpoint_offers_every_weapon_until_one_is_equipped() {
        let catalog = default_catalog().unwrap();
        let rules = catalog.rules();
        let mut squad = Squad::with_seed(&catalog, Faction::ScumAndVillainy, "Hardpoint", 7);
        let member = squad.add_member("cartelspacer").unwrap().member;

        let slots = squad.member(member).unwrap().available_slots(rules);
        assert_eq!(
            slots,
            vec![SlotType::Modification, SlotType::Cannon, SlotType::Torpedo, SlotType::Missile]
        );

        squad.add_upgrade(member, "ioncannon").unwrap();
        let spacer = squad.member(member).unwrap();
        assert_eq!(spacer.available_slots(rules), vec![SlotType::Modification, SlotType::Cannon]);
        assert!(free_slots(spacer, None, rules).iter().all(|s| *s == SlotType::Modification));

        // Re-testing the cannon frees the hardpoint again
        let cannon = catalog.upgrade("ioncannon").unwrap();
        let torpedo = catalog.upgrade("protontorpedoes").unwrap();
        assert!(fits(spacer, torpedo, Some(cannon), rules));
        assert!(!fits(spacer, torpedo, None, rules));
    }

    #[test]
    fn test_pilot_without_hardpoint_has_printed_slots_only() {
        let catalog = default_catalog().unwrap();
        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Blue", 1);
        let member = squad.add_member("bluesquadronescort").unwrap().member;

        let slots = squad.member(member).unwrap().available_slots(catalog.rules());
        assert_eq!(
            slots,
            vec![
                SlotType::Astromech,
                SlotType::Torpedo,
                SlotType::Modification,
                SlotType::Configuration
            ]
        );
    }
}
