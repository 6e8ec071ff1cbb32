//! Candidate upgrades for one slot of a member

use super::{validity, Verdict};
use crate::catalog::Upgrade;
use crate::cost;
use crate::squad::{Member, Squad};
use crate::types::SlotType;
use std::cmp::Reverse;

/// Every catalog upgrade of a slot type, split by legality
#[derive(Debug, Clone, Default)]
pub struct UpgradeOptions<'c> {
    pub valid: Vec<&'c Upgrade>,
    /// Illegal upgrades with the reason
    pub invalid: Vec<(&'c Upgrade, Verdict)>,
}

/// Upgrades whose active side goes into `slot`, most expensive first
pub fn upgrade_options<'c>(
    squad: &Squad<'c>,
    member: &Member<'c>,
    slot: SlotType,
    replacing: Option<&Upgrade>,
) -> UpgradeOptions<'c> {
    let catalog = squad.catalog();
    let mut options = UpgradeOptions::default();

    for upgrade in catalog.upgrades().iter().filter(|u| u.slot_type() == slot) {
        match validity(squad, member, upgrade, replacing) {
            Verdict::Valid => options.valid.push(upgrade),
            verdict => options.invalid.push((upgrade, verdict)),
        }
    }

    let rank = |u: &Upgrade| (Reverse(cost::upgrade_cost(u, member)), u.name.clone());
    options.valid.sort_by_key(|u| rank(*u));
    options.invalid.sort_by_key(|(u, _)| rank(*u));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_catalog;
    use crate::types::Faction;

    #[test]
    fn test_options_split_and_sorted() {
        let catalog = default_catalog().unwrap();
        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Options", 11);
        let luke = squad.add_member("lukeskywalker").unwrap().member;

        let member = squad.member(luke).unwrap();
        let talents = upgrade_options(&squad, member, SlotType::Talent, None);

        let valid: Vec<&str> = talents.valid.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(valid, vec!["outmaneuver", "elusive", "predator"]);
        assert!(talents.invalid.is_empty());

        let force = upgrade_options(&squad, member, SlotType::ForcePower, None);
        assert_eq!(force.valid.len(), 1);
        assert_eq!(force.invalid, vec![(catalog.upgrade("hate").unwrap(), Verdict::RestrictionsNotMet)]);
    }
}
