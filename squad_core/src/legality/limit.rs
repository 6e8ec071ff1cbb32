//! Squad-wide card limits

use crate::catalog::{Card, Upgrade};
use crate::squad::Squad;
use serde::{Deserialize, Serialize};

/// How close a limited card is to its cap in a squad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitStatus {
    /// Another copy may be added
    Available,
    /// Exactly at the cap
    Met,
    /// Over the cap
    Exceeded,
}

/// Copies of a card name in the squad, counting pilots and equipped upgrades
///
/// Limits are shared by name, so a unique pilot and a unique crew card of
/// the same character count against each other. One equipped instance of
/// `excluding` (the upgrade being replaced) is left out of the count.
pub fn count_copies(squad: &Squad<'_>, name: &str, excluding: Option<&Upgrade>) -> usize {
    let mut skip = excluding.filter(|e| e.name == name).map(|e| e.id.as_str());
    let mut copies = 0;

    for member in squad.members() {
        copies += usize::from(member.pilot().name == name);
        for upgrade in member.upgrades().iter().filter(|u| u.name == name) {
            if skip == Some(upgrade.id.as_str()) {
                skip = None;
            } else {
                copies += 1;
            }
        }
    }
    copies
}

/// Limit status of a card in the squad, with `excluding` treated as unequipped
pub fn limit_status(squad: &Squad<'_>, card: Card<'_>, excluding: Option<&Upgrade>) -> LimitStatus {
    let limited = card.limited() as usize;
    if limited == 0 {
        return LimitStatus::Available;
    }

    let copies = count_copies(squad, card.name(), excluding);
    if copies < limited {
        LimitStatus::Available
    } else if copies == limited {
        LimitStatus::Met
    } else {
        LimitStatus::Exceeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_catalog;
    use crate::squad::SquadError;
    use crate::types::Faction;

    #[test]
    fn test_unique_pilot_and_crew_share_a_limit() {
        let catalog = default_catalog().unwrap();
        let han_pilot = catalog.pilot("hansolo").unwrap();
        let han_crew = catalog.upgrade("hansolocrew").unwrap();

        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Smugglers", 9);
        assert_eq!(limit_status(&squad, Card::Pilot(han_pilot), None), LimitStatus::Available);

        squad.add_member("hansolo").unwrap();
        assert_eq!(count_copies(&squad, "Han Solo", None), 1);
        assert_eq!(limit_status(&squad, Card::Pilot(han_pilot), None), LimitStatus::Met);
        assert_eq!(limit_status(&squad, Card::Upgrade(han_crew), None), LimitStatus::Met);

        let err = squad.add_member("hansolo").unwrap_err();
        assert!(matches!(err, SquadError::LimitReached { .. }));
    }

    #[test]
    fn test_unlimited_cards_are_always_available() {
        let catalog = default_catalog().unwrap();
        let escort = catalog.pilot("bluesquadronescort").unwrap();

        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Escorts", 9);
        for _ in 0..4 {
            squad.add_member("bluesquadronescort").unwrap();
        }
        assert_eq!(count_copies(&squad, &escort.name, None), 4);
        assert_eq!(limit_status(&squad, Card::Pilot(escort), None), LimitStatus::Available);
    }

    #[test]
    fn test_replaced_upgrade_is_not_counted() {
        let catalog = default_catalog().unwrap();
        let r2d2 = catalog.upgrade("r2d2").unwrap();
        let r2 = catalog.upgrade("r2astromech").unwrap();

        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Astromechs", 9);
        let luke = squad.add_member("lukeskywalker").unwrap().member;
        squad.add_upgrade(luke, "r2d2").unwrap();

        assert_eq!(count_copies(&squad, "R2-D2", None), 1);
        assert_eq!(count_copies(&squad, "R2-D2", Some(r2d2)), 0);
        // Excluding a card with another name leaves the count alone
        assert_eq!(count_copies(&squad, "R2-D2", Some(r2)), 1);

        assert_eq!(limit_status(&squad, Card::Upgrade(r2d2), None), LimitStatus::Met);
        assert_eq!(limit_status(&squad, Card::Upgrade(r2d2), Some(r2d2)), LimitStatus::Available);
    }
}
