//! Point costs in context
//!
//! A printed cost is either a number or a table keyed on something about
//! the member that equips the card. Member totals are recomputed on every
//! call because one upgrade can change another's context.

use crate::catalog::{Card, CostKey, PointCost, Upgrade};
use crate::squad::Member;
use crate::types::StatKind;

/// Resolve a printed cost against a member
pub fn resolve(cost: &PointCost, member: &Member<'_>) -> u32 {
    match cost {
        PointCost::Fixed(points) => *points,
        PointCost::Variable(table) => {
            let ship = member.ship();
            match table.key {
                CostKey::Ship => table.lookup(&ship.id),
                CostKey::Size => table.lookup(ship.size.key()),
                CostKey::Agility => match ship.stat(StatKind::Agility) {
                    Some(agility) => table.lookup(&agility.to_string()),
                    None => table.base,
                },
                CostKey::Initiative => table.lookup(&member.pilot().initiative.to_string()),
            }
        }
    }
}

/// Cost of any card when flown or equipped by this member
pub fn point_cost(card: Card<'_>, member: &Member<'_>) -> u32 {
    match card {
        Card::Ship(_) => 0,
        Card::Pilot(pilot) => resolve(&pilot.cost, member),
        Card::Upgrade(upgrade) => resolve(&upgrade.cost, member),
    }
}

/// Cost of an upgrade on this member
pub fn upgrade_cost(upgrade: &Upgrade, member: &Member<'_>) -> u32 {
    resolve(&upgrade.cost, member)
}

/// Pilot cost plus every equipped upgrade
pub fn member_cost(member: &Member<'_>) -> u32 {
    let pilot = resolve(&member.pilot().cost, member);
    member
        .upgrades()
        .iter()
        .fold(pilot, |total, upgrade| total + upgrade_cost(upgrade, member))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_catalog;
    use uuid::Uuid;

    #[test]
    fn test_agility_keyed_cost() {
        let catalog = default_catalog().unwrap();
        let hull = catalog.upgrade("hullupgrade").unwrap();

        // X-wing agility 2, Y-wing agility 1, TIE Advanced agility 3
        let luke = Member::new(Uuid::nil(), &catalog, catalog.pilot("lukeskywalker").unwrap()).unwrap();
        let horton = Member::new(Uuid::nil(), &catalog, catalog.pilot("hortonsalm").unwrap()).unwrap();
        let vader = Member::new(Uuid::nil(), &catalog, catalog.pilot("darthvader").unwrap()).unwrap();

        assert_eq!(upgrade_cost(hull, &luke), 5);
        assert_eq!(upgrade_cost(hull, &horton), 3);
        assert_eq!(upgrade_cost(hull, &vader), 7);
    }

    #[test]
    fn test_initiative_and_size_keyed_cost() {
        let catalog = default_catalog().unwrap();
        let reflexes = catalog.upgrade("supernaturalreflexes").unwrap();
        let elusive = catalog.upgrade("elusive").unwrap();

        let luke = Member::new(Uuid::nil(), &catalog, catalog.pilot("lukeskywalker").unwrap()).unwrap();
        let han = Member::new(Uuid::nil(), &catalog, catalog.pilot("hansolo").unwrap()).unwrap();

        assert_eq!(point_cost(Card::Upgrade(reflexes), &luke), 16);
        assert_eq!(point_cost(Card::Upgrade(elusive), &luke), 3);
        assert_eq!(point_cost(Card::Upgrade(elusive), &han), 5);
        assert_eq!(point_cost(Card::Pilot(han.pilot()), &han), 80);
        assert_eq!(point_cost(Card::Ship(han.ship()), &han), 0);
    }
}
