//! Squad - The mutable roster of members
//!
//! Every mutation is checked, applied, then followed by a pruning pass that
//! removes upgrades the change made illegal, so the squad is always in a
//! state where every equipped upgrade re-tests as valid.

mod event;
mod member;
mod record;
mod xws;

pub use event::{Mutation, Pruned, SquadEvent};
pub use member::Member;
pub use record::{MemberRecord, SaveHook, SquadRecord};
pub use xws::{XwsPilot, XwsSquad, XWS_VERSION};

use crate::catalog::{Card, Catalog, CatalogError, Upgrade};
use crate::legality::{self, LimitStatus, UpgradeOptions, Verdict};
use crate::types::{Faction, SlotType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Squad operation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquadError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Member {0} is not in this squad")]
    UnknownMember(Uuid),
    #[error("Upgrade {upgrade} is not equipped on member {member}")]
    NotEquipped { member: Uuid, upgrade: String },
    #[error("Cannot equip {upgrade}: {verdict}")]
    Rejected { upgrade: String, verdict: Verdict },
    #[error("Pilot {pilot} does not fly for the {faction}")]
    FactionMismatch { pilot: String, faction: Faction },
    #[error("Pilot {pilot} has reached its squad limit")]
    LimitReached { pilot: String },
}

/// A faction roster built from catalog cards
pub struct Squad<'c> {
    catalog: &'c Catalog,
    id: Uuid,
    name: String,
    faction: Faction,
    members: Vec<Member<'c>>,
    rng: StdRng,
    save_hook: Option<Box<dyn SaveHook + 'c>>,
}

impl<'c> Squad<'c> {
    /// Create an empty squad
    pub fn new(catalog: &'c Catalog, faction: Faction, name: impl Into<String>) -> Self {
        Self::with_rng(catalog, faction, name.into(), StdRng::from_entropy())
    }

    /// Create an empty squad with reproducible identifiers
    pub fn with_seed(catalog: &'c Catalog, faction: Faction, name: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(catalog, faction, name.into(), StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: &'c Catalog, faction: Faction, name: String, mut rng: StdRng) -> Self {
        let id = random_uuid(&mut rng);
        Squad {
            catalog,
            id,
            name,
            faction,
            members: Vec::new(),
            rng,
            save_hook: None,
        }
    }

    /// Rebuild a squad from its record
    ///
    /// Upgrades that are no longer legal (for example after a catalog
    /// update) are pruned and logged. A pilot flown more often than its
    /// limit allows cannot be repaired and fails with
    /// [`SquadError::LimitReached`].
    pub fn from_record(catalog: &'c Catalog, record: &SquadRecord) -> Result<Self, SquadError> {
        let mut squad = Squad {
            catalog,
            id: record.id,
            name: record.name.clone(),
            faction: record.faction,
            members: Vec::with_capacity(record.members.len()),
            rng: StdRng::from_entropy(),
            save_hook: None,
        };

        for member_record in &record.members {
            let member = Member::from_record(catalog, member_record)?;
            if member.ship().faction != squad.faction {
                return Err(SquadError::FactionMismatch {
                    pilot: member.pilot().id.clone(),
                    faction: squad.faction,
                });
            }
            squad.members.push(member);
        }

        let pruned = squad.prune();
        if !pruned.is_empty() {
            log::warn!(
                "Squad {} ({}) needed repair on load: {} upgrade(s) removed",
                squad.name,
                squad.id,
                pruned.len()
            );
        }

        // Over-limit upgrades are pruned above, so anything still over is a pilot
        if let Some(member) = squad
            .members
            .iter()
            .find(|m| squad.limit_status(Card::Pilot(m.pilot())) == LimitStatus::Exceeded)
        {
            log::warn!(
                "Squad {} ({}) flies {} more times than its limit allows",
                squad.name,
                squad.id,
                member.pilot().id
            );
            return Err(SquadError::LimitReached {
                pilot: member.pilot().id.clone(),
            });
        }
        Ok(squad)
    }

    /// Snapshot of the squad as ids
    pub fn record(&self) -> SquadRecord {
        SquadRecord {
            id: self.id,
            name: self.name.clone(),
            faction: self.faction,
            members: self.members.iter().map(Member::record).collect(),
        }
    }

    /// Install the hook called after every successful mutation
    pub fn set_save_hook(&mut self, hook: impl SaveHook + 'c) {
        self.save_hook = Some(Box::new(hook));
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faction(&self) -> Faction {
        self.faction
    }

    /// Members in the order they were added
    pub fn members(&self) -> &[Member<'c>] {
        &self.members
    }

    pub fn member(&self, uuid: Uuid) -> Option<&Member<'c>> {
        self.members.iter().find(|m| m.uuid() == uuid)
    }

    /// Total points of every member
    pub fn point_cost(&self) -> u32 {
        self.members.iter().map(Member::point_cost).sum()
    }

    /// Points left under the rules' limit (negative when over)
    pub fn points_remaining(&self) -> i64 {
        i64::from(self.catalog.rules().point_limit) - i64::from(self.point_cost())
    }

    pub fn is_within_point_limit(&self) -> bool {
        self.points_remaining() >= 0
    }

    /// Limit status of any card in this squad
    pub fn limit_status(&self, card: Card<'_>) -> LimitStatus {
        legality::limit_status(self, card, None)
    }

    /// Verdict for equipping an upgrade on a member, by id
    pub fn validity(&self, member: Uuid, upgrade: &str, replacing: Option<&str>) -> Result<Verdict, SquadError> {
        let member = self.member(member).ok_or(SquadError::UnknownMember(member))?;
        let candidate = self.catalog.require_upgrade(upgrade)?;
        let replacing = match replacing {
            Some(id) => Some(self.equipped(member, id)?),
            None => None,
        };
        Ok(legality::validity(self, member, candidate, replacing))
    }

    /// Catalog upgrades for one slot type of a member, split by verdict
    pub fn upgrade_options(
        &self,
        member: Uuid,
        slot: SlotType,
        replacing: Option<&str>,
    ) -> Result<UpgradeOptions<'c>, SquadError> {
        let member = self.member(member).ok_or(SquadError::UnknownMember(member))?;
        let replacing = match replacing {
            Some(id) => Some(self.equipped(member, id)?),
            None => None,
        };
        Ok(legality::upgrade_options(self, member, slot, replacing))
    }

    /// Add a pilot as a new member
    pub fn add_member(&mut self, pilot: &str) -> Result<Mutation, SquadError> {
        let catalog = self.catalog;
        let pilot = catalog.require_pilot(pilot)?;

        if catalog.faction_of(pilot) != Some(self.faction) {
            return Err(SquadError::FactionMismatch {
                pilot: pilot.id.clone(),
                faction: self.faction,
            });
        }
        if self.limit_status(Card::Pilot(pilot)) != LimitStatus::Available {
            return Err(SquadError::LimitReached {
                pilot: pilot.id.clone(),
            });
        }

        let uuid = random_uuid(&mut self.rng);
        self.members.push(Member::new(uuid, catalog, pilot)?);
        log::debug!("Added {} as member {} of squad {}", pilot.id, uuid, self.id);

        Ok(self.commit(uuid))
    }

    /// Remove a member and everything it carries
    pub fn remove_member(&mut self, uuid: Uuid) -> Result<Mutation, SquadError> {
        let index = self.member_index(uuid)?;
        let member = self.members.remove(index);
        log::debug!("Removed member {} ({}) from squad {}", uuid, member.pilot().id, self.id);

        Ok(self.commit(uuid))
    }

    /// Equip an upgrade on a member
    ///
    /// The upgrade must be valid for the member; otherwise the squad is left
    /// untouched and the verdict is returned as [`SquadError::Rejected`].
    pub fn add_upgrade(&mut self, member: Uuid, upgrade: &str) -> Result<Mutation, SquadError> {
        let catalog = self.catalog;
        let index = self.member_index(member)?;
        let candidate = catalog.require_upgrade(upgrade)?;

        let verdict = legality::validity(self, &self.members[index], candidate, None);
        if !verdict.is_valid() {
            return Err(SquadError::Rejected {
                upgrade: candidate.id.clone(),
                verdict,
            });
        }

        self.members[index].push_upgrade(candidate);
        log::debug!("Equipped {} on member {}", candidate.id, member);

        Ok(self.commit(member))
    }

    /// Swap an equipped upgrade for another
    pub fn replace_upgrade(&mut self, member: Uuid, old: &str, new: &str) -> Result<Mutation, SquadError> {
        let catalog = self.catalog;
        let index = self.member_index(member)?;
        let current = self.equipped(&self.members[index], old)?;
        let candidate = catalog.require_upgrade(new)?;

        let verdict = legality::validity(self, &self.members[index], candidate, Some(current));
        if !verdict.is_valid() {
            return Err(SquadError::Rejected {
                upgrade: candidate.id.clone(),
                verdict,
            });
        }

        let target = &mut self.members[index];
        target.take_upgrade(old);
        target.push_upgrade(candidate);
        log::debug!("Replaced {} with {} on member {}", old, new, member);

        Ok(self.commit(member))
    }

    /// Unequip an upgrade from a member
    pub fn remove_upgrade(&mut self, member: Uuid, upgrade: &str) -> Result<Mutation, SquadError> {
        let index = self.member_index(member)?;
        if self.members[index].take_upgrade(upgrade).is_none() {
            return Err(SquadError::NotEquipped {
                member,
                upgrade: upgrade.to_string(),
            });
        }
        log::debug!("Unequipped {} from member {}", upgrade, member);

        Ok(self.commit(member))
    }

    fn member_index(&self, uuid: Uuid) -> Result<usize, SquadError> {
        self.members
            .iter()
            .position(|m| m.uuid() == uuid)
            .ok_or(SquadError::UnknownMember(uuid))
    }

    fn equipped(&self, member: &Member<'c>, id: &str) -> Result<&'c Upgrade, SquadError> {
        member
            .upgrades()
            .iter()
            .copied()
            .find(|u| u.id == id)
            .ok_or_else(|| SquadError::NotEquipped {
                member: member.uuid(),
                upgrade: id.to_string(),
            })
    }

    /// Prune, restore slot order, save, and describe the change
    fn commit(&mut self, member: Uuid) -> Mutation {
        let pruned = self.prune();

        let catalog = self.catalog;
        for m in &mut self.members {
            m.sort_upgrades(catalog.rules());
        }

        if let Some(hook) = self.save_hook.as_mut() {
            let record = SquadRecord {
                id: self.id,
                name: self.name.clone(),
                faction: self.faction,
                members: self.members.iter().map(Member::record).collect(),
            };
            hook.save(&record);
        }

        Mutation::new(self.id, member, pruned)
    }

    /// Remove invalid upgrades until every equipped upgrade is valid
    ///
    /// One upgrade is removed per pass, so the loop runs at most once per
    /// equipped upgrade.
    fn prune(&mut self) -> Vec<Pruned> {
        let equipped: usize = self.members.iter().map(|m| m.upgrades().len()).sum();
        let mut pruned = Vec::new();

        for _ in 0..equipped {
            let Some(invalid) = legality::first_invalid(self) else {
                break;
            };
            let member = &mut self.members[invalid.member_index];
            let upgrade = member.remove_upgrade_at(invalid.upgrade_index);
            log::info!(
                "Pruned {} from member {}: {}",
                upgrade.id,
                member.uuid(),
                invalid.verdict
            );
            pruned.push(Pruned {
                member: member.uuid(),
                upgrade: upgrade.id.clone(),
                verdict: invalid.verdict,
            });
        }

        pruned
    }
}

impl fmt::Debug for Squad<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Squad")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("faction", &self.faction)
            .field("members", &self.members)
            .finish()
    }
}

fn random_uuid(rng: &mut StdRng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_catalog;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_seeded_ids_are_reproducible() {
        let catalog = default_catalog().unwrap();
        let mut a = Squad::with_seed(&catalog, Faction::RebelAlliance, "A", 42);
        let mut b = Squad::with_seed(&catalog, Faction::RebelAlliance, "B", 42);

        assert_eq!(a.id(), b.id());
        let first = a.add_member("wedgeantilles").unwrap().member;
        let second = b.add_member("wedgeantilles").unwrap().member;
        assert_eq!(first, second);
        assert_eq!(first.get_version_num(), 4);
    }

    #[test]
    fn test_add_member_checks_faction() {
        let catalog = default_catalog().unwrap();
        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Rebels", 1);

        let err = squad.add_member("darthvader").unwrap_err();
        assert_eq!(
            err,
            SquadError::FactionMismatch {
                pilot: "darthvader".to_string(),
                faction: Faction::RebelAlliance
            }
        );
        assert!(matches!(
            squad.add_member("nobody"),
            Err(SquadError::Catalog(CatalogError::UnknownPilot(_)))
        ));
        assert!(squad.members().is_empty());
    }

    #[test]
    fn test_mutation_events_in_order() {
        let catalog = default_catalog().unwrap();
        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Rebels", 1);

        let added = squad.add_member("lukeskywalker").unwrap();
        assert_eq!(
            added.events,
            vec![
                SquadEvent::MemberUpdated { member: added.member },
                SquadEvent::SquadUpdated { squad: squad.id() },
            ]
        );

        let equipped = squad.add_upgrade(added.member, "r2d2").unwrap();
        assert_eq!(equipped.events.len(), 2);
        assert!(equipped.pruned.is_empty());
    }

    #[test]
    fn test_rejected_upgrade_leaves_squad_untouched() {
        let catalog = default_catalog().unwrap();
        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Rebels", 1);
        let wedge = squad.add_member("wedgeantilles").unwrap().member;

        let err = squad.add_upgrade(wedge, "perceptivecopilot").unwrap_err();
        assert_eq!(
            err,
            SquadError::Rejected {
                upgrade: "perceptivecopilot".to_string(),
                verdict: Verdict::SlotsNotAvailable
            }
        );
        assert!(squad.member(wedge).unwrap().upgrades().is_empty());
    }

    #[test]
    fn test_remove_errors() {
        let catalog = default_catalog().unwrap();
        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Rebels", 1);
        let wedge = squad.add_member("wedgeantilles").unwrap().member;

        assert_eq!(
            squad.remove_upgrade(wedge, "r2d2").unwrap_err(),
            SquadError::NotEquipped {
                member: wedge,
                upgrade: "r2d2".to_string()
            }
        );
        assert_eq!(
            squad.remove_member(Uuid::nil()).unwrap_err(),
            SquadError::UnknownMember(Uuid::nil())
        );
    }

    #[test]
    fn test_upgrades_sorted_by_slot_then_name() {
        let catalog = default_catalog().unwrap();
        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Rebels", 1);
        let luke = squad.add_member("lukeskywalker").unwrap().member;

        squad.add_upgrade(luke, "servomotorsfoils").unwrap();
        squad.add_upgrade(luke, "protontorpedoes").unwrap();
        squad.add_upgrade(luke, "r2d2").unwrap();
        squad.add_upgrade(luke, "predator").unwrap();

        let order: Vec<&str> = squad
            .member(luke)
            .unwrap()
            .upgrades()
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(order, vec!["predator", "r2d2", "protontorpedoes", "servomotorsfoils"]);
    }

    #[test]
    fn test_replace_upgrade() {
        let catalog = default_catalog().unwrap();
        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Rebels", 1);
        let luke = squad.add_member("lukeskywalker").unwrap().member;
        squad.add_upgrade(luke, "r2astromech").unwrap();

        // Slot is full, so adding fails but replacing works
        assert_eq!(
            squad.validity(luke, "r2d2", None).unwrap(),
            Verdict::SlotsNotAvailable
        );
        assert_eq!(
            squad.validity(luke, "r2d2", Some("r2astromech")).unwrap(),
            Verdict::Valid
        );

        squad.replace_upgrade(luke, "r2astromech", "r2d2").unwrap();
        let member = squad.member(luke).unwrap();
        assert!(member.has_upgrade("r2d2"));
        assert!(!member.has_upgrade("r2astromech"));

        assert!(matches!(
            squad.replace_upgrade(luke, "r2astromech", "r2d2"),
            Err(SquadError::NotEquipped { .. })
        ));
    }

    #[test]
    fn test_save_hook_sees_committed_state() {
        let catalog = default_catalog().unwrap();
        let saves: Rc<RefCell<Vec<SquadRecord>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&saves);

        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Rebels", 1);
        squad.set_save_hook(move |record: &SquadRecord| sink.borrow_mut().push(record.clone()));

        let luke = squad.add_member("lukeskywalker").unwrap().member;
        squad.add_upgrade(luke, "protontorpedoes").unwrap();
        assert!(squad.add_upgrade(luke, "protontorpedoes").is_err());

        let saves = saves.borrow();
        assert_eq!(saves.len(), 2);
        assert_eq!(saves[1], squad.record());
        assert_eq!(saves[1].members[0].upgrades, vec!["protontorpedoes".to_string()]);
    }

    #[test]
    fn test_point_limit() {
        let catalog = default_catalog().unwrap();
        let mut squad = Squad::with_seed(&catalog, Faction::RebelAlliance, "Heavy", 1);

        squad.add_member("hansolo").unwrap();
        squad.add_member("lukeskywalker").unwrap();
        squad.add_member("wedgeantilles").unwrap();
        assert_eq!(squad.point_cost(), 80 + 62 + 52);
        assert_eq!(squad.points_remaining(), 6);
        assert!(squad.is_within_point_limit());

        squad.add_member("bluesquadronescort").unwrap();
        assert_eq!(squad.points_remaining(), -35);
        assert!(!squad.is_within_point_limit());
    }
}
