//! Legality - May this upgrade go on this member, and if not, why
//!
//! Checks run in a fixed order and the first failure wins:
//! restrictions, slots, squad limit, duplicates.

mod limit;
mod options;

pub use limit::{count_copies, limit_status, LimitStatus};
pub use options::{upgrade_options, UpgradeOptions};

use crate::catalog::{Card, Upgrade};
use crate::restriction::{self, RestrictionContext};
use crate::slots;
use crate::squad::{Member, Squad};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a legality query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    AlreadyEquipped,
    SlotsNotAvailable,
    LimitExceeded,
    RestrictionsNotMet,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::Valid => "valid",
            Verdict::AlreadyEquipped => "already equipped",
            Verdict::SlotsNotAvailable => "no slot available",
            Verdict::LimitExceeded => "squad limit reached",
            Verdict::RestrictionsNotMet => "restrictions not met",
        };
        f.write_str(text)
    }
}

/// Judge a candidate upgrade for a member of the squad
///
/// `replacing` is an equipped upgrade the candidate would take the place of.
/// Passing an equipped upgrade as both candidate and `replacing` re-tests it
/// as if it were being equipped fresh.
pub fn validity(
    squad: &Squad<'_>,
    member: &Member<'_>,
    candidate: &Upgrade,
    replacing: Option<&Upgrade>,
) -> Verdict {
    let side = candidate.primary_side();
    let is_replacing_itself = replacing.map_or(false, |r| r.id == candidate.id);

    if !side.restrictions.is_empty() {
        let ctx = RestrictionContext::new(squad, member, replacing);
        if !restriction::all_satisfied(&side.restrictions, &ctx) {
            return Verdict::RestrictionsNotMet;
        }
    }

    if !slots::fits(member, candidate, replacing, squad.catalog().rules()) {
        return Verdict::SlotsNotAvailable;
    }

    if limit_status(squad, Card::Upgrade(candidate), replacing) != LimitStatus::Available {
        return Verdict::LimitExceeded;
    }

    let copies = member.upgrades().iter().filter(|u| u.id == candidate.id).count();
    let allowed = usize::from(is_replacing_itself);
    if copies > allowed {
        return Verdict::AlreadyEquipped;
    }

    Verdict::Valid
}

/// Location of an equipped upgrade that no longer passes `validity`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invalid {
    pub member_index: usize,
    pub upgrade_index: usize,
    pub verdict: Verdict,
}

/// First equipped upgrade in the squad that fails when re-tested against itself
pub fn first_invalid(squad: &Squad<'_>) -> Option<Invalid> {
    for (member_index, member) in squad.members().iter().enumerate() {
        for (upgrade_index, upgrade) in member.upgrades().iter().enumerate() {
            let verdict = validity(squad, member, upgrade, Some(*upgrade));
            if !verdict.is_valid() {
                return Some(Invalid {
                    member_index,
                    upgrade_index,
                    verdict,
                });
            }
        }
    }
    None
}
