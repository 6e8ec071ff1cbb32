//! Mutation results handed back to the caller
//!
//! Mutations do not broadcast anything themselves; the caller decides how
//! to deliver the events.

use crate::legality::Verdict;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Observable change to a squad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SquadEvent {
    MemberUpdated { member: Uuid },
    SquadUpdated { squad: Uuid },
}

/// An upgrade removed because it stopped being legal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pruned {
    pub member: Uuid,
    pub upgrade: String,
    /// Why it no longer fits
    pub verdict: Verdict,
}

/// Result of a successful squad mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    /// Member that was targeted (or created)
    pub member: Uuid,
    /// Upgrades removed while restoring legality, in removal order
    pub pruned: Vec<Pruned>,
    /// Events to emit, in order
    pub events: Vec<SquadEvent>,
}

impl Mutation {
    pub(crate) fn new(squad: Uuid, member: Uuid, pruned: Vec<Pruned>) -> Self {
        Mutation {
            member,
            pruned,
            events: vec![
                SquadEvent::MemberUpdated { member },
                SquadEvent::SquadUpdated { squad },
            ],
        }
    }

    /// Whether an upgrade was pruned from any member
    pub fn was_pruned(&self, upgrade: &str) -> bool {
        self.pruned.iter().any(|p| p.upgrade == upgrade)
    }
}
