//! Restriction evaluation
//!
//! A card's restriction sets form an AND of OR-groups: every set must hold,
//! and a set holds when any one of its restrictions does.

mod context;

pub use context::RestrictionContext;

use crate::catalog::{Restriction, RestrictionSet};

/// Whether a single restriction holds
pub fn restriction_met(restriction: &Restriction, ctx: &RestrictionContext<'_>) -> bool {
    match restriction {
        Restriction::Factions { factions } => factions.contains(&ctx.faction),
        Restriction::Action { action } => ctx.loadout.has_action(action),
        Restriction::Ships { ships } => ships.iter().any(|id| *id == ctx.ship.id),
        Restriction::Sizes { sizes } => sizes.contains(&ctx.ship.size),
        Restriction::Names { names } => names.iter().any(|name| ctx.has_name(name)),
        Restriction::Arcs { arcs } => arcs.iter().any(|arc| ctx.ship.has_arc(*arc)),
        Restriction::ForceSides { force_sides } => {
            force_sides.iter().any(|side| ctx.loadout.has_force_side(*side))
        }
    }
}

/// Whether any restriction of the set holds
pub fn is_satisfied(set: &RestrictionSet, ctx: &RestrictionContext<'_>) -> bool {
    set.any_of.iter().any(|r| restriction_met(r, ctx))
}

/// Whether every set holds; no sets means no restrictions
pub fn all_satisfied(sets: &[RestrictionSet], ctx: &RestrictionContext<'_>) -> bool {
    sets.iter().all(|set| is_satisfied(set, ctx))
}
