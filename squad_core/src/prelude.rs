//! Prelude module for convenient imports
//!
//! ```rust
//! use squad_core::prelude::*;
//! ```

// Catalog
pub use crate::catalog::{Card, Catalog, Pilot, Ship, Upgrade};
pub use crate::config::default_catalog;

// Squads
pub use crate::squad::{Member, Mutation, Squad, SquadError, SquadEvent, SquadRecord, XwsSquad};

// Legality
pub use crate::legality::{LimitStatus, Verdict};

// Core types
pub use crate::types::{Faction, SlotType};
