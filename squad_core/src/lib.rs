//! squad_core - Legality and cost engine for miniatures squad building
//!
//! This library provides:
//! - Catalog: Immutable ship, pilot and upgrade cards
//! - Loadout: Slots, actions and force sides a member has after all grants
//! - Legality: Verdicts for equipping an upgrade, and squad self-repair
//! - Cost: Fixed and table-driven point costs
//! - Squad: The mutable roster, its persistence records and XWS export

pub mod catalog;
pub mod config;
pub mod cost;
pub mod legality;
pub mod loadout;
pub mod prelude;
pub mod restriction;
pub mod slots;
pub mod source;
pub mod squad;
pub mod types;

// Re-export core types for convenience
pub use catalog::{Card, Catalog, CatalogError, CatalogFile, Pilot, PointCost, Ship, Upgrade};
pub use config::{default_catalog, load_catalog, ConfigError, RulesConfig};
pub use legality::{LimitStatus, UpgradeOptions, Verdict};
pub use loadout::Loadout;
pub use source::GrantSource;
pub use squad::{Member, MemberRecord, Mutation, SaveHook, Squad, SquadError, SquadEvent, SquadRecord, XwsSquad};
pub use types::{Action, ActionType, Faction, ForceSide, ShipSize, SlotType};
