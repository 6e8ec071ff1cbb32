//! Core vocabulary shared by catalog cards and the legality engine
//!
//! Names serialize in lowercase without separators so they line up with
//! XWS identifiers ("rebelalliance", "forcepower", "barrelroll").

use serde::{Deserialize, Serialize};
use std::fmt;

/// Squad faction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    RebelAlliance,
    GalacticEmpire,
    ScumAndVillainy,
    Resistance,
    FirstOrder,
    GalacticRepublic,
    SeparatistAlliance,
}

impl Faction {
    /// Get all factions
    pub fn all() -> &'static [Faction] {
        &[
            Faction::RebelAlliance,
            Faction::GalacticEmpire,
            Faction::ScumAndVillainy,
            Faction::Resistance,
            Faction::FirstOrder,
            Faction::GalacticRepublic,
            Faction::SeparatistAlliance,
        ]
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Faction::RebelAlliance => "Rebel Alliance",
            Faction::GalacticEmpire => "Galactic Empire",
            Faction::ScumAndVillainy => "Scum and Villainy",
            Faction::Resistance => "Resistance",
            Faction::FirstOrder => "First Order",
            Faction::GalacticRepublic => "Galactic Republic",
            Faction::SeparatistAlliance => "Separatist Alliance",
        };
        f.write_str(name)
    }
}

/// Upgrade slot type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Talent,
    ForcePower,
    Sensor,
    Cannon,
    Turret,
    Torpedo,
    Missile,
    Tech,
    Crew,
    Gunner,
    Astromech,
    Device,
    Illicit,
    Modification,
    Title,
    Configuration,
    Command,
    Cargo,
    Hardpoint,
    Team,
    TacticalRelay,
}

impl SlotType {
    /// XWS identifier of this slot type
    pub fn xws(&self) -> &'static str {
        match self {
            SlotType::Talent => "talent",
            SlotType::ForcePower => "forcepower",
            SlotType::Sensor => "sensor",
            SlotType::Cannon => "cannon",
            SlotType::Turret => "turret",
            SlotType::Torpedo => "torpedo",
            SlotType::Missile => "missile",
            SlotType::Tech => "tech",
            SlotType::Crew => "crew",
            SlotType::Gunner => "gunner",
            SlotType::Astromech => "astromech",
            SlotType::Device => "device",
            SlotType::Illicit => "illicit",
            SlotType::Modification => "modification",
            SlotType::Title => "title",
            SlotType::Configuration => "configuration",
            SlotType::Command => "command",
            SlotType::Cargo => "cargo",
            SlotType::Hardpoint => "hardpoint",
            SlotType::Team => "team",
            SlotType::TacticalRelay => "tacticalrelay",
        }
    }
}

/// Ship base size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipSize {
    Small,
    Medium,
    Large,
    Huge,
}

impl ShipSize {
    /// Key used by size-keyed cost tables
    pub fn key(&self) -> &'static str {
        match self {
            ShipSize::Small => "small",
            ShipSize::Medium => "medium",
            ShipSize::Large => "large",
            ShipSize::Huge => "huge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Focus,
    Evade,
    Lock,
    BarrelRoll,
    Boost,
    Calculate,
    Cloak,
    Coordinate,
    Jam,
    Reinforce,
    Reload,
    Rotate,
    Slam,
}

/// Action difficulty (colour printed on the action bar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    White,
    Red,
    Purple,
}

/// An action on a ship's action bar or granted by an upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionType,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Action {
    pub fn new(kind: ActionType, difficulty: Difficulty) -> Self {
        Action { kind, difficulty }
    }

    /// White action of the given type
    pub fn white(kind: ActionType) -> Self {
        Action::new(kind, Difficulty::White)
    }

    /// Red action of the given type
    pub fn red(kind: ActionType) -> Self {
        Action::new(kind, Difficulty::Red)
    }
}

/// Firing arc printed next to an attack value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcType {
    Front,
    Rear,
    FullFront,
    FullRear,
    Bullseye,
    SingleTurret,
    DoubleTurret,
}

/// Side of the Force a pilot or crew member is attuned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForceSide {
    Light,
    Dark,
}

/// Printed ship statistic kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Attack,
    Agility,
    Hull,
    Shields,
}

/// One printed statistic on a ship card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    #[serde(rename = "type")]
    pub kind: StatKind,
    pub value: u32,
    /// Arc for attack values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc: Option<ArcType>,
}
