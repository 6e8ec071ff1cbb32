//! GrantSource - Trait and implementations for loadout providers
//!
//! A member's loadout (slots, actions, force sides) is rebuilt from scratch
//! on every query by applying each source in priority order.

mod hardpoint;
mod pilot;
mod upgrade;

pub use hardpoint::HardpointSource;
pub use pilot::PilotSource;
pub use upgrade::UpgradeSource;

use crate::loadout::Loadout;

/// Trait for anything that contributes to a member's loadout
pub trait GrantSource {
    /// Identifier for this source (card id or rule name), recorded in
    /// [`Loadout::sources`]
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// - Printed pilot/ship bars: -100
    /// - Equipped upgrades: 0
    /// - Ship ability rules: 100
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's grants to the loadout
    fn apply(&self, loadout: &mut Loadout);
}
