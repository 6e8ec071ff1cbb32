//! UpgradeSource - Grants from an equipped upgrade

use crate::catalog::{Grant, Upgrade};
use crate::loadout::Loadout;
use crate::source::GrantSource;

/// Grants printed on the active side of an equipped upgrade
pub struct UpgradeSource<'a> {
    pub upgrade: &'a Upgrade,
}

impl<'a> UpgradeSource<'a> {
    pub fn new(upgrade: &'a Upgrade) -> Self {
        UpgradeSource { upgrade }
    }
}

impl GrantSource for UpgradeSource<'_> {
    fn id(&self) -> &str {
        &self.upgrade.id
    }

    fn apply(&self, loadout: &mut Loadout) {
        for grant in &self.upgrade.primary_side().grants {
            match grant {
                Grant::Slot { slot, amount } => match amount {
                    1 => loadout.add_slot(*slot),
                    -1 => {
                        // Removing a slot that is not there is allowed
                        loadout.remove_slot(*slot);
                    }
                    _ => {}
                },
                Grant::Action { action } => loadout.actions.push(*action),
                Grant::Force { sides } => loadout.force_sides.extend(sides.iter().copied()),
            }
        }
    }
}
