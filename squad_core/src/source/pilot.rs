//! PilotSource - Printed pilot and ship bars

use crate::catalog::{Pilot, Ship};
use crate::loadout::Loadout;
use crate::source::GrantSource;

/// Upgrade bar of the pilot, action bar of the ship, force of the pilot
pub struct PilotSource<'a> {
    pub pilot: &'a Pilot,
    pub ship: &'a Ship,
}

impl<'a> PilotSource<'a> {
    pub fn new(pilot: &'a Pilot, ship: &'a Ship) -> Self {
        PilotSource { pilot, ship }
    }
}

impl GrantSource for PilotSource<'_> {
    fn id(&self) -> &str {
        &self.pilot.id
    }

    fn priority(&self) -> i32 {
        -100 // Printed bars come first
    }

    fn apply(&self, loadout: &mut Loadout) {
        loadout.slots.extend(self.pilot.slots.iter().copied());
        loadout.actions.extend(self.ship.actions.iter().copied());
        loadout.force_sides.extend(self.pilot.force_sides().iter().copied());
    }
}
