use log::debug;

use crate::instance::Instance;

/// Searches every assignment for a satisfying one, stopping at the first. On success the
/// satisfying assignment is left installed; otherwise the instance holds the last enumerated
/// assignment (all false).
pub fn exists(instance: &mut Instance) -> bool {
    let mut odometer = Odometer::start(instance);
    loop {
        if instance.is_satisfied() {
            debug!(
                "satisfying assignment found after {} candidates",
                odometer.checked
            );
            return true;
        }
        if !odometer.advance(instance) {
            debug!("no satisfying assignment in {} candidates", odometer.checked);
            return false;
        }
    }
}

/// Evaluates every clause under every assignment and ORs the results together. Returns the
/// same answer as [`exists`] but always pays for the full enumeration.
pub fn exists_full(instance: &mut Instance) -> bool {
    let mut odometer = Odometer::start(instance);
    let mut decision = false;
    loop {
        decision |= instance.is_fully_satisfied();
        if !odometer.advance(instance) {
            debug!(
                "full enumeration of {} candidates: satisfiable={}",
                odometer.checked, decision
            );
            return decision;
        }
    }
}

/// Steps an instance's assignment through `{true, false}^n` in place.
///
/// The order matches a cartesian product over `[true, false]` with variable 1 as the most
/// significant position: all-true first, all-false last.
struct Odometer {
    checked: u128,
}

impl Odometer {
    fn start(instance: &mut Instance) -> Odometer {
        instance.values_mut().fill(true);
        Odometer { checked: 1 }
    }

    /// Moves to the next assignment. Returns false, leaving the assignment untouched, once the
    /// last one has been reached.
    fn advance(&mut self, instance: &mut Instance) -> bool {
        let values = instance.values_mut();
        match values.iter().rposition(|&v| v) {
            None => false,
            Some(pos) => {
                values[pos] = false;
                values[pos + 1..].fill(true);
                self.checked = self.checked.saturating_add(1);
                true
            }
        }
    }
}
