use std::cell::Cell;
use std::rc::Rc;

/// Synchronous in-flight flag for the submit handler.
///
/// Reducer state only updates on the next render, so two submit events handled
/// against the same render would both see `Editing`. The flag is flipped in the
/// handler itself, before anything is spawned.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    in_flight: Rc<Cell<bool>>,
}

/// Held by the running submission. Dropping it releases the guard.
#[derive(Debug)]
pub struct InFlight {
    in_flight: Rc<Cell<bool>>,
}

impl SubmitGuard {
    /// `None` while another submission still holds the guard.
    pub fn try_acquire(&self) -> Option<InFlight> {
        if self.in_flight.replace(true) {
            return None;
        }
        Some(InFlight {
            in_flight: Rc::clone(&self.in_flight),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.in_flight.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_holder_at_a_time() {
        let guard = SubmitGuard::default();

        let held = guard.try_acquire();
        assert!(held.is_some());
        assert!(guard.is_busy());
        assert!(guard.try_acquire().is_none());

        drop(held);
        assert!(!guard.is_busy());
        assert!(guard.try_acquire().is_some());
    }

    #[test]
    fn clones_share_the_flag() {
        let guard = SubmitGuard::default();
        let other = guard.clone();

        let _held = guard.try_acquire().unwrap();
        assert!(other.try_acquire().is_none());
    }
}
