//! Per-representation dirty-flag tracking (§4.2 of the coherence protocol).

use std::collections::HashMap;

use crate::representation::RepresentationKey;

#[derive(Clone, Copy, Debug, Default)]
struct Entry {
    present: bool,
    up_to_date: bool,
}

/// Tracks, for every representation an image has ever materialized,
/// whether it is allocated (`present`) and whether its contents reflect the
/// most recent logical write (`up_to_date`).
///
/// No cross-device inference is made: each device's entries are
/// independent of every other device's.
#[derive(Default)]
pub(crate) struct CoherenceTracker {
    entries: HashMap<RepresentationKey, Entry>,
}

impl CoherenceTracker {
    pub(crate) fn new() -> CoherenceTracker {
        CoherenceTracker { entries: HashMap::new() }
    }

    pub(crate) fn mark_present(&mut self, key: RepresentationKey) {
        self.entries.entry(key).or_insert_with(Entry::default).present = true;
    }

    pub(crate) fn is_present(&self, key: &RepresentationKey) -> bool {
        self.entries.get(key).map_or(false, |e| e.present)
    }

    pub(crate) fn is_up_to_date(&self, key: &RepresentationKey) -> bool {
        self.entries.get(key).map_or(false, |e| e.up_to_date)
    }

    pub(crate) fn set_up_to_date(&mut self, key: &RepresentationKey, value: bool) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.up_to_date = value;
        } else if value {
            self.entries.insert(key.clone(), Entry { present: true, up_to_date: true });
        }
    }

    /// Any representation currently marked up-to-date, if one exists.
    ///
    /// By invariant I2, whenever any representation is present, this
    /// returns `Some`.
    pub(crate) fn any_up_to_date(&self) -> Option<RepresentationKey> {
        self.entries
            .iter()
            .find(|(_, e)| e.up_to_date)
            .map(|(k, _)| k.clone())
    }

    /// Clears the `up_to_date` flag on every present representation other
    /// than `key`.
    pub(crate) fn invalidate_others_except(&mut self, key: &RepresentationKey) {
        for (k, e) in self.entries.iter_mut() {
            if k != key && e.present {
                e.up_to_date = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These unit tests only cover the key-bookkeeping logic, so they stick
    // to `HostBuffer`, the one key that does not require a real `ocl::Queue`
    // to construct. Device-keyed behaviour is exercised end-to-end in
    // `crate::tests`, against a real platform.

    #[test]
    fn fresh_tracker_has_nothing_present() {
        let t = CoherenceTracker::new();
        assert!(!t.is_present(&RepresentationKey::HostBuffer));
        assert!(t.any_up_to_date().is_none());
    }

    #[test]
    fn mark_present_then_set_up_to_date() {
        let mut t = CoherenceTracker::new();
        t.mark_present(RepresentationKey::HostBuffer);
        assert!(t.is_present(&RepresentationKey::HostBuffer));
        assert!(!t.is_up_to_date(&RepresentationKey::HostBuffer));

        t.set_up_to_date(&RepresentationKey::HostBuffer, true);
        assert!(t.is_up_to_date(&RepresentationKey::HostBuffer));
        assert_eq!(t.any_up_to_date(), Some(RepresentationKey::HostBuffer));
    }

    #[test]
    fn invalidate_others_except_only_touches_present_entries() {
        let mut t = CoherenceTracker::new();
        t.mark_present(RepresentationKey::HostBuffer);
        t.set_up_to_date(&RepresentationKey::HostBuffer, true);

        t.mark_present(RepresentationKey::HostBuffer);
        t.invalidate_others_except(&RepresentationKey::HostBuffer);
        assert!(t.is_up_to_date(&RepresentationKey::HostBuffer));
    }
}
