//! Held-key reconciliation
//!
//! Tracks which keys the simulator currently considers "down" and, given a
//! newly requested set, emits the release/press delta against the backend.

use crate::backend::{InjectResult, InjectionBackend, KeyCode};

/// Tracks the set of held keys and reconciles it against requested sets.
///
/// The held set is owned exclusively by one tracker value; callers on multiple
/// threads must serialize access themselves. A plain `Vec` backs the set:
/// cardinality is bounded by the key map (tens of entries), so linear scans
/// beat a hash set here.
#[derive(Debug, Default)]
pub struct KeyHoldTracker {
    held: Vec<KeyCode>,
}

impl KeyHoldTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently considered held, in the order they were adopted.
    pub fn held(&self) -> &[KeyCode] {
        &self.held
    }

    /// Emit a press immediately followed by a release for one key.
    ///
    /// Never touches the held set.
    pub fn tap_once<B: InjectionBackend>(
        &mut self,
        backend: &mut B,
        code: KeyCode,
    ) -> InjectResult<()> {
        backend.key_down(code)?;
        backend.key_up(code)
    }

    /// Transition the backend from the current held set to `requested`.
    ///
    /// Releases every held key no longer requested, then presses every key of
    /// the (deduplicated) request. Presses are re-sent for keys already held:
    /// the repeated press stream is what lets a polled target application keep
    /// an action firing, so it must not be suppressed. All releases of one
    /// call happen before any of its presses, which keeps backends that reject
    /// overlapping down states for mutually exclusive keys happy.
    ///
    /// An empty request releases everything and clears the set.
    pub fn reconcile<B: InjectionBackend>(
        &mut self,
        backend: &mut B,
        requested: &[KeyCode],
    ) -> InjectResult<()> {
        if requested.is_empty() {
            for &code in &self.held {
                backend.key_up(code)?;
            }
            self.held.clear();
            return Ok(());
        }

        let requested = dedup(requested);

        for &code in self.held.iter().filter(|c| !requested.contains(*c)) {
            backend.key_up(code)?;
        }

        for &code in &requested {
            backend.key_down(code)?;
        }

        self.held = requested;
        Ok(())
    }
}

/// Collapse duplicates, keeping the first occurrence of each code.
fn dedup(codes: &[KeyCode]) -> Vec<KeyCode> {
    let mut out = Vec::with_capacity(codes.len());
    for &code in codes {
        if !out.contains(&code) {
            out.push(code);
        }
    }
    out
}
