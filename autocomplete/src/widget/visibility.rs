//! Decides when the suggestion list is shown.

use log::{debug, trace};

use super::candidates::Candidates;
use super::props::ShowResultsFn;

/// The widget's own copy of the caller's candidate list.
#[derive(Debug)]
pub struct DataMirror<T> {
    items: Candidates<T>,
    /// Number of replacements so far.
    generation: u64,
}

impl<T> Default for DataMirror<T> {
    fn default() -> Self {
        Self {
            items: Candidates::empty(),
            generation: 0,
        }
    }
}

impl<T> DataMirror<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mirror when `new` is a different list.
    ///
    /// Only identity is compared. Returns whether the mirror changed.
    pub fn on_data_changed(&mut self, new: &Candidates<T>) -> bool {
        if self.items.same(new) {
            return false;
        }
        debug!(
            "Autocomplete data changed: {} -> {} items",
            self.items.len(),
            new.len()
        );
        self.items = new.clone();
        self.generation += 1;
        true
    }

    pub fn items(&self) -> &Candidates<T> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Whether the suggestion list should be visible.
pub fn compute_visibility(hide_override: bool, mirrored_len: usize) -> bool {
    !hide_override && mirrored_len > 0
}

/// Report the visibility to the listener, if there is one.
pub fn notify_visibility_observer(listener: Option<&ShowResultsFn>, visible: bool) {
    if let Some(listener) = listener {
        listener(visible);
    }
}

/// Mirror plus listener bookkeeping, updated once per render.
#[derive(Debug)]
pub struct VisibilityController<T> {
    mirror: DataMirror<T>,
    last_notified: Option<bool>,
}

impl<T> Default for VisibilityController<T> {
    fn default() -> Self {
        Self {
            mirror: DataMirror::new(),
            last_notified: None,
        }
    }
}

impl<T> VisibilityController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mirror(&self) -> &DataMirror<T> {
        &self.mirror
    }

    /// Sync the mirror, derive visibility and notify the listener.
    ///
    /// Level-triggered listeners hear about every render. Edge-triggered ones
    /// hear the first value they are rendered with and then only transitions.
    pub fn update(
        &mut self,
        data: &Candidates<T>,
        hide_override: bool,
        listener: Option<&ShowResultsFn>,
        edge_triggered: bool,
    ) -> bool {
        self.mirror.on_data_changed(data);
        let visible = compute_visibility(hide_override, self.mirror.len());
        trace!(
            "Autocomplete visibility: visible={} hide={} len={}",
            visible,
            hide_override,
            self.mirror.len()
        );

        match listener {
            Some(listener) => {
                if !edge_triggered || self.last_notified != Some(visible) {
                    notify_visibility_observer(Some(listener), visible);
                }
                self.last_notified = Some(visible);
            }
            // Nobody heard this value; the next listener starts fresh.
            None => self.last_notified = None,
        }
        visible
    }
}
