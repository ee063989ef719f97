/// Tracks background saves so only one write runs at a time.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PersistState {
    dirty: bool,
    in_flight: bool,
}

impl PersistState {
    #[cfg(test)]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[cfg(test)]
    pub(crate) fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start a save if there is unsaved state and no write is running.
    pub(crate) fn try_begin(&mut self) -> bool {
        if !self.dirty || self.in_flight {
            return false;
        }

        self.dirty = false;
        self.in_flight = true;
        true
    }

    /// Mark the running write as finished, successful or not.
    pub(crate) fn finish(&mut self) {
        self.in_flight = false;
    }
}
