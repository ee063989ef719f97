use iced::Size;

/// Window width from which the account label is shown in the top bar.
const WIDE_LAYOUT_MIN_WIDTH: f32 = 768.0;

/// Window geometry state.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
}

impl State {
    /// Create state with the given initial size.
    pub(crate) fn new(window_size: Size) -> Self {
        Self { window_size }
    }

    /// Update the window size after a resize.
    pub(crate) fn set_window_size(&mut self, size: Size) {
        self.window_size = size;
    }

    /// Return whether the window is wide enough for the full top bar.
    pub(crate) fn is_wide(&self) -> bool {
        self.window_size.width >= WIDE_LAYOUT_MIN_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::State;

    #[test]
    fn given_narrow_window_when_checking_layout_then_is_not_wide() {
        let state = State::new(Size::new(640.0, 600.0));

        assert!(!state.is_wide());
    }

    #[test]
    fn given_resize_to_breakpoint_when_checking_layout_then_is_wide() {
        let mut state = State::new(Size::new(640.0, 600.0));

        state.set_window_size(Size::new(768.0, 600.0));

        assert!(state.is_wide());
    }
}
