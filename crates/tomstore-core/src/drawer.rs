//! Off-canvas drawer state machine
//!
//! Two states, no queued transitions. Every transition runs synchronously
//! inside the handler for the triggering user event, so rapid double
//! activation reduces to the idempotence of `open`/`close`.

/// Drawer open/close state. `Closed` is the initial state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    /// User activated the drawer-trigger icon. No-op when already open.
    pub fn open(&mut self) {
        *self = DrawerState::Open;
    }

    /// User dismissed the panel (scrim click or Escape). No-op when
    /// already closed.
    pub fn close(&mut self) {
        *self = DrawerState::Closed;
    }

    /// User activated a navigation link inside the drawer. Closing is a
    /// side effect of the activation; the caller still performs normal
    /// navigation.
    pub fn link_activated(&mut self) {
        self.close();
    }

    pub fn is_open(self) -> bool {
        self == DrawerState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(DrawerState::default(), DrawerState::Closed);
    }

    #[test]
    fn test_open_then_close_round_trip() {
        let mut drawer = DrawerState::default();
        drawer.open();
        assert!(drawer.is_open());
        drawer.close();
        assert_eq!(drawer, DrawerState::Closed);
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut drawer = DrawerState::default();
        drawer.open();
        drawer.open();
        assert!(drawer.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut drawer = DrawerState::default();
        drawer.close();
        assert_eq!(drawer, DrawerState::Closed);
        drawer.open();
        drawer.close();
        drawer.close();
        assert_eq!(drawer, DrawerState::Closed);
    }

    #[test]
    fn test_link_activation_closes_open_drawer() {
        let mut drawer = DrawerState::Open;
        drawer.link_activated();
        assert_eq!(drawer, DrawerState::Closed);
    }

    #[test]
    fn test_rapid_double_activation_is_consistent() {
        let mut drawer = DrawerState::default();
        drawer.open();
        drawer.link_activated();
        drawer.link_activated();
        assert_eq!(drawer, DrawerState::Closed);
    }
}
