//! On-screen toggle button for touch devices

use tracing::debug;

use crate::host::{ButtonHandle, ToggleButtonHost};
use crate::input::{InputEvent, InputQueue, InputSource};

/// Owns at most one toggle button. Presses go through the same input queue
/// as keyboard toggles.
#[derive(Debug, Default)]
pub struct MobileUiAdapter {
    button: Option<ButtonHandle>,
}

impl MobileUiAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live button, if mounted
    pub fn button(&self) -> Option<ButtonHandle> {
        self.button
    }

    pub fn is_mounted(&self) -> bool {
        self.button.is_some()
    }

    /// Create the button. Does nothing if it already exists.
    pub fn mount<H: ToggleButtonHost + ?Sized>(&mut self, host: &mut H, queue: &InputQueue) {
        if self.button.is_some() {
            return;
        }

        let press_queue = queue.clone();
        let release_queue = queue.clone();
        let handle = host.create_toggle_button(
            Box::new(move || press_queue.push(InputEvent::Down(InputSource::TouchButton))),
            Box::new(move || release_queue.push(InputEvent::Up(InputSource::TouchButton))),
        );
        debug!("Created shift lock button {:?}", handle);
        self.button = Some(handle);
    }

    /// Destroy the button if it exists
    pub fn unmount<H: ToggleButtonHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(handle) = self.button.take() {
            host.destroy_button(handle);
            debug!("Destroyed shift lock button {:?}", handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockHost;

    #[test]
    fn test_mount_is_idempotent() {
        let mut host = MockHost::new();
        let queue = InputQueue::new();
        let mut ui = MobileUiAdapter::new();

        ui.mount(&mut host, &queue);
        let first = ui.button();
        ui.mount(&mut host, &queue);
        assert_eq!(ui.button(), first);
        assert_eq!(host.live_buttons(), 1);

        ui.unmount(&mut host);
        ui.unmount(&mut host);
        assert!(!ui.is_mounted());
        assert_eq!(host.live_buttons(), 0);
    }

    #[test]
    fn test_button_feeds_queue() {
        let mut host = MockHost::new();
        let queue = InputQueue::new();
        let mut ui = MobileUiAdapter::new();
        ui.mount(&mut host, &queue);

        host.tap_button();
        assert_eq!(
            queue.drain(),
            vec![
                InputEvent::Down(InputSource::TouchButton),
                InputEvent::Up(InputSource::TouchButton),
            ]
        );
    }
}
