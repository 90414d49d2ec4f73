//! Input adapter: turns key and touch presses into toggle requests
//!
//! Host callbacks only push raw events onto a shared [`InputQueue`]. The
//! controller drains the queue at the start of each tick, so a toggle is
//! never half-applied in the middle of a frame even when the host delivers
//! input on another thread.
//!
//! Shift lock is press-to-toggle: the first down event of a bound key
//! toggles, repeats while the key stays down are ignored until its up event.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::error::ShiftLockError;
use crate::host::{InputHost, SubscriptionHandle};

/// Where a toggle press came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// A bound keyboard key
    Key(KeyCode),
    /// The on-screen touch button
    TouchButton,
}

/// Raw press/release event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Down(InputSource),
    Up(InputSource),
}

/// Thread-safe queue of pending input events
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: Arc<Mutex<VecDeque<InputEvent>>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: InputEvent) {
        self.events.lock().push_back(event);
    }

    /// Take every pending event in arrival order
    pub fn drain(&self) -> Vec<InputEvent> {
        self.events.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

/// Maps bound keys and the touch button onto toggle requests
#[derive(Debug)]
pub struct InputAdapter {
    /// Keys that toggle shift lock
    keybinds: HashSet<KeyCode>,
    /// Sources currently held down
    active: HashSet<InputSource>,
    /// Events waiting for the next tick
    queue: InputQueue,
    /// Live key subscriptions
    subscriptions: Vec<SubscriptionHandle>,
}

impl InputAdapter {
    /// Create an adapter for the given keybinds
    pub fn new(keybinds: HashSet<KeyCode>) -> Self {
        Self {
            keybinds,
            active: HashSet::new(),
            queue: InputQueue::new(),
            subscriptions: Vec::new(),
        }
    }

    /// Handle to the pending event queue
    pub fn queue(&self) -> InputQueue {
        self.queue.clone()
    }

    /// Check if a key is bound to shift lock
    pub fn is_bound(&self, key: KeyCode) -> bool {
        self.keybinds.contains(&key)
    }

    /// Check if a source is currently held
    pub fn is_held(&self, source: InputSource) -> bool {
        self.active.contains(&source)
    }

    /// Number of live key subscriptions
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Subscribe to every bound key.
    ///
    /// Keys the host cannot bind are skipped and returned as errors; the
    /// remaining keys and the programmatic API keep working.
    pub fn subscribe<H: InputHost + ?Sized>(&mut self, host: &mut H) -> Vec<ShiftLockError> {
        let mut failures = Vec::new();

        for &key in &self.keybinds {
            let down_queue = self.queue.clone();
            let up_queue = self.queue.clone();
            let result = host.subscribe_key(
                key,
                Box::new(move || down_queue.push(InputEvent::Down(InputSource::Key(key)))),
                Box::new(move || up_queue.push(InputEvent::Up(InputSource::Key(key)))),
            );

            match result {
                Ok(handle) => {
                    debug!("Bound shift lock key {:?}", key);
                    self.subscriptions.push(handle);
                }
                Err(source) => {
                    let error = ShiftLockError::InputBinding { key, source };
                    warn!("{}", error);
                    failures.push(error);
                }
            }
        }

        failures
    }

    /// Revoke every key subscription and forget held keys and queued events
    pub fn unsubscribe_all<H: InputHost + ?Sized>(&mut self, host: &mut H) {
        for handle in self.subscriptions.drain(..) {
            host.unsubscribe(handle);
        }
        self.active.clear();
        self.queue.clear();
    }

    /// Forward a winit keyboard event
    pub fn handle_keyboard(&self, physical_key: PhysicalKey, element_state: ElementState) {
        if let PhysicalKey::Code(key_code) = physical_key {
            if self.is_bound(key_code) {
                let source = InputSource::Key(key_code);
                match element_state {
                    ElementState::Pressed => self.queue.push(InputEvent::Down(source)),
                    ElementState::Released => self.queue.push(InputEvent::Up(source)),
                }
            }
        }
    }

    /// Touch button pressed
    pub fn press(&self) {
        self.queue.push(InputEvent::Down(InputSource::TouchButton));
    }

    /// Touch button released
    pub fn release(&self) {
        self.queue.push(InputEvent::Up(InputSource::TouchButton));
    }

    /// Apply one event to the held set. Returns true if it should toggle.
    pub fn process(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Down(source) => self.active.insert(source),
            InputEvent::Up(source) => {
                self.active.remove(&source);
                false
            }
        }
    }

    /// Drain the queue and count the toggles it produced
    pub fn drain_toggles(&mut self) -> usize {
        let events = self.queue.drain();
        events
            .into_iter()
            .filter(|event| self.process(*event))
            .count()
    }
}
