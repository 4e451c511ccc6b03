// src/controllers/pointer_release.rs
//
// Process-wide pointer-release subscriptions. The app feeds every
// release it observes into the hub, whether or not the pointer is over
// a widget, so a drag that ends outside the window still terminates.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// What a listener reports after handling a release. Dead listeners
/// (whose owner has gone away) are dropped from the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerStatus {
    Alive,
    Dead,
}

type ReleaseListener = Box<dyn FnMut() -> ListenerStatus>;

#[derive(Default)]
pub struct PointerReleaseHub {
    next_id: u64,
    listeners: Vec<(ListenerId, ReleaseListener)>,
}

impl PointerReleaseHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut() -> ListenerStatus + 'static,
    {
        // ids are never reused
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Notifies every listener of a release and prunes the dead ones.
    /// Returns how many were called.
    pub fn dispatch(&mut self) -> usize {
        let called = self.listeners.len();
        self.listeners.retain_mut(|(id, listener)| {
            let alive = listener() == ListenerStatus::Alive;
            if !alive {
                log::debug!("Dropping dead release listener {:?}", id);
            }
            alive
        });
        called
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
