mod project_state;

pub use project_state::ProjectState;

/// Handle returned by [`Channel::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

/// Ordered publish/subscribe channel. Listeners run synchronously in
/// registration order on every emit.
pub struct Channel<E: ?Sized> {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener<E>)>,
}

impl<E: ?Sized> Default for Channel<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

impl<E: ?Sized> Channel<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for future emits. Past events are not replayed.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was never registered or already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
