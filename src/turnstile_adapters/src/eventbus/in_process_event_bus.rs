use std::sync::{Arc, PoisonError, RwLock};

use turnstile_core::{EventPoster, LoggedInEvent};

type Subscriber = Box<dyn Fn(&LoggedInEvent) + Send + Sync>;

/// Same-thread fan-out event bus.
///
/// Posting calls every registered subscriber before returning. Clones share
/// the subscriber list. Locks recover from poisoning so a panicking
/// subscriber cannot wedge the bus for everyone else.
#[derive(Default, Clone)]
pub struct InProcessEventBus {
    subscribers: Arc<RwLock<Vec<Subscriber>>>,
}

impl InProcessEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: Fn(&LoggedInEvent) + Send + Sync + 'static,
    {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(subscriber));
    }
}

impl EventPoster for InProcessEventBus {
    fn post_event(&self, event: LoggedInEvent) {
        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(subscribers = subscribers.len(), "posting logged-in event");
        for subscriber in subscribers.iter() {
            subscriber(&event);
        }
    }
}
