//! Outside-interaction detection capability.
//!
//! Auto-closing panels need to know when the user interacts somewhere
//! outside their rendered bounds. Detection itself is host territory (a
//! browser shell captures document clicks, a toolkit hit-tests widgets),
//! so the core only defines the capability: subscribe a callback for a
//! region, get back a scoped registration that unsubscribes on drop.
//!
//! `InteractionHub` is the in-process implementation used by the demo
//! shell and the tests.

use std::{
    collections::HashMap,
    sync::Arc,
};

use {parking_lot::RwLock, tracing::debug};

/// Identifier of a rendered region, assigned by the host's layout.
pub type RegionId = u64;

/// Callback fired when an interaction lands outside the subscribed region.
pub type OutsideCallback = Arc<dyn Fn() + Send + Sync>;

/// Host-supplied capability that notifies a subscriber whenever an
/// interaction occurs outside the given region.
pub trait OutsideInteractionSource {
    /// Registers `callback` to fire on every interaction outside `region`.
    ///
    /// # Arguments
    ///
    /// * `region` - The rendered region the subscriber occupies.
    /// * `callback` - Invoked once per outside interaction.
    ///
    /// # Returns
    ///
    /// A scoped registration; dropping it unsubscribes.
    fn subscribe_outside(
        &self,
        region: RegionId,
        callback: OutsideCallback,
    ) -> OutsideSubscription;
}

/// Scoped outside-interaction registration.
///
/// Releases the underlying listener exactly once, when dropped. Tying the
/// release to `Drop` means an unmounted panel can never leave a dangling
/// detector behind.
pub struct OutsideSubscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl OutsideSubscription {
    /// Wraps the release action of one registration.
    #[must_use]
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for OutsideSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// In-process interaction detector.
///
/// The demo shell reports every interaction to the hub along with the
/// region it landed on (if any); the hub fans the event out to all
/// listeners subscribed to *other* regions.
#[derive(Clone, Default)]
pub struct InteractionHub {
    inner: Arc<RwLock<HubInner>>,
}

#[derive(Default)]
struct HubInner {
    /// Monotonic token generator for listener identity.
    next_token: u64,
    /// Active listeners keyed by token.
    listeners: HashMap<u64, (RegionId, OutsideCallback)>,
}

impl InteractionHub {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports an interaction landing on `target` (or on no tracked region).
    ///
    /// Every listener subscribed to a different region is notified.
    /// Callbacks run outside the hub lock, so they are free to subscribe
    /// or unsubscribe listeners.
    pub fn interact(&self, target: Option<RegionId>) {
        let outside: Vec<OutsideCallback> = {
            let inner = self.inner.read();
            inner
                .listeners
                .values()
                .filter(|(region, _)| Some(*region) != target)
                .map(|(_, callback)| callback.clone())
                .collect()
        };
        debug!(region = ?target, notified = outside.len(), "outside interaction");
        for callback in outside {
            callback();
        }
    }

    /// Number of live listeners; used to verify scoped release.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.read().listeners.len()
    }
}

impl OutsideInteractionSource for InteractionHub {
    fn subscribe_outside(
        &self,
        region: RegionId,
        callback: OutsideCallback,
    ) -> OutsideSubscription {
        let token = {
            let mut inner = self.inner.write();
            let token = inner.next_token;
            inner.next_token += 1;
            inner.listeners.insert(token, (region, callback));
            token
        };
        let hub = self.inner.clone();
        OutsideSubscription::new(move || {
            hub.write().listeners.remove(&token);
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering::SeqCst},
    };

    use crate::ui::interaction::{InteractionHub, OutsideInteractionSource};

    #[test]
    fn test_fires_only_for_other_regions() {
        let hub = InteractionHub::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        let _subscription = hub.subscribe_outside(
            1,
            Arc::new(move || {
                counter.fetch_add(1, SeqCst);
            }),
        );

        hub.interact(Some(1)); // Inside the region: nothing happens.
        assert_eq!(fired.load(SeqCst), 0);

        hub.interact(Some(2)); // Another region.
        hub.interact(None); // Nowhere in particular.
        assert_eq!(fired.load(SeqCst), 2);
    }

    #[test]
    fn test_drop_releases_the_listener() {
        let hub = InteractionHub::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = fired.clone();
        let subscription = hub.subscribe_outside(
            1,
            Arc::new(move || {
                counter.fetch_add(1, SeqCst);
            }),
        );
        assert_eq!(hub.listener_count(), 1);

        drop(subscription);
        assert_eq!(hub.listener_count(), 0);

        hub.interact(None);
        assert_eq!(fired.load(SeqCst), 0, "released listener must not fire");
    }

    #[test]
    fn test_listeners_are_independent() {
        let hub = InteractionHub::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = first.clone();
        let _a = hub.subscribe_outside(
            1,
            Arc::new(move || {
                counter.fetch_add(1, SeqCst);
            }),
        );
        let counter = second.clone();
        let _b = hub.subscribe_outside(
            2,
            Arc::new(move || {
                counter.fetch_add(1, SeqCst);
            }),
        );

        hub.interact(Some(2));
        assert_eq!(first.load(SeqCst), 1);
        assert_eq!(second.load(SeqCst), 0);
    }
}
