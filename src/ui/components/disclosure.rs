//! Collapsible disclosure panel with lifecycle callbacks.
//!
//! A disclosure panel is a togglable UI region (drawer, quick menu,
//! sidebar) that is either `Closed` (the initial state) or `Open`. Each
//! transition fires the matching lifecycle callback strictly before the
//! flipped state becomes observable. Non-persistent panels additionally
//! fold away when the user interacts outside their rendered bounds.

use std::sync::{Arc, Weak};

use {parking_lot::RwLock, tracing::debug};

use crate::ui::interaction::{
    OutsideCallback, OutsideInteractionSource, OutsideSubscription, RegionId,
};

/// Lifecycle callback invoked on a panel transition.
pub type PanelCallback = Box<dyn FnMut() + Send + Sync>;

/// Open/closed state owned by one mounted panel.
struct DisclosureState {
    /// Whether the panel is unfolded.
    open: bool,
    /// Persistent panels ignore outside interactions.
    persistent: bool,
    /// Fired on every transition to `Open`.
    on_open: Option<PanelCallback>,
    /// Fired on every transition to `Closed`, outside-interaction path included.
    on_close: Option<PanelCallback>,
}

/// Builder pattern for configuring `DisclosurePanel` components.
#[derive(Default)]
pub struct DisclosurePanelBuilder {
    persistent: bool,
    on_open: Option<PanelCallback>,
    on_close: Option<PanelCallback>,
}

impl DisclosurePanelBuilder {
    /// Configures whether the panel ignores outside interactions.
    #[must_use]
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// Sets the callback fired on every transition to `Open`.
    #[must_use]
    pub fn on_open(mut self, callback: impl FnMut() + Send + Sync + 'static) -> Self {
        self.on_open = Some(Box::new(callback));
        self
    }

    /// Sets the callback fired on every transition to `Closed`.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnMut() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Builds the panel in its initial `Closed` state, without outside
    /// interaction detection.
    #[must_use]
    pub fn build(self) -> DisclosurePanel {
        DisclosurePanel {
            state: Arc::new(RwLock::new(DisclosureState {
                open: false,
                persistent: self.persistent,
                on_open: self.on_open,
                on_close: self.on_close,
            })),
            _outside: None,
        }
    }

    /// Builds the panel and mounts it on an outside-interaction source.
    ///
    /// # Arguments
    ///
    /// * `region` - The rendered region the panel occupies.
    /// * `source` - Host capability delivering outside interactions.
    #[must_use]
    pub fn mount(self, region: RegionId, source: &dyn OutsideInteractionSource) -> DisclosurePanel {
        let mut panel = self.build();
        panel.mount_outside(region, source);
        panel
    }
}

/// Togglable disclosure panel.
///
/// The panel owns its state for exactly as long as it lives: the
/// outside-interaction listener is a scoped registration released when the
/// panel is dropped, and the listener itself only holds a weak reference,
/// so a stray detection after teardown is a no-op.
pub struct DisclosurePanel {
    /// Shared state, weakly referenced by the outside-interaction listener.
    state: Arc<RwLock<DisclosureState>>,
    /// Scoped listener registration; released on drop.
    _outside: Option<OutsideSubscription>,
}

impl DisclosurePanel {
    /// Creates a builder for configuring a panel.
    #[must_use]
    pub fn builder() -> DisclosurePanelBuilder {
        DisclosurePanelBuilder::default()
    }

    /// Registers the panel on an outside-interaction source.
    ///
    /// Replaces (and thereby releases) any previous registration.
    pub fn mount_outside(&mut self, region: RegionId, source: &dyn OutsideInteractionSource) {
        let weak: Weak<RwLock<DisclosureState>> = Arc::downgrade(&self.state);
        let callback: OutsideCallback = Arc::new(move || {
            if let Some(state) = weak.upgrade() {
                close_from_outside(&state);
            }
        });
        self._outside = Some(source.subscribe_outside(region, callback));
    }

    /// Handles an activation of the panel's toggle control.
    ///
    /// Fires exactly one lifecycle callback (`on_open` when opening,
    /// `on_close` when closing) before the state flip becomes observable.
    pub fn trigger(&self) {
        let opening = !self.state.read().open;
        invoke_callback(&self.state, !opening);
        self.state.write().open = opening;
        debug!(open = opening, "disclosure panel toggled");
    }

    /// Handles an interaction outside the panel's rendered bounds.
    ///
    /// Closes an open, non-persistent panel (firing `on_close` first);
    /// otherwise a no-op.
    pub fn outside_interaction(&self) {
        close_from_outside(&self.state);
    }

    /// Whether the panel is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.read().open
    }
}

/// Applies the outside-interaction transition to a panel state.
fn close_from_outside(state: &RwLock<DisclosureState>) {
    let should_close = {
        let guard = state.read();
        guard.open && !guard.persistent
    };
    if should_close {
        invoke_callback(state, true);
        state.write().open = false;
        debug!("disclosure panel closed from outside interaction");
    }
}

/// Fires the requested lifecycle callback, if configured.
///
/// The callback is taken out of the state and restored afterwards so it
/// never runs under the state lock; a callback is free to read the panel
/// it belongs to.
fn invoke_callback(state: &RwLock<DisclosureState>, closing: bool) {
    let taken = {
        let mut guard = state.write();
        if closing {
            guard.on_close.take()
        } else {
            guard.on_open.take()
        }
    };
    if let Some(mut callback) = taken {
        callback();
        let mut guard = state.write();
        if closing {
            guard.on_close = Some(callback);
        } else {
            guard.on_open = Some(callback);
        }
    }
}
