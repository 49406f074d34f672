//! List view controller owning the ephemeral browsing state.
//!
//! Every browsable list (artists, albums) is driven by a
//! `ListViewController`: it owns the current sort path and search term,
//! re-derives the visible records through the sort/filter engine on every
//! change, and notifies subscribers so the host can re-render. The state
//! has the lifetime of the view; nothing here is persisted.

use std::sync::Arc;

use {
    async_channel::{Receiver, Sender, unbounded},
    parking_lot::RwLock,
    tracing::{debug, warn},
};

use crate::{
    error::domain::UiError,
    library::{
        record::{FieldPath, Record},
        sort_filter::sort_filter,
    },
    ui::render::{ItemDisplay, OrderOption, TitleHook},
};

/// Ephemeral UI state owned by one list view.
///
/// Created when the view mounts, discarded when it unmounts, mutated only
/// through the controller's update operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Field path the list is ordered by.
    pub sort_path: FieldPath,
    /// Free-text search filter; empty means no filtering.
    pub search_term: String,
}

/// View state change events.
#[derive(Debug, Clone)]
pub enum ListViewEvent {
    /// The sort path or search term changed; carries the fresh state.
    StateChanged(ViewState),
}

/// Builder pattern for configuring `ListViewController` instances.
///
/// Construction is where programmer errors surface: a missing item display
/// capability or an empty order selector fails fast here instead of
/// degrading at render time.
#[derive(Default)]
pub struct ListViewBuilder {
    items: Vec<Record>,
    order_options: Vec<OrderOption>,
    default_order: Option<FieldPath>,
    search_property: Option<FieldPath>,
    item_display: Option<ItemDisplay>,
    title: Option<String>,
    title_hook: Option<TitleHook>,
}

impl ListViewBuilder {
    /// Sets the records the view browses.
    #[must_use]
    pub fn items(mut self, items: Vec<Record>) -> Self {
        self.items = items;
        self
    }

    /// Sets the options offered by the order selector.
    #[must_use]
    pub fn order_options(mut self, order_options: Vec<OrderOption>) -> Self {
        self.order_options = order_options;
        self
    }

    /// Sets the initial ordering; defaults to the first order option.
    #[must_use]
    pub fn default_order(mut self, default_order: FieldPath) -> Self {
        self.default_order = Some(default_order);
        self
    }

    /// Sets the fixed field the search term is matched against.
    /// Defaults to `name`.
    #[must_use]
    pub fn search_property(mut self, search_property: FieldPath) -> Self {
        self.search_property = Some(search_property);
        self
    }

    /// Sets the capability that renders one record for display. Required.
    #[must_use]
    pub fn item_display(mut self, item_display: ItemDisplay) -> Self {
        self.item_display = Some(item_display);
        self
    }

    /// Sets the view title reported through the title hook.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Sets the hook receiving the view title on construction.
    #[must_use]
    pub fn title_hook(mut self, title_hook: TitleHook) -> Self {
        self.title_hook = Some(title_hook);
        self
    }

    /// Builds the controller.
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidConfiguration` if the item display
    /// capability is missing or no order options were supplied.
    pub fn build(self) -> Result<ListViewController, UiError> {
        let item_display = self
            .item_display
            .ok_or_else(|| UiError::invalid_configuration("item display capability is required"))?;
        if self.order_options.is_empty() {
            return Err(UiError::invalid_configuration(
                "at least one order option is required",
            ));
        }

        let sort_path = match self.default_order {
            Some(path) => path,
            None => self.order_options[0].value.clone(),
        };
        if !self.order_options.iter().any(|option| option.value == sort_path) {
            warn!(order = %sort_path, "default order is not among the order options");
        }

        let title = self.title.unwrap_or_default();
        if let Some(hook) = &self.title_hook {
            hook(&title);
        }

        Ok(ListViewController {
            inner: Arc::new(RwLock::new(ControllerInner {
                items: self.items,
                order_options: self.order_options,
                search_property: self
                    .search_property
                    .unwrap_or_else(|| FieldPath::parse("name")),
                item_display,
                title,
                state: ViewState {
                    sort_path,
                    search_term: String::new(),
                },
                subscribers: Vec::new(),
            })),
        })
    }
}

struct ControllerInner {
    /// Records browsed by this view, in data-layer order.
    items: Vec<Record>,
    /// Options offered by the order selector.
    order_options: Vec<OrderOption>,
    /// Fixed field the search term is matched against.
    search_property: FieldPath,
    /// Renders one record for display.
    item_display: ItemDisplay,
    /// View title reported through the title hook.
    title: String,
    /// Current sort/search state.
    state: ViewState,
    /// List of active subscribers for manual broadcast fan-out.
    subscribers: Vec<Sender<ListViewEvent>>,
}

/// Controller for one browsable list view.
///
/// Cheap to clone; clones share the same state, which is how the search
/// drawer's `on_close` callback reaches `clear_search`.
#[derive(Clone)]
pub struct ListViewController {
    inner: Arc<RwLock<ControllerInner>>,
}

impl ListViewController {
    /// Creates a builder for configuring a controller.
    #[must_use]
    pub fn builder() -> ListViewBuilder {
        ListViewBuilder::default()
    }

    /// Replaces the sort path and notifies subscribers.
    ///
    /// Every call emits exactly one state-changed event; no change
    /// detection or batching is performed.
    pub fn set_sort_path(&self, path: FieldPath) {
        let event = {
            let mut inner = self.inner.write();
            if !inner.order_options.iter().any(|option| option.value == path) {
                warn!(order = %path, "sort path is not among the order options");
            }
            debug!(order = %path, "sort path changed");
            inner.state.sort_path = path;
            ListViewEvent::StateChanged(inner.state.clone())
        };
        self.broadcast_event(&event);
    }

    /// Replaces the search term and notifies subscribers.
    ///
    /// Called on every keystroke in the search box; the full list is
    /// re-derived each time, which is fine for library-sized collections.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let event = {
            let mut inner = self.inner.write();
            inner.state.search_term = term.into();
            ListViewEvent::StateChanged(inner.state.clone())
        };
        self.broadcast_event(&event);
    }

    /// Resets the search term.
    ///
    /// Doubles as the search drawer's `on_close` callback, so collapsing
    /// the search affordance also resets the filter.
    pub fn clear_search(&self) {
        debug!("search cleared");
        self.set_search_term("");
    }

    /// Gets a snapshot of the current view state.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.inner.read().state.clone()
    }

    /// Gets the view title.
    #[must_use]
    pub fn title(&self) -> String {
        self.inner.read().title.clone()
    }

    /// Gets the options offered by the order selector.
    #[must_use]
    pub fn order_options(&self) -> Vec<OrderOption> {
        self.inner.read().order_options.clone()
    }

    /// Subscribes to state changes.
    ///
    /// # Returns
    ///
    /// A channel receiver delivering one event per state change, in order.
    pub fn subscribe(&self) -> Receiver<ListViewEvent> {
        let (tx, rx) = unbounded();
        self.inner.write().subscribers.push(tx);
        rx
    }

    /// Orders and filters an external record collection under the current
    /// view state.
    ///
    /// # Arguments
    ///
    /// * `records` - Records to derive the visible sequence from.
    ///
    /// # Returns
    ///
    /// The ordered, filtered records.
    #[must_use]
    pub fn derive(&self, records: &[Record]) -> Vec<Record> {
        let inner = self.inner.read();
        sort_filter(
            records,
            &inner.state.sort_path,
            &inner.search_property,
            &inner.state.search_term,
        )
    }

    /// Derives the visible sequence from the configured items and renders
    /// each record through the item display capability.
    #[must_use]
    pub fn render_items(&self) -> Vec<String> {
        let inner = self.inner.read();
        let derived = sort_filter(
            &inner.items,
            &inner.state.sort_path,
            &inner.search_property,
            &inner.state.search_term,
        );
        derived
            .iter()
            .map(|record| (inner.item_display)(record))
            .collect()
    }

    /// Helper to broadcast an event to all subscribers.
    /// Cleans up closed channels.
    fn broadcast_event(&self, event: &ListViewEvent) -> usize {
        let mut inner = self.inner.write();
        let mut active = Vec::with_capacity(inner.subscribers.len());
        let mut count = 0;

        for tx in inner.subscribers.iter() {
            if let Ok(()) = tx.try_send(event.clone()) {
                active.push(tx.clone());
                count += 1;
            }
        }

        inner.subscribers = active;
        count
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering::SeqCst},
    };

    use serde_json::{Value, json};

    use crate::{
        error::domain::UiError,
        library::record::{FieldPath, Record},
        ui::{
            render::{ItemDisplay, OrderOption},
            views::list_view::{ListViewController, ListViewEvent},
        },
    };

    fn name_display() -> ItemDisplay {
        Arc::new(|record: &Record| {
            record
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("?")
                .to_string()
        })
    }

    fn controller_with(items: Vec<Record>) -> ListViewController {
        ListViewController::builder()
            .items(items)
            .order_options(vec![
                OrderOption::new("name", "name"),
                OrderOption::new("id", "id"),
            ])
            .item_display(name_display())
            .build()
            .expect("valid configuration")
    }

    #[test]
    fn test_initial_state_uses_default_order_and_empty_search() {
        let controller = controller_with(vec![]);
        let state = controller.view_state();
        assert_eq!(state.sort_path, FieldPath::parse("name"));
        assert_eq!(state.search_term, "");
    }

    #[test]
    fn test_missing_item_display_fails_fast() {
        let result = ListViewController::builder()
            .order_options(vec![OrderOption::new("name", "name")])
            .build();
        assert!(matches!(result, Err(UiError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_empty_order_options_fail_fast() {
        let result = ListViewController::builder()
            .item_display(name_display())
            .build();
        assert!(matches!(result, Err(UiError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_each_update_emits_exactly_one_event() {
        let controller = controller_with(vec![]);
        let events = controller.subscribe();

        controller.set_sort_path(FieldPath::parse("id"));
        assert!(matches!(
            events.try_recv(),
            Ok(ListViewEvent::StateChanged(state)) if state.sort_path == FieldPath::parse("id")
        ));
        assert!(events.try_recv().is_err(), "exactly one event per update");

        controller.set_search_term("tool");
        controller.clear_search();
        assert_eq!(events.len(), 2, "one event per update, no batching");
    }

    #[test]
    fn test_clear_search_emits_even_when_already_empty() {
        let controller = controller_with(vec![]);
        let events = controller.subscribe();
        controller.clear_search();
        assert_eq!(events.len(), 1);
        assert_eq!(controller.view_state().search_term, "");
    }

    #[test]
    fn test_render_items_orders_and_displays() {
        let controller = controller_with(vec![
            json!({"id": 2, "name": "Bee"}),
            json!({"id": 1, "name": "Ant"}),
        ]);
        assert_eq!(controller.render_items(), ["Ant", "Bee"]);

        controller.set_search_term("be");
        assert_eq!(controller.render_items(), ["Bee"]);
    }

    #[test]
    fn test_derive_applies_state_to_external_records() {
        let controller = controller_with(vec![]);
        controller.set_search_term("an");
        let derived = controller.derive(&[
            json!({"id": 2, "name": "Bee"}),
            json!({"id": 1, "name": "Ant"}),
        ]);
        assert_eq!(derived, vec![json!({"id": 1, "name": "Ant"})]);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let controller = controller_with(vec![]);
        let events = controller.subscribe();
        drop(events);
        // Must not fail, and the closed channel gets cleaned up.
        controller.set_search_term("x");
        let live = controller.subscribe();
        controller.set_search_term("y");
        assert_eq!(live.len(), 1);
    }

    #[test]
    fn test_title_hook_fires_once_on_build() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let _controller = ListViewController::builder()
            .order_options(vec![OrderOption::new("name", "name")])
            .item_display(name_display())
            .title("Artists")
            .title_hook(Arc::new(move |title| {
                assert_eq!(title, "Artists");
                seen.fetch_add(1, SeqCst);
            }))
            .build()
            .expect("valid configuration");
        assert_eq!(calls.load(SeqCst), 1);
    }
}
