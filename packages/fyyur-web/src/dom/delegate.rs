//! Delegated event registry.
//!
//! A [`Delegator`] holds bindings scoped to one root element. Events are
//! dispatched with the element that was actually clicked; the registry walks
//! from that target up to (but excluding) the root and runs every binding
//! whose selector matches an element on the way.
//!
//! Matching happens at dispatch time, so elements attached after a binding
//! was registered are handled the same as elements present at page load.
//!
//! Bindings only *decide*: each returns an optional command describing what
//! should happen. Running the command is left to the caller.

use tracing::debug;

use super::{Element, Selector};

/// Handle returned by [`Delegator::on`], used to remove a single binding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

type Decide<E, C> = Box<dyn Fn(&E) -> Option<C>>;

struct Binding<E, C> {
    id: BindingId,
    event_type: String,
    selector: Selector,
    decide: Decide<E, C>,
}

/// Event bindings delegated to a root element
pub struct Delegator<E: Element, C> {
    root: E,
    bindings: Vec<Binding<E, C>>,
    next_id: u64,
}

impl<E: Element, C> Delegator<E, C> {
    pub fn new(root: E) -> Self {
        Self {
            root,
            bindings: Vec::new(),
            next_id: 0,
        }
    }

    pub fn root(&self) -> &E {
        &self.root
    }

    /// Register a binding for `event_type` on descendants matching `selector`.
    ///
    /// `decide` receives the matched element, which may be an ancestor of the
    /// event target.
    pub fn on<F>(&mut self, event_type: &str, selector: Selector, decide: F) -> BindingId
    where
        F: Fn(&E) -> Option<C> + 'static,
    {
        let id = BindingId(self.next_id);
        self.next_id += 1;

        debug!(%selector, event_type, "binding registered");
        self.bindings.push(Binding {
            id,
            event_type: event_type.to_string(),
            selector,
            decide: Box::new(decide),
        });
        id
    }

    /// Remove one binding. Returns false if it was already gone.
    pub fn off(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.id != id);
        before != self.bindings.len()
    }

    /// Remove every binding
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Dispatch an event that originated at `target`.
    ///
    /// Returns the commands decided by matching bindings, innermost element
    /// first and in registration order per element. Targets outside the root
    /// produce nothing.
    pub fn dispatch(&self, event_type: &str, target: &E) -> Vec<C> {
        let Some(path) = self.propagation_path(target) else {
            debug!(event_type, "event target outside delegation root");
            return Vec::new();
        };

        let mut commands = Vec::new();
        for element in &path {
            for binding in self
                .bindings
                .iter()
                .filter(|b| b.event_type == event_type && b.selector.matches(element))
            {
                debug!(selector = %binding.selector, event_type, "delegated binding matched");
                if let Some(command) = (binding.decide)(element) {
                    commands.push(command);
                }
            }
        }
        commands
    }

    /// Elements from `target` up to the root, root excluded. `None` when the
    /// root is not an ancestor of `target`.
    fn propagation_path(&self, target: &E) -> Option<Vec<E>> {
        let mut path = Vec::new();
        let mut current = Some(target.clone());

        while let Some(element) = current {
            if element.same_as(&self.root) {
                return Some(path);
            }
            current = element.parent();
            path.push(element);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryElement, CLICK};

    fn tree() -> (MemoryElement, MemoryElement, MemoryElement) {
        let body = MemoryElement::new("body");
        let row = MemoryElement::new("tr").with_class("row");
        let button = MemoryElement::new("button")
            .with_class("venue-btn-delete")
            .with_data("id", "5");
        body.append_child(&row).unwrap();
        row.append_child(&button).unwrap();
        (body, row, button)
    }

    #[test]
    fn test_dispatch_matches_target() {
        let (body, _row, button) = tree();
        let mut delegator = Delegator::new(body);
        delegator.on(CLICK, Selector::class("venue-btn-delete"), |el: &MemoryElement| {
            el.data_attr("id")
        });

        assert_eq!(delegator.dispatch(CLICK, &button), vec!["5".to_string()]);
    }

    #[test]
    fn test_dispatch_bubbles_to_matching_ancestor() {
        let (body, row, _button) = tree();
        let icon = MemoryElement::new("i");
        row.children()[0].append_child(&icon).unwrap();

        let mut delegator = Delegator::new(body);
        delegator.on(CLICK, Selector::class("venue-btn-delete"), |el: &MemoryElement| {
            el.data_attr("id")
        });

        // Data comes from the matched control, not the inner icon
        assert_eq!(delegator.dispatch(CLICK, &icon), vec!["5".to_string()]);
    }

    #[test]
    fn test_dispatch_order_is_inner_first_then_registration() {
        let (body, _row, button) = tree();
        let mut delegator = Delegator::new(body);
        delegator.on(CLICK, Selector::class("row"), |_: &MemoryElement| Some("row"));
        delegator.on(CLICK, Selector::class("venue-btn-delete"), |_: &MemoryElement| {
            Some("button-a")
        });
        delegator.on(CLICK, Selector::class("venue-btn-delete"), |_: &MemoryElement| {
            Some("button-b")
        });

        assert_eq!(
            delegator.dispatch(CLICK, &button),
            vec!["button-a", "button-b", "row"]
        );
    }

    #[test]
    fn test_other_event_types_ignored() {
        let (body, _row, button) = tree();
        let mut delegator = Delegator::new(body);
        delegator.on(CLICK, Selector::class("venue-btn-delete"), |_: &MemoryElement| Some(()));

        assert!(delegator.dispatch("dblclick", &button).is_empty());
    }

    #[test]
    fn test_root_itself_never_matches() {
        let body = MemoryElement::new("body").with_class("page");
        let mut delegator = Delegator::new(body.clone());
        delegator.on(CLICK, Selector::class("page"), |_: &MemoryElement| Some(()));

        assert!(delegator.dispatch(CLICK, &body).is_empty());
    }

    #[test]
    fn test_target_outside_root_ignored() {
        let (body, _row, _button) = tree();
        let stray = MemoryElement::new("button").with_class("venue-btn-delete");
        let mut delegator = Delegator::new(body);
        delegator.on(CLICK, Selector::class("venue-btn-delete"), |_: &MemoryElement| Some(()));

        assert!(delegator.dispatch(CLICK, &stray).is_empty());
    }

    #[test]
    fn test_late_inserted_elements_are_handled() {
        let body = MemoryElement::new("body");
        let mut delegator = Delegator::new(body.clone());
        delegator.on(CLICK, Selector::id("edit-artist"), |el: &MemoryElement| {
            el.data_attr("id")
        });

        let button = MemoryElement::new("button")
            .with_id("edit-artist")
            .with_data("id", "7");
        body.append_child(&button).unwrap();

        assert_eq!(delegator.dispatch(CLICK, &button), vec!["7".to_string()]);
    }

    #[test]
    fn test_dispatch_after_rejected_cycle() {
        let (body, row, button) = tree();
        assert!(button.append_child(&row).is_err());
        assert!(button.append_child(&body).is_err());

        let mut delegator = Delegator::new(body);
        delegator.on(CLICK, Selector::class("row"), |_: &MemoryElement| Some("row"));

        assert_eq!(delegator.dispatch(CLICK, &button), vec!["row"]);
    }

    #[test]
    fn test_off_and_clear() {
        let (body, _row, button) = tree();
        let mut delegator = Delegator::new(body);
        let first = delegator.on(CLICK, Selector::class("venue-btn-delete"), |_: &MemoryElement| {
            Some(1)
        });
        delegator.on(CLICK, Selector::class("row"), |_: &MemoryElement| Some(2));

        assert!(delegator.off(first));
        assert!(!delegator.off(first));
        assert_eq!(delegator.dispatch(CLICK, &button), vec![2]);

        delegator.clear();
        assert!(delegator.is_empty());
        assert!(delegator.dispatch(CLICK, &button).is_empty());
    }
}
