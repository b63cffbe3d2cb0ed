//! Per-node event handler registry.
//!
//! Emitter resolution only asks whether a node has *any* handler at all
//! ([`SubscriberSet::has_any`]) — not whether it has one for the dispatched
//! kind. Which kind-specific handlers actually run is decided here at
//! emission time. This mirrors the coarse check the bubbling walk relies on.

use crate::event::{EventKind, PointerEvent};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

/// Opaque failure raised by a user handler. Not contained by dispatch;
/// it propagates to the dispatch caller.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A registered event handler.
pub type Handler = Box<dyn FnMut(&mut PointerEvent) -> Result<(), HandlerError>>;

/// Handlers registered on a single node (or on the surface itself), keyed
/// by event kind.
#[derive(Default)]
pub struct SubscriberSet {
    handlers: HashMap<EventKind, SmallVec<[Handler; 2]>>,
}

impl SubscriberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind. Handlers run in registration
    /// order at emission.
    pub fn on<F>(&mut self, kind: EventKind, handler: F)
    where
        F: FnMut(&mut PointerEvent) -> Result<(), HandlerError> + 'static,
    {
        self.handlers
            .entry(kind)
            .or_default()
            .push(Box::new(handler));
    }

    /// Whether at least one handler is registered, for any kind.
    ///
    /// Any kind counts: a node subscribed only to `Click` still reads as
    /// subscribed while a `Move` event bubbles past it.
    pub fn has_any(&self) -> bool {
        self.handlers.values().any(|h| !h.is_empty())
    }

    /// Number of handlers registered for `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, SmallVec::len)
    }

    /// Run the handlers registered for the event's kind, in registration
    /// order, stopping at the first failure.
    pub fn emit(&mut self, event: &mut PointerEvent) -> Result<(), HandlerError> {
        let kind = event.kind;
        if let Some(handlers) = self.handlers.get_mut(&kind) {
            for handler in handlers.iter_mut() {
                handler(event)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SubscriberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(EventKind, usize)> = self
            .handlers
            .iter()
            .map(|(kind, h)| (*kind, h.len()))
            .collect();
        counts.sort_by_key(|(kind, _)| kind.as_str());
        f.debug_map().entries(counts).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventTarget, NativeEvent};
    use kurbo::Point;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn click_event() -> PointerEvent {
        PointerEvent::new(
            EventKind::Click,
            NativeEvent::at(5.0, 5.0),
            Point::new(5.0, 5.0),
            EventTarget::Surface,
        )
    }

    #[test]
    fn has_any_ignores_event_kind() {
        let mut subs = SubscriberSet::new();
        assert!(!subs.has_any());

        subs.on(EventKind::Click, |_| Ok(()));
        assert!(subs.has_any());
        assert_eq!(subs.count(EventKind::Click), 1);
        assert_eq!(subs.count(EventKind::Move), 0);
    }

    #[test]
    fn emit_runs_kind_handlers_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut subs = SubscriberSet::new();

        let o = Rc::clone(&order);
        subs.on(EventKind::Click, move |_| {
            o.borrow_mut().push("first");
            Ok(())
        });
        let o = Rc::clone(&order);
        subs.on(EventKind::Click, move |_| {
            o.borrow_mut().push("second");
            Ok(())
        });
        subs.on(EventKind::Move, |_| panic!("wrong kind must not run"));

        subs.emit(&mut click_event()).unwrap();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn emit_stops_at_first_failing_handler() {
        let reached = Rc::new(RefCell::new(false));
        let mut subs = SubscriberSet::new();

        subs.on(EventKind::Click, |_| Err("boom".into()));
        let r = Rc::clone(&reached);
        subs.on(EventKind::Click, move |_| {
            *r.borrow_mut() = true;
            Ok(())
        });

        let err = subs.emit(&mut click_event()).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert!(!*reached.borrow());
    }
}
