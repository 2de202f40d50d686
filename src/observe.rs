use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// Trigger-once observation policy: the first entry wins, everything after
/// is ignored. Never reverts.
#[derive(Debug, Default)]
pub struct TriggerOnce {
    seen: bool,
}

impl TriggerOnce {
    /// Records an entry, returning whether it was the first one.
    pub fn enter(&mut self) -> bool {
        !std::mem::replace(&mut self.seen, true)
    }

    pub fn has_been_seen(&self) -> bool {
        self.seen
    }
}

/// Capability for watching when elements come into the viewport, keeping the
/// page logic off any particular browser primitive.
pub trait ViewportObserver {
    fn observe(&self, target: &Element);
    fn unobserve(&self, target: &Element);
}

/// IntersectionObserver-backed [`ViewportObserver`] that fires its callback
/// once, the first time any observed element intersects the viewport, then
/// detaches from the target. Runtimes without IntersectionObserver fail
/// open: the callback fires immediately and nothing is ever hidden.
pub struct FirstEnterObserver {
    inner: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl FirstEnterObserver {
    pub fn new(on_first_enter: Callback<()>) -> Self {
        let gate = Rc::new(RefCell::new(TriggerOnce::default()));
        let callback = {
            let on_first_enter = on_first_enter.clone();
            Closure::wrap(Box::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() && gate.borrow_mut().enter() {
                            on_first_enter.emit(());
                            observer.unobserve(&entry.target());
                        }
                    }
                },
            ) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => Self {
                inner: Some(observer),
                _callback: Some(callback),
            },
            Err(_) => {
                on_first_enter.emit(());
                Self {
                    inner: None,
                    _callback: None,
                }
            }
        }
    }

    pub fn disconnect(&self) {
        if let Some(observer) = &self.inner {
            observer.disconnect();
        }
    }
}

impl ViewportObserver for FirstEnterObserver {
    fn observe(&self, target: &Element) {
        if let Some(observer) = &self.inner {
            observer.observe(target);
        }
    }

    fn unobserve(&self, target: &Element) {
        if let Some(observer) = &self.inner {
            observer.unobserve(target);
        }
    }
}

/// Reports whether the referenced element has ever entered the viewport.
/// Flips to `true` at most once per page lifetime; used to gate entrance
/// animation classes.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let seen = use_state(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |node| {
                let on_enter = Callback::from(move |_| seen.set(true));
                let observer = FirstEnterObserver::new(on_enter.clone());
                match node.cast::<Element>() {
                    Some(element) => observer.observe(&element),
                    // Nothing rendered to watch; show rather than hide.
                    None => on_enter.emit(()),
                }
                move || observer.disconnect()
            },
            node,
        );
    }

    *seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_wins() {
        let mut gate = TriggerOnce::default();
        assert!(!gate.has_been_seen());
        assert!(gate.enter());
        assert!(gate.has_been_seen());
    }

    #[test]
    fn later_entries_are_ignored_and_state_never_reverts() {
        let mut gate = TriggerOnce::default();
        assert!(gate.enter());
        for _ in 0..5 {
            assert!(!gate.enter());
            assert!(gate.has_been_seen());
        }
    }
}
