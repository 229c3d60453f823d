//! Browser event binding for the input sampler.
//!
//! Pointer listeners go on the canvas element, keyboard listeners on the
//! document. Each listener reads the DOM event's fields, hands them to
//! [`mouse_event`] / [`key_event`] and pushes the result onto a shared
//! [`EventQueue`]; the engine drains the queue once per frame, so the sampler
//! itself never lives behind a `RefCell`.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use crate::input::{Button, CanvasRect, InputEvent, Key};

/// Pointer events subscribed on the canvas element.
pub const CANVAS_EVENTS: [&str; 5] = ["mousemove", "mouseenter", "mouseleave", "mousedown", "mouseup"];

/// Keyboard events subscribed on the document.
pub const DOCUMENT_EVENTS: [&str; 2] = ["keydown", "keyup"];

type Listener = Closure<dyn FnMut(Event)>;

/// Translate a pointer event of DOM type `kind`.
///
/// `rect` is only read for `mousemove`. Unknown kinds and buttons yield `None`.
#[must_use]
pub fn mouse_event(kind: &str, client_x: f64, client_y: f64, button: i16, rect: CanvasRect) -> Option<InputEvent> {
    match kind {
        "mousemove" => Some(InputEvent::PointerMove { client_x, client_y, rect }),
        "mouseenter" => Some(InputEvent::PointerEnter),
        "mouseleave" => Some(InputEvent::PointerLeave),
        "mousedown" => Button::from_dom(button).map(InputEvent::PointerDown),
        "mouseup" => Button::from_dom(button).map(InputEvent::PointerUp),
        _ => None,
    }
}

/// Translate a keyboard event of DOM type `kind` carrying `KeyboardEvent.code`.
///
/// The flag is `true` when the browser default must be suppressed: a boost
/// key press would otherwise scroll the page.
#[must_use]
pub fn key_event(kind: &str, code: &str, boost_key: &str) -> Option<(InputEvent, bool)> {
    let key = Key(code.to_owned());
    match kind {
        "keydown" => Some((InputEvent::KeyDown(key), code == boost_key)),
        "keyup" => Some((InputEvent::KeyUp(key), false)),
        _ => None,
    }
}

/// Shared buffer between listeners and the frame loop.
#[derive(Debug, Clone, Default)]
pub struct EventQueue(Rc<RefCell<Vec<InputEvent>>>);

impl EventQueue {
    /// Append an event. A re-entrant push while the queue is borrowed is logged and dropped.
    pub fn push(&self, event: InputEvent) {
        match self.0.try_borrow_mut() {
            Ok(mut q) => q.push(event),
            Err(_) => log::warn!("input queue busy; dropped {event:?}"),
        }
    }

    /// Take every queued event, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<InputEvent> {
        match self.0.try_borrow_mut() {
            Ok(mut q) => std::mem::take(&mut *q),
            Err(_) => Vec::new(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut q) = self.0.try_borrow_mut() {
            q.clear();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.try_borrow().map_or(0, |q| q.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Binding {
    target: EventTarget,
    kind: &'static str,
    listener: Listener,
}

/// Live DOM subscriptions feeding an event queue.
pub struct DomInput {
    queue: EventQueue,
    bindings: Vec<Binding>,
}

impl DomInput {
    /// Subscribe to pointer events on `canvas` and key events on `document`.
    ///
    /// A listener the browser refuses is logged and skipped; the rest still bind.
    #[must_use]
    pub fn bind(canvas: &HtmlCanvasElement, document: &Document, boost_key: &str) -> Self {
        let mut this = Self { queue: EventQueue::default(), bindings: Vec::new() };

        let canvas_target: EventTarget = canvas.clone().into();
        for kind in CANVAS_EVENTS {
            let canvas = canvas.clone();
            this.listen(&canvas_target, kind, move |e| {
                let mouse = e.dyn_ref::<MouseEvent>()?;
                let rect = if kind == "mousemove" {
                    let r = canvas.get_bounding_client_rect();
                    CanvasRect { left: r.left(), top: r.top(), width: r.width(), height: r.height() }
                } else {
                    CanvasRect::default()
                };
                mouse_event(kind, f64::from(mouse.client_x()), f64::from(mouse.client_y()), mouse.button(), rect)
            });
        }

        let doc_target: EventTarget = document.clone().into();
        for kind in DOCUMENT_EVENTS {
            let boost_key = boost_key.to_owned();
            this.listen(&doc_target, kind, move |e| {
                let key = e.dyn_ref::<KeyboardEvent>()?;
                let (event, suppress) = key_event(kind, &key.code(), &boost_key)?;
                if suppress {
                    e.prevent_default();
                }
                Some(event)
            });
        }

        this
    }

    fn listen<F>(&mut self, target: &EventTarget, kind: &'static str, mut translate: F)
    where
        F: FnMut(&Event) -> Option<InputEvent> + 'static,
    {
        let queue = self.queue.clone();
        let listener: Listener = Closure::wrap(Box::new(move |e: Event| {
            if let Some(event) = translate(&e) {
                queue.push(event);
            }
        }) as Box<dyn FnMut(Event)>);

        match target.add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref()) {
            Ok(()) => self.bindings.push(Binding { target: target.clone(), kind, listener }),
            Err(err) => log::warn!("failed to bind {kind} listener: {err:?}"),
        }
    }

    /// Take every event received since the last drain, oldest first.
    pub fn drain(&self) -> Vec<InputEvent> {
        self.queue.drain()
    }

    /// Remove every listener. Safe to call more than once; never fails.
    pub fn destroy(&mut self) {
        for binding in self.bindings.drain(..) {
            let callback = binding.listener.as_ref().unchecked_ref();
            if let Err(err) = binding.target.remove_event_listener_with_callback(binding.kind, callback) {
                log::warn!("failed to unbind {} listener: {err:?}", binding.kind);
            }
        }
        self.queue.clear();
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.bindings.is_empty()
    }
}

impl Drop for DomInput {
    fn drop(&mut self) {
        self.destroy();
    }
}
