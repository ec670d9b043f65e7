//! Leptos DragDrop Utilities
//!
//! Drag-and-drop into a single-capacity slot, driven by mouse and touch.
//! Both front-ends read page coordinates and feed one `DragController`,
//! which owns the session state machine. A movement threshold separates a
//! click from a drag.

mod geometry;
mod gesture;
mod session;

pub use geometry::{Point, Rect};
pub use gesture::{HoverTarget, InputSource, RegionMap};
pub use session::{ArmError, Commit, DragMachine, DragSession, DropOutcome, Phase};

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// DnD state signals, mirrored from the machine for rendering
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Item being dragged (only once the session is active)
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub hover_read: ReadSignal<Option<HoverTarget>>,
    pub hover_write: WriteSignal<Option<HoverTarget>>,
    /// Last pointer position, page coordinates
    pub pointer_read: ReadSignal<Point>,
    pub pointer_write: WriteSignal<Point>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (hover_read, hover_write) = signal(None::<HoverTarget>);
    let (pointer_read, pointer_write) = signal(Point::default());
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        hover_read,
        hover_write,
        pointer_read,
        pointer_write,
    }
}

/// Single entry point shared by the mouse and touch front-ends
#[derive(Clone, Copy)]
pub struct DragController {
    pub signals: DndSignals,
    machine: StoredValue<DragMachine>,
    /// Measures the drop regions for the dragged item, on demand
    measure_regions: Callback<u32, RegionMap>,
    /// Item currently in the slot
    slotted: Callback<(), Option<u32>>,
    on_commit: Callback<Commit>,
}

impl DragController {
    pub fn new(
        measure_regions: Callback<u32, RegionMap>,
        slotted: Callback<(), Option<u32>>,
        on_commit: Callback<Commit>,
    ) -> Self {
        Self {
            signals: create_dnd_signals(),
            machine: StoredValue::new(DragMachine::new()),
            measure_regions,
            slotted,
            on_commit,
        }
    }

    /// Pointer down on an item. Returns false if the press was refused.
    pub fn press(&self, item_id: u32, at: Point, input: InputSource) -> bool {
        let slotted = self.slotted;
        let armed = self
            .machine
            .try_update_value(|machine| machine.arm(item_id, at, input, slotted.run(())))
            .unwrap_or(Err(ArmError::Disposed));
        match armed {
            Ok(()) => {
                self.signals.pointer_write.set(at);
                log::debug!("[DND] armed item={} input={:?}", item_id, input);
                true
            }
            Err(e) => {
                log::debug!("[DND] press on item {} refused: {}", item_id, e);
                false
            }
        }
    }

    /// Pointer moved. Ignored unless a session from the same input exists.
    pub fn moved(&self, at: Point, input: InputSource) {
        let Some(item) = self.session_item(input) else {
            return;
        };
        let hover = self.measure_regions.run(item).classify(at);
        let active = self
            .machine
            .try_update_value(|machine| machine.track(at, hover))
            .unwrap_or(false);
        if active {
            if self.signals.dragging_id_read.get_untracked() != Some(item) {
                log::debug!("[DND] drag started item={}", item);
                self.signals.dragging_id_write.set(Some(item));
            }
            self.signals.pointer_write.set(at);
            if self.signals.hover_read.get_untracked() != hover {
                self.signals.hover_write.set(hover);
            }
        }
    }

    /// Pointer released. Applies a commit through `on_commit`.
    pub fn released(&self, input: InputSource) -> DropOutcome {
        if self.session_item(input).is_none() {
            return DropOutcome::Idle;
        }
        let outcome = self
            .machine
            .try_update_value(|machine| machine.release())
            .unwrap_or(DropOutcome::Idle);
        self.clear_signals();
        match outcome {
            DropOutcome::Commit(commit) => {
                log::debug!("[DND] commit {:?}", commit);
                self.on_commit.run(commit);
            }
            DropOutcome::Cancelled => log::debug!("[DND] drop cancelled"),
            DropOutcome::NotStarted | DropOutcome::Idle => {}
        }
        outcome
    }

    /// Abort the current session, whatever its input
    pub fn cancelled(&self) {
        let had_session = self
            .machine
            .try_update_value(|machine| machine.cancel())
            .unwrap_or(false);
        if had_session {
            log::debug!("[DND] drag cancelled");
            self.clear_signals();
        }
    }

    pub fn is_dragging(&self, item_id: u32) -> bool {
        self.signals.dragging_id_read.get() == Some(item_id)
    }

    /// Item of the current session, when that session belongs to `input`
    fn session_item(&self, input: InputSource) -> Option<u32> {
        self.machine
            .try_with_value(|machine| {
                machine
                    .session()
                    .filter(|session| session.input == input)
                    .map(|session| session.item)
            })
            .flatten()
    }

    fn clear_signals(&self) {
        self.signals.dragging_id_write.set(None);
        self.signals.hover_write.set(None);
    }
}

// ========================
// Mouse front-end
// ========================

fn mouse_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.page_x() as f64, ev.page_y() as f64)
}

fn is_form_control(target: &web_sys::EventTarget) -> bool {
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
}

/// Create mousedown handler for draggable items
pub fn make_on_mousedown(ctl: DragController, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if is_form_control(&target) {
                return;
            }
        }
        // Suppresses text selection, and the whole press when refused
        ev.prevent_default();
        ctl.press(item_id, mouse_point(&ev), InputSource::Mouse);
    }
}

/// Document-level listeners, removed again on drop
pub struct DocumentListeners {
    document: web_sys::Document,
    bound: Vec<(&'static str, Closure<dyn FnMut(web_sys::Event)>)>,
}

impl DocumentListeners {
    fn bind(&mut self, event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let _ = self
            .document
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        self.bound.push((event, closure));
    }
}

impl Drop for DocumentListeners {
    fn drop(&mut self) {
        for (event, closure) in &self.bound {
            let _ = self
                .document
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

/// Bind global mousemove / mouseup / Escape handling for one controller
pub fn bind_document_listeners(ctl: DragController) -> Option<DocumentListeners> {
    let document = web_sys::window()?.document()?;
    let mut listeners = DocumentListeners {
        document,
        bound: Vec::new(),
    };
    listeners.bind("mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
            ctl.moved(mouse_point(ev), InputSource::Mouse);
        }
    });
    listeners.bind("mouseup", move |_| {
        ctl.released(InputSource::Mouse);
    });
    listeners.bind("keydown", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web_sys::KeyboardEvent>() {
            if ev.key() == "Escape" {
                ctl.cancelled();
            }
        }
    });
    // A page switched away mid-drag never sees its mouseup
    let document = listeners.document.clone();
    listeners.bind("visibilitychange", move |_| {
        if document.hidden() {
            ctl.cancelled();
        }
    });
    Some(listeners)
}

// ========================
// Touch front-end
// ========================

fn touch_point(ev: &web_sys::TouchEvent) -> Option<Point> {
    let touch = ev.touches().get(0).or_else(|| ev.changed_touches().get(0))?;
    Some(Point::new(touch.page_x() as f64, touch.page_y() as f64))
}

/// Create touchstart handler for draggable items
pub fn make_on_touchstart(ctl: DragController, item_id: u32) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        let Some(at) = touch_point(&ev) else { return };
        if !ctl.press(item_id, at, InputSource::Touch) {
            ev.prevent_default();
        }
    }
}

pub fn make_on_touchmove(ctl: DragController) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some(at) = touch_point(&ev) {
            ctl.moved(at, InputSource::Touch);
        }
    }
}

pub fn make_on_touchend(ctl: DragController) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |_ev: web_sys::TouchEvent| {
        ctl.released(InputSource::Touch);
    }
}

pub fn make_on_touchcancel(ctl: DragController) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |_ev: web_sys::TouchEvent| ctl.cancelled()
}

// ========================
// Helpers
// ========================

/// Current scroll offsets of the window
pub fn scroll_offsets() -> (f64, f64) {
    web_sys::window()
        .map(|win| (win.scroll_x().unwrap_or(0.0), win.scroll_y().unwrap_or(0.0)))
        .unwrap_or((0.0, 0.0))
}

/// Bounding box of an element in page coordinates
pub fn page_rect(element: &web_sys::Element) -> Rect {
    let (scroll_x, scroll_y) = scroll_offsets();
    Rect::from_client(&element.get_bounding_client_rect(), scroll_x, scroll_y)
}

/// Keep a non-`Send` guard alive until the current owner is cleaned up
pub fn hold_until_cleanup<T: 'static>(value: T) {
    let held = StoredValue::new_local(Some(value));
    on_cleanup(move || {
        held.try_update_value(|value| {
            value.take();
        });
    });
}
