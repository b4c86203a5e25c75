//! Leptos DragDrop Utilities
//!
//! Drag-and-drop list reordering for Leptos built on the native HTML5 drag
//! events. The owning list component creates the signal bundle, hands it to
//! every draggable row, and receives the (dragged, target) id pair through
//! the drop callback. Reordering semantics are up to the caller; this crate
//! only tracks which row is being dragged.

use leptos::prelude::*;

/// DnD state signals. The active drag source is explicit state owned by
/// whichever component created the bundle, not a hidden module-level
/// variable.
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
    }
}

/// Clear the tracked drag source. Called from dragend unconditionally, so a
/// drag abandoned outside any drop target leaves no state behind.
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
}

/// Create a dragstart handler that records `id` as the active drag source
pub fn make_on_drag_start(
    dnd: DndSignals,
    id: String,
) -> impl Fn(web_sys::DragEvent) + Clone + 'static {
    move |_ev: web_sys::DragEvent| {
        dnd.dragging_id_write.set(Some(id.clone()));
    }
}

/// Create a dragover handler. Cancelling dragover is what marks the row as
/// a valid drop target for the browser.
pub fn make_on_drag_over() -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    |ev: web_sys::DragEvent| ev.prevent_default()
}

/// Create a drop handler for the row `target_id`. Resolves the active drag,
/// if any, and passes the (dragged, target) pair to `on_drop`. A drop with
/// no active drag is ignored.
pub fn make_on_drop<F>(
    dnd: DndSignals,
    target_id: String,
    on_drop: F,
) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(String, String) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(dragged) = dnd.dragging_id_read.get_untracked() {
            on_drop(dragged, target_id.clone());
        }
    }
}

/// Whether the row `id` is the one currently being dragged (tracked read,
/// usable in class closures)
pub fn is_dragging(dnd: &DndSignals, id: &str) -> bool {
    dnd.dragging_id_read.get().as_deref() == Some(id)
}
