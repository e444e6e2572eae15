//! Document-level listener registration as a scoped resource.
//!
//! A mounted popup holds exactly one pointer-down registration. The
//! registration lives in a [`ListenerGuard`] and is removed when the guard
//! drops, whichever way the mounted scope ends.
//!
//! The host routes an event to the popup through the id it handed out:
//!
//! ```text
//! add_listener(PointerDown) ──► ListenerId ──► MountedPopup
//! host event on that id     ──► MountedPopup::on_pointer_down(id, popup, target)
//! ```

use super::{PopupController, PopupState, Region};
use std::ops::{Deref, DerefMut};

/// Events the popup listens for at document level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// `mousedown` / `pointerdown`.
    PointerDown,
}

/// Handle of one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Host document that accepts global event listeners.
///
/// Methods take `&self`; a host keeps its listener table behind interior
/// mutability the way a browser document does.
pub trait Document {
    fn add_listener(&self, kind: EventKind) -> ListenerId;
    fn remove_listener(&self, id: ListenerId);
}

/// Registration removed from its document on drop.
pub struct ListenerGuard<'d, D: Document + ?Sized> {
    document: &'d D,
    id: ListenerId,
}

impl<'d, D: Document + ?Sized> ListenerGuard<'d, D> {
    pub fn register(document: &'d D, kind: EventKind) -> Self {
        let id = document.add_listener(kind);
        Self { document, id }
    }

    pub const fn id(&self) -> ListenerId {
        self.id
    }
}

impl<D: Document + ?Sized> Drop for ListenerGuard<'_, D> {
    fn drop(&mut self) {
        self.document.remove_listener(self.id);
    }
}

/// A controller attached to a document for the duration of a scope.
///
/// Dereferences to the controller; dropping it (or [`unmount`](Self::unmount))
/// releases the outside-click listener.
pub struct MountedPopup<'d, 'c, D: Document + ?Sized> {
    controller: PopupController<'c>,
    listener: ListenerGuard<'d, D>,
}

impl<'d, 'c, D: Document + ?Sized> MountedPopup<'d, 'c, D> {
    pub(super) fn new(controller: PopupController<'c>, document: &'d D) -> Self {
        Self {
            controller,
            listener: ListenerGuard::register(document, EventKind::PointerDown),
        }
    }

    pub const fn listener_id(&self) -> ListenerId {
        self.listener.id()
    }

    /// Deliver a document pointer-down that the host raised for listener `id`.
    ///
    /// Events for any other registration leave the state untouched.
    pub fn on_pointer_down<N, R>(&mut self, id: ListenerId, popup: &R, target: &N) -> &PopupState
    where
        N: ?Sized,
        R: Region<N> + ?Sized,
    {
        if id == self.listener.id() {
            self.controller.pointer_down(popup, target)
        } else {
            self.controller.state()
        }
    }

    /// Detach from the document, keeping the controller and its state.
    pub fn unmount(self) -> PopupController<'c> {
        let Self { controller, listener } = self;
        drop(listener);
        controller
    }
}

impl<'c, D: Document + ?Sized> Deref for MountedPopup<'_, 'c, D> {
    type Target = PopupController<'c>;

    fn deref(&self) -> &Self::Target {
        &self.controller
    }
}

impl<D: Document + ?Sized> DerefMut for MountedPopup<'_, '_, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.controller
    }
}
