//! Tag-driven translation disclosure popup.
//!
//! # State machine
//!
//! ```text
//!            click(tag in catalog)          click(tag in catalog)
//!   Hidden ────────────────────────► Visible ◄──────────────┐
//!     ▲                                │  └─────────────────┘
//!     │   click(tag not in catalog)    │   content replaced,
//!     └────────────────────────────────┤   anchor recomputed
//!         pointer-down outside popup   │
//!     ◄────────────────────────────────┘
//! ```
//!
//! The anchor sits right below the clicked tag:
//! `top = rect.bottom + scroll.y`, `left = rect.left + scroll.x`.

mod catalog;
mod listener;

pub use catalog::DisclosureCatalog;
pub use listener::{Document, EventKind, ListenerGuard, ListenerId, MountedPopup};

use crate::content::Tag;
use std::fmt;

// ============================================================================
// Geometry
// ============================================================================

/// Viewport-relative bounding box of an element (`getBoundingClientRect`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Current page scroll (`scrollX`, `scrollY`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// Document-relative popup position in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Anchor {
    pub top: f64,
    pub left: f64,
}

impl Anchor {
    /// Position just below `target`, shifted by the page scroll.
    pub fn below(target: Rect, scroll: ScrollOffset) -> Self {
        Self {
            top: target.bottom + scroll.y,
            left: target.left + scroll.x,
        }
    }

    /// CSS `top` value, e.g. `"100px"`.
    pub fn css_top(&self) -> String {
        Px(self.top).to_string()
    }

    /// CSS `left` value, e.g. `"50px"`.
    pub fn css_left(&self) -> String {
        Px(self.left).to_string()
    }
}

struct Px(f64);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

// ============================================================================
// State
// ============================================================================

/// Popup visibility. Content exists only while visible.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PopupState {
    #[default]
    Hidden,
    Visible {
        content: &'static str,
        anchor: Anchor,
    },
}

impl PopupState {
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    /// Disclosure text; empty while hidden.
    pub const fn content(&self) -> &'static str {
        match self {
            Self::Visible { content, .. } => *content,
            Self::Hidden => "",
        }
    }

    pub const fn anchor(&self) -> Option<Anchor> {
        match self {
            Self::Visible { anchor, .. } => Some(*anchor),
            Self::Hidden => None,
        }
    }
}

/// Something occupying a region of the page, used for outside-click tests.
pub trait Region<N: ?Sized> {
    /// Whether `node` lies inside this region (is the root or a descendant).
    fn contains(&self, node: &N) -> bool;
}

impl<N: ?Sized, F: Fn(&N) -> bool> Region<N> for F {
    fn contains(&self, node: &N) -> bool {
        self(node)
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Owns the popup state of one page and applies input events to it.
#[derive(Debug, Clone)]
pub struct PopupController<'c> {
    catalog: &'c DisclosureCatalog,
    state: PopupState,
}

impl<'c> PopupController<'c> {
    pub const fn new(catalog: &'c DisclosureCatalog) -> Self {
        Self {
            catalog,
            state: PopupState::Hidden,
        }
    }

    pub const fn state(&self) -> &PopupState {
        &self.state
    }

    /// A tag was clicked; `target` is the tag element's bounding box.
    ///
    /// A tag with a disclosure shows it below the tag. Any other tag hides the popup.
    pub fn click_tag(&mut self, tag: &Tag, target: Rect, scroll: ScrollOffset) -> &PopupState {
        self.state = match self.catalog.lookup(&tag.name) {
            Some(content) => PopupState::Visible {
                content,
                anchor: Anchor::below(target, scroll),
            },
            None => PopupState::Hidden,
        };
        &self.state
    }

    /// A pointer went down on `target` somewhere in the document.
    ///
    /// Hides a visible popup unless `target` is inside `popup`.
    pub fn pointer_down<N, R>(&mut self, popup: &R, target: &N) -> &PopupState
    where
        N: ?Sized,
        R: Region<N> + ?Sized,
    {
        if self.state.is_visible() && !popup.contains(target) {
            self.state = PopupState::Hidden;
        }
        &self.state
    }

    pub fn hide(&mut self) {
        self.state = PopupState::Hidden;
    }

    /// Attach to `document`, registering the outside-click listener.
    pub fn mount<'d, D: Document + ?Sized>(self, document: &'d D) -> MountedPopup<'d, 'c, D> {
        MountedPopup::new(self, document)
    }
}
