//! Shared types for the host boundary.
//!
//! This module defines the geometry and identity values exchanged with the
//! host page:
//! - [`ElementId`]: Opaque identity of a host element (pointer targets)
//! - [`Rect`]: A bounding box in viewport coordinates
//! - [`ScrollOffset`]: Document scroll position
//! - [`ListPosition`]: Where a suggestion list is placed in the document

/// Opaque identity of a host element.
///
/// Hosts assign ids to their elements and report pointer targets with them;
/// the widget only ever asks handles whether they contain an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// A bounding box in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Width.
    pub width: f64,
}

impl Rect {
    /// Create a rect from its top-left corner and size.
    #[must_use]
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            width,
        }
    }
}

/// Document scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    /// Horizontal scroll.
    pub x: f64,
    /// Vertical scroll.
    pub y: f64,
}

impl ScrollOffset {
    /// Create a scroll offset.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Placement of a suggestion list in document coordinates.
///
/// The list is absolutely positioned, so it overlays page content and follows
/// the anchor when the document scrolls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListPosition {
    /// Distance from the document top.
    pub top: f64,
    /// Distance from the document left.
    pub left: f64,
    /// List width, equal to the anchor width.
    pub width: f64,
}

impl ListPosition {
    /// Place a list directly under `anchor`, translated by `scroll`.
    #[must_use]
    pub fn below(anchor: Rect, scroll: ScrollOffset) -> Self {
        Self {
            top: anchor.bottom + scroll.y,
            left: anchor.left + scroll.x,
            width: anchor.width,
        }
    }
}
