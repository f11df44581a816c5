//! Host environment boundary.
//!
//! The core strictly depends on the host's post-layout geometry reporting
//! and never re-implements layout. Everything it needs from the outside
//! world sits behind four narrow traits so that a DOM binding, an embedded
//! layout engine, or a test double can drive the same detection logic:
//!
//! - [`LayoutTree`]: geometry reads, the authored force-wrap signal, and
//!   the row-direction probe used while measuring.
//! - [`FlagStore`]: present/absent flag writes, the system's only output.
//! - [`DocumentQuery`]: selector resolution and parent lookup for
//!   registration targets.
//! - [`ResizeWatch`]: per-container size-change subscriptions.
//!
//! A host typically implements all four on one document type.

use crate::element::{ElementId, WrapFlag};

/// Post-layout geometry surface of the host document.
pub trait LayoutTree {
  /// Ordered children of `container`, first to last in layout order.
  fn children(&self, container: ElementId) -> Vec<ElementId>;

  /// Top edge of `element`'s bounding box in CSS pixels, as laid out.
  ///
  /// Detached elements may report degenerate values (commonly zero); the
  /// core tolerates that and classifies them deterministically.
  fn top_edge(&self, element: ElementId) -> f64;

  /// Whether `container` carries the authored force-wrap signal, i.e. its
  /// natural flex-direction stacks items vertically, so only the
  /// aggregate first-vs-last comparison is diagnostic.
  fn is_force_wrap(&self, container: ElementId) -> bool;

  /// Forces `container` into row direction, overriding the authored
  /// direction, so that top offsets become a meaningful wrap signal.
  ///
  /// Every call is balanced by exactly one [`end_row_probe`] before the
  /// evaluation that issued it returns; probes never nest per container.
  ///
  /// [`end_row_probe`]: LayoutTree::end_row_probe
  fn begin_row_probe(&mut self, container: ElementId);

  /// Removes the row override, restoring the authored direction.
  fn end_row_probe(&mut self, container: ElementId);
}

/// Flag storage keyed by element.
///
/// Writes must take effect immediately: a subsequent
/// [`has_flag`](FlagStore::has_flag) in the same evaluation observes them.
/// How flags are spelled on the host side (data attributes, class lists)
/// is a formatting concern outside the core.
pub trait FlagStore {
  /// Marks `flag` present on `element`. Idempotent.
  fn set_flag(&mut self, element: ElementId, flag: WrapFlag);

  /// Removes `flag` from `element`, if present. Idempotent.
  fn clear_flag(&mut self, element: ElementId, flag: WrapFlag);

  /// Whether `flag` is currently present on `element`.
  fn has_flag(&self, element: ElementId, flag: WrapFlag) -> bool;
}

/// Selector resolution against the current document.
pub trait DocumentQuery {
  /// Elements matching `selector`, in document order. Unknown selectors
  /// resolve to an empty list, not an error.
  fn select(&self, selector: &str) -> Vec<ElementId>;

  /// Parent of `element`, or `None` at the tree root.
  fn parent(&self, element: ElementId) -> Option<ElementId>;
}

/// Token for one active size-change watch, minted by the host.
///
/// # Examples
///
/// ```
/// use wrapmark::WatchToken;
///
/// let token = WatchToken::from_raw(3);
/// assert_eq!(token.as_raw(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchToken(u64);

impl WatchToken {
  /// Creates a token from a host-chosen raw value.
  pub const fn from_raw(raw: u64) -> Self {
    Self(raw)
  }

  /// Returns the raw value the host minted this token from.
  pub const fn as_raw(self) -> u64 {
    self.0
  }
}

/// Continuous size-change subscriptions.
///
/// The core assumes nothing about the delivery mechanism, only that the
/// host reports each relevant size change of a watched container by
/// calling [`WrapEngine::notify_resized`], and that notifications may be
/// batched or coalesced.
///
/// [`WrapEngine::notify_resized`]: crate::engine::WrapEngine::notify_resized
pub trait ResizeWatch {
  /// Starts watching `container` for size changes.
  fn watch(&mut self, container: ElementId) -> WatchToken;

  /// Stops the watch identified by `token`. Called exactly once per token.
  fn unwatch(&mut self, token: WatchToken);
}
