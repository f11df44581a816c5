//! Element identity and the wrap-flag vocabulary.
//!
//! The detection core never holds references into a host document. Hosts
//! mint an opaque [`ElementId`] per element at the boundary and translate
//! back to their own handles when geometry is read or flags are written.

use std::fmt;

/// Opaque handle to a host element.
///
/// The core treats ids as pure identity: it compares them, keys maps by
/// them, and hands them back to the host. It never derives meaning from
/// the raw value.
///
/// # Examples
///
/// ```
/// use wrapmark::ElementId;
///
/// let el = ElementId::from_raw(7);
/// assert_eq!(el.as_raw(), 7);
/// assert_eq!(el, ElementId::from_raw(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
  /// Creates an id from a host-chosen raw value.
  pub const fn from_raw(raw: u64) -> Self {
    Self(raw)
  }

  /// Returns the raw value the host minted this id from.
  pub const fn as_raw(self) -> u64 {
    self.0
  }
}

impl fmt::Display for ElementId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// Observable wrap state written onto elements.
///
/// Both flags are present/absent markers; how a host spells them
/// (data attributes, classes, widget state) is the host's concern.
///
/// # Examples
///
/// ```
/// use wrapmark::WrapFlag;
///
/// assert_ne!(WrapFlag::Wrapping, WrapFlag::Wrapped);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapFlag {
  /// On a container: at least one item sits on a later line, i.e. the
  /// last item's probed top exceeds the first item's probed top.
  Wrapping,

  /// On an item: the item is the product of an automatic wrap, either
  /// individually offset below the first item or swept up by a
  /// force-wrap container whose aggregate comparison triggered.
  Wrapped,
}
