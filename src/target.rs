//! Registration targets and container discovery.
//!
//! Registration accepts a single container, an ordered sequence of
//! containers, or a selector string, and resolves each shape to a
//! concrete ordered container list before the detection core ever runs.
//! Resolution is the only place a user-facing error can originate.

use rustc_hash::FxHashSet;

use crate::element::ElementId;
use crate::error::{RegistrationError, Result};
use crate::host::DocumentQuery;

/// What a registration call asks to observe.
///
/// # Examples
///
/// ```
/// use wrapmark::{ElementId, WatchTarget};
///
/// let by_element: WatchTarget = ElementId::from_raw(4).into();
/// let by_selector: WatchTarget = "[data-has-wrapped]".into();
///
/// assert!(matches!(by_element, WatchTarget::Container(_)));
/// assert!(matches!(by_selector, WatchTarget::Selector(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchTarget {
  /// A single container element.
  Container(ElementId),
  /// An ordered sequence of container elements.
  Containers(Vec<ElementId>),
  /// A selector resolved against the host document at registration time.
  Selector(String),
}

impl From<ElementId> for WatchTarget {
  fn from(container: ElementId) -> Self {
    Self::Container(container)
  }
}

impl From<Vec<ElementId>> for WatchTarget {
  fn from(containers: Vec<ElementId>) -> Self {
    Self::Containers(containers)
  }
}

impl From<&[ElementId]> for WatchTarget {
  fn from(containers: &[ElementId]) -> Self {
    Self::Containers(containers.to_vec())
  }
}

impl From<&str> for WatchTarget {
  fn from(selector: &str) -> Self {
    Self::Selector(selector.to_owned())
  }
}

impl From<String> for WatchTarget {
  fn from(selector: String) -> Self {
    Self::Selector(selector)
  }
}

impl WatchTarget {
  /// Resolves this target to the concrete ordered container list.
  ///
  /// Fails fast, before any watch is created, on the two invalid input
  /// shapes representable in this API: a blank selector and an
  /// explicitly empty container list. A well-formed selector matching
  /// nothing resolves to an empty list and is not an error.
  pub fn resolve<H: DocumentQuery + ?Sized>(&self, host: &H) -> Result<Vec<ElementId>> {
    match self {
      Self::Container(container) => Ok(vec![*container]),
      Self::Containers(containers) => {
        if containers.is_empty() {
          return Err(RegistrationError::NoContainers.into());
        }
        Ok(containers.clone())
      }
      Self::Selector(selector) => {
        if selector.trim().is_empty() {
          return Err(RegistrationError::BlankSelector.into());
        }
        Ok(host.select(selector))
      }
    }
  }
}

/// Finds the containers to observe from markup-level opt-in selectors.
///
/// Resolves `container_selector` first; when it matches nothing, falls
/// back to `item_selector` and maps each matching item to its parent,
/// deduplicating while preserving document order. Either selector being
/// blank is an input-validation error.
pub fn discover_containers<H: DocumentQuery + ?Sized>(
  host: &H,
  container_selector: &str,
  item_selector: &str,
) -> Result<Vec<ElementId>> {
  if container_selector.trim().is_empty() || item_selector.trim().is_empty() {
    return Err(RegistrationError::BlankSelector.into());
  }

  let marked = host.select(container_selector);
  if !marked.is_empty() {
    return Ok(marked);
  }

  let mut seen = FxHashSet::default();
  let parents = host
    .select(item_selector)
    .into_iter()
    .filter_map(|item| host.parent(item))
    .filter(|parent| seen.insert(*parent))
    .collect();
  Ok(parents)
}
