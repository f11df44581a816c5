//! One-shot, row-normalized geometry sampling.
//!
//! A container's children only betray wrapping through their vertical
//! offsets when the container is laid out as a row. The sampler therefore
//! measures under a temporary row-direction override: force row, read
//! every child's top edge, restore the authored direction. The override
//! window is scoped to a single synchronous block; no other geometry read
//! for the container may interleave with it.

use crate::element::ElementId;
use crate::host::LayoutTree;

/// Ephemeral measurement of a container's children under the row probe.
///
/// Tops are rounded to integer pixels. A sample is only valid for the
/// instant it was captured and is never persisted across evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapSample {
  /// Rounded top edge of the first item.
  pub first_top: i32,
  /// Rounded top edge of the last item.
  pub last_top: i32,
  /// Every item paired with its rounded top edge, in layout order.
  pub items: Vec<(ElementId, i32)>,
}

impl WrapSample {
  /// True when the aggregate first-vs-last comparison says a line broke.
  pub fn spans_multiple_lines(&self) -> bool {
    self.first_top < self.last_top
  }
}

/// Scoped row-direction override on one container.
///
/// The override is installed on construction and removed on drop, so it
/// comes off on every exit path out of [`sample_container`], including the
/// zero-children return.
struct RowProbe<'a, H: LayoutTree + ?Sized> {
  host: &'a mut H,
  container: ElementId,
}

impl<'a, H: LayoutTree + ?Sized> RowProbe<'a, H> {
  fn new(host: &'a mut H, container: ElementId) -> Self {
    host.begin_row_probe(container);
    Self { host, container }
  }

  /// Top edge of `element` rounded to the nearest integer pixel.
  ///
  /// Rounding absorbs sub-pixel rendering jitter that would otherwise
  /// read as a wrap on an unwrapped row.
  fn rounded_top(&self, element: ElementId) -> i32 {
    self.host.top_edge(element).round() as i32
  }
}

impl<H: LayoutTree + ?Sized> Drop for RowProbe<'_, H> {
  fn drop(&mut self) {
    self.host.end_row_probe(self.container);
  }
}

/// Measures `container`'s children under a forced row direction.
///
/// Returns `None` when the container has no children ("wrapped" is
/// undefined for zero items); the probe is still applied and removed so
/// the authored direction is never left overridden.
pub fn sample_container<H: LayoutTree + ?Sized>(
  host: &mut H,
  container: ElementId,
) -> Option<WrapSample> {
  let probe = RowProbe::new(host, container);

  let children = probe.host.children(container);
  if children.is_empty() {
    return None;
  }

  let items: Vec<(ElementId, i32)> = children
    .into_iter()
    .map(|child| (child, probe.rounded_top(child)))
    .collect();
  drop(probe);

  let first_top = items[0].1;
  let last_top = items[items.len() - 1].1;
  Some(WrapSample {
    first_top,
    last_top,
    items,
  })
}
