//! Wrap classification and flag marking.
//!
//! Turns a [`WrapSample`] into flag mutations on the container and its
//! items. Classification is derived fresh from geometry on every pass:
//! no flag carries state across evaluations, and every write is
//! set-or-clear so consumers never observe a stale flag after a
//! container un-wraps.

use log::trace;

use crate::element::{ElementId, WrapFlag};
use crate::host::{FlagStore, LayoutTree};
use crate::sample::{sample_container, WrapSample};

/// Writes `flag` as present or absent.
fn mark<H: FlagStore + ?Sized>(host: &mut H, element: ElementId, flag: WrapFlag, present: bool) {
  if present {
    host.set_flag(element, flag);
  } else {
    host.clear_flag(element, flag);
  }
}

/// Applies per-item and container wrap flags derived from `sample`.
///
/// An item is wrapped when its own top strictly exceeds the first item's
/// top. A force-wrap container whose aggregate first-vs-last comparison
/// triggers flags every item uniformly: in a column-stacked layout each
/// item's vertical offset is expected, and only the aggregate comparison
/// is diagnostic. The container itself is flagged exactly when the last
/// item's top strictly exceeds the first item's top.
pub fn apply_wrap_state<H>(host: &mut H, container: ElementId, sample: &WrapSample)
where
  H: LayoutTree + FlagStore + ?Sized,
{
  let spans_lines = sample.spans_multiple_lines();
  let force_wrap_triggered = host.is_force_wrap(container) && spans_lines;

  for &(item, top) in &sample.items {
    let wrapped = top > sample.first_top;
    mark(host, item, WrapFlag::Wrapped, wrapped || force_wrap_triggered);
  }

  mark(host, container, WrapFlag::Wrapping, spans_lines);
}

/// Samples and classifies `container` as one synchronous block.
///
/// This is the unit of work the engine defers to a frame boundary. The
/// probe window and the flag writes complete without suspension, so two
/// evaluations of the same container can never interleave their style
/// mutations. A container with no children is a no-op: no flags are
/// touched.
pub fn evaluate<H>(host: &mut H, container: ElementId)
where
  H: LayoutTree + FlagStore + ?Sized,
{
  let Some(sample) = sample_container(host, container) else {
    trace!("container {container} has no items; wrap state untouched");
    return;
  };
  trace!(
    "container {container}: first_top={} last_top={} items={}",
    sample.first_top,
    sample.last_top,
    sample.items.len()
  );
  apply_wrap_state(host, container, &sample);
}
