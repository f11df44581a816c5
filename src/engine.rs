//! Evaluation scheduling, registration, and teardown.
//!
//! [`WrapEngine`] is the piece the host's event loop talks to. The flow:
//!
//! ```text
//! register ──────────────┐
//! size-change notify ────┤→ pending queue (one slot per container)
//!                        │
//! host frame tick ───────┴→ run_frame → sample + classify per container
//! ```
//!
//! Every evaluation is deferred to the next rendering opportunity rather
//! than run inline, so rapid triggers batch onto a single post-layout
//! read and the geometry read happens after the layout engine has
//! finished reacting to whatever caused the trigger. Requests for the
//! same container queued within one frame collapse to one execution.
//!
//! Everything here is single-threaded and cooperative: plain `&mut`
//! methods, no interior mutability, no locking. The probe window of an
//! evaluation (see [`crate::sample`]) is one synchronous block inside
//! [`WrapEngine::run_frame`].

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::classify::evaluate;
use crate::element::ElementId;
use crate::error::Result;
use crate::host::{DocumentQuery, FlagStore, LayoutTree, ResizeWatch, WatchToken};
use crate::target::WatchTarget;

/// Identifies one registration call for later teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(u64);

#[derive(Debug)]
struct Registration {
  watches: Vec<WatchToken>,
}

/// Defers and collapses wrap evaluations, and owns watch lifecycles.
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = WrapEngine::new();
/// let registration = engine.register(&mut dom, "[data-has-wrapped]")?;
///
/// // Host event loop:
/// //  - on a container size change: engine.notify_resized(container)
/// //  - at the next rendering opportunity: engine.run_frame(&mut dom)
///
/// engine.teardown(&mut dom, registration);
/// ```
#[derive(Debug, Default)]
pub struct WrapEngine {
  /// Pending containers in trigger order; `pending_set` keeps each
  /// container queued at most once per frame.
  pending: Vec<ElementId>,
  pending_set: FxHashSet<ElementId>,
  registrations: FxHashMap<RegistrationId, Registration>,
  next_registration: u64,
}

impl WrapEngine {
  pub fn new() -> Self {
    Self::default()
  }

  /// Queues `container` for re-evaluation at the next frame.
  ///
  /// Hosts call this from their size-change delivery for watched
  /// containers. Duplicate requests before the next [`run_frame`] call
  /// collapse to a single evaluation.
  ///
  /// [`run_frame`]: WrapEngine::run_frame
  pub fn notify_resized(&mut self, container: ElementId) {
    if self.pending_set.insert(container) {
      self.pending.push(container);
    }
  }

  /// Whether any evaluation is queued for the next frame.
  pub fn has_pending(&self) -> bool {
    !self.pending.is_empty()
  }

  /// Whether `registration` is still active (registered and not torn
  /// down).
  pub fn is_active(&self, registration: RegistrationId) -> bool {
    self.registrations.contains_key(&registration)
  }

  /// Runs every queued evaluation.
  ///
  /// The host calls this at its next rendering opportunity, after layout
  /// has settled for the frame. Each pending container is sampled and
  /// classified exactly once; notifications arriving after this drain
  /// land in the next frame's queue.
  pub fn run_frame<H>(&mut self, host: &mut H)
  where
    H: LayoutTree + FlagStore + ?Sized,
  {
    if self.pending.is_empty() {
      return;
    }
    let batch = std::mem::take(&mut self.pending);
    self.pending_set.clear();
    debug!("evaluating wrap state of {} container(s)", batch.len());
    for container in batch {
      evaluate(host, container);
    }
  }

  /// Resolves `target`, queues an initial evaluation for each resolved
  /// container, and watches each for size changes.
  ///
  /// Fails fast on invalid input (see [`WatchTarget::resolve`]); on
  /// error, no watch is created and nothing is queued. The returned id
  /// covers every container resolved by this call and is the handle for
  /// [`teardown`](WrapEngine::teardown).
  pub fn register<H>(
    &mut self,
    host: &mut H,
    target: impl Into<WatchTarget>,
  ) -> Result<RegistrationId>
  where
    H: DocumentQuery + ResizeWatch + ?Sized,
  {
    let target: WatchTarget = target.into();
    let containers = target.resolve(host)?;

    let mut watches = Vec::with_capacity(containers.len());
    for &container in &containers {
      self.notify_resized(container);
      watches.push(host.watch(container));
    }

    let id = RegistrationId(self.next_registration);
    self.next_registration += 1;
    debug!(
      "registration {:?} observing {} container(s)",
      id,
      containers.len()
    );
    self.registrations.insert(id, Registration { watches });
    Ok(id)
  }

  /// Permanently stops size-triggered re-evaluation for every container
  /// of `registration`.
  ///
  /// Each watch is released exactly once; calling again with the same id
  /// (or an unknown id) is a no-op. Flags are left in their
  /// last-computed state. An evaluation already queued when teardown
  /// runs may still fire at the next frame; it only re-derives
  /// currently-true geometry.
  pub fn teardown<H>(&mut self, host: &mut H, registration: RegistrationId)
  where
    H: ResizeWatch + ?Sized,
  {
    let Some(state) = self.registrations.remove(&registration) else {
      return;
    };
    debug!(
      "teardown of {:?}: releasing {} watch(es)",
      registration,
      state.watches.len()
    );
    for token in state.watches {
      host.unwatch(token);
    }
  }
}
