//! Shared test host: a scripted document the detection core drives.
//!
//! Geometry, selectors, and the force-wrap signal are scripted up front;
//! the host records probe and watch traffic so tests can assert on the
//! core's side of the contract (balanced probes, single watch release,
//! one evaluation per frame).

#![allow(dead_code)]

use rustc_hash::{FxHashMap, FxHashSet};
use wrapmark::{
  DocumentQuery, ElementId, FlagStore, LayoutTree, ResizeWatch, WatchToken, WrapFlag,
};

#[derive(Default)]
pub struct TestDom {
  next_id: u64,
  children: FxHashMap<ElementId, Vec<ElementId>>,
  parents: FxHashMap<ElementId, ElementId>,
  tops: FxHashMap<ElementId, f64>,
  probed_tops: FxHashMap<ElementId, f64>,
  force_wrap: FxHashSet<ElementId>,
  selectors: FxHashMap<String, Vec<ElementId>>,
  flags: FxHashSet<(ElementId, WrapFlag)>,

  probed: FxHashSet<ElementId>,
  pub probe_begins: u32,
  pub probe_ends: u32,

  next_watch: u64,
  pub watches: FxHashMap<WatchToken, ElementId>,
  pub watch_calls: Vec<ElementId>,
  pub unwatch_calls: Vec<WatchToken>,
}

impl TestDom {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn new_element(&mut self) -> ElementId {
    self.next_id += 1;
    ElementId::from_raw(self.next_id)
  }

  /// Builds a container whose children sit at `tops`.
  pub fn container(&mut self, tops: &[f64]) -> ElementId {
    let container = self.new_element();
    let items: Vec<ElementId> = tops
      .iter()
      .map(|&top| {
        let item = self.new_element();
        self.tops.insert(item, top);
        self.parents.insert(item, container);
        item
      })
      .collect();
    self.children.insert(container, items);
    container
  }

  pub fn items(&self, container: ElementId) -> Vec<ElementId> {
    self.children.get(&container).cloned().unwrap_or_default()
  }

  /// Re-scripts item geometry, e.g. after a simulated resize.
  pub fn set_tops(&mut self, container: ElementId, tops: &[f64]) {
    let items = self.items(container);
    assert_eq!(items.len(), tops.len(), "scripted tops must cover every item");
    for (item, &top) in items.iter().zip(tops) {
      self.tops.insert(*item, top);
    }
  }

  /// Geometry served only while the container is under the row probe.
  pub fn set_probed_tops(&mut self, container: ElementId, tops: &[f64]) {
    let items = self.items(container);
    assert_eq!(items.len(), tops.len(), "scripted tops must cover every item");
    for (item, &top) in items.iter().zip(tops) {
      self.probed_tops.insert(*item, top);
    }
  }

  pub fn mark_force_wrap(&mut self, container: ElementId) {
    self.force_wrap.insert(container);
  }

  pub fn define_selector(&mut self, selector: &str, matches: &[ElementId]) {
    self.selectors.insert(selector.to_owned(), matches.to_vec());
  }

  /// Drops all scripted geometry for the container's items, simulating
  /// removal from the tree: subsequent reads come back zero.
  pub fn detach(&mut self, container: ElementId) {
    for item in self.items(container) {
      self.tops.remove(&item);
      self.probed_tops.remove(&item);
    }
  }

  pub fn probe_balanced(&self) -> bool {
    self.probed.is_empty() && self.probe_begins == self.probe_ends
  }

  /// Evaluations performed so far; the sampler opens exactly one probe
  /// per evaluation.
  pub fn evaluations(&self) -> u32 {
    self.probe_begins
  }

  pub fn flag_count(&self) -> usize {
    self.flags.len()
  }
}

impl LayoutTree for TestDom {
  fn children(&self, container: ElementId) -> Vec<ElementId> {
    self.items(container)
  }

  fn top_edge(&self, element: ElementId) -> f64 {
    let under_probe = self
      .parents
      .get(&element)
      .is_some_and(|parent| self.probed.contains(parent));
    if under_probe {
      if let Some(&top) = self.probed_tops.get(&element) {
        return top;
      }
    }
    self.tops.get(&element).copied().unwrap_or(0.0)
  }

  fn is_force_wrap(&self, container: ElementId) -> bool {
    self.force_wrap.contains(&container)
  }

  fn begin_row_probe(&mut self, container: ElementId) {
    assert!(self.probed.insert(container), "row probe nested on {container}");
    self.probe_begins += 1;
  }

  fn end_row_probe(&mut self, container: ElementId) {
    assert!(
      self.probed.remove(&container),
      "unbalanced end_row_probe for {container}"
    );
    self.probe_ends += 1;
  }
}

impl FlagStore for TestDom {
  fn set_flag(&mut self, element: ElementId, flag: WrapFlag) {
    self.flags.insert((element, flag));
  }

  fn clear_flag(&mut self, element: ElementId, flag: WrapFlag) {
    self.flags.remove(&(element, flag));
  }

  fn has_flag(&self, element: ElementId, flag: WrapFlag) -> bool {
    self.flags.contains(&(element, flag))
  }
}

impl DocumentQuery for TestDom {
  fn select(&self, selector: &str) -> Vec<ElementId> {
    self.selectors.get(selector).cloned().unwrap_or_default()
  }

  fn parent(&self, element: ElementId) -> Option<ElementId> {
    self.parents.get(&element).copied()
  }
}

impl ResizeWatch for TestDom {
  fn watch(&mut self, container: ElementId) -> WatchToken {
    self.next_watch += 1;
    let token = WatchToken::from_raw(self.next_watch);
    self.watches.insert(token, container);
    self.watch_calls.push(container);
    token
  }

  fn unwatch(&mut self, token: WatchToken) {
    assert!(
      self.watches.remove(&token).is_some(),
      "unwatch of unknown or already-released token"
    );
    self.unwatch_calls.push(token);
  }
}
