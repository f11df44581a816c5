pub mod classify;
pub mod element;
pub mod engine;
pub mod error;
pub mod host;
pub mod sample;
pub mod target;

pub use element::{ElementId, WrapFlag};
pub use engine::{RegistrationId, WrapEngine};
pub use error::{Error, RegistrationError, Result};
pub use host::{DocumentQuery, FlagStore, LayoutTree, ResizeWatch, WatchToken};
pub use sample::{sample_container, WrapSample};
pub use target::{discover_containers, WatchTarget};

// Re-export the evaluation entry points for hosts that drive containers
// directly without the engine's scheduling.
pub use classify::{apply_wrap_state, evaluate};
