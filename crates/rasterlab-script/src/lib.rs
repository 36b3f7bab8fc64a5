//! rasterlab-script - Named image store and command dispatcher
//!
//! The scripting layer of the rasterlab editor:
//!
//! - [`ImageStore`] - identifier-keyed image storage, last write wins
//! - [`Dispatcher`] - executes whitespace-tokenized instruction streams
//!   against a store, reporting per-instruction failures to a sink
//!
//! A session owns one store; scripts populate it with `load`, derive new
//! entries with the transformation commands, and persist results with
//! `save`.

mod dispatch;
mod error;
mod store;

pub use dispatch::Dispatcher;
pub use error::{ScriptError, ScriptResult};
pub use store::ImageStore;
