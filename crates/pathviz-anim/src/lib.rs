//! **pathviz-anim**: replay of search runs as timed event sequences.
//!
//! An [`Animation`] turns a visitation order and a path into two
//! back-to-back phases of events on one logical timeline. The caller drives
//! the clock with [`Animation::advance`] (or blocks with
//! [`Animation::run_blocking`]) and receives events through an
//! [`AnimationSink`]. [`Session`] ties an editable grid to the current run.

mod cancel;
mod events;
mod sequencer;
mod session;

pub use cancel::CancelToken;
pub use events::EventQueue;
pub use sequencer::{Animation, AnimationEvent, AnimationSink, Callbacks, Timing};
pub use session::Session;
