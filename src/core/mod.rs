//! Core agent components
//!
//! This module contains the conversation step logic: the echo responder,
//! its timestamp source, and the graph that composes steps.

mod clock;
mod graph;
mod responder;

pub use clock::{Clock, FixedClock, SystemClock};
pub use graph::{run_graph, Graph, Step};
pub use responder::{echo_reply, run_step, Responder, ECHO_PREFIX};
