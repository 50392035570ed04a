//! Echo Agent - minimal conversation agent core
//!
//! The agent takes a conversation transcript, echoes the last message back as
//! an assistant turn, and returns the extended transcript. It is exposed both
//! as a library ([`run_graph`], [`Responder`]) and as an HTTP API.

pub mod config;
pub mod conversation;
pub mod core;
pub mod routes;

pub use conversation::{ConversationState, Message, Role};
pub use crate::core::{run_graph, run_step, Graph, Responder, Step};
