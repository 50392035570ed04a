//! Echo responder
//!
//! Reads the last message of a conversation and appends an assistant reply
//! that echoes it back. The input state is never mutated; every call returns
//! a new state with exactly one message appended.

use crate::conversation::{ConversationState, Message};

use super::clock::{Clock, SystemClock};

/// Literal prepended to the echoed content
pub const ECHO_PREFIX: &str = "Echo: ";

/// Build the reply text for the given last-message content.
///
/// Trimming applies to the whole reply, so an empty transcript yields `"Echo:"`.
pub fn echo_reply(last_content: &str) -> String {
    format!("{ECHO_PREFIX}{last_content}")
        .trim_matches(is_trimmable)
        .to_string()
}

/// ECMAScript WhiteSpace and LineTerminator code points.
///
/// Differs from Unicode `White_Space` (`str::trim`): U+FEFF is trimmed and
/// U+0085 is kept.
fn is_trimmable(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Appends an echo of the last message as an assistant turn
#[derive(Debug, Clone, Default)]
pub struct Responder<C = SystemClock> {
    clock: C,
}

impl Responder<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Responder<C> {
    /// Use a specific timestamp source for new messages
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Compute the next conversation state
    pub fn respond(&self, state: &ConversationState) -> ConversationState {
        let reply = Message::assistant(
            echo_reply(state.last_content()),
            self.clock.now_ms() as f64,
        );

        let mut messages = Vec::with_capacity(state.messages.len() + 1);
        messages.extend_from_slice(&state.messages);
        messages.push(reply);

        ConversationState {
            session_id: state.session_id.clone(),
            messages,
        }
    }
}

/// Run one echo step against the wall clock
pub fn run_step(state: &ConversationState) -> ConversationState {
    Responder::new().respond(state)
}
