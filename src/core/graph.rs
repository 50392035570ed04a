//! Step composition
//!
//! A [`Graph`] is an ordered pipeline of [`Step`]s. Each step receives the
//! state produced by the previous one. The default graph holds a single
//! [`Responder`], which is the whole agent today.

use std::sync::Arc;

use async_trait::async_trait;

use crate::conversation::ConversationState;

use super::clock::Clock;
use super::responder::Responder;

/// An asynchronous transformation of conversation state
#[async_trait]
pub trait Step: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produce the next state. Implementations must not mutate the input.
    async fn run(&self, state: &ConversationState) -> ConversationState;
}

#[async_trait]
impl<C: Clock> Step for Responder<C> {
    fn name(&self) -> &'static str {
        "respond"
    }

    async fn run(&self, state: &ConversationState) -> ConversationState {
        self.respond(state)
    }
}

/// Ordered pipeline of steps
#[derive(Clone)]
pub struct Graph {
    steps: Vec<Arc<dyn Step>>,
}

impl Graph {
    /// Create a graph with no steps
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step to the end of the pipeline
    pub fn with_step(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step in order
    #[tracing::instrument(skip_all, fields(session_id = %state.session_id))]
    pub async fn run(&self, state: &ConversationState) -> ConversationState {
        let mut current = state.clone();

        for step in &self.steps {
            current = step.run(&current).await;
            tracing::debug!(step = step.name(), messages = current.len(), "Step complete");
        }

        current
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new().with_step(Responder::new())
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("steps", &self.step_names())
            .finish()
    }
}

/// Run the default graph once
pub async fn run_graph(state: &ConversationState) -> ConversationState {
    Graph::default().run(state).await
}
