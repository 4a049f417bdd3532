//! Ordered dispatch pipeline with a short-circuit contract.
//!
//! Every inbound message runs through the stages in order; the first stage
//! to return an outcome terminates the pipeline. The suppression stage runs
//! before command handling, so a restricted sender's content is removed even
//! if its text happens to resemble a command.

use crate::{CommandEngine, parse};
use async_trait::async_trait;
use stickerlock_core::ChatMessage;
use stickerlock_store::StateStore;

/// Terminal action produced by a stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Delete the triggering message
    Suppress,
    /// Send a reply to the invoking conversation
    Reply(String),
}

/// A pipeline stage: inspects the message and either produces a terminal
/// outcome or passes control to the next stage.
#[async_trait]
pub trait Stage<S: StateStore>: Send + Sync {
    /// Evaluates the message against the engine's state.
    async fn run(&self, engine: &mut CommandEngine<S>, message: &ChatMessage) -> Option<Outcome>;
}

/// Suppresses restricted content before any command handling.
pub struct SuppressionStage;

#[async_trait]
impl<S: StateStore> Stage<S> for SuppressionStage {
    async fn run(&self, engine: &mut CommandEngine<S>, message: &ChatMessage) -> Option<Outcome> {
        let kind = (*message.content_kind())?;
        stickerlock_security::should_suppress(
            engine.state(),
            message.sender_username().as_ref(),
            kind,
        )
        .then_some(Outcome::Suppress)
    }
}

/// Parses and executes administrative commands.
pub struct CommandStage;

#[async_trait]
impl<S: StateStore> Stage<S> for CommandStage {
    async fn run(&self, engine: &mut CommandEngine<S>, message: &ChatMessage) -> Option<Outcome> {
        let text = message.text().as_deref()?;
        match parse(text) {
            Ok(Some(command)) => Some(Outcome::Reply(
                engine.execute(*message.sender_id(), command).await,
            )),
            Ok(None) => None,
            Err(e) => Some(Outcome::Reply(e.reply_text())),
        }
    }
}

/// The dispatch pipeline: an engine plus its ordered stages.
pub struct Pipeline<S: StateStore> {
    engine: CommandEngine<S>,
    stages: Vec<Box<dyn Stage<S>>>,
}

impl<S: StateStore> Pipeline<S> {
    /// The standard two-stage pipeline: suppression, then commands.
    pub fn standard(engine: CommandEngine<S>) -> Self {
        Self {
            engine,
            stages: vec![Box::new(SuppressionStage), Box::new(CommandStage)],
        }
    }

    /// A pipeline with a custom stage order.
    pub fn with_stages(engine: CommandEngine<S>, stages: Vec<Box<dyn Stage<S>>>) -> Self {
        Self { engine, stages }
    }

    /// Runs the message through the stages, short-circuiting on the first
    /// outcome. Returns `None` when no stage acted.
    pub async fn dispatch(&mut self, message: &ChatMessage) -> Option<Outcome> {
        for stage in &self.stages {
            if let Some(outcome) = stage.run(&mut self.engine, message).await {
                return Some(outcome);
            }
        }
        None
    }

    /// Read-only view of the engine.
    pub fn engine(&self) -> &CommandEngine<S> {
        &self.engine
    }
}
