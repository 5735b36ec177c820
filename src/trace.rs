//! Recorded gesture traces
//!
//! A trace is a YAML document holding an optional pad config and a list of
//! host events. Replaying it drives a fresh pad and records what fired,
//! which is how gestures are reproduced outside the host UI.
//!
//! ```yaml
//! config: { scheme: four, interaction_size: 20 }
//! events:
//!   - { event: measured, width: 200, height: 200 }
//!   - { event: drag_start, x: 150, y: 100 }
//!   - { event: drag_end }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tokio::fs;
use tracing::debug;

use crate::config::PadConfig;
use crate::pad::{CallbackSet, DirectionPad, PadAction, PadEvent, PadState};

/// A recorded gesture
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Trace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<PadConfig>,
    #[serde(default)]
    pub events: Vec<PadEvent>,
}

impl Trace {
    /// Load a trace file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read trace file: {}", path.display()))?;

        Self::from_yaml_str(&contents)
            .with_context(|| format!("Invalid trace file: {}", path.display()))
    }

    /// Parse a trace, validating its embedded config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let trace: Trace = serde_yaml::from_str(yaml).context("Failed to parse YAML trace")?;
        if let Some(config) = &trace.config {
            config.validate()?;
        }
        Ok(trace)
    }

    /// Config to replay with: the trace's own, else `fallback`
    pub fn effective_config<'a>(&'a self, fallback: &'a PadConfig) -> &'a PadConfig {
        self.config.as_ref().unwrap_or(fallback)
    }
}

/// Outcome of one replayed event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub index: usize,
    pub event: PadEvent,
    /// Callbacks fired while handling the event, in order
    pub fired: Vec<PadAction>,
    /// Pad state after the event
    pub state: PadState,
}

/// Run `events` through a fresh pad built from `config`
pub fn replay(config: &PadConfig, events: &[PadEvent]) -> Vec<ReplayStep> {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let callbacks = CallbackSet::observe_all({
        let fired = Rc::clone(&fired);
        move |action| fired.borrow_mut().push(action)
    });
    let mut pad = DirectionPad::new(config, callbacks);

    let steps: Vec<ReplayStep> = events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            pad.handle(*event);
            ReplayStep {
                index,
                event: *event,
                fired: fired.borrow_mut().drain(..).collect(),
                state: pad.state(),
            }
        })
        .collect();

    debug!("Replayed {} events with {} scheme", steps.len(), config.scheme);
    steps
}
