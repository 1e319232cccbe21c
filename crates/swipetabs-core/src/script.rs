//! Scripted replay of tab group inputs
//!
//! A script is a JSON list of timed inputs. Replaying it runs the engine in
//! virtual time at the configured frame rate, which makes gesture and
//! animation behaviour reproducible outside a real renderer.
//!
//! ```json
//! [
//!   { "at_ms": 0,   "input": { "tab_width": 300 } },
//!   { "at_ms": 20,  "gesture": { "delta_x": -150, "velocity_x": -0.4, "is_final": false } },
//!   { "at_ms": 120, "gesture": { "delta_x": -170, "velocity_x": 0.2, "is_final": true } }
//! ]
//! ```

use std::path::Path;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::gesture::GesturePayload;
use crate::group::TabGroup;
use crate::state::StateInput;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Milliseconds since the start of the replay
    pub at_ms: u64,
    /// Reducer input, or
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<StateInput>,
    /// raw recognizer payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gesture: Option<GesturePayload>,
}

impl ScriptStep {
    fn state_input(&self) -> Result<StateInput> {
        match (self.input, self.gesture) {
            (Some(input), None) => Ok(input),
            (None, Some(gesture)) => Ok(gesture.into()),
            _ => Err(Error::Script(format!(
                "step at {}ms needs exactly one of `input` or `gesture`",
                self.at_ms
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub steps: Vec<ScriptStep>,
}

/// One emitted frame of a replay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatedFrame {
    pub at_ms: u64,
    pub active_index: usize,
    pub content: f64,
    pub indicator: f64,
}

impl Script {
    pub fn from_json(text: &str) -> Result<Self> {
        let script: Script = serde_json::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check ordering and step shape
    pub fn validate(&self) -> Result<()> {
        for pair in self.steps.windows(2) {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(Error::Script(format!(
                    "step at {}ms comes after step at {}ms",
                    pair[1].at_ms, pair[0].at_ms
                )));
            }
        }
        for step in &self.steps {
            step.state_input()?;
        }
        Ok(())
    }

    fn end_ms(&self) -> u64 {
        self.steps.last().map(|s| s.at_ms).unwrap_or(0)
    }
}

/// Replay a script in virtual time
///
/// Runs until every step has been applied and the group has settled.
pub fn simulate(script: &Script, tab_count: usize, config: &AppConfig) -> Result<Vec<SimulatedFrame>> {
    script.validate()?;

    let frame_ms = config.animation.frame_interval().as_millis() as u64;
    let origin = Instant::now();
    let mut group = TabGroup::new(tab_count, config);
    let mut steps = script.steps.iter().peekable();
    let mut frames = Vec::new();
    let mut at_ms = 0;

    loop {
        let now = origin + Duration::from_millis(at_ms);

        while let Some(step) = steps.next_if(|s| s.at_ms <= at_ms) {
            // Steps land at their own timestamp, even between frames
            group.dispatch(step.state_input()?, origin + Duration::from_millis(step.at_ms));
        }

        if let Some(translate) = group.tick(now) {
            frames.push(SimulatedFrame {
                at_ms,
                active_index: group.state().active_index,
                content: translate.content,
                indicator: translate.indicator,
            });
        }

        if steps.peek().is_none() && !group.needs_frame() && at_ms >= script.end_ms() {
            break;
        }
        at_ms += frame_ms;
    }

    tracing::debug!(frames = frames.len(), "Script replay finished");
    Ok(frames)
}
