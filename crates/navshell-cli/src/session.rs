//! Replay of action scripts against a fresh controller.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use navshell_core::{
    Action, NavigationController, RecordingSink, RenderInstruction, Transition, parse_script,
};

/// Result of replaying a script.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// Instructions emitted while replaying, one per applied change.
    pub frames: Vec<RenderInstruction>,
    /// State after the last action.
    pub last: RenderInstruction,
    pub applied: usize,
    pub ignored: usize,
}

pub fn replay(controller: NavigationController, actions: &[Action]) -> ReplayReport {
    let span = info_span!("replay", actions = actions.len());
    let _guard = span.enter();

    let sink = RecordingSink::new();
    let mut controller = controller.with_render_sink(sink.clone());
    let mut applied = 0usize;
    let mut ignored = 0usize;
    for (index, action) in actions.iter().enumerate() {
        match controller.apply(action) {
            Transition::Applied => applied += 1,
            Transition::Ignored => {
                ignored += 1;
                debug!(index, ?action, "action ignored");
            }
        }
    }
    info!(applied, ignored, "replay finished");
    ReplayReport {
        frames: sink.take(),
        last: controller.snapshot(),
        applied,
        ignored,
    }
}

pub fn load_script(path: &Path) -> Result<Vec<Action>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("parse script {}", path.display()))
}
