//! On-screen debug log and status line.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::config::DEBUG_LOG_CAPACITY;

/// Timestamped log lines shown in the debug overlay, newest first.
#[derive(Resource, Debug, Clone, Default)]
pub struct DebugLog {
    lines: VecDeque<String>,
}

impl DebugLog {
    pub fn push(&mut self, line: String) {
        self.lines.push_front(line);
        self.lines.truncate(DEBUG_LOG_CAPACITY);
    }

    /// Lines, newest first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Log `msg` through `tracing` and append it to the overlay log.
pub fn debug_log(log: &mut DebugLog, elapsed: f32, msg: impl AsRef<str>) {
    let msg = msg.as_ref();
    info!("{msg}");
    log.push(format!("[{elapsed:8.3}s] {msg}"));
}

/// Navigator status line, toggled with `H`.
#[derive(Resource, Debug, Clone, Default)]
pub struct DebugInfo {
    pub visible: bool,
    pub status: String,
}

impl DebugInfo {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}
