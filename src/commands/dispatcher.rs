//! Command dispatch port and the stock dispatchers.
//!
//! Emission is fire-and-forget: `emit` never fails from the caller's point of
//! view. Whatever sits behind the dispatcher (history engine, collaboration
//! session, stdout) is the sole authority that applies commands.

use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, error, warn};

use crate::commands::Command;

/// Receives every command emitted by the editing layer
pub trait CommandDispatcher: Send + Sync {
    /// Take ownership of `command` and forward it
    fn emit(&self, command: Command);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Collects commands in emission order
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Mutex<VecDeque<Command>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.commands).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.commands).is_empty()
    }

    /// Oldest pending command
    pub fn pop(&self) -> Option<Command> {
        lock(&self.commands).pop_front()
    }

    /// Remove and return every pending command, oldest first
    pub fn drain(&self) -> Vec<Command> {
        lock(&self.commands).drain(..).collect()
    }
}

impl CommandDispatcher for CommandQueue {
    fn emit(&self, command: Command) {
        lock(&self.commands).push_back(command);
    }
}

/// Forwards commands into an unbounded tokio channel
#[derive(Debug, Clone)]
pub struct ChannelDispatcher {
    sender: UnboundedSender<Command>,
}

impl ChannelDispatcher {
    pub fn new() -> (Self, UnboundedReceiver<Command>) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl CommandDispatcher for ChannelDispatcher {
    fn emit(&self, command: Command) {
        if let Err(e) = self.sender.send(command) {
            warn!("Dropping {} command: receiver closed", e.0.kind());
        }
    }
}

/// Writes each command as one JSON document per line
pub struct JsonLinesDispatcher<W: Write + Send> {
    writer: Mutex<W>,
    pretty: bool,
}

impl<W: Write + Send> JsonLinesDispatcher<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_command(&self, command: &Command) -> std::io::Result<()> {
        let line = if self.pretty {
            serde_json::to_string_pretty(command)?
        } else {
            serde_json::to_string(command)?
        };
        let mut writer = lock(&self.writer);
        writeln!(writer, "{line}")?;
        writer.flush()
    }
}

impl<W: Write + Send> CommandDispatcher for JsonLinesDispatcher<W> {
    fn emit(&self, command: Command) {
        match self.write_command(&command) {
            Ok(()) => debug!("Wrote {} for {}", command.kind(), command.target()),
            Err(e) => error!("Failed to write {} command: {e}", command.kind()),
        }
    }
}
