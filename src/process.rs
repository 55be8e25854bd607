//! The two ways the picker starts external tools: launch and forget, or run
//! and wait for the exit code.

use crate::Result;
use std::fmt;
use std::process::{Command, Stdio};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

pub trait CommandRunner {
    /// Starts `command` without waiting for it. Only a failure to spawn is
    /// reported.
    fn launch(&self, command: &ToolCommand) -> Result<()>;

    /// Runs `command` to completion and reports whether it exited with 0.
    fn run(&self, command: &ToolCommand) -> Result<bool>;
}

/// Spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn launch(&self, command: &ToolCommand) -> Result<()> {
        let mut child = command.to_command().stdin(Stdio::null()).spawn()?;

        // Reap the child so it does not linger as a zombie.
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }

    fn run(&self, command: &ToolCommand) -> Result<bool> {
        let status = command.to_command().stdin(Stdio::null()).status()?;
        Ok(status.success())
    }
}
