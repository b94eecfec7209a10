//! Launch strategies

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread::JoinHandle;

use chrono::{DateTime, Utc};
use shell_escape::escape;
use tracing::{debug, warn};

use super::exit::exit_code;
use super::output::{join_reader, spawn_reader};
use crate::config::RunVia;

/// The resolved executable together with its option and parameter segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub path: PathBuf,
    pub options: String,
    pub parameter: String,
}

impl CommandLine {
    pub fn new(path: PathBuf, options: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            path,
            options: options.into(),
            parameter: parameter.into(),
        }
    }

    /// Non-blank segments after the path, in order.
    fn segments(&self) -> impl Iterator<Item = &str> {
        [self.options.as_str(), self.parameter.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
    }

    /// Arguments for a direct spawn, split with shell quoting rules.
    pub fn arguments(&self) -> io::Result<Vec<String>> {
        let mut args = Vec::new();
        for segment in self.segments() {
            let words = shell_words::split(segment)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            args.extend(words);
        }
        Ok(args)
    }

    /// The command line as a shell would receive it, with the path quoted.
    pub fn shell_line(&self) -> String {
        let path = escape(Cow::from(self.path.to_string_lossy().into_owned()));
        let mut line = path.into_owned();
        for segment in self.segments() {
            line.push(' ');
            line.push_str(segment);
        }
        line
    }
}

impl fmt::Display for CommandLine {
    /// `path [options] [parameter]`; blank segments are left out together
    /// with their separating space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())?;
        for segment in self.segments() {
            write!(f, " {segment}")?;
        }
        Ok(())
    }
}

/// What a strategy reports back about a finished child.
#[derive(Debug, Clone)]
pub struct Execution {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub pid: u32,
    pub exit_code: i32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// A way of launching a child and waiting for it.
pub trait ExecutionStrategy {
    fn name(&self) -> &'static str;

    fn execute(&self, command: &CommandLine, working_directory: &Path) -> io::Result<Execution>;
}

/// Spawn the executable directly and capture stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureStrategy;

impl ExecutionStrategy for CaptureStrategy {
    fn name(&self) -> &'static str {
        "capture"
    }

    fn execute(&self, command: &CommandLine, working_directory: &Path) -> io::Result<Execution> {
        let args = command.arguments()?;

        let mut cmd = Command::new(&command.path);
        cmd.args(&args)
            .current_dir(working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let started_at = Utc::now();
        let mut child = cmd.spawn()?;
        let pid = child.id();
        debug!(pid, command = %command, "spawned child");

        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let status = match child.wait() {
            Ok(status) => status,
            Err(e) => {
                abandon_child(&mut child, [stdout_reader, stderr_reader]);
                return Err(e);
            }
        };
        let finished_at = Utc::now();

        let stdout = join_reader(stdout_reader);
        let stderr = join_reader(stderr_reader);

        Ok(Execution {
            stdout: stdout?,
            stderr: stderr?,
            pid,
            exit_code: exit_code(status),
            started_at,
            finished_at,
        })
    }
}

type Reader = Option<JoinHandle<io::Result<Vec<String>>>>;

/// Kill and reap a child whose wait failed, then join its output readers.
///
/// Killing the child closes its pipes, so the readers reach end of file.
pub(crate) fn abandon_child(child: &mut Child, readers: [Reader; 2]) {
    let pid = child.id();
    if let Err(e) = child.kill().and_then(|()| child.wait()) {
        warn!(pid, error = %e, "could not reap child");
    }
    for reader in readers {
        if let Err(e) = join_reader(reader) {
            debug!(pid, error = %e, "output reader failed");
        }
    }
}

/// Run the command line through the system shell without capturing output.
///
/// The child inherits the parent's stdio, so stdout and stderr are always
/// reported as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellStrategy;

impl ExecutionStrategy for ShellStrategy {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn execute(&self, command: &CommandLine, working_directory: &Path) -> io::Result<Execution> {
        let line = command.shell_line();
        let mut cmd = if cfg!(target_family = "unix") {
            let mut c = Command::new("sh");
            c.arg("-c").arg(&line);
            c
        } else {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&line);
            c
        };
        cmd.current_dir(working_directory)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let started_at = Utc::now();
        let mut child = cmd.spawn()?;
        let pid = child.id();
        debug!(pid, command = %line, "spawned shell");

        let status = child.wait()?;
        let finished_at = Utc::now();

        Ok(Execution {
            stdout: Vec::new(),
            stderr: Vec::new(),
            pid,
            exit_code: exit_code(status),
            started_at,
            finished_at,
        })
    }
}

pub fn strategy_for(via: RunVia) -> Box<dyn ExecutionStrategy> {
    match via {
        RunVia::Capture => Box::new(CaptureStrategy),
        RunVia::Shell => Box::new(ShellStrategy),
    }
}
