//! Collecting child output as lines

use std::io::{self, Read};
use std::thread::{self, JoinHandle};

/// Read a stream to the end and split it into lines.
///
/// Line terminators (`\n` or `\r\n`) are stripped. Invalid UTF-8 is replaced
/// rather than rejected so that a binary byte in the output cannot hide the
/// rest of it from the detector.
pub fn read_lines<R: Read>(mut stream: R) -> io::Result<Vec<String>> {
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf)?;
    Ok(split_lines(&String::from_utf8_lossy(&buf)))
}

pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Drain a pipe on its own thread.
///
/// Pipes must be read while the child runs: a child that fills the pipe
/// buffer (~64KB on Linux) blocks on write() and never exits.
pub(crate) fn spawn_reader<R>(stream: Option<R>) -> Option<JoinHandle<io::Result<Vec<String>>>>
where
    R: Read + Send + 'static,
{
    stream.map(|stream| thread::spawn(move || read_lines(stream)))
}

pub(crate) fn join_reader(
    handle: Option<JoinHandle<io::Result<Vec<String>>>>,
) -> io::Result<Vec<String>> {
    match handle {
        Some(handle) => handle
            .join()
            .map_err(|_| io::Error::other("output reader thread panicked"))?,
        None => Ok(Vec::new()),
    }
}
