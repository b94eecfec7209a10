use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::process::read_lines;

/// Read the log file after the run. An unset path or a missing file yields no
/// lines; relative paths are taken from the working directory.
pub(crate) fn read_log_file(log_file: Option<&Path>, working_directory: &Path) -> Vec<String> {
    let Some(path) = log_file else {
        return Vec::new();
    };
    let path = working_directory.join(path);

    match fs::File::open(&path).and_then(read_lines) {
        Ok(lines) => {
            debug!(path = %path.display(), lines = lines.len(), "read log file");
            lines
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "log file does not exist");
            Vec::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read log file");
            Vec::new()
        }
    }
}
