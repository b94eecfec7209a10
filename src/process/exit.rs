//! Exit status decoding

use std::process::ExitStatus;

use tracing::warn;

/// Numeric return code of a finished child.
///
/// A child terminated by a signal has no exit code; it is reported as
/// `128 + signo`, the same value a POSIX shell would put in `$?`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use nix::sys::signal::Signal;
        use std::os::unix::process::ExitStatusExt;

        if let Some(signo) = status.signal() {
            let name = Signal::try_from(signo)
                .map(|signal| signal.as_str())
                .unwrap_or("unknown signal");
            warn!(signal = name, signo, "child terminated by signal");
            return 128 + signo;
        }
    }

    -1
}
