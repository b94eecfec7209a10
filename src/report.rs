//! Console rendering of a finished run

use colored::Colorize;

use crate::command::Command;
use crate::process::{ProcessResult, ProcessStatus};

/// Multi-line report: command line, status, return code and captured output.
pub fn render(command: &Command, result: &ProcessResult) -> String {
    let mut out = String::new();

    let status = match result.status {
        ProcessStatus::Success => "SUCCESS".green().bold(),
        ProcessStatus::Failed => "FAILED".red().bold(),
    };

    out.push_str(&format!("{} {}\n", "command:".bold(), command));
    out.push_str(&format!("{} {}\n", "status:".bold(), status));
    if result.status == ProcessStatus::Failed {
        out.push_str(&format!("{} {}\n", "reason:".bold(), result.reason_for_failure));
    }
    out.push_str(&format!("{} {}\n", "return code:".bold(), result.return_code));
    out.push_str(&format!("{} {}\n", "pid:".bold(), result.pid));
    if let Some(runtime) = result.runtime() {
        out.push_str(&format!("{} {}ms\n", "runtime:".bold(), runtime.num_milliseconds()));
    }

    section(&mut out, "stdout", &result.stdout);
    section(&mut out, "stderr", &result.stderr);
    if command.options().log_file.is_some() {
        section(&mut out, "log file", &result.log_file);
    }

    out
}

fn section(out: &mut String, title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    out.push_str(&format!("{}\n", format!("--- {title} ---").dimmed()));
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
}
