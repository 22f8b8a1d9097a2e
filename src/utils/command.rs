//! Command execution utilities

use crate::error::{AboutError, Result};
use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Execute a command and return stdout as String
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(AboutError::Detection(format!(
            "Command '{}' failed with exit code: {:?}",
            program,
            output.status.code()
        )))
    }
}

/// Execute a command with a bounded wait, capturing stdout.
///
/// Returns `None` when the binary is missing, exits nonzero, or does not
/// finish within `timeout`. Diagnostic tools like `lshw` can stall on some
/// machines, so collectors must never wait on them unbounded.
pub fn run_command_with_timeout(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Option<String> {
    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;
    let stdout = child.stdout.take()?;
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut reader = io::BufReader::new(stdout);
        let mut output = String::new();
        let _ = reader.read_to_string(&mut output);
        let _ = tx.send(output);
    });

    let start = Instant::now();
    let success = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status.success(),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    break false;
                }
            }
            Err(_) => return None,
        }
        thread::sleep(Duration::from_millis(10));
    };

    let output = rx.recv().ok()?;
    if success { Some(output) } else { None }
}

/// Launch a program detached from the current process (no captured output)
pub fn spawn_detached(program: &str) -> Result<()> {
    Command::new(program)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
