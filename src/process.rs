use crate::config;
use std::{
    io::{self, BufRead as _, BufReader},
    process::{Command, Stdio},
};

/// Runs `command` and returns the first line it writes to stdout.
///
/// The command line is split on whitespace, without shell quoting. `None` when the
/// program cannot be started, its output cannot be read, or it prints nothing.
pub fn exec(command: &str) -> Option<String> {
    match first_line(command, config::get().exec_buffer_size) {
        Ok(line) => line,
        Err(e) => {
            tracing::warn!("exec {command:?} failed: {e}");
            None
        }
    }
}

fn first_line(command: &str, buffer_size: usize) -> io::Result<Option<String>> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .spawn()?;

    let line = match child.stdout.take() {
        Some(stdout) => {
            let mut line = Vec::new();
            let read = BufReader::with_capacity(buffer_size, stdout).read_until(b'\n', &mut line);
            // stdout is closed here, a chatty child stops on a broken pipe
            match read {
                Ok(0) => None,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&line);
                    Some(line.trim_end_matches(['\r', '\n']).to_owned())
                }
                Err(e) => {
                    let _ = child.wait();
                    return Err(e);
                }
            }
        }
        None => None,
    };
    child.wait()?;
    Ok(line)
}
