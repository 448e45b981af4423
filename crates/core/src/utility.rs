//! Helpers shared by plugins.

use crate::error::{CoreError, CoreErrorExt};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use tracing::Level;

pub use cppython_schema::canonicalize_name;

/// Runs `args[0]` with the remaining arguments, logging every stdout and stderr line at
/// `level` as it arrives.
///
/// Lines are returned in the order they were received. With `suppress` set, nothing is
/// logged but the lines are still captured.
///
/// # Errors
/// [`CoreError::Process`] if `args` is empty, the program cannot be started or it exits
/// unsuccessfully.
pub fn subprocess_call<S: AsRef<str>>(
    args: &[S],
    level: Level,
    suppress: bool,
    cwd: Option<&Path>,
) -> Result<Vec<String>, CoreError> {
    let Some((program, rest)) = args.split_first() else {
        return Err(CoreError::Process { message: "no command given".into(), context: None });
    };
    let program = program.as_ref();

    let mut command = Command::new(program);
    command
        .args(rest.iter().map(AsRef::as_ref))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    tracing::debug!(program, cwd = ?cwd, "Spawning process");
    let mut child = command.spawn().map_err(|e| CoreError::Process {
        message: format!("failed to start '{program}': {e}").into(),
        context: None,
    })?;

    let (sender, receiver) = mpsc::channel();
    let readers: Vec<_> = [
        child.stdout.take().map(|s| Box::new(s) as Box<dyn Read + Send>),
        child.stderr.take().map(|s| Box::new(s) as Box<dyn Read + Send>),
    ]
    .into_iter()
    .flatten()
    .map(|stream| {
        let sender = sender.clone();
        thread::spawn(move || {
            let mut reader = BufReader::new(stream);
            let mut buffer = Vec::new();
            loop {
                buffer.clear();
                match reader.read_until(b'\n', &mut buffer) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {
                        // Non-UTF-8 output is kept, with invalid bytes replaced.
                        let line = String::from_utf8_lossy(strip_line_ending(&buffer)).into_owned();
                        if sender.send(line).is_err() {
                            break;
                        }
                    },
                }
            }
        })
    })
    .collect();
    drop(sender);

    let mut lines = Vec::new();
    for line in receiver {
        if !suppress {
            log_line(level, &line);
        }
        lines.push(line);
    }

    for reader in readers {
        reader.join().map_err(|_| CoreError::Internal {
            message: "output reader panicked".into(),
            context: None,
        })?;
    }

    let status = child.wait().context(format!("Waiting for '{program}'"))?;
    if !status.success() {
        return Err(CoreError::Process {
            message: format!("'{program}' exited with {status}").into(),
            context: lines.last().cloned().map(Into::into),
        });
    }

    Ok(lines)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn log_line(level: Level, line: &str) {
    match level {
        Level::ERROR => tracing::error!(target: "cppython::process", "{line}"),
        Level::WARN => tracing::warn!(target: "cppython::process", "{line}"),
        Level::INFO => tracing::info!(target: "cppython::process", "{line}"),
        Level::DEBUG => tracing::debug!(target: "cppython::process", "{line}"),
        _ => tracing::trace!(target: "cppython::process", "{line}"),
    }
}
