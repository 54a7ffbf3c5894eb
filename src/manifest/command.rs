// ABOUTME: Runs container CLI subcommands and captures their output.
// ABOUTME: Non-zero exits are reported with the command line and stderr.

use std::process::Stdio;
use tokio::process::Command;

/// Errors from running an external command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}: {}", exit_code_text(.code), .stderr.trim())]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_code_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "signal".to_string(),
    }
}

/// Run `program` with `args`, returning its stdout if it exits successfully.
pub async fn run(program: &str, args: &[&str]) -> Result<String, CommandError> {
    let command = format!("{} {}", program, args.join(" "));
    tracing::debug!("Running {}", command);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        if !stderr.trim().is_empty() {
            tracing::debug!("{} stderr: {}", command, stderr.trim());
        }
        Ok(stdout)
    } else {
        tracing::debug!("{} exited with {:?}", command, output.status.code());
        Err(CommandError::Failed {
            command,
            code: output.status.code(),
            stderr,
        })
    }
}
