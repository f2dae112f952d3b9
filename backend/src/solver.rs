//! One-shot solver process wrapper.
//!
//! Every request gets a fresh process: `<program> -s <rules-file> -g <goal>
//! -t halt`, stdout captured until exit. Processes share nothing and talk
//! only through their standard output.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::SolverError;

/// How to invoke the external solver.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Solver executable, e.g. `swipl`.
    pub program: String,
    /// Rules file loaded with `-s` before the goal runs.
    pub rules_file: PathBuf,
}

impl SolverConfig {
    pub fn new(program: impl Into<String>, rules_file: impl Into<PathBuf>) -> Self {
        SolverConfig {
            program: program.into(),
            rules_file: rules_file.into(),
        }
    }
}

/// Run one solver process for `goal` and return its captured stdout.
///
/// Stderr output is logged but does not fail the request on its own; a spawn
/// failure, a non-zero exit, or an empty stdout does.
pub async fn run_goal(config: &SolverConfig, goal: &str) -> Result<String, SolverError> {
    debug!(%goal, program = %config.program, "solver <");

    let output = Command::new(&config.program)
        .arg("-s")
        .arg(&config.rules_file)
        .arg("-g")
        .arg(goal)
        .arg("-t")
        .arg("halt")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| SolverError::Spawn {
            program: config.program.clone(),
            source,
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        warn!(stderr = %stderr.trim(), "solver wrote to stderr");
    }

    if !output.status.success() {
        return Err(SolverError::Failed {
            status: output.status,
            stderr: stderr.trim().to_owned(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if stdout.trim().is_empty() {
        return Err(SolverError::EmptyReply);
    }

    debug!(reply = %stdout.trim(), "solver >");
    Ok(stdout)
}
