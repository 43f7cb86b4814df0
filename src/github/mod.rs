//! GitHub Actions plumbing
//!
//! This module implements the platform side of the runner contract: inputs
//! arrive as `INPUT_*` environment variables, step outputs are appended to
//! the file named by `GITHUB_OUTPUT`, the job summary is appended to the
//! file named by `GITHUB_STEP_SUMMARY`, and failures are signaled with the
//! `::error::` workflow command plus a non-zero exit code.
//!
//! The file-writing helpers take explicit paths so they can be unit tested
//! without mutating process environment; the public entry points resolve the
//! environment and delegate.

use std::env::{self, VarError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Environment variable naming the step-output file
const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Environment variable naming the job-summary file
const SUMMARY_FILE_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Read a workflow input by name
///
/// Inputs are exposed as `INPUT_<NAME>` environment variables with spaces
/// replaced by underscores and the name uppercased. An unset input reads as
/// an empty string.
pub fn read_input(name: &str) -> Result<String> {
    let var_name = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());

    match env::var(&var_name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Ok(String::new()),
        Err(VarError::NotUnicode(_)) => {
            anyhow::bail!("Input '{}' is not valid unicode", name)
        }
    }
}

/// Publish a step output for consumption by later workflow steps
pub fn set_output(name: &str, value: &str) -> Result<()> {
    let path = env::var(OUTPUT_FILE_ENV)
        .with_context(|| format!("{} is not set; are we running in GitHub Actions?", OUTPUT_FILE_ENV))?;

    write_output_entry(Path::new(&path), name, value)
}

/// Append a heredoc-delimited output entry to the output file
///
/// Multiline-safe: the value is fenced by a random delimiter, the format
/// GitHub's runner expects for values containing newlines.
fn write_output_entry(path: &Path, name: &str, value: &str) -> Result<()> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());

    if name.contains(&delimiter) || value.contains(&delimiter) {
        anyhow::bail!("Output '{}' collides with the generated delimiter", name);
    }

    let entry = format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file {}", path.display()))?;

    file.write_all(entry.as_bytes())
        .with_context(|| format!("Failed to append output '{}'", name))?;

    Ok(())
}

/// Append a markdown document to the run's job summary
pub async fn append_summary(markdown: &str) -> Result<()> {
    let path = env::var(SUMMARY_FILE_ENV)
        .with_context(|| format!("{} is not set; are we running in GitHub Actions?", SUMMARY_FILE_ENV))?;

    append_summary_file(Path::new(&path), markdown).await
}

/// Append markdown to the summary file at an explicit path
async fn append_summary_file(path: &Path, markdown: &str) -> Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("Failed to open summary file {}", path.display()))?;

    file.write_all(markdown.as_bytes())
        .await
        .context("Failed to append job summary")?;

    file.flush().await.context("Failed to flush job summary")?;

    Ok(())
}

/// Emit an `::error::` workflow command with the failure message
///
/// The runner picks this up from stdout and annotates the run; the failed
/// exit state itself comes from the process exit code.
pub fn issue_error(message: &str) {
    println!("::error::{}", escape_data(message));
}

/// Escape message data for a workflow command
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
