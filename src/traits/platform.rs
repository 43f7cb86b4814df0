use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Mutex;

/// Platform interaction captured by MockPlatform for testing
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    ReadInput(String),
    SetOutput(String, String),
    WriteSummary(String),
    ReportFailure(String),
}

/// Trait for CI platform interactions, allowing for mocking in tests
///
/// The parser and renderer never touch the hosting platform; everything the
/// driver needs from it goes through this interface.
#[async_trait]
pub trait CiPlatform: Send + Sync {
    /// Read a string-valued configuration input by name
    ///
    /// An absent input is an empty string, not an error.
    fn read_input(&self, name: &str) -> Result<String>;

    /// Publish a named step output for consumption by later pipeline steps
    fn set_output(&self, name: &str, value: &str) -> Result<()>;

    /// Append a markdown document to the run-level job summary
    async fn write_summary(&self, markdown: &str) -> Result<()>;

    /// Report a run failure with a human-readable message
    fn report_failure(&self, message: &str);
}

/// Real platform implementation backed by GitHub Actions
pub struct GithubActions;

impl GithubActions {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GithubActions {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CiPlatform for GithubActions {
    fn read_input(&self, name: &str) -> Result<String> {
        crate::github::read_input(name)
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        crate::github::set_output(name, value)
    }

    async fn write_summary(&self, markdown: &str) -> Result<()> {
        crate::github::append_summary(markdown).await
    }

    fn report_failure(&self, message: &str) {
        crate::github::issue_error(message);
    }
}

/// Mock platform implementation for testing
///
/// Captures every interaction and supports injected failures for the read
/// and publish paths.
#[cfg(test)]
pub struct MockPlatform {
    inputs: HashMap<String, String>,
    read_failure: Option<String>,
    set_output_failure: Option<String>,
    write_summary_failure: Option<String>,
    calls: Mutex<Vec<PlatformCall>>,
}

#[cfg(test)]
impl MockPlatform {
    /// Create a new mock platform with no inputs configured
    pub fn new() -> Self {
        Self {
            inputs: HashMap::new(),
            read_failure: None,
            set_output_failure: None,
            write_summary_failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Configure an input value
    pub fn with_input(mut self, name: &str, value: &str) -> Self {
        self.inputs.insert(name.to_string(), value.to_string());
        self
    }

    /// Make read_input fail with the given message
    pub fn with_read_failure(mut self, message: &str) -> Self {
        self.read_failure = Some(message.to_string());
        self
    }

    /// Make set_output fail with the given message
    pub fn with_set_output_failure(mut self, message: &str) -> Self {
        self.set_output_failure = Some(message.to_string());
        self
    }

    /// Make write_summary fail with the given message
    pub fn with_write_summary_failure(mut self, message: &str) -> Self {
        self.write_summary_failure = Some(message.to_string());
        self
    }

    /// Get all captured platform calls, in order
    pub fn get_calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the values of all captured set_output calls for a name
    pub fn outputs_named(&self, name: &str) -> Vec<String> {
        self.get_calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::SetOutput(n, v) if n == name => Some(v),
                _ => None,
            })
            .collect()
    }

    /// Get all captured summary writes
    pub fn summaries(&self) -> Vec<String> {
        self.get_calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::WriteSummary(markdown) => Some(markdown),
                _ => None,
            })
            .collect()
    }

    /// Get all captured failure reports
    pub fn failures(&self) -> Vec<String> {
        self.get_calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::ReportFailure(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[cfg(test)]
#[async_trait]
impl CiPlatform for MockPlatform {
    fn read_input(&self, name: &str) -> Result<String> {
        self.record(PlatformCall::ReadInput(name.to_string()));

        if let Some(message) = &self.read_failure {
            anyhow::bail!("{}", message);
        }

        Ok(self.inputs.get(name).cloned().unwrap_or_default())
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        if let Some(message) = &self.set_output_failure {
            anyhow::bail!("{}", message);
        }

        self.record(PlatformCall::SetOutput(name.to_string(), value.to_string()));
        Ok(())
    }

    async fn write_summary(&self, markdown: &str) -> Result<()> {
        if let Some(message) = &self.write_summary_failure {
            anyhow::bail!("{}", message);
        }

        self.record(PlatformCall::WriteSummary(markdown.to_string()));
        Ok(())
    }

    fn report_failure(&self, message: &str) {
        self.record(PlatformCall::ReportFailure(message.to_string()));
    }
}
