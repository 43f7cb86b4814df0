use crate::traits::{CiPlatform, GithubActions, Output, TerminalOutput};
use std::sync::Arc;

/// Application context that holds all dependencies for dependency injection
pub struct Context {
    pub platform: Arc<dyn CiPlatform>,
    pub output: Arc<dyn Output>,
}

impl Context {
    /// Create a new context with real implementations (for production use)
    pub fn new() -> Self {
        Self {
            platform: Arc::new(GithubActions::new()),
            output: Arc::new(TerminalOutput),
        }
    }

    /// Create a context with specific implementations (for testing)
    #[cfg(test)]
    pub fn test_with(platform: Arc<dyn CiPlatform>, output: Arc<dyn Output>) -> Self {
        Self { platform, output }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Context {
    fn clone(&self) -> Self {
        Self {
            platform: Arc::clone(&self.platform),
            output: Arc::clone(&self.output),
        }
    }
}
