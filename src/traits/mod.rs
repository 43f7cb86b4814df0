pub mod output;
pub mod platform;

pub use output::{Output, TerminalOutput};
pub use platform::{CiPlatform, GithubActions};

#[cfg(test)]
pub use output::{MockOutput, OutputMessage};
#[cfg(test)]
pub use platform::{MockPlatform, PlatformCall};
