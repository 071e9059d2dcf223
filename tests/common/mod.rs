//! Shared test support

pub mod fixtures;
pub mod mock_platform;
pub mod mock_runner;

pub use fixtures::*;
pub use mock_platform::{MockPlatformService, PlatformCall};
pub use mock_runner::MockCommandRunner;
