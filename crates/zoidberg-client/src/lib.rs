//! HTTP client for the Zoidberg job API.

mod http;
#[cfg(feature = "test-util")]
pub mod mock;

pub use http::{HttpJobService, DEFAULT_SERVER};
pub use zoidberg_types::{JobService, JobServiceError};

#[cfg(feature = "test-util")]
pub use mock::MockJobService;
