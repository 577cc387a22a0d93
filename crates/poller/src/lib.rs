mod errors;
mod models;
mod poller;
mod retry;

pub use errors::PollError;
pub use models::{PollErrorKind, PollFailure, PollPhase, StatusPoller, StatusSnapshot};
pub use retry::RetryPolicy;
