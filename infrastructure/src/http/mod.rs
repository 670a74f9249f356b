//! Form submitter adapters.
//!
//! - [`HttpFormSubmitter`] POSTs the payload to a real endpoint
//! - [`SimulatedSubmitter`] waits and accepts, for forms without a backend

mod simulated;
mod submitter;

pub use simulated::SimulatedSubmitter;
pub use submitter::HttpFormSubmitter;
