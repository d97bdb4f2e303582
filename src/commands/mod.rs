// ABOUTME: Command module aggregator for the deploy-inventory CLI.
// ABOUTME: Re-exports deployments and functions command handlers.

mod client;
mod deployments;
mod functions;

pub use deployments::deployments;
pub use functions::functions;
