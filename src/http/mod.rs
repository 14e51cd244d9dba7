//! HTTP request construction, client setup and execution.
mod builders;
mod builders_auth;
mod client;
mod data;
mod execution;
mod keyval;


pub use builders::{RequestPlan, build_request};
pub use client::build_client;
pub use execution::{Executed, execute_request};
pub use keyval::{KeyValues, parse_key_values};
