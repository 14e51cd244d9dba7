mod app;
mod build;
mod config;
mod http;
mod request;
mod validation;

pub use app::{AppError, AppResult};
pub use build::{BuildError, ParseError};
pub use config::ConfigError;
pub use http::HttpError;
pub use request::RequestError;
pub use validation::{DurationError, ValidationError};
