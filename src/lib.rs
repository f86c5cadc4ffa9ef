pub mod config;
pub mod endpoint;
pub mod error;
pub mod page;
pub mod trigger;

pub use config::Config;
pub use endpoint::{EndpointResponse, HttpEndpoint, SentimentEndpoint};
pub use error::{AppError, Result};
pub use page::Page;
pub use trigger::{Analyzer, Outcome, TriggerReport};
