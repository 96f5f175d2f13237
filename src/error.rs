use thiserror::Error;

/// Inconsistencies between the navigation entries and the route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Layout '{layout}' declares more than one index route")]
    MultipleIndex { layout: &'static str },

    #[error("Layout '{layout}' has no index route")]
    MissingIndex { layout: &'static str },

    #[error("Route path declared twice: {0}")]
    DuplicatePath(String),

    #[error("Navigation title used twice: {0}")]
    DuplicateTitle(String),

    #[error("Navigation entry '{title}' points at unrouted url {url}")]
    DeadLink { title: String, url: String },
}
