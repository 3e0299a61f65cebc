//! Template construction errors.

use thiserror::Error;

/// Errors raised while turning a template into a matcher.
///
/// All of these surface at construction time; matching a request path never
/// fails, it only matches or doesn't.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The anchored pattern could not be built.
    #[error("invalid path template '{template}': {source}")]
    Compile {
        template: String,
        #[source]
        source: regex::Error,
    },

    /// A placeholder with nothing but whitespace between its braces.
    #[error("path template '{template}' contains an empty parameter name")]
    EmptyParameter { template: String },

    /// The same parameter name appears more than once.
    #[error("path template '{template}' declares parameter '{name}' more than once")]
    DuplicateParameter { template: String, name: String },

    /// Prefix plus capitalised parameter name is not a legal header name.
    #[error("derived header name '{header}' is not a valid HTTP header name")]
    InvalidHeaderName { header: String },
}
