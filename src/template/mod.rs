//! Path template subsystem.
//!
//! # Data Flow
//! ```text
//! Template Compilation (at startup):
//!     "/products/{category}/{id}"
//!     → parser.rs (split into literal and placeholder pieces)
//!     → compiler.rs (escape literals, insert capture slots, anchor)
//!     → CompiledMatcher (immutable, shared read-only)
//!
//! Per Request:
//!     request path
//!     → matcher.rs (align path against the compiled pattern)
//!     → Return: PathParams in template order, or None
//! ```
//!
//! # Design Decisions
//! - Templates compiled once, never per request
//! - Finite-automaton regex engine: linear in path length, no backtracking
//! - A placeholder captures exactly one non-empty path segment
//! - No-match is `None`, not an error

pub mod compiler;
pub mod error;
pub mod matcher;
pub mod parser;

pub use compiler::CompiledMatcher;
pub use error::TemplateError;
pub use matcher::PathParams;
pub use parser::{extract_path_params, PathTemplate, Piece};

/// Compile `template` and match it against `path` in one step.
///
/// Convenience for one-off lookups (CLI, tests). Long-lived callers should
/// compile once and keep the [`CompiledMatcher`].
pub fn extract_path_param_values(
    template: &str,
    path: &str,
) -> Result<Option<PathParams>, TemplateError> {
    let matcher = CompiledMatcher::compile(template)?;
    Ok(matcher.match_path(path))
}
