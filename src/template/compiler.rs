//! Template compilation.
//!
//! # Responsibilities
//! - Turn each placeholder into a single-segment capture slot
//! - Escape every literal character of the template
//! - Anchor the pattern to the whole path
//! - Reject templates that cannot yield a usable parameter mapping
//!
//! # Design Decisions
//! - Literals are escaped piece by piece, so capture slots are never escaped
//! - Capture slot is `([^/]+)`: one or more non-separator characters
//! - Duplicate parameter names are rejected rather than silently collapsed

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::template::error::TemplateError;
use crate::template::parser::{PathTemplate, Piece};

/// Pattern inserted for every placeholder.
const CAPTURE_SLOT: &str = "([^/]+)";

/// Compiled program size limit, the regex crate's default.
const SIZE_LIMIT: usize = 10 * (1 << 20);

/// A template compiled into an anchored matcher.
///
/// Immutable once built; share it behind an `Arc` across requests.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    template: PathTemplate,
    pub(crate) regex: Regex,
}

impl CompiledMatcher {
    /// Parse and compile a template string.
    pub fn compile(template: &str) -> Result<Self, TemplateError> {
        Self::from_template(PathTemplate::parse(template))
    }

    /// Compile an already parsed template.
    pub fn from_template(template: PathTemplate) -> Result<Self, TemplateError> {
        Self::with_size_limit(template, SIZE_LIMIT)
    }

    pub(crate) fn with_size_limit(
        template: PathTemplate,
        size_limit: usize,
    ) -> Result<Self, TemplateError> {
        check_params(&template)?;

        let pattern = anchored_pattern(&template);
        let regex = RegexBuilder::new(&pattern)
            .size_limit(size_limit)
            .build()
            .map_err(|source| TemplateError::Compile {
                template: template.as_str().to_string(),
                source,
            })?;

        Ok(Self { template, regex })
    }

    /// The template this matcher was compiled from.
    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// Parameter names in template order.
    pub fn params(&self) -> &[String] {
        self.template.params()
    }

    /// The anchored pattern source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

fn check_params(template: &PathTemplate) -> Result<(), TemplateError> {
    let mut seen = HashSet::new();
    for name in template.params() {
        if name.is_empty() {
            return Err(TemplateError::EmptyParameter {
                template: template.as_str().to_string(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(TemplateError::DuplicateParameter {
                template: template.as_str().to_string(),
                name: name.clone(),
            });
        }
    }
    Ok(())
}

fn anchored_pattern(template: &PathTemplate) -> String {
    let mut pattern = String::with_capacity(template.as_str().len() * 2 + 2);
    pattern.push('^');
    for piece in template.pieces() {
        match piece {
            Piece::Literal(text) => pattern.push_str(&regex::escape(text)),
            Piece::Param(_) => pattern.push_str(CAPTURE_SLOT),
        }
    }
    pattern.push('$');
    pattern
}
