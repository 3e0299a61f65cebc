//! Parameter-to-header mapping.
//!
//! # Responsibilities
//! - Derive `{prefix}{CapitalisedName}` header names
//! - Pair each derived name with its captured value
//! - Set the pairs on a header map, overwriting existing values
//!
//! # Design Decisions
//! - Names that collide after derivation are not special-cased: the later
//!   parameter in template order wins. The collision is logged once at
//!   construction.
//! - Values that are not legal header values are skipped, not fatal

use std::collections::HashSet;

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::template::{PathParams, TemplateError};

/// Prefix used when none is configured.
pub const DEFAULT_HEADER_PREFIX: &str = "X-Path-";

/// A derived header, before it is set on a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamHeader {
    pub name: String,
    pub value: String,
}

/// Header name for parameter `param`: `prefix` followed by `param` with its
/// first character upper-cased and the rest unchanged.
///
/// `("X-Path-", "userId")` → `"X-Path-UserId"`.
pub fn header_name(prefix: &str, param: &str) -> String {
    let mut chars = param.chars();
    let mut name = String::with_capacity(prefix.len() + param.len());
    name.push_str(prefix);
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
    }
    name
}

/// Derived headers for every extracted parameter, in template order.
pub fn map_to_headers(params: &PathParams, prefix: &str) -> Vec<ParamHeader> {
    params
        .iter()
        .map(|(name, value)| ParamHeader {
            name: header_name(prefix, name),
            value: value.to_string(),
        })
        .collect()
}

/// Pre-validated header names for one template, ready to be applied to
/// requests.
#[derive(Debug, Clone)]
pub struct HeaderMapper {
    prefix: String,
    names: Vec<HeaderName>,
}

impl HeaderMapper {
    /// Derive and validate the header name of every parameter in `params`.
    pub fn new(prefix: impl Into<String>, params: &[String]) -> Result<Self, TemplateError> {
        let prefix = prefix.into();
        let names = derive_names(&prefix, params)?;

        let mut seen = HashSet::new();
        for (name, param) in names.iter().zip(params) {
            if !seen.insert(name) {
                tracing::warn!(
                    header = %name,
                    parameter = %param,
                    "Derived header name collides with an earlier parameter; later value wins"
                );
            }
        }

        Ok(Self { prefix, names })
    }

    /// Check that every derived header name is legal, without building a
    /// mapper or logging.
    pub fn check(prefix: &str, params: &[String]) -> Result<(), TemplateError> {
        derive_names(prefix, params).map(|_| ())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Header names in template order.
    pub fn names(&self) -> &[HeaderName] {
        &self.names
    }

    /// Set one header per parameter on `headers`. Returns how many were set.
    ///
    /// `params` must come from the template this mapper was built for.
    pub fn apply(&self, params: &PathParams, headers: &mut HeaderMap) -> usize {
        let mut injected = 0;
        for (name, (param, value)) in self.names.iter().zip(params.iter()) {
            match HeaderValue::from_str(value) {
                Ok(value) => {
                    headers.insert(name.clone(), value);
                    injected += 1;
                }
                Err(_) => {
                    tracing::debug!(
                        header = %name,
                        parameter = %param,
                        "Captured value is not a valid header value, skipping"
                    );
                }
            }
        }
        injected
    }
}

fn derive_names(prefix: &str, params: &[String]) -> Result<Vec<HeaderName>, TemplateError> {
    params
        .iter()
        .map(|param| {
            let derived = header_name(prefix, param);
            HeaderName::from_bytes(derived.as_bytes())
                .map_err(|_| TemplateError::InvalidHeaderName { header: derived })
        })
        .collect()
}
