//! Template parsing.
//!
//! # Responsibilities
//! - Split a template into literal text and `{name}` placeholders
//! - Collect parameter names in order of appearance, trimmed
//!
//! # Design Decisions
//! - Parsing never fails; validation belongs to the compiler
//! - A placeholder needs at least one character between its braces
//! - A `{` inside an open placeholder restarts it, so `}` always closes the
//!   innermost one and the outer `{` stays literal text
//! - Unbalanced braces are literal text

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Text matched verbatim.
    Literal(String),
    /// A named capture slot; the name is already trimmed.
    Param(String),
}

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    pieces: Vec<Piece>,
    params: Vec<String>,
}

impl PathTemplate {
    /// Parse a template string. Templates without placeholders (including the
    /// empty string) parse to a single literal piece and no parameters.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let pieces = tokenize(&raw);
        let params = pieces
            .iter()
            .filter_map(|piece| match piece {
                Piece::Param(name) => Some(name.clone()),
                Piece::Literal(_) => None,
            })
            .collect();

        Self { raw, pieces, params }
    }

    /// The template text as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Literal and placeholder pieces in template order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Parameter names in order of appearance.
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

/// Parameter names found inside `{...}` in `template`, in order, trimmed.
///
/// For example, `"/products/{category}/{id}"` yields `["category", "id"]`.
pub fn extract_path_params(template: &str) -> Vec<String> {
    PathTemplate::parse(template).params
}

fn tokenize(raw: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut literal_start = 0;
    let mut open: Option<usize> = None;

    for (i, c) in raw.char_indices() {
        match c {
            '{' => open = Some(i),
            '}' => {
                // `{}` closes nothing; both braces stay literal.
                if let Some(start) = open.take().filter(|&start| i > start + 1) {
                    if start > literal_start {
                        pieces.push(Piece::Literal(raw[literal_start..start].to_string()));
                    }
                    pieces.push(Piece::Param(raw[start + 1..i].trim().to_string()));
                    literal_start = i + 1;
                }
            }
            _ => {}
        }
    }

    if literal_start < raw.len() {
        pieces.push(Piece::Literal(raw[literal_start..].to_string()));
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Piece {
        Piece::Literal(s.to_string())
    }

    fn param(s: &str) -> Piece {
        Piece::Param(s.to_string())
    }

    #[test]
    fn test_extract_params_in_order() {
        assert_eq!(
            extract_path_params("/products/{category}/{id}"),
            vec!["category", "id"]
        );
        assert_eq!(
            extract_path_params("/api/{version}/users/{id}/profile"),
            vec!["version", "id"]
        );
    }

    #[test]
    fn test_no_placeholders() {
        assert!(extract_path_params("").is_empty());
        assert!(extract_path_params("/static/path").is_empty());

        let template = PathTemplate::parse("/static/path");
        assert_eq!(template.pieces(), &[lit("/static/path")]);
    }

    #[test]
    fn test_names_are_trimmed() {
        assert_eq!(extract_path_params("/a/{ id }/{\tname }"), vec!["id", "name"]);
    }

    #[test]
    fn test_pieces() {
        let template = PathTemplate::parse("/users/{userId}/posts/{postId}");
        assert_eq!(
            template.pieces(),
            &[
                lit("/users/"),
                param("userId"),
                lit("/posts/"),
                param("postId"),
            ]
        );
        assert_eq!(template.as_str(), "/users/{userId}/posts/{postId}");
    }

    #[test]
    fn test_closing_brace_closes_innermost() {
        let template = PathTemplate::parse("/a/{x{y}/b");
        assert_eq!(template.pieces(), &[lit("/a/{x"), param("y"), lit("/b")]);
    }

    #[test]
    fn test_unbalanced_and_empty_braces_are_literal() {
        assert!(extract_path_params("/a/{}/b").is_empty());
        assert!(extract_path_params("/a/{open").is_empty());
        assert!(extract_path_params("/a/close}").is_empty());

        let template = PathTemplate::parse("/}{id}");
        assert_eq!(template.pieces(), &[lit("/}"), param("id")]);
    }

    #[test]
    fn test_whitespace_only_name_is_kept_empty() {
        // Rejected later by the compiler.
        assert_eq!(extract_path_params("/a/{ }"), vec![""]);
    }

    #[test]
    fn test_duplicates_are_not_checked() {
        assert_eq!(extract_path_params("/{id}/{id}"), vec!["id", "id"]);
    }
}
