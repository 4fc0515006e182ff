//! Reference identifier prefixes and the URL each one resolves to.

/// Builds a URL from the value part of a prefixed identifier
pub type UrlTemplate = fn(&str) -> String;

/// Known reference prefixes (lowercase) and their URL templates
pub const KNOWN_PREFIXES: &[(&str, UrlTemplate)] = &[
    ("url", url_as_is),
    ("doi", doi_url),
    ("arxiv", arxiv_url),
    ("pmid", pubmed_url),
];

fn url_as_is(value: &str) -> String {
    value.to_string()
}

fn doi_url(value: &str) -> String {
    format!("https://doi.org/{}", value)
}

fn arxiv_url(value: &str) -> String {
    format!("https://arxiv.org/abs/{}", value)
}

fn pubmed_url(value: &str) -> String {
    format!("https://www.ncbi.nlm.nih.gov/pubmed/{}", value)
}

/// Resolve `value` through the template registered for `prefix`.
/// The prefix matches case-insensitively; the value is passed through as is.
pub fn resolve_prefixed(prefix: &str, value: &str) -> Option<String> {
    if prefix.is_empty() || value.is_empty() {
        return None;
    }
    KNOWN_PREFIXES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(prefix))
        .map(|(_, template)| template(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_table_is_lowercase() {
        for (prefix, _) in KNOWN_PREFIXES {
            assert_eq!(*prefix, prefix.to_lowercase());
        }
    }

    #[test]
    fn test_resolve_prefixed() {
        assert_eq!(
            resolve_prefixed("PMID", "31415926").as_deref(),
            Some("https://www.ncbi.nlm.nih.gov/pubmed/31415926")
        );
        assert_eq!(resolve_prefixed("isbn", "123"), None);
        assert_eq!(resolve_prefixed("", "123"), None);
        assert_eq!(resolve_prefixed("doi", ""), None);
    }
}
