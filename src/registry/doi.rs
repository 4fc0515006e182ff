use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// DOI syntax: "10." registrant code (optionally with sub-codes), "/", suffix
    pub static ref DOI_SYNTAX: Regex = Regex::new(r"^10\.\d{4,}(?:\.\d+)*/\S+$").unwrap();

    /// Leading "doi:" or resolver URL in front of a DOI
    static ref DOI_LEADER: Regex = Regex::new(
        r"(?i)^(?:doi:\s*|(?:https?://)?(?:dx\.)?doi\.org/)"
    ).unwrap();
}

/// Strip whitespace and any "doi:" / resolver URL leader from a DOI string.
/// Case is preserved; DOI suffixes are case-insensitive at the registry.
pub fn clean_doi(input: &str) -> String {
    DOI_LEADER.replace(input.trim(), "").trim().to_string()
}

/// Check whether a cleaned DOI is syntactically valid
pub fn is_doi_syntax(doi: &str) -> bool {
    DOI_SYNTAX.is_match(doi)
}
