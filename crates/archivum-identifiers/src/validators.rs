//! Identifier validation functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // DOI validation regex: 10.<registrant>/<suffix>
    static ref DOI_PATTERN: Regex = Regex::new(r"^10\.[0-9]{4,}(\.[0-9]+)*/\S+$").unwrap();
}

/// Prefixes stripped from a DOI before validation, compared case-insensitively
const DOI_PREFIXES: [&str; 5] = [
    "https://doi.org/",
    "http://doi.org/",
    "https://dx.doi.org/",
    "http://dx.doi.org/",
    "doi:",
];

/// Check whether a string is a bare DOI
pub fn is_valid_doi(doi: &str) -> bool {
    DOI_PATTERN.is_match(doi)
}

/// Strip resolver prefixes, whitespace and trailing punctuation from a DOI
pub fn normalize_doi(doi: &str) -> String {
    let mut result = doi.trim();

    for prefix in DOI_PREFIXES {
        let matches = result
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if matches {
            result = result[prefix.len()..].trim_start();
            break;
        }
    }

    result.trim_end_matches(['.', ',', ';']).to_string()
}
