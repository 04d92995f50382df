//! Registration metadata a highlighting host uses to discover the lexer.

use regex::Regex;
use std::path::Path;

/// Describes a lexer to a host: display name, lookup aliases and the file
/// name patterns it claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Shell-style globs matched against a file's base name
    pub filenames: &'static [&'static str],
    pub version: &'static str,
}

pub const INKO: LexerInfo = LexerInfo {
    name: "Inko",
    aliases: &["inko"],
    filenames: &["*.inko"],
    version: env!("CARGO_PKG_VERSION"),
};

impl LexerInfo {
    /// True if the base name of `path` matches one of the filename patterns.
    pub fn matches_filename(&self, path: impl AsRef<Path>) -> bool {
        let Some(name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.filenames
            .iter()
            .filter_map(|pattern| glob_to_regex(pattern))
            .any(|regex| regex.is_match(name))
    }

    /// Case-insensitive alias lookup.
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }
}

/// Translate a `*`/`?` glob into an anchored regex.
fn glob_to_regex(pattern: &str) -> Option<Regex> {
    let mut source = String::from("^");
    for ch in pattern.chars() {
        match ch {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            other => source.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    source.push('$');
    Regex::new(&source).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_inko_files() {
        assert!(INKO.matches_filename("main.inko"));
        assert!(INKO.matches_filename("src/std/string.inko"));
        assert!(!INKO.matches_filename("main.rs"));
        assert!(!INKO.matches_filename("main.inko.bak"));
        assert!(!INKO.matches_filename("inko"));
    }

    #[test]
    fn test_glob_escapes_literal_dots() {
        let regex = glob_to_regex("*.inko").unwrap();
        assert!(!regex.is_match("mainxinko"));
    }

    #[test]
    fn test_question_mark_matches_one_character() {
        let regex = glob_to_regex("?.inko").unwrap();
        assert!(regex.is_match("a.inko"));
        assert!(!regex.is_match("ab.inko"));
    }

    #[test]
    fn test_aliases() {
        assert!(INKO.has_alias("inko"));
        assert!(INKO.has_alias("Inko"));
        assert!(!INKO.has_alias("ink"));
    }

    #[test]
    fn test_version_is_crate_version() {
        assert_eq!(INKO.version, "1.0.0");
    }
}
