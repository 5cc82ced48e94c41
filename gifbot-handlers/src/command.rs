//! Pure command parsing: fixed patterns, first match wins.
//!
//! Arguments are positional capture groups; keywords and URLs cannot contain
//! spaces, and URLs must be wrapped in angle brackets in the store, delete
//! and attribute forms. No fuzzy matching; anything unmatched is `None` and
//! falls through to the help handler.

use std::sync::LazyLock;

use regex::Regex;

static LOOKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.gif ([^ ]+)$").expect("lookup pattern"));
static STORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.gifstore ([^ ]+) <([^ ]+)>$").expect("store pattern"));
static DELETE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.gifdelete ([^ ]+) <([^ ]+)>$").expect("delete pattern"));
static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.gifattribute ([^ ]+) <([^ ]+)>$").expect("attribute pattern"));

/// One parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `.gif <keyword>` – fetch a random stored URL.
    Lookup { keyword: String },
    /// `.gifstore <keyword> <url>` – store a URL under a keyword.
    Store { keyword: String, url: String },
    /// `.gifdelete <keyword> <url>` – delete a URL from a keyword.
    Delete { keyword: String, url: String },
    /// `.gifattribute <keyword> <url>` – look up who stored a URL.
    Attribute { keyword: String, url: String },
}

/// Matches `text` against the command patterns in order; `None` when nothing
/// matches.
pub fn parse(text: &str) -> Option<Command> {
    if let Some(caps) = LOOKUP_RE.captures(text) {
        return Some(Command::Lookup {
            keyword: caps[1].to_string(),
        });
    }
    if let Some(caps) = STORE_RE.captures(text) {
        return Some(Command::Store {
            keyword: caps[1].to_string(),
            url: caps[2].to_string(),
        });
    }
    if let Some(caps) = DELETE_RE.captures(text) {
        return Some(Command::Delete {
            keyword: caps[1].to_string(),
            url: caps[2].to_string(),
        });
    }
    if let Some(caps) = ATTRIBUTE_RE.captures(text) {
        return Some(Command::Attribute {
            keyword: caps[1].to_string(),
            url: caps[2].to_string(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup() {
        assert_eq!(
            parse(".gif cats"),
            Some(Command::Lookup {
                keyword: "cats".to_string()
            })
        );
    }

    #[test]
    fn test_parse_store() {
        assert_eq!(
            parse(".gifstore cats <https://example.com/cat.gif>"),
            Some(Command::Store {
                keyword: "cats".to_string(),
                url: "https://example.com/cat.gif".to_string()
            })
        );
    }

    #[test]
    fn test_parse_delete_and_attribute() {
        assert_eq!(
            parse(".gifdelete cats <https://example.com/cat.gif>"),
            Some(Command::Delete {
                keyword: "cats".to_string(),
                url: "https://example.com/cat.gif".to_string()
            })
        );
        assert_eq!(
            parse(".gifattribute cats <https://example.com/cat.gif>"),
            Some(Command::Attribute {
                keyword: "cats".to_string(),
                url: "https://example.com/cat.gif".to_string()
            })
        );
    }

    #[test]
    fn test_store_requires_angle_brackets() {
        assert_eq!(parse(".gifstore cats https://example.com/cat.gif"), None);
    }

    #[test]
    fn test_no_partial_matches() {
        assert_eq!(parse(".gif cats extra"), None);
        assert_eq!(parse(".gif"), None);
        assert_eq!(parse("say .gif cats"), None);
        assert_eq!(parse(".gifs cats"), None);
        assert_eq!(parse("hello world"), None);
    }
}
