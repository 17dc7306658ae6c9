use crate::error::{ErrorKind, ParseError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Keys accepted on straight bets
pub const STRAIGHT_KEYWORDS: &[&str] = &["date", "league", "freebet", "tieslose"];

/// Keys accepted at the parlay / round robin level
pub const MULTI_LEG_KEYWORDS: &[&str] = &["pusheslose", "tieslose", "freebet"];

/// Keys whose only legal value is `true`
const BOOLEAN_KEYWORDS: &[&str] = &["freebet", "pusheslose", "tieslose"];

static RE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z_]+):(\S+)$").unwrap());

static RE_KEY_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_]+:$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords(Vec<Keyword>);

impl Keywords {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|k| k.key == key)
            .map(|k| k.value.as_str())
    }

    /// Boolean keys are validated on extraction, so presence means `true`
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Whether a token is shaped like `key:value` (or a broken attempt at one)
pub fn is_keyword_like(token: &str) -> bool {
    token == ":" || token.starts_with(':') || RE_KEYWORD.is_match(token) || RE_KEY_ONLY.is_match(token)
}

/// Pull `key:value` tokens out of `tokens`, returning them and the remaining tokens.
///
/// Tokens with a colon that are not keyword-shaped (e.g. a `7:05` start time) are left alone.
pub fn extract_keywords(tokens: &[String], allowed: &[&str]) -> Result<(Keywords, Vec<String>)> {
    let mut keywords = Vec::new();
    let mut rest = Vec::with_capacity(tokens.len());

    for (position, token) in tokens.iter().enumerate() {
        if token == ":" || token.starts_with(':') || RE_KEY_ONLY.is_match(token) {
            return Err(ParseError::new(
                ErrorKind::InvalidKeywordFormat,
                format!("keyword {:?} must be written key:value with no spaces", token),
            )
            .with_detail(token.as_str())
            .at(position));
        }

        let Some(caps) = RE_KEYWORD.captures(token) else {
            rest.push(token.clone());
            continue;
        };

        let key = caps[1].to_lowercase();
        let value = caps[2].to_string();

        if !allowed.contains(&key.as_str()) {
            return Err(ParseError::new(
                ErrorKind::UnknownKeyword,
                format!("unknown keyword {:?} (allowed: {})", key, allowed.join(", ")),
            )
            .with_detail(token.as_str())
            .at(position));
        }

        if BOOLEAN_KEYWORDS.contains(&key.as_str()) && value != "true" {
            return Err(ParseError::new(
                ErrorKind::InvalidKeywordValue,
                format!("{} only accepts 'true', got {:?}", key, value),
            )
            .with_detail(token.as_str())
            .at(position));
        }

        if keywords.iter().any(|k: &Keyword| k.key == key) {
            return Err(ParseError::new(
                ErrorKind::InvalidKeywordFormat,
                format!("keyword {:?} given more than once", key),
            )
            .with_detail(token.as_str())
            .at(position));
        }

        keywords.push(Keyword { key, value });
    }

    Ok((Keywords(keywords), rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_extracts_allowed_keywords() {
        let (keywords, rest) =
            extract_keywords(&tokens("league:NBA Lakers -3 freebet:true"), STRAIGHT_KEYWORDS)
                .unwrap();
        assert_eq!(keywords.get("league"), Some("NBA"));
        assert!(keywords.flag("freebet"));
        assert!(!keywords.flag("tieslose"));
        assert_eq!(rest, vec!["Lakers", "-3"]);
    }

    #[test]
    fn test_unknown_key() {
        let err = extract_keywords(&tokens("Lakers color:red"), STRAIGHT_KEYWORDS).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownKeyword);
        assert_eq!(err.position, Some(1));
    }

    #[test]
    fn test_spaces_around_colon() {
        let err = extract_keywords(&tokens("date: 2024-05-01 Lakers"), STRAIGHT_KEYWORDS).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidKeywordFormat);
        let err = extract_keywords(&tokens("date :2024-05-01 Lakers"), STRAIGHT_KEYWORDS).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidKeywordFormat);
    }

    #[test]
    fn test_boolean_must_be_true() {
        let err = extract_keywords(&tokens("pusheslose:yes"), MULTI_LEG_KEYWORDS).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidKeywordValue);
    }

    #[test]
    fn test_times_are_not_keywords() {
        let (keywords, rest) = extract_keywords(&tokens("Lakers 7:05"), STRAIGHT_KEYWORDS).unwrap();
        assert!(keywords.is_empty());
        assert_eq!(rest, vec!["Lakers", "7:05"]);
    }
}
