// src/links/like.rs
// SQL LIKE matching for slug lookups. '%' matches any run of characters, '_'
// exactly one, '\' makes the next character literal. Case-insensitive.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Any,
    One,
    Literal(char),
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '%' => tokens.push(Token::Any),
            '_' => tokens.push(Token::One),
            '\\' => {
                // A trailing backslash matches itself
                let escaped = chars.next().unwrap_or('\\');
                tokens.extend(escaped.to_lowercase().map(Token::Literal));
            }
            other => tokens.extend(other.to_lowercase().map(Token::Literal)),
        }
    }

    tokens
}

/// Returns true if `value` matches the LIKE `pattern`.
pub fn like_matches(pattern: &str, value: &str) -> bool {
    let tokens = tokenize(pattern);
    let value: Vec<char> = value.chars().flat_map(char::to_lowercase).collect();

    let (mut t, mut v) = (0, 0);
    // Position of the last '%' seen and the value index it currently covers up to
    let mut backtrack: Option<(usize, usize)> = None;

    while v < value.len() {
        match tokens.get(t) {
            Some(Token::Any) => {
                backtrack = Some((t, v));
                t += 1;
            }
            Some(Token::One) => {
                t += 1;
                v += 1;
            }
            Some(Token::Literal(c)) if *c == value[v] => {
                t += 1;
                v += 1;
            }
            _ => match backtrack {
                Some((any_t, any_v)) => {
                    backtrack = Some((any_t, any_v + 1));
                    t = any_t + 1;
                    v = any_v + 1;
                }
                None => return false,
            },
        }
    }

    tokens[t..].iter().all(|token| *token == Token::Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(like_matches("install-guide", "install-guide"));
        assert!(!like_matches("install-guide", "install-guides"));
        assert!(!like_matches("install", "install-guide"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(like_matches("Install-Guide", "install-guide"));
        assert!(like_matches("ÜBERSICHT", "übersicht"));
    }

    #[test]
    fn test_percent_wildcard() {
        assert!(like_matches("install%", "install-guide"));
        assert!(like_matches("%guide", "install-guide"));
        assert!(like_matches("%-%", "install-guide"));
        assert!(like_matches("%", ""));
        assert!(!like_matches("%x%", "install-guide"));
    }

    #[test]
    fn test_underscore_wildcard() {
        assert!(like_matches("page_1", "page-1"));
        assert!(!like_matches("page_1", "page--1"));
    }

    #[test]
    fn test_escaped_wildcards_are_literal() {
        assert!(like_matches(r"100\%", "100%"));
        assert!(!like_matches(r"100\%", "1000"));
        assert!(like_matches(r"a\_b", "a_b"));
        assert!(!like_matches(r"a\_b", "a-b"));
    }

    #[test]
    fn test_empty_pattern_matches_only_empty() {
        assert!(like_matches("", ""));
        assert!(!like_matches("", "intro"));
    }
}
