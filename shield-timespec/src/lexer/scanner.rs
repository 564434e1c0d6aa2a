//! Lexer implementation

use super::token::*;
use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// KEYWORD TABLE
// ============================================================================

/// Keyword spellings in match priority order.
///
/// Patterns are matched case-insensitively against the start of the remaining
/// input, first match wins. Longer keywords sharing a prefix with a shorter
/// one ("hourly" / "hours", "monthly" / "mon") must come first.
static KEYWORDS: &[(TokenKind, &str)] = &[
    (TokenKind::Hourly, r"hourly"),
    (TokenKind::Daily, r"daily"),
    (TokenKind::Weekly, r"weekly"),
    (TokenKind::Monthly, r"monthly"),
    (TokenKind::EveryMinute, r"every\s+minute"),
    (TokenKind::EveryHour, r"every\s+hour"),
    (TokenKind::EveryDay, r"every\s+day"),
    (TokenKind::Every, r"every"),
    (TokenKind::Minutes, r"minutes?"),
    (TokenKind::Hours, r"hours?"),
    (TokenKind::At, r"at"),
    (TokenKind::On, r"on"),
    (TokenKind::From, r"from"),
    (TokenKind::Am, r"am"),
    (TokenKind::Pm, r"pm"),
    (TokenKind::Quarter, r"quarter"),
    (TokenKind::Half, r"half"),
    (TokenKind::After, r"after"),
    (TokenKind::Past, r"past"),
    (TokenKind::Til, r"until|till?"),
    (TokenKind::Weekday(Weekday::Sun), r"sun(days?)?"),
    (TokenKind::Weekday(Weekday::Mon), r"mon(days?)?"),
    (TokenKind::Weekday(Weekday::Tue), r"tue(s(days?)?)?"),
    (TokenKind::Weekday(Weekday::Wed), r"wed(nesdays?)?"),
    (TokenKind::Weekday(Weekday::Thu), r"thu(r(s(days?)?)?)?"),
    (TokenKind::Weekday(Weekday::Fri), r"fri(days?)?"),
    (TokenKind::Weekday(Weekday::Sat), r"sat(urdays?)?"),
];

static KEYWORD_MATCHERS: Lazy<Vec<(TokenKind, Regex)>> = Lazy::new(|| {
    KEYWORDS
        .iter()
        .map(|(kind, pattern)| (kind.clone(), anchored(pattern)))
        .collect()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| anchored(r"\s+"));
static ORDINAL: Lazy<Regex> = Lazy::new(|| anchored(r"([0-9]+)(?:st|nd|rd|th)"));
static NUMBER: Lazy<Regex> = Lazy::new(|| anchored(r"[0-9]+"));

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!(r"(?i)^(?:{})", pattern)).expect("keyword table patterns are valid")
}

// ============================================================================
// LEXER IMPLEMENTATION
// ============================================================================

/// Lexer for schedule phrases.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Tokenize the entire source into a vector of tokens, ending with `Eof`.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        tracing::trace!(count = tokens.len(), "tokenized schedule phrase");
        tokens
    }

    /// Get the next token from the source.
    ///
    /// Once the input is exhausted every call returns `Eof`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;
        let kind = self.scan();

        Token {
            kind,
            span: Span {
                start,
                end: self.pos,
            },
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        if let Some(m) = WHITESPACE.find(self.rest()) {
            self.pos += m.end();
        }
    }

    fn scan(&mut self) -> TokenKind {
        let rest = self.rest();

        for (kind, matcher) in KEYWORD_MATCHERS.iter() {
            if let Some(m) = matcher.find(rest) {
                self.pos += m.end();
                return kind.clone();
            }
        }

        // Ordinals before numbers, so "21st" is not "21" plus a stray suffix.
        if let Some(caps) = ORDINAL.captures(rest) {
            let digits = caps.get(1).map_or("", |m| m.as_str());
            self.pos += caps.get(0).map_or(0, |m| m.end());
            return scan_number(digits, TokenKind::Ordinal);
        }

        if let Some(m) = NUMBER.find(rest) {
            self.pos += m.end();
            return scan_number(m.as_str(), TokenKind::Number);
        }

        match rest.chars().next() {
            None => TokenKind::Eof,
            Some(c) => {
                self.pos += c.len_utf8();
                TokenKind::Char(c.to_ascii_lowercase())
            }
        }
    }
}

fn scan_number(digits: &str, kind: fn(u32) -> TokenKind) -> TokenKind {
    match digits.parse::<u32>() {
        Ok(n) => kind(n),
        Err(_) => TokenKind::Error(format!("Number out of range: {}", digits)),
    }
}

// ============================================================================
// TESTS
// ============================================================================
