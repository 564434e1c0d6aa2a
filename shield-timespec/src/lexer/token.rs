//! Lexer token types

use chrono::Weekday;
use std::fmt;

// ============================================================================
// LEXER TYPES
// ============================================================================

/// Token kinds for schedule phrases.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Interval keywords
    Hourly,
    Daily,
    Weekly,
    Monthly,
    EveryMinute,
    EveryHour,
    EveryDay,
    Every,

    // Units
    Minutes,
    Hours,

    // Connectives
    At,
    On,
    From,
    Am,
    Pm,

    // Relative minute offsets
    Quarter,
    Half,
    After,
    Past,
    Til,

    /// Any spelling of a day name ("tue", "tuesday", "tuesdays").
    Weekday(Weekday),

    // Literals
    Number(u32),
    Ordinal(u32),

    /// A single unrecognized character, passed through verbatim (lowercased).
    Char(char),

    // Special
    Eof,
    Error(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Hourly => write!(f, "'hourly'"),
            TokenKind::Daily => write!(f, "'daily'"),
            TokenKind::Weekly => write!(f, "'weekly'"),
            TokenKind::Monthly => write!(f, "'monthly'"),
            TokenKind::EveryMinute => write!(f, "'every minute'"),
            TokenKind::EveryHour => write!(f, "'every hour'"),
            TokenKind::EveryDay => write!(f, "'every day'"),
            TokenKind::Every => write!(f, "'every'"),
            TokenKind::Minutes => write!(f, "'minutes'"),
            TokenKind::Hours => write!(f, "'hours'"),
            TokenKind::At => write!(f, "'at'"),
            TokenKind::On => write!(f, "'on'"),
            TokenKind::From => write!(f, "'from'"),
            TokenKind::Am => write!(f, "'am'"),
            TokenKind::Pm => write!(f, "'pm'"),
            TokenKind::Quarter => write!(f, "'quarter'"),
            TokenKind::Half => write!(f, "'half'"),
            TokenKind::After => write!(f, "'after'"),
            TokenKind::Past => write!(f, "'past'"),
            TokenKind::Til => write!(f, "'til'"),
            TokenKind::Weekday(day) => write!(f, "weekday {}", day),
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Ordinal(n) => write!(f, "ordinal {}", n),
            TokenKind::Char(c) => write!(f, "'{}'", c),
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Error(msg) => write!(f, "error ({})", msg),
        }
    }
}

/// Byte range of a token in the source phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A token with its kind and source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}
