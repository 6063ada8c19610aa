//! Terminal table: every token the lexer can emit is described by a
//! terminal, either a literal string or a prefix regex anchored at the
//! current offset.

use crate::ast::ExpressionKind;
use crate::token::{Token, TokenKind};
use regex::Regex;
use std::sync::LazyLock;

pub(crate) struct Terminal {
    kind: TokenKind,
    matcher: Matcher,
    /// Canonical token value, for terminals whose raw text varies
    /// (day literals canonicalise to the full upper-case day name).
    canonical: Option<&'static str>,
    expression_kind: Option<ExpressionKind>,
}

enum Matcher {
    Literal(&'static str),
    Pattern(Regex),
}

impl Terminal {
    const fn literal(kind: TokenKind, text: &'static str) -> Self {
        Self {
            kind,
            matcher: Matcher::Literal(text),
            canonical: None,
            expression_kind: None,
        }
    }

    fn pattern(kind: TokenKind, pattern: &str) -> Self {
        Self {
            kind,
            matcher: Matcher::Pattern(Regex::new(pattern).unwrap()),
            canonical: None,
            expression_kind: None,
        }
    }

    fn day(canonical: &'static str, pattern: &str) -> Self {
        Self {
            canonical: Some(canonical),
            ..Self::pattern(TokenKind::DayLiteral, pattern)
        }
    }

    fn expression_name(kind: ExpressionKind, pattern: &str) -> Self {
        Self {
            expression_kind: Some(kind),
            ..Self::pattern(TokenKind::ExpressionName, pattern)
        }
    }

    pub(crate) fn token_kind(&self) -> TokenKind {
        self.kind
    }

    /// Matches this terminal against `input` at byte offset `index`,
    /// producing a token on success.
    pub(crate) fn get_token(&self, input: &str, index: usize) -> Option<Token> {
        let raw = match &self.matcher {
            Matcher::Literal(text) => {
                if !input.as_bytes()[index..].starts_with(text.as_bytes()) {
                    return None;
                }
                *text
            }
            Matcher::Pattern(regex) => regex.find(&input[index..])?.as_str(),
        };

        Some(Token {
            kind: self.kind,
            raw_value: raw.to_string(),
            value: self.canonical.unwrap_or(raw).to_string(),
            index,
            leading_trivia: String::new(),
            expression_kind: self.expression_kind,
        })
    }
}

// literal terminals

pub(crate) static RANGE_INCLUSIVE: Terminal = Terminal::literal(TokenKind::RangeInclusive, "..");
pub(crate) static RANGE_HALF_OPEN: Terminal = Terminal::literal(TokenKind::RangeHalfOpen, "..<");
pub(crate) static INTERVAL: Terminal = Terminal::literal(TokenKind::Interval, "%");
pub(crate) static NOT: Terminal = Terminal::literal(TokenKind::Not, "!");
pub(crate) static OPEN_PAREN: Terminal = Terminal::literal(TokenKind::OpenParen, "(");
pub(crate) static CLOSE_PAREN: Terminal = Terminal::literal(TokenKind::CloseParen, ")");
pub(crate) static OPEN_CURLY: Terminal = Terminal::literal(TokenKind::OpenCurly, "{");
pub(crate) static CLOSE_CURLY: Terminal = Terminal::literal(TokenKind::CloseCurly, "}");
pub(crate) static FORWARD_SLASH: Terminal = Terminal::literal(TokenKind::ForwardSlash, "/");
pub(crate) static COMMA: Terminal = Terminal::literal(TokenKind::Comma, ",");
pub(crate) static WILDCARD: Terminal = Terminal::literal(TokenKind::Wildcard, "*");

// regex terminals

pub(crate) static POSITIVE_INTEGER: LazyLock<Terminal> =
    LazyLock::new(|| Terminal::pattern(TokenKind::PositiveInteger, r"^[0-9]+"));
pub(crate) static NEGATIVE_INTEGER: LazyLock<Terminal> =
    LazyLock::new(|| Terminal::pattern(TokenKind::NegativeInteger, r"^-[0-9]+"));

pub(crate) static SUNDAY: LazyLock<Terminal> =
    LazyLock::new(|| Terminal::day("SUNDAY", r"(?i)^(su|sun|sunday)\b"));
pub(crate) static MONDAY: LazyLock<Terminal> =
    LazyLock::new(|| Terminal::day("MONDAY", r"(?i)^(mo|mon|monday)\b"));
pub(crate) static TUESDAY: LazyLock<Terminal> =
    LazyLock::new(|| Terminal::day("TUESDAY", r"(?i)^(tu|tue|tuesday|tues)\b"));
pub(crate) static WEDNESDAY: LazyLock<Terminal> =
    LazyLock::new(|| Terminal::day("WEDNESDAY", r"(?i)^(we|wed|wednesday)\b"));
pub(crate) static THURSDAY: LazyLock<Terminal> =
    LazyLock::new(|| Terminal::day("THURSDAY", r"(?i)^(th|thu|thursday|thur|thurs)\b"));
pub(crate) static FRIDAY: LazyLock<Terminal> =
    LazyLock::new(|| Terminal::day("FRIDAY", r"(?i)^(fr|fri|friday)\b"));
pub(crate) static SATURDAY: LazyLock<Terminal> =
    LazyLock::new(|| Terminal::day("SATURDAY", r"(?i)^(sa|sat|saturday)\b"));

pub(crate) static SECONDS: LazyLock<Terminal> = LazyLock::new(|| {
    Terminal::expression_name(
        ExpressionKind::Seconds,
        r"(?i)^(s|sec|second|seconds|secondofminute|secondsofminute)\b",
    )
});
pub(crate) static MINUTES: LazyLock<Terminal> = LazyLock::new(|| {
    Terminal::expression_name(
        ExpressionKind::Minutes,
        r"(?i)^(m|min|minute|minutes|minuteofhour|minutesofhour)\b",
    )
});
pub(crate) static HOURS: LazyLock<Terminal> = LazyLock::new(|| {
    Terminal::expression_name(ExpressionKind::Hours, r"(?i)^(h|hour|hours|hourofday|hoursofday)\b")
});
pub(crate) static DAYS_OF_WEEK: LazyLock<Terminal> = LazyLock::new(|| {
    Terminal::expression_name(
        ExpressionKind::DaysOfWeek,
        r"(?i)^(day|days|dow|dayofweek|daysofweek)\b",
    )
});
pub(crate) static DAYS_OF_MONTH: LazyLock<Terminal> = LazyLock::new(|| {
    Terminal::expression_name(ExpressionKind::DaysOfMonth, r"(?i)^(dom|dayofmonth|daysofmonth)\b")
});
pub(crate) static DATES: LazyLock<Terminal> =
    LazyLock::new(|| Terminal::expression_name(ExpressionKind::Dates, r"(?i)^(date|dates)\b"));
