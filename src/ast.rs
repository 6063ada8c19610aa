//! Syntax tree produced by the parser and consumed by the validator and
//! the IR compiler.

/// The six schedule fields an expression can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ExpressionKind {
    Seconds,
    Minutes,
    Hours,
    DaysOfWeek,
    DaysOfMonth,
    Dates,
}

impl ExpressionKind {
    /// Field name as it appears in user-facing validation messages.
    pub(crate) fn human_name(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::DaysOfWeek => "days of the week",
            Self::DaysOfMonth => "days of the month",
            Self::Dates => "dates",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Program {
    pub expressions: Vec<Expression>,
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Group {
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Expression {
    pub kind: ExpressionKind,
    /// Byte offset of the expression name token.
    pub index: usize,
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Argument {
    /// Byte offset of the argument's first token.
    pub index: usize,
    pub is_exclusion: bool,
    pub is_wildcard: bool,
    /// Absent only for wildcard arguments.
    pub range: Option<Range>,
    pub interval: Option<IntegerValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Range {
    pub start: Value,
    pub end: Option<Value>,
    pub is_half_open: bool,
}

/// A range endpoint. Integer and date endpoints never mix within one range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Value {
    Integer(IntegerValue),
    Date(DateValue),
}

impl Value {
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Integer(v) => v.index,
            Self::Date(v) => v.index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IntegerValue {
    pub value: i32,
    /// Byte offset of the value's token.
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateValue {
    pub year: Option<i32>,
    pub month: i32,
    pub day: i32,
    /// Byte offset of the date's first token.
    pub index: usize,
}
