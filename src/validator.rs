use crate::ast::{Argument, DateValue, Expression, ExpressionKind, Program, Range, Value};
use crate::error::Error;
use crate::utils::days_in_month;
use crate::Result;

/// Semantic checks over a parsed program. Every violation is reported as a
/// parse error pinned to the offending value's byte offset.
pub(crate) struct Validator<'a> {
    input: &'a str,
    program: &'a Program,
}

impl<'a> Validator<'a> {
    pub(crate) fn new(input: &'a str, program: &'a Program) -> Self {
        Self { input, program }
    }

    pub(crate) fn assert_valid(&self) -> Result<()> {
        let has_expressions = !self.program.expressions.is_empty()
            || self.program.groups.iter().any(|g| !g.expressions.is_empty());
        if !has_expressions {
            return Err(Error::parse(
                "Schedule must contain at least one expression.",
                self.input,
                0,
            ));
        }

        for group in &self.program.groups {
            self.assert_expression_list(&group.expressions)?;
        }

        self.assert_expression_list(&self.program.expressions)
    }

    fn assert_expression_list(&self, expressions: &[Expression]) -> Result<()> {
        expressions.iter().try_for_each(|e| self.assert_expression(e))
    }

    fn assert_expression(&self, expression: &Expression) -> Result<()> {
        if expression.arguments.is_empty() {
            return Err(Error::parse(
                "Expression has no arguments.",
                self.input,
                expression.index,
            ));
        }

        for argument in &expression.arguments {
            self.assert_argument(expression.kind, argument)?;
        }

        Ok(())
    }

    fn assert_argument(&self, kind: ExpressionKind, argument: &Argument) -> Result<()> {
        if let Some(interval) = argument.interval {
            if interval.value == 0 {
                return Err(Error::parse(
                    format!(
                        "\"%0\" is not a valid interval. If your intention was to include all {} \
                         use the wildcard operator \"*\" instead of an interval",
                        kind.human_name()
                    ),
                    self.input,
                    interval.index,
                ));
            }
        }

        if argument.is_wildcard {
            if argument.is_exclusion && argument.interval.is_none() {
                return Err(Error::parse(
                    "Wildcards can't be excluded with the ! operator, except when part of an \
                     interval (using %).",
                    self.input,
                    argument.index,
                ));
            }
        } else {
            match &argument.range {
                Some(range) => self.assert_range(kind, range)?,
                None => {
                    return Err(Error::parse(
                        "Expected a value or range.",
                        self.input,
                        argument.index,
                    ));
                }
            }
        }

        if let Some(interval) = argument.interval {
            // interval values are bounded by the field they step through;
            // date intervals count days and have no upper bound
            if kind != ExpressionKind::Dates {
                let (min, max) = integer_bounds(kind);
                self.assert_integer_bounds("interval", interval.value, interval.index, min, max)?;
            }
        }

        Ok(())
    }

    fn assert_range(&self, kind: ExpressionKind, range: &Range) -> Result<()> {
        self.assert_value(kind, &range.start)?;
        if let Some(end) = &range.end {
            self.assert_value(kind, end)?;

            if range.is_half_open && values_are_equal(&range.start, end) {
                return Err(Error::parse(
                    "Start and end values of a half-open range cannot be equal.",
                    self.input,
                    range.start.index(),
                ));
            }
        }

        if kind == ExpressionKind::Dates {
            if let (Value::Date(start), Some(Value::Date(end))) = (&range.start, &range.end) {
                // date ranges get extra sanity checks on year symmetry
                if start.year.is_some() != end.year.is_some() {
                    return Err(Error::parse(
                        "Cannot mix full and partial dates in a date range.",
                        self.input,
                        start.index,
                    ));
                }

                if start.year.is_some() && !is_start_before_end(start, end) {
                    return Err(Error::parse(
                        "End date of range is before the start date.",
                        self.input,
                        start.index,
                    ));
                }
            }
        }

        Ok(())
    }

    fn assert_value(&self, kind: ExpressionKind, value: &Value) -> Result<()> {
        match (kind, value) {
            (ExpressionKind::Dates, Value::Date(date)) => self.assert_date(date),
            (_, Value::Integer(integer)) => {
                let (min, max) = integer_bounds(kind);
                self.assert_integer_bounds(kind.human_name(), integer.value, integer.index, min, max)?;

                if kind == ExpressionKind::DaysOfMonth && integer.value == 0 {
                    return Err(Error::parse(
                        "Day of month cannot be zero.",
                        self.input,
                        integer.index,
                    ));
                }

                Ok(())
            }
            (_, Value::Date(_)) => Err(Error::internal(
                format!("A date value appeared in a {} expression.", kind.human_name()),
                self.input,
            )),
        }
    }

    fn assert_date(&self, date: &DateValue) -> Result<()> {
        if let Some(year) = date.year {
            if !(1900..=2200).contains(&year) {
                return Err(Error::parse(
                    format!("Year {year} is not a valid year. Must be between 1900 and 2200."),
                    self.input,
                    date.index,
                ));
            }
        }

        if !(1..=12).contains(&date.month) {
            return Err(Error::parse(
                format!("Month {} is not a valid month. Must be between 1 and 12.", date.month),
                self.input,
                date.index,
            ));
        }

        // an unspecified year validates as a leap year so 2/29 is allowed
        let days = days_in_month(date.year.unwrap_or(0), date.month);
        if !(1..=days).contains(&date.day) {
            return Err(Error::parse(
                format!(
                    "{} is not a valid day for the month specified. Must be between 1 and {days}",
                    date.day
                ),
                self.input,
                date.index,
            ));
        }

        Ok(())
    }

    fn assert_integer_bounds(
        &self,
        name: &str,
        value: i32,
        index: usize,
        min: i32,
        max: i32,
    ) -> Result<()> {
        if !(min..=max).contains(&value) {
            return Err(Error::parse(
                format!("{name} cannot be {value}. Value must be between {min} and {max}."),
                self.input,
                index,
            ));
        }

        Ok(())
    }
}

fn integer_bounds(kind: ExpressionKind) -> (i32, i32) {
    match kind {
        ExpressionKind::Seconds | ExpressionKind::Minutes => (0, 59),
        ExpressionKind::Hours => (0, 23),
        ExpressionKind::DaysOfWeek => (1, 7),
        ExpressionKind::DaysOfMonth => (-31, 31),
        // date values and date intervals are validated separately
        ExpressionKind::Dates => unreachable!(),
    }
}

fn values_are_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Integer(a), Value::Integer(b)) => a.value == b.value,
        (Value::Date(a), Value::Date(b)) => {
            // dates are equal iff day and month match, and years match
            // when the start carries one
            a.day == b.day && a.month == b.month && (a.year.is_none() || a.year == b.year)
        }
        _ => false,
    }
}

fn is_start_before_end(start: &DateValue, end: &DateValue) -> bool {
    (start.year, start.month, start.day) <= (end.year, end.month, end.day)
}
