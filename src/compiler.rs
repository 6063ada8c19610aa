//! Lowers the validated syntax tree to the IR: wildcards expand to the full
//! width of their field, ranges are normalised and flagged when they wrap,
//! and missing lower-resolution fields are pinned to zero.

use crate::ast::{Argument, Expression, ExpressionKind, Program, Value};
use crate::ir::{IrDate, IrDateRange, IrGroup, IrIntegerRange, IrProgram};

pub(crate) fn compile(program: &Program) -> IrProgram {
    let mut ir = IrProgram::default();

    // free-floating expressions are placed in an implicit group
    ir.groups.extend(compile_group(&program.expressions));

    for group in &program.groups {
        ir.groups.extend(compile_group(&group.expressions));
    }

    ir
}

fn compile_group(expressions: &[Expression]) -> Option<IrGroup> {
    if expressions.is_empty() {
        return None;
    }

    let mut group = IrGroup::default();
    for expression in expressions {
        compile_expression(&mut group, expression);
    }

    // setup implied rules: pin skipped lower-resolution fields to zero so
    // every schedule resolves to a precise second
    if group.seconds.is_empty() && group.seconds_excluded.is_empty() {
        if !group.minutes.is_empty() || !group.minutes_excluded.is_empty() {
            group.seconds.push(IrIntegerRange::singleton(0));
        } else if !group.hours.is_empty() || !group.hours_excluded.is_empty() {
            group.seconds.push(IrIntegerRange::singleton(0));
            group.minutes.push(IrIntegerRange::singleton(0));
        } else {
            // only a date-level expression was set
            group.seconds.push(IrIntegerRange::singleton(0));
            group.minutes.push(IrIntegerRange::singleton(0));
            group.hours.push(IrIntegerRange::singleton(0));
        }
    }

    Some(group)
}

fn compile_expression(group: &mut IrGroup, expression: &Expression) {
    for argument in &expression.arguments {
        match expression.kind {
            ExpressionKind::Seconds => {
                let rule = compile_integer_argument(argument, 0, 59);
                push_rule(&mut group.seconds, &mut group.seconds_excluded, argument, rule);
            }
            ExpressionKind::Minutes => {
                let rule = compile_integer_argument(argument, 0, 59);
                push_rule(&mut group.minutes, &mut group.minutes_excluded, argument, rule);
            }
            ExpressionKind::Hours => {
                let rule = compile_integer_argument(argument, 0, 23);
                push_rule(&mut group.hours, &mut group.hours_excluded, argument, rule);
            }
            ExpressionKind::DaysOfWeek => {
                let rule = compile_integer_argument(argument, 1, 7);
                push_rule(&mut group.days_of_week, &mut group.days_of_week_excluded, argument, rule);
            }
            ExpressionKind::DaysOfMonth => {
                let rule = compile_integer_argument(argument, 1, 31);
                push_rule(
                    &mut group.days_of_month,
                    &mut group.days_of_month_excluded,
                    argument,
                    rule,
                );
            }
            ExpressionKind::Dates => {
                let rule = compile_date_argument(argument);
                push_rule(&mut group.dates, &mut group.dates_excluded, argument, rule);
            }
        }
    }
}

fn push_rule<T>(included: &mut Vec<T>, excluded: &mut Vec<T>, argument: &Argument, rule: T) {
    if argument.is_exclusion {
        excluded.push(rule);
    } else {
        included.push(rule);
    }
}

fn integer_endpoint(value: &Value) -> i32 {
    match value {
        Value::Integer(v) => v.value,
        // the validator has already rejected date values in integer fields
        Value::Date(_) => unreachable!(),
    }
}

fn compile_integer_argument(argument: &Argument, wild_start: i32, wild_end: i32) -> IrIntegerRange {
    let interval = argument.interval.map(|i| i.value);

    let (start, end) = if argument.is_wildcard {
        (wild_start, Some(wild_end))
    } else {
        let range = argument.range.as_ref().expect("non-wildcard argument has a range");
        let start = integer_endpoint(&range.start);
        let end = match &range.end {
            Some(end) => Some(integer_endpoint(end)),
            // an interval with no explicit end runs to the end of the field
            None if interval.is_some() => Some(wild_end),
            None => None,
        };

        (start, end)
    };

    let mut is_split = false;
    if let Some(end) = end {
        if end < start && (start < 0 || end > 0) {
            // Start is greater than end, so it's probably a split range.
            // The exception is a day-of-month range with a non-negative
            // start and non-positive end: the negative value counts back
            // from the end of the month and is normalised at search time.
            // todo: a better check would look for possible overlap between
            // a positive start and negative end
            is_split = true;
        }
    }

    IrIntegerRange {
        start,
        end,
        is_half_open: argument.range.as_ref().is_some_and(|r| r.is_half_open),
        is_split,
        interval,
    }
}

fn date_endpoint(value: &Value) -> IrDate {
    match value {
        Value::Date(d) => IrDate::new(d.year, d.month, d.day),
        // the validator has already rejected integer values in date fields
        Value::Integer(_) => unreachable!(),
    }
}

fn compile_date_argument(argument: &Argument) -> IrDateRange {
    let interval = argument.interval.map(|i| i.value);

    let (start, end) = if argument.is_wildcard {
        (IrDate::new(None, 1, 1), Some(IrDate::new(None, 12, 31)))
    } else {
        let range = argument.range.as_ref().expect("non-wildcard argument has a range");
        let start = date_endpoint(&range.start);
        let end = match &range.end {
            Some(end) => Some(date_endpoint(end)),
            // an interval with no explicit end runs to the end of the year
            None if interval.is_some() => Some(IrDate::new(None, 12, 31)),
            None => None,
        };

        (start, end)
    };

    // a yearless range whose start falls after its end spans January 1;
    // ranges with explicit years are validated start <= end and never split
    let mut is_split = false;
    if let Some(end) = end {
        if start.year == 0
            && start.month >= end.month
            && (start.month > end.month || start.day > end.day)
        {
            is_split = true;
        }
    }

    IrDateRange {
        start,
        end,
        is_half_open: argument.range.as_ref().is_some_and(|r| r.is_half_open),
        is_split,
        interval,
    }
}
