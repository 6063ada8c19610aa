use crate::ast::{
    Argument, DateValue, Expression, ExpressionKind, Group, IntegerValue, Program, Range, Value,
};
use crate::error::Error;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use crate::Result;

/// Recursive-descent parser producing the syntax tree.
pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }

    pub(crate) fn input(&self) -> &'a str {
        self.lexer.input()
    }

    pub(crate) fn parse(&mut self) -> Result<Program> {
        self.parse_program()
    }

    fn peek(&mut self) -> Result<&Token> {
        self.lexer.peek()
    }

    fn advance(&mut self) -> Result<Token> {
        self.lexer.advance()
    }

    fn is_next(&mut self, kind: TokenKind) -> Result<bool> {
        Ok(self.peek()?.kind == kind)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if !self.is_next(kind)? {
            return Err(self.wrong_token(&[kind])?);
        }

        self.advance()
    }

    fn wrong_token(&mut self, expected: &[TokenKind]) -> Result<Error> {
        let input = self.input();
        let next = self.peek()?;

        let mut msg = format!(
            "Unexpected token type {} at index {}. Was expecting ",
            next.kind.name(),
            next.index
        );
        if let [kind] = expected {
            msg.push_str(kind.name());
        } else {
            msg.push_str("one of: ");
            for (i, kind) in expected.iter().enumerate() {
                if i > 0 {
                    msg.push_str(", ");
                }
                msg.push_str(kind.name());
            }
        }

        Ok(Error::parse(msg, input, next.index))
    }

    fn parse_program(&mut self) -> Result<Program> {
        let mut program = Program::default();

        while !self.is_next(TokenKind::EndOfInput)? {
            if self.is_next(TokenKind::OpenCurly)? {
                program.groups.push(self.parse_group()?);
            } else if self.is_next(TokenKind::ExpressionName)? {
                program.expressions.push(self.parse_expression()?);
            } else {
                return Err(self.wrong_token(&[
                    TokenKind::OpenCurly,
                    TokenKind::ExpressionName,
                    TokenKind::Comma,
                ])?);
            }

            if self.is_next(TokenKind::Comma)? {
                self.advance()?;
            }
        }

        self.expect(TokenKind::EndOfInput)?;
        Ok(program)
    }

    fn parse_group(&mut self) -> Result<Group> {
        let mut group = Group::default();
        self.expect(TokenKind::OpenCurly)?;

        while !self.is_next(TokenKind::CloseCurly)? {
            group.expressions.push(self.parse_expression()?);

            if self.is_next(TokenKind::Comma)? {
                self.advance()?;
            }
        }

        self.expect(TokenKind::CloseCurly)?;
        Ok(group)
    }

    fn parse_expression(&mut self) -> Result<Expression> {
        let name = self.expect(TokenKind::ExpressionName)?;
        let kind = name.expression_kind.ok_or_else(|| {
            Error::internal("An expression name token had no expression kind.", self.input())
        })?;

        let mut expression = Expression {
            kind,
            index: name.index,
            arguments: Vec::new(),
        };

        self.expect(TokenKind::OpenParen)?;

        loop {
            expression.arguments.push(self.parse_argument(kind)?);

            if self.is_next(TokenKind::Comma)? {
                self.advance()?;
            }

            if self.is_next(TokenKind::CloseParen)? {
                break;
            }
        }

        self.expect(TokenKind::CloseParen)?;
        Ok(expression)
    }

    fn parse_argument(&mut self, kind: ExpressionKind) -> Result<Argument> {
        let mut argument = Argument {
            index: self.peek()?.index,
            is_exclusion: false,
            is_wildcard: false,
            range: None,
            interval: None,
        };

        if self.is_next(TokenKind::Not)? {
            argument.is_exclusion = true;
            self.advance()?;
        }

        if self.is_next(TokenKind::Wildcard)? {
            argument.is_wildcard = true;
            self.advance()?;
        } else {
            argument.range = Some(self.parse_range(kind)?);
        }

        if self.is_next(TokenKind::Interval)? {
            self.advance()?;
            argument.interval = Some(self.parse_interval_value()?);
        }

        Ok(argument)
    }

    fn parse_range(&mut self, kind: ExpressionKind) -> Result<Range> {
        let start = self.parse_value(kind)?;

        let mut is_range = false;
        let mut is_half_open = false;
        if self.is_next(TokenKind::RangeInclusive)? {
            is_range = true;
        } else if self.is_next(TokenKind::RangeHalfOpen)? {
            is_range = true;
            is_half_open = true;
        }

        let mut end = None;
        if is_range {
            self.advance()?;
            end = Some(self.parse_value(kind)?);
        }

        Ok(Range {
            start,
            end,
            is_half_open,
        })
    }

    fn parse_value(&mut self, kind: ExpressionKind) -> Result<Value> {
        if kind == ExpressionKind::Dates {
            Ok(Value::Date(self.parse_date()?))
        } else {
            Ok(Value::Integer(self.parse_integer_value(kind)?))
        }
    }

    fn parse_integer_value(&mut self, kind: ExpressionKind) -> Result<IntegerValue> {
        if self.is_next(TokenKind::PositiveInteger)? {
            // positive integer is valid for anything
            let token = self.advance()?;
            return Ok(IntegerValue {
                value: self.parse_int(&token)?,
                index: token.index,
            });
        }

        if self.is_next(TokenKind::NegativeInteger)? {
            if kind != ExpressionKind::DaysOfMonth {
                let index = self.peek()?.index;
                return Err(Error::parse(
                    "Negative values are only allowed in dayofmonth expressions.",
                    self.input(),
                    index,
                ));
            }

            let token = self.advance()?;
            return Ok(IntegerValue {
                value: self.parse_int(&token)?,
                index: token.index,
            });
        }

        if self.is_next(TokenKind::DayLiteral)? {
            if kind != ExpressionKind::DaysOfWeek {
                let index = self.peek()?.index;
                return Err(Error::parse(
                    "Unexpected day literal. Day literals are only allowed in daysOfWeek expressions.",
                    self.input(),
                    index,
                ));
            }

            let token = self.advance()?;
            return Ok(IntegerValue {
                value: day_to_integer(&token.value, self.input())?,
                index: token.index,
            });
        }

        Err(match kind {
            ExpressionKind::DaysOfMonth => {
                self.wrong_token(&[TokenKind::PositiveInteger, TokenKind::NegativeInteger])?
            }
            ExpressionKind::DaysOfWeek => {
                self.wrong_token(&[TokenKind::PositiveInteger, TokenKind::DayLiteral])?
            }
            _ => self.wrong_token(&[TokenKind::PositiveInteger])?,
        })
    }

    /// Interval values are plain positive integers regardless of the
    /// expression they modify.
    fn parse_interval_value(&mut self) -> Result<IntegerValue> {
        let token = self.expect(TokenKind::PositiveInteger)?;
        Ok(IntegerValue {
            value: self.parse_int(&token)?,
            index: token.index,
        })
    }

    fn parse_date(&mut self) -> Result<DateValue> {
        let first = self.expect(TokenKind::PositiveInteger)?;
        let index = first.index;
        let one = self.parse_int(&first)?;

        self.expect(TokenKind::ForwardSlash)?;

        let token = self.expect(TokenKind::PositiveInteger)?;
        let two = self.parse_int(&token)?;

        let mut three = None;
        if self.is_next(TokenKind::ForwardSlash)? {
            self.advance()?;

            let token = self.expect(TokenKind::PositiveInteger)?;
            three = Some(self.parse_int(&token)?);
        }

        Ok(match three {
            // three-part form is year/month/day
            Some(day) => DateValue {
                year: Some(one),
                month: two,
                day,
                index,
            },
            None => DateValue {
                year: None,
                month: one,
                day: two,
                index,
            },
        })
    }

    fn parse_int(&self, token: &Token) -> Result<i32> {
        token.value.parse::<i32>().map_err(|_| {
            let msg = if token.value.starts_with('-') {
                "Integer value is too small."
            } else {
                "Integer value is too large."
            };

            Error::parse(msg, self.input(), token.index)
        })
    }
}

fn day_to_integer(day: &str, input: &str) -> Result<i32> {
    match day {
        "SUNDAY" => Ok(1),
        "MONDAY" => Ok(2),
        "TUESDAY" => Ok(3),
        "WEDNESDAY" => Ok(4),
        "THURSDAY" => Ok(5),
        "FRIDAY" => Ok(6),
        "SATURDAY" => Ok(7),
        _ => Err(Error::internal(format!("{day} is not a day."), input)),
    }
}
