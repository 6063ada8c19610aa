use crate::error::Error;
use crate::terminal::{self, Terminal};
use crate::token::{Token, TokenKind, TokenQueue};
use crate::Result;

/// Where in the grammar the lexer currently is. Group and Expression are
/// entered on `{` and `(` and left on the matching close token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContextMode {
    Program,
    Group,
    Expression,
}

/// The next lexing step. The state machine is dispatched in a loop rather
/// than chained through function values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexStep {
    List,
    Group,
    Expression,
    ExpressionArgument,
    PastEndOfInput,
}

/// Context-stack-driven tokeniser. Tokens are queued internally so that
/// `peek` is cheap for the parser.
pub(crate) struct Lexer<'a> {
    input: &'a str,
    index: usize,
    context_stack: Vec<ContextMode>,
    leading_trivia: String,
    queue: TokenQueue,
    step: LexStep,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            index: 0,
            context_stack: vec![ContextMode::Program],
            leading_trivia: String::new(),
            queue: TokenQueue::default(),
            step: LexStep::List,
        }
    }

    pub(crate) fn input(&self) -> &'a str {
        self.input
    }

    pub(crate) fn advance(&mut self) -> Result<Token> {
        self.queue_next()?;
        self.queue
            .dequeue()
            .ok_or_else(|| Error::internal("The token queue was empty after filling.", self.input))
    }

    pub(crate) fn peek(&mut self) -> Result<&Token> {
        self.queue_next()?;
        self.queue
            .peek()
            .ok_or_else(|| Error::internal("The token queue was empty after filling.", self.input))
    }

    fn queue_next(&mut self) -> Result<()> {
        while self.queue.is_empty() {
            self.consume_whitespace();
            self.step = match self.step {
                LexStep::List => self.lex_list()?,
                LexStep::Group => self.lex_group()?,
                LexStep::Expression => self.lex_expression()?,
                LexStep::ExpressionArgument => self.lex_expression_argument()?,
                LexStep::PastEndOfInput => {
                    return Err(Error::internal(
                        "The lexer was advanced past the end of the input.",
                        self.input,
                    ));
                }
            };
        }

        Ok(())
    }

    fn context(&self) -> ContextMode {
        *self
            .context_stack
            .last()
            .expect("the lexer context stack is never empty")
    }

    fn enter_context(&mut self, mode: ContextMode) {
        self.context_stack.push(mode);
    }

    fn exit_context(&mut self) -> Result<()> {
        if self.context_stack.len() == 1 {
            return Err(Error::internal(
                "The lexer attempted to exit the last context.",
                self.input,
            ));
        }

        self.context_stack.pop();
        Ok(())
    }

    fn is_end_next(&self) -> bool {
        self.index == self.input.len()
    }

    fn consume_whitespace(&mut self) {
        let start = self.index;
        while let Some(c) = self.input[self.index..].chars().next() {
            if !c.is_whitespace() {
                break;
            }
            self.index += c.len_utf8();
        }

        self.leading_trivia.push_str(&self.input[start..self.index]);
    }

    /// Emits the end-of-input token when the input is exhausted. Reaching
    /// the end inside a group or expression is a syntax error.
    fn end_of_input(&mut self) -> Result<bool> {
        self.consume_whitespace();
        if !self.is_end_next() {
            return Ok(false);
        }

        if self.context_stack.len() > 1 {
            return Err(Error::parse("Unexpected end of input.", self.input, self.index));
        }

        let token = Token {
            kind: TokenKind::EndOfInput,
            raw_value: String::new(),
            value: String::new(),
            index: self.index,
            leading_trivia: String::new(),
            expression_kind: None,
        };
        self.consume_token(token);

        Ok(true)
    }

    fn is_next_term(&mut self, term: &Terminal) -> bool {
        self.consume_whitespace();
        term.get_token(self.input, self.index).is_some()
    }

    fn consume_term(&mut self, term: &Terminal) -> Result<()> {
        self.consume_whitespace();

        match term.get_token(self.input, self.index) {
            Some(token) => {
                self.consume_token(token);
                Ok(())
            }
            None => Err(self.unexpected_text(&[term.token_kind()])),
        }
    }

    fn consume_optional_term(&mut self, term: &Terminal) -> bool {
        self.consume_whitespace();

        match term.get_token(self.input, self.index) {
            Some(token) => {
                self.consume_token(token);
                true
            }
            None => false,
        }
    }

    fn consume_token(&mut self, mut token: Token) {
        self.index += token.raw_value.len();
        token.leading_trivia = std::mem::take(&mut self.leading_trivia);
        self.queue.enqueue(token);
    }

    fn unexpected_text(&self, expected: &[TokenKind]) -> Error {
        let mut msg = format!("Unexpected input at index {}. Was expecting ", self.index);
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

        Error::parse(msg, self.input, self.index)
    }

    fn lex_list(&mut self) -> Result<LexStep> {
        self.consume_optional_term(&terminal::COMMA);

        if self.end_of_input()? {
            return Ok(LexStep::PastEndOfInput);
        }

        match self.context() {
            ContextMode::Program => {
                if self.is_next_term(&terminal::OPEN_CURLY) {
                    return Ok(LexStep::Group);
                }
            }
            ContextMode::Group => {
                if self.consume_optional_term(&terminal::CLOSE_CURLY) {
                    self.exit_context()?;
                    return Ok(LexStep::List);
                }
            }
            ContextMode::Expression => {
                if self.consume_optional_term(&terminal::CLOSE_PAREN) {
                    self.exit_context()?;
                    return Ok(LexStep::List);
                }
            }
        }

        if self.context() == ContextMode::Expression {
            Ok(LexStep::ExpressionArgument)
        } else {
            Ok(LexStep::Expression)
        }
    }

    fn lex_group(&mut self) -> Result<LexStep> {
        self.consume_term(&terminal::OPEN_CURLY)?;
        self.enter_context(ContextMode::Group);
        Ok(LexStep::List)
    }

    fn lex_expression(&mut self) -> Result<LexStep> {
        let consumed_name = self.consume_optional_term(&terminal::SECONDS)
            || self.consume_optional_term(&terminal::MINUTES)
            || self.consume_optional_term(&terminal::HOURS)
            || self.consume_optional_term(&terminal::DAYS_OF_WEEK)
            || self.consume_optional_term(&terminal::DAYS_OF_MONTH)
            || self.consume_optional_term(&terminal::DATES);

        if !consumed_name {
            return Err(self.unexpected_text(&[TokenKind::ExpressionName]));
        }

        self.consume_term(&terminal::OPEN_PAREN)?;
        self.enter_context(ContextMode::Expression);

        Ok(LexStep::List)
    }

    fn lex_expression_argument(&mut self) -> Result<LexStep> {
        let start = self.index;

        self.consume_optional_term(&terminal::NOT);

        if !self.consume_optional_term(&terminal::WILDCARD) && self.consume_number_day_or_date(false)? {
            // might be a range
            if self.consume_optional_term(&terminal::RANGE_HALF_OPEN)
                || self.consume_optional_term(&terminal::RANGE_INCLUSIVE)
            {
                self.consume_number_day_or_date(true)?;
            }
        }

        if self.consume_optional_term(&terminal::INTERVAL) {
            self.consume_term(&terminal::POSITIVE_INTEGER)?;
        }

        if self.index == start {
            // nothing matched; bail out rather than spin on the same index
            return Err(self.unexpected_text(&[
                TokenKind::Not,
                TokenKind::Wildcard,
                TokenKind::PositiveInteger,
                TokenKind::NegativeInteger,
                TokenKind::DayLiteral,
            ]));
        }

        Ok(LexStep::List)
    }

    fn consume_number_day_or_date(&mut self, required: bool) -> Result<bool> {
        if self.consume_optional_term(&terminal::POSITIVE_INTEGER) {
            // this might be a date - check for slashes
            if self.consume_optional_term(&terminal::FORWARD_SLASH) {
                self.consume_term(&terminal::POSITIVE_INTEGER)?;

                // might have a year... one more check
                if self.consume_optional_term(&terminal::FORWARD_SLASH) {
                    self.consume_term(&terminal::POSITIVE_INTEGER)?;
                }
            }

            return Ok(true);
        }

        if self.consume_optional_term(&terminal::NEGATIVE_INTEGER)
            || self.consume_optional_term(&terminal::SUNDAY)
            || self.consume_optional_term(&terminal::MONDAY)
            || self.consume_optional_term(&terminal::TUESDAY)
            || self.consume_optional_term(&terminal::WEDNESDAY)
            || self.consume_optional_term(&terminal::THURSDAY)
            || self.consume_optional_term(&terminal::FRIDAY)
            || self.consume_optional_term(&terminal::SATURDAY)
        {
            return Ok(true);
        }

        if required {
            return Err(self.unexpected_text(&[
                TokenKind::PositiveInteger,
                TokenKind::NegativeInteger,
                TokenKind::DayLiteral,
            ]));
        }

        Ok(false)
    }
}
