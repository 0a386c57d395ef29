//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Expressions are parsed Pratt-style with NUD/LED handlers; statements are
//! dispatched on their leading keyword.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for literals, prefixes and groups
//! - LED (left denotation) handlers for infix operators
//! - Binding powers for operator precedence
//!
//! A syntax error does not end the parse: it is recorded and the parser
//! skips ahead to the next statement boundary before resuming.

use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    ast::{ast::ExprId, ast::Program},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest expression nesting accepted, counting groups, prefix operators
/// and infix operators.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source being parsed
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Counter for expression node ids
    current_id: usize,
    /// Current expression nesting level
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended when the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let line = tokens.last().map(|token| token.line).unwrap_or(1);
            tokens.push(Token::new(TokenKind::EOF, "", line));
        }

        Parser {
            tokens,
            pos: 0,
            file,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            current_id: 0,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the binding power of the current token as an infix operator.
    pub fn current_binding_power(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.current_token_kind())
            .unwrap_or(&BindingPower::Default)
    }

    /// Consumes the current token and returns it. `EOF` is never consumed.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.current_token_kind() != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    fn previous_token_kind(&self) -> Option<TokenKind> {
        self.pos
            .checked_sub(1)
            .map(|index| self.tokens[index].kind)
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// The consumed token, or a syntax error carrying `message` anchored on
    /// the current token.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            Ok(self.advance().clone())
        } else {
            let token = self.current_token();
            Err(self.error_at(
                token,
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.lexeme.clone(),
                    message: String::from(message),
                },
            ))
        }
    }

    /// Builds an error located on `token`.
    pub fn error_at(&self, token: &Token, error_impl: ErrorImpl) -> Error {
        Error::at_token(error_impl, token, Position(token.line, Rc::clone(&self.file)))
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Skips tab indentation markers sitting at a statement boundary.
    pub fn skip_indentation(&mut self) {
        while self.current_token_kind() == TokenKind::Indent {
            self.advance();
        }
    }

    /// Discards tokens until just after a `;` or just before a token that
    /// starts a new statement.
    pub fn synchronize(&mut self) {
        self.advance();

        while self.has_tokens() {
            if self.previous_token_kind() == Some(TokenKind::Semicolon) {
                return;
            }

            if self.current_token_kind().starts_statement() {
                return;
            }

            self.advance();
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler and its binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Hands out the next expression id.
    pub fn advance_id(&mut self) -> ExprId {
        let id = self.current_id;
        self.current_id += 1;
        ExprId(id)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Enters one more level of expression nesting.
    ///
    /// Fails on the current token once `MAX_NESTING_DEPTH` is exceeded, so
    /// no tree handed to later stages is deeper than that.
    pub fn nest(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            let token = self.current_token();
            return Err(self.error_at(
                token,
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.lexeme.clone(),
                    message: String::from("expression nested too deeply"),
                },
            ));
        }

        Ok(())
    }
}

/// Parses a stream of tokens into a program.
///
/// Every malformed statement is reported and skipped, so the returned error
/// list holds one diagnostic per bad statement. The program is only fit for
/// checking when that list is empty.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(tokens, Rc::clone(&file));
    create_token_lookups(&mut parser);

    let mut body = vec![];
    let mut errors = vec![];

    loop {
        parser.skip_indentation();
        if !parser.has_tokens() {
            break;
        }

        match parse_stmt(&mut parser) {
            Ok(stmt) => body.push(stmt),
            Err(error) => {
                debug!(%error, "syntax error, synchronizing");
                errors.push(error);
                parser.synchronize();
            }
        }
    }

    debug!(statements = body.len(), errors = errors.len(), "parsed");

    let program = Program {
        body,
        node_count: parser.current_id,
        file,
    };

    (program, errors)
}
