use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    ast::values::TypedValue,
    config::Locale,
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("lexer patterns are valid regular expressions"),
            handler,
        }
    }
}

lazy_static! {
    pub static ref FRENCH_PATTERNS: Vec<RegexPattern> = create_patterns(',');
    pub static ref ENGLISH_PATTERNS: Vec<RegexPattern> = create_patterns('.');
}

/// Builds the ordered pattern table. Every pattern is anchored at the current
/// position and the first match wins, so two-character operators come before
/// their one-character prefixes.
fn create_patterns(decimal_separator: char) -> Vec<RegexPattern> {
    let number = format!(
        "^[0-9]+(?:{}[0-9]+)?",
        regex::escape(&decimal_separator.to_string())
    );

    vec![
        RegexPattern::new(r"^[\p{L}_][\p{L}\p{N}_]*", symbol_handler),
        RegexPattern::new(&number, number_handler),
        RegexPattern::new(r"^[ \r]+", skip_handler),
        RegexPattern::new(r"^\n", newline_handler),
        RegexPattern::new(r"^\t", indent_handler),
        RegexPattern::new(r#"^"[^"]*"?"#, string_handler),
        RegexPattern::new(r"^//[^\n]*", skip_handler),
        RegexPattern::new(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new(r"^\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        RegexPattern::new(r"^\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        RegexPattern::new(r"^<-", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "<-")),
        RegexPattern::new(r"^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        RegexPattern::new(r"^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new(r"^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        RegexPattern::new(r"^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new(r"^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new(r"^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        RegexPattern::new(r"^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Equal, "=")),
        RegexPattern::new(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new(r"^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new(r"^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
    ]
}

pub struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
    locale: Locale,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>, locale: Locale) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            errors: vec![],
            source,
            pos: 0,
            line: 1,
            file: file_name,
            locale,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, "token");
        self.tokens.push(token);
    }

    pub fn error(&mut self, error_impl: ErrorImpl) {
        let error = Error::new(error_impl, self.get_position());
        debug!(%error, "lexical error");
        self.errors.push(error);
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn get_position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Text matched by `regex` at the current position.
    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
}

fn newline_handler(lexer: &mut Lexer, _regex: &Regex) {
    lexer.line += 1;
    lexer.advance_n(1);
}

// A tab only marks indentation when it leads its line and real content
// follows it. Any other tab is plain whitespace.
fn indent_handler(lexer: &mut Lexer, _regex: &Regex) {
    let next = lexer.remainder()[1..].chars().next();
    let line_start = lexer.source[..lexer.pos]
        .rfind('\n')
        .map_or(0, |index| index + 1);
    let leading = lexer.source[line_start..lexer.pos]
        .chars()
        .all(|c| matches!(c, ' ' | '\t' | '\r'));

    if leading && !matches!(next, Some(c) if c.is_whitespace()) {
        let line = lexer.line;
        lexer.push(MK_TOKEN!(TokenKind::Indent, "\t", None, line));
    }

    lexer.advance_n(1);
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let separator = lexer.locale.decimal_separator();
    let line = lexer.line;

    if matched.contains(separator) {
        let normalized = matched.replace(separator, ".");
        match normalized.parse::<f64>() {
            Ok(value) => lexer.push(MK_TOKEN!(
                TokenKind::DoubleLiteral,
                matched.as_str(),
                Some(TypedValue::floating(value)),
                line
            )),
            Err(_) => lexer.error(ErrorImpl::NumberParseError {
                token: matched.clone(),
            }),
        }
    } else {
        // An out-of-range literal still yields a token, so the parser does
        // not report a second error for the same text.
        let value = matched.parse::<i64>().unwrap_or_else(|_| {
            lexer.error(ErrorImpl::NumberParseError {
                token: matched.clone(),
            });
            0
        });

        lexer.push(MK_TOKEN!(
            TokenKind::IntegerLiteral,
            matched.as_str(),
            Some(TypedValue::integer(value)),
            line
        ));
    }

    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);

    lexer.line += matched.matches('\n').count() as u32;
    lexer.advance_n(matched.len());

    if matched.len() < 2 || !matched.ends_with('"') {
        lexer.error(ErrorImpl::UnterminatedString);
        return;
    }

    let contents = &matched[1..matched.len() - 1];
    let line = lexer.line;
    lexer.push(MK_TOKEN!(
        TokenKind::StringLiteral,
        matched.as_str(),
        Some(TypedValue::string(contents)),
        line
    ));
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = lexer.matched(regex);
    let kind = lexer
        .locale
        .keyword(&value)
        .unwrap_or(TokenKind::Identifier);
    let line = lexer.line;

    lexer.push(MK_TOKEN!(kind, value.as_str(), None, line));
    lexer.advance_n(value.len());
}

/// Scans `source` into tokens using the keyword table and decimal separator of `locale`.
///
/// Scanning never stops early: unsupported characters and unterminated
/// strings are recorded and skipped. The token list always ends with `EOF`.
pub fn tokenize(source: &str, file: Option<String>, locale: &Locale) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source.to_string(), file, *locale);
    let patterns = locale.patterns();

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in patterns.iter() {
            if pattern.regex.is_match(lex.remainder()) {
                (pattern.handler)(&mut lex, &pattern.regex);
                matched = true;
                break;
            }
        }

        if !matched {
            if let Some(character) = lex.at() {
                lex.error(ErrorImpl::UnsupportedCharacter { character });
                lex.advance_n(character.len_utf8());
            }
        }
    }

    let line = lex.line;
    lex.push(MK_TOKEN!(TokenKind::EOF, "", None, line));

    debug!(
        tokens = lex.tokens.len(),
        errors = lex.errors.len(),
        file = %lex.file,
        "tokenized"
    );

    (lex.tokens, lex.errors)
}
