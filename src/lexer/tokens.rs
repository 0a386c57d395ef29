use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::ast::values::TypedValue;

lazy_static! {
    pub static ref FRENCH_KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("Algorithme", TokenKind::Algorithm);
        map.insert("Variables", TokenKind::Variables);
        map.insert("Debut", TokenKind::Begin);
        map.insert("Fin", TokenKind::End);
        map.insert("Methode", TokenKind::Method);
        map.insert("Classe", TokenKind::Class);
        map.insert("si", TokenKind::If);
        map.insert("sinon", TokenKind::Else);
        map.insert("pour", TokenKind::For);
        map.insert("tant-que", TokenKind::While);
        map.insert("repeter", TokenKind::DoWhile);
        map.insert("vrai", TokenKind::True);
        map.insert("faux", TokenKind::False);
        map.insert("nil", TokenKind::Nil);
        map.insert("tableau", TokenKind::Table);
        map.insert("entier", TokenKind::IntegerType);
        map.insert("reel", TokenKind::RealType);
        map.insert("chaine_character", TokenKind::StringType);
        map.insert("ecrire", TokenKind::Print);
        map
    };
    pub static ref ENGLISH_KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("Algorithm", TokenKind::Algorithm);
        map.insert("Variables", TokenKind::Variables);
        map.insert("Begin", TokenKind::Begin);
        map.insert("End", TokenKind::End);
        map.insert("Method", TokenKind::Method);
        map.insert("Class", TokenKind::Class);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("until", TokenKind::While);
        map.insert("while", TokenKind::DoWhile);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Nil);
        map.insert("table", TokenKind::Table);
        map.insert("integer", TokenKind::IntegerType);
        map.insert("real", TokenKind::RealType);
        map.insert("string", TokenKind::StringType);
        map.insert("write", TokenKind::Print);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Indent,

    // Literals
    IntegerLiteral,
    DoubleLiteral,
    StringLiteral,
    Identifier,

    Comma,
    Semicolon,
    Colon,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,

    Assignment, // <-
    Equal,      // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Algorithm,
    Variables,
    Begin,
    End,
    Method,
    Class,
    If,
    Else,
    For,
    While,
    DoWhile,
    True,
    False,
    Nil,
    Table,
    IntegerType,
    RealType,
    StringType,
    Print,
}

impl TokenKind {
    /// Tokens that open a new statement or block; the parser resynchronises on them.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::Method
                | TokenKind::Variables
                | TokenKind::Algorithm
                | TokenKind::Begin
                | TokenKind::If
                | TokenKind::While
                | TokenKind::DoWhile
                | TokenKind::For
                | TokenKind::Print
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<TypedValue>,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {}", self.kind, self.lexeme),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }
}
