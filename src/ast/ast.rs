use std::{rc::Rc, slice::Iter};

use super::statements::Stmt;

/// Identity of an expression node inside one parsed program.
///
/// Ids are handed out densely from zero by the parser, so they double as
/// indices into side tables such as the checker's `TypeTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub usize);

impl ExprId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A parsed program: the ordered top-level statements plus the number of
/// expression nodes allocated while parsing them.
#[derive(Debug, Clone)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub node_count: usize,
    pub file: Rc<String>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
