use crate::lexer::tokens::Token;

use super::{ast::ExprId, values::TypedValue};

/// Expression node. The node's inferred type lives in the checker's
/// `TypeTable`, keyed by `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub id: ExprId,
    pub kind: ExprKind,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `left <operator> right`
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// `( expression )`
    Grouping(Box<Expr>),
    /// `<operator> right`
    Unary { operator: Token, right: Box<Expr> },
    /// A literal boxed at scan or parse time.
    Literal(TypedValue),
}

impl Expr {
    /// Calls `visit` on this node and every descendant, children first.
    pub fn walk_post_order(&self, visit: &mut impl FnMut(&Expr)) {
        match &self.kind {
            ExprKind::Binary { left, right, .. } => {
                left.walk_post_order(visit);
                right.walk_post_order(visit);
            }
            ExprKind::Grouping(inner) => inner.walk_post_order(visit),
            ExprKind::Unary { right, .. } => right.walk_post_order(visit),
            ExprKind::Literal(_) => {}
        }

        visit(self);
    }
}
