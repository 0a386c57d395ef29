use crate::ast::{ast::ExprId, expressions::Expr, types::Type};

/// Inferred types of a program's expressions, indexed by `ExprId`.
///
/// Each slot is written at most once, by the checker. The evaluator only
/// reads it.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    slots: Vec<Option<Type>>,
}

impl TypeTable {
    pub fn with_capacity(node_count: usize) -> Self {
        TypeTable {
            slots: vec![None; node_count],
        }
    }

    /// Records `ty` for `id`. Returns `false` if the slot was already written.
    pub fn assign(&mut self, id: ExprId, ty: Type) -> bool {
        if id.index() >= self.slots.len() {
            self.slots.resize(id.index() + 1, None);
        }

        let slot = &mut self.slots[id.index()];
        if slot.is_some() {
            return false;
        }

        *slot = Some(ty);
        true
    }

    pub fn get(&self, id: ExprId) -> Option<Type> {
        self.slots.get(id.index()).copied().flatten()
    }

    pub fn type_of(&self, expr: &Expr) -> Option<Type> {
        self.get(expr.id)
    }

    pub fn is_typed(&self, expr: &Expr) -> bool {
        self.type_of(expr).is_some()
    }

    /// Number of slots that hold a type.
    pub fn typed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
