use crate::{
    ast::{
        ast::ExprId,
        expressions::{Expr, ExprKind},
        types::{AtomicTypeTag, Type},
        values::{TypedValue, Value},
    },
    lexer::tokens::{Token, TokenKind},
};

#[test]
fn test_atomic_types_are_interned() {
    for tag in AtomicTypeTag::ALL {
        let (Type::Atomic(first), Type::Atomic(second)) = (Type::atomic(tag), Type::atomic(tag));
        assert!(std::ptr::eq(first, second), "{:?} is not a singleton", tag);
        assert_eq!(first.tag(), tag);
    }
}

#[test]
fn test_type_names() {
    assert_eq!(Type::integer().to_string(), "integer");
    assert_eq!(Type::floating().to_string(), "real");
    assert_eq!(Type::string().name(), "string");
    assert_eq!(Type::char().name(), "char");
    assert_eq!(Type::boolean().name(), "boolean");
    assert_eq!(Type::void().name(), "nil");
}

#[test]
fn test_zero_values() {
    assert_eq!(*Type::integer().zero_value(), TypedValue::integer(0));
    assert_eq!(*Type::floating().zero_value(), TypedValue::floating(0.0));
    assert_eq!(*Type::string().zero_value(), TypedValue::string(""));
    assert_eq!(*Type::char().zero_value(), TypedValue::char('\0'));
    assert_eq!(*Type::boolean().zero_value(), TypedValue::boolean(false));
    assert_eq!(*Type::void().zero_value(), TypedValue::nil());

    for tag in AtomicTypeTag::ALL {
        assert_eq!(Type::atomic(tag).zero_value().tag(), tag);
    }
}

#[test]
fn test_type_predicates() {
    assert!(Type::integer().is_numeric());
    assert!(Type::floating().is_numeric());
    assert!(!Type::string().is_numeric());
    assert!(Type::boolean().is(AtomicTypeTag::Boolean));
    assert_ne!(Type::integer(), Type::floating());
    assert_eq!(TypedValue::floating(2.0).get_type(), Type::floating());
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Integer(-7).to_string(), "-7");
    assert_eq!(Value::Floating(2.0).to_string(), "2");
    assert_eq!(Value::Floating(1.5).to_string(), "1.5");
    assert_eq!(Value::Floating(-0.25).to_string(), "-0.25");
    assert_eq!(Value::Floating(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Value::Floating(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::Floating(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::String("abc".to_string()).to_string(), "abc");
    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::Nil.to_string(), "nil");
}

#[test]
fn test_large_and_small_reals_use_exponent_notation() {
    assert_eq!(Value::Floating(1234567.0).to_string(), "1234567");
    assert_eq!(Value::Floating(0.001).to_string(), "0.001");
    assert_eq!(Value::Floating(1e7).to_string(), "1.0E7");
    assert_eq!(Value::Floating(1e16).to_string(), "1.0E16");
    assert_eq!(Value::Floating(-2.5e20).to_string(), "-2.5E20");
    assert_eq!(Value::Floating(1.5e-5).to_string(), "1.5E-5");
    assert_eq!(Value::Floating(0.0).to_string(), "0");
    assert_eq!(Value::Floating(-0.0).to_string(), "-0");
}

#[test]
fn test_typed_value_keeps_tag() {
    let value = TypedValue::floating(3.0);

    assert_eq!(value.tag(), AtomicTypeTag::Floating);
    assert_eq!(value.to_string(), "3");
    assert_eq!(value.into_value(), Value::Floating(3.0));
}

#[test]
fn test_walk_post_order() {
    let literal = |id, value| Expr {
        id: ExprId(id),
        kind: ExprKind::Literal(TypedValue::integer(value)),
        line: 1,
    };
    let tree = Expr {
        id: ExprId(3),
        kind: ExprKind::Binary {
            left: Box::new(literal(0, 1)),
            operator: Token::new(TokenKind::Plus, "+", 1),
            right: Box::new(Expr {
                id: ExprId(2),
                kind: ExprKind::Grouping(Box::new(literal(1, 2))),
                line: 1,
            }),
        },
        line: 1,
    };

    let mut visited = vec![];
    tree.walk_post_order(&mut |expr| visited.push(expr.id.index()));

    assert_eq!(visited, vec![0, 1, 2, 3]);
}
