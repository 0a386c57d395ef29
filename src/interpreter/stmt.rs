use std::{io::Write, rc::Rc};

use crate::{ast::statements::Stmt, ast::values::Value, errors::errors::Error, Position};

use super::{expr::Evaluator, interpreter::Interpreter};

pub fn execute_stmt<W: Write>(
    interpreter: &mut Interpreter<W>,
    evaluator: &Evaluator,
    stmt: &Stmt,
    file: &Rc<String>,
) -> Result<Value, Error> {
    match stmt {
        Stmt::Expression(expression) => {
            let value = evaluator.evaluate(expression)?;
            if interpreter.echoes() {
                interpreter.emit(&value, Position(expression.line, Rc::clone(file)))?;
            }
            Ok(value)
        }
        Stmt::Print {
            keyword,
            expression,
        } => {
            let value = evaluator.evaluate(expression)?;
            interpreter.emit(&value, Position(keyword.line, Rc::clone(file)))?;
            Ok(value)
        }
    }
}
