use std::{io::Write, rc::Rc};

use tracing::debug;

use crate::{
    ast::{ast::Program, values::Value},
    errors::errors::{Error, ErrorImpl},
    type_checker::type_table::TypeTable,
    Position,
};

use super::{expr::Evaluator, stmt::execute_stmt};

/// Runs checked programs and writes printed lines to `out`.
pub struct Interpreter<W: Write> {
    out: W,
    echo: bool,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Interpreter { out, echo: false }
    }

    /// When enabled, the value of every expression statement is printed too.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn echoes(&self) -> bool {
        self.echo
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Writes one line holding the display text of `value`.
    pub fn emit(&mut self, value: &Value, position: Position) -> Result<(), Error> {
        writeln!(self.out, "{}", value).map_err(|error| {
            Error::new(
                ErrorImpl::OutputError {
                    message: error.to_string(),
                },
                position,
            )
        })
    }

    /// Executes every statement of a program whose types are in `types`.
    ///
    /// The program must have passed `type_check`. Execution stops at the
    /// first runtime error; lines already written stay written.
    pub fn execute(&mut self, program: &Program, types: &TypeTable) -> Result<Vec<Value>, Error> {
        let file = Rc::clone(&program.file);
        let evaluator = Evaluator::new(types, Rc::clone(&file));
        let mut values = Vec::with_capacity(program.len());

        for stmt in program.iter() {
            values.push(execute_stmt(self, &evaluator, stmt, &file)?);
        }

        self.out.flush().map_err(|error| {
            Error::new(
                ErrorImpl::OutputError {
                    message: error.to_string(),
                },
                Position(0, Rc::clone(&file)),
            )
        })?;

        debug!(statements = values.len(), "executed");
        Ok(values)
    }
}
