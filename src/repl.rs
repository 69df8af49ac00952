use thiserror::Error;

use crate::types::{EMAIL_MAX_LEN, USERNAME_MAX_LEN, error::DatabaseError, row::Row};

/// Non-statement input starting with `.` is a meta-command.
#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
}

impl MetaCommand {
    pub fn parse(input: &str) -> Option<MetaCommand> {
        match input {
            ".exit" => Some(MetaCommand::Exit),
            _ => None,
        }
    }
}

/// A validated statement, ready to execute against the table.
#[derive(Debug, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

/// Statement-preparation failures. The `Display` strings are the
/// user-facing messages printed by the session loop.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrepareError {
    #[error("ID must be positive.")]
    NegativeId,

    #[error("String is too long.")]
    StringTooLong,

    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,

    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedStatement(String),
}

/// Tokenize and validate one line of input. `insert` takes exactly an
/// id, a username and an email (extra trailing tokens are ignored);
/// `select` takes nothing.
pub fn prepare_statement(input: &str) -> Result<Statement, PrepareError> {
    if input.starts_with("insert") {
        return prepare_insert(input);
    }
    if input == "select" {
        return Ok(Statement::Select);
    }
    Err(PrepareError::UnrecognizedStatement(input.to_string()))
}

fn prepare_insert(input: &str) -> Result<Statement, PrepareError> {
    let mut tokens = input.split_whitespace();
    let _keyword = tokens.next();
    let id_string = tokens.next().ok_or(PrepareError::SyntaxError)?;
    let username = tokens.next().ok_or(PrepareError::SyntaxError)?;
    let email = tokens.next().ok_or(PrepareError::SyntaxError)?;

    let id: i64 = id_string.parse().map_err(|_| PrepareError::SyntaxError)?;
    if id < 0 {
        return Err(PrepareError::NegativeId);
    }
    if username.len() > USERNAME_MAX_LEN || email.len() > EMAIL_MAX_LEN {
        return Err(PrepareError::StringTooLong);
    }

    match Row::new(id as u32, username, email) {
        Ok(row) => Ok(Statement::Insert(row)),
        Err(DatabaseError::ValueTooLong { .. }) => Err(PrepareError::StringTooLong),
        Err(_) => Err(PrepareError::SyntaxError),
    }
}
