use std::process;

use lumbung::{
    repl::{MetaCommand, Statement, prepare_statement},
    storage::table::Table,
    types::error::DatabaseError,
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// The single abort boundary: environment failures terminate the
/// process after a diagnostic, everything else is reported and the
/// session continues.
fn die(err: DatabaseError) -> ! {
    eprintln!("Error: {err}");
    process::exit(1);
}

fn execute_statement(statement: Statement, table: &mut Table) {
    match statement {
        Statement::Insert(row) => match table.insert(&row) {
            Ok(()) => println!("Executed."),
            Err(DatabaseError::TableFull { .. }) => println!("Error: Table full."),
            Err(err) => die(err),
        },
        Statement::Select => {
            for row in table.rows() {
                match row {
                    Ok(row) => println!("{row}"),
                    Err(err) => die(err),
                }
            }
            println!("Executed.");
        }
    }
}

fn main() {
    let Some(filename) = std::env::args().nth(1) else {
        eprintln!("Must supply a database filename.");
        process::exit(1);
    };

    let mut table = match Table::open(&filename) {
        Ok(table) => table,
        Err(err) => die(err),
    };

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    loop {
        let line = match rl.readline("db > ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(input);

        if input.starts_with('.') {
            match MetaCommand::parse(input) {
                Some(MetaCommand::Exit) => break,
                None => println!("Unrecognized command '{input}'"),
            }
            continue;
        }

        match prepare_statement(input) {
            Ok(statement) => execute_statement(statement, &mut table),
            Err(err) => println!("{err}"),
        }
    }

    if let Err(err) = table.close() {
        die(err);
    }
}
