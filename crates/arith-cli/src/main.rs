use std::io::{self, BufRead};
use std::path::Path;

use arith_eval::{evaluate, infix_to_postfix};
use arith_parser::Token;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arith")]
#[command(about = "arith — bounded integer arithmetic expression evaluator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a single expression and print its value
    Eval {
        /// Expression text, e.g. "(1+2)*3"
        expr: String,
    },

    /// Evaluate expressions line by line from a file, or stdin if omitted
    Run {
        /// Input file with one expression per line
        path: Option<String>,
    },

    /// Parse expressions for syntax errors without evaluating
    Check {
        /// Input file with one expression per line
        path: Option<String>,
    },

    /// Print the token sequence of an expression
    Tokens {
        /// Expression text, e.g. "(1+2)*3"
        expr: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Eval { expr } => cmd_eval(&expr),
        Command::Run { path } => cmd_run(path.as_deref()),
        Command::Check { path } => cmd_check(path.as_deref()),
        Command::Tokens { expr } => cmd_tokens(&expr),
    }
}

/// Full pipeline for one expression; both error taxonomies are rendered to
/// their display form, which is all the driver needs.
fn evaluate_line(expr: &str) -> Result<i16, String> {
    let tokens = arith_parser::Parser::parse(expr).map_err(|e| e.to_string())?;
    let postfix = infix_to_postfix(tokens);
    evaluate(&postfix).map_err(|e| e.to_string())
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn read_lines(path: Option<&str>) -> Vec<String> {
    match path {
        Some(path) => read_source(path).lines().map(str::to_string).collect(),
        None => io::stdin().lock().lines().map_while(Result::ok).collect(),
    }
}

fn cmd_eval(expr: &str) {
    match evaluate_line(expr) {
        Ok(value) => println!("{value}"),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}

fn cmd_run(path: Option<&str>) {
    let mut failed = false;

    // One result line per input line, value or error message.
    for line in read_lines(path) {
        if line.trim().is_empty() {
            continue;
        }
        match evaluate_line(&line) {
            Ok(value) => println!("{value}"),
            Err(message) => {
                println!("{message}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn cmd_check(path: Option<&str>) {
    let mut errors = 0usize;

    for (index, line) in read_lines(path).iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = arith_parser::Parser::parse(line) {
            eprintln!("line {}: {e}", index + 1);
            errors += 1;
        }
    }

    if errors > 0 {
        eprintln!("{errors} invalid expression(s)");
        std::process::exit(1);
    }
    eprintln!("OK");
}

fn cmd_tokens(expr: &str) {
    let tokens = match arith_parser::Parser::parse(expr) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    for token in &tokens {
        println!("{token}\t{}", describe(token));
    }
}

fn describe(token: &Token) -> &'static str {
    match token {
        Token::Operand(_) => "operand",
        Token::Operator(_) => "operator",
        Token::OpenParen => "opening scope",
        Token::CloseParen => "closing scope",
    }
}
