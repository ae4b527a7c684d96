use std::{env, process, time::Instant};

use four_rule::{display_error, lexer::lexer::tokenize, parser::parser::parse};

const DEFAULT_SOURCE: &str = "2 + 5 * 2 - 3";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        println!("Usage: {} [EXPRESSION]", args[0]);
        process::exit(2);
    }

    let source = args.get(1).map_or(DEFAULT_SOURCE, String::as_str);

    let start = Instant::now();
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error);
            process::exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = match parse(&tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error);
            process::exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    for stmt in &program {
        println!("{}", stmt);
    }
}
