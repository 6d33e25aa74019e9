use std::{env, fs::read_to_string, process, time::Instant};

use mizu::{ast::ast::Node, display_error, lexer::lexer::Tokenizer, parser::parser::Parser};

const SAMPLE_SOURCE: &str = "const x int64 = 314";

fn main() {
    let mut show_tokens = false;
    let mut file_path: Option<String> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tokens" | "-t" => show_tokens = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                eprintln!("Usage: mizu [FILE] [--tokens]");
                process::exit(1);
            }
            _ => file_path = Some(arg),
        }
    }

    let (source, file_name) = match file_path {
        Some(path) => match read_to_string(&path) {
            Ok(contents) => {
                let file_name = path.rsplit('/').next().unwrap_or(&path).to_string();
                (contents, Some(file_name))
            }
            Err(error) => {
                eprintln!("Failed to read {}: {}", path, error);
                process::exit(1);
            }
        },
        None => {
            show_tokens = true;
            (String::from(SAMPLE_SOURCE), None)
        }
    };

    let start = Instant::now();
    let mut tokenizer = Tokenizer::new(source.clone(), file_name.clone());
    tokenizer.lex();
    let tokenize_time = start.elapsed();

    if show_tokens {
        for token in tokenizer.tokens() {
            println!("{}", token);
        }
        println!("-----------------------------------");
    }

    println!("Tokenized in {:?}", tokenize_time);

    let tokenizer = Tokenizer::new(source.clone(), file_name);
    let file = tokenizer.file();

    let parse_start = Instant::now();
    let program = Parser::new(tokenizer).parse_program();

    println!("Parsed in {:?}", parse_start.elapsed());

    for error in &program.errors {
        display_error(error, &source, &file);
    }

    print!("{}", program.literal());

    if program.has_errors() {
        process::exit(1);
    }
}
