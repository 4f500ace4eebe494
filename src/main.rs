use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use log::{error, info, LevelFilter};

use compiler_frontend::{
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
    type_checker::{type_check, CheckerConfig},
};

#[derive(Parser)]
#[command(name = "compiler_frontend")]
#[command(about = "Lexes, parses and type checks a source file", long_about = None)]
struct Cli {
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Also run the standalone control-flow validation pass
    #[arg(long)]
    control_flow: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let file_name = cli.file.to_string_lossy().to_string();
    let module_name = cli
        .file
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.clone());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(io_error) => {
            error!("failed to read `{}`: {}", file_name, io_error);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let tokens = tokenize(&source, &file_name);
    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let mut module = match parse(tokens, &module_name) {
        Ok(module) => module,
        Err(parse_error) => {
            display_errors(&[parse_error], &source, &file_name);
            process::exit(1);
        }
    };
    info!("Parsed in {:?}", parse_start.elapsed());

    let type_check_start = Instant::now();
    let config = CheckerConfig {
        validate_control_flow: cli.control_flow,
    };
    let context = type_check(&mut module, &config);
    info!("Type checked in {:?}", type_check_start.elapsed());

    if context.has_errors() {
        display_errors(context.get_errors(), &source, &file_name);
        process::exit(1);
    }

    info!("Total time: {:?}", start.elapsed());
    println!(
        "{}: {} function(s) checked, no errors",
        file_name,
        module.declarations.len()
    );
}

fn display_errors(errors: &[Error], source: &str, file_name: &str) {
    for error in errors {
        eprintln!("{}", error);
        eprint!("{}", render_error(error, source, file_name));
    }
}
