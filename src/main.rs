use std::{
    env,
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use callscript::{compile_with_file, display_error};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> ExitCode {
    // Logs go to stderr, stdout carries the generated code. RUST_LOG overrides the level
    if let Err(err) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("Failed to initialise logger: {}", err);
    }

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [FILE]", args[0]);
        return ExitCode::from(2);
    }

    let (source, file_name) = match args.get(1) {
        Some(file_path) => {
            let path = PathBuf::from(file_path);
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| file_path.clone());

            match read_to_string(&path) {
                Ok(contents) => (contents, Some(file_name)),
                Err(err) => {
                    eprintln!("Failed to read {}: {}", path.display(), err);
                    return ExitCode::from(2);
                }
            }
        }
        None => {
            let mut contents = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut contents) {
                eprintln!("Failed to read stdin: {}", err);
                return ExitCode::from(2);
            }
            (contents, None)
        }
    };

    match compile_with_file(&source, file_name) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", display_error(&err, &source));
            ExitCode::FAILURE
        }
    }
}
