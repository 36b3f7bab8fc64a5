//! rasterlab command-line driver
//!
//! `rasterlab -file <script>` executes a script file; `rasterlab -text`
//! reads the instruction stream from stdin. Instruction diagnostics go to
//! stdout; argument and I/O failures go to stderr with a nonzero exit.

use rasterlab_script::{Dispatcher, ImageStore};
use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let input = match args.first().map(String::as_str) {
        Some("-file") => {
            let Some(path) = args.get(1) else {
                eprintln!("-file requires a script path");
                return usage();
            };
            match std::fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("failed to read script {path}: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        Some("-text") => {
            let mut contents = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut contents) {
                eprintln!("failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
            contents
        }
        _ => return usage(),
    };

    let mut store = ImageStore::new();
    let mut dispatcher = Dispatcher::new(&mut store, std::io::stdout());
    if let Err(e) = dispatcher.run(&input) {
        eprintln!("failed to write diagnostics: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn usage() -> ExitCode {
    eprintln!("usage: rasterlab -file <script> | rasterlab -text");
    ExitCode::FAILURE
}
