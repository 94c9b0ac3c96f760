use std::env::args_os;
use std::process::ExitCode;

use huffman_text_codec::{process_files, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match process_files(&arguments) {
        Ok(output_files) => {
            for output_file in output_files {
                println!("{}", output_file.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Processing failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
