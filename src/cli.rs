use crate::batch::Mode;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_mode_argument(command);
        let command = Self::register_input_files_argument(command);
        let command = Self::register_output_directory_argument(command);
        Self::register_threads_argument(command)
    }

    fn register_mode_argument(command: Command) -> Command {
        command.arg(Self::create_mode_argument())
    }

    fn register_input_files_argument(command: Command) -> Command {
        command.arg(Self::create_input_files_argument())
    }

    fn register_output_directory_argument(command: Command) -> Command {
        command.arg(Self::create_output_directory_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_mode_argument() -> Arg {
        Arg::new("mode")
            .help("Whether to compress text files or decompress .huff archives")
            .value_parser(value_parser!(Mode))
            .required(true)
    }

    fn create_input_files_argument() -> Arg {
        Arg::new("input_files")
            .help("Paths to the files to process")
            .value_parser(value_parser!(PathBuf))
            .action(ArgAction::Append)
            .num_args(1..)
            .required(true)
    }

    fn create_output_directory_argument() -> Arg {
        arg!(output_directory: -o --output_directory <DIRECTORY> "Directory for the produced files")
            .default_value(".")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            mode: Self::extract_mode_argument(matches),
            input_files: Self::extract_input_files_argument(matches),
            output_directory: Self::extract_output_directory_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
        }
    }

    fn extract_mode_argument(matches: &ArgMatches) -> Mode {
        matches
            .get_one::<Mode>("mode")
            .expect("Required argument mode not provided")
            .to_owned()
    }

    fn extract_input_files_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("input_files")
            .expect("Required argument input_files not provided")
            .cloned()
            .collect()
    }

    fn extract_output_directory_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_directory")
            .expect("Output directory must be provided, but was unset.")
            .clone()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};
    use std::path::PathBuf;

    use super::{CLIParser, Mode};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_mode_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_mode_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "decompress"]);
        let mode = CLIParser::extract_mode_argument(&matches);
        assert_eq!(mode, Mode::Decompress);
    }

    #[test]
    fn parse_mode_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_mode_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "inflate"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for mode not detected");
        }
    }

    #[test]
    fn parse_input_files_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_files_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "first.txt", "second.txt"]);
        let input_files = CLIParser::extract_input_files_argument(&matches);
        assert_eq!(
            input_files,
            vec![PathBuf::from("first.txt"), PathBuf::from("second.txt")]
        );
    }

    #[test]
    fn parse_missing_input_files() {
        let command = Command::new("test");
        let command = CLIParser::register_input_files_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        } else {
            panic!("Missing input files not detected");
        }
    }

    #[test]
    fn parse_output_directory_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_output_directory_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-o", "/tmp/out"]);
        let output_directory = CLIParser::extract_output_directory_argument(&matches);
        assert_eq!(output_directory, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn parse_number_of_threads_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threads_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--threads", "5"]);
        let actual = CLIParser::extract_threads_argument(&matches);
        let expected = 5;
        assert_eq!(actual, expected);
    }

    #[test]
    fn parse_required_arguments_only() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, "compress", "notes.txt"]);
        assert_eq!(arguments.mode, Mode::Compress, "mode does not match");
        assert_eq!(
            arguments.input_files,
            vec![PathBuf::from("notes.txt")],
            "input files do not match"
        );
        assert_eq!(
            arguments.output_directory,
            PathBuf::from("."),
            "output directory does not match"
        );
        assert!(
            arguments.number_of_threads >= 1,
            "number_of_threads must be positive"
        );
    }
}
