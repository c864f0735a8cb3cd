use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use corgi::errors::CompilationError;
use corgi::options::ParserOptions;
use corgi::utils::sexp::ToSexp;
use corgi::ParseError;
use std::fs;
use tracing::info;

pub mod logging;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width used when pretty-printing the syntax tree.
const AST_LINE_WIDTH: usize = 80;

pub struct Config {
    pub source_path: String,

    /// What to produce from the source file.
    pub target: Target,

    pub options: ParserOptions,

    /// Number of `-v` flags given.
    pub verbosity: u64,

    /// A flag for integration tests: this allows to better capture output. There is
    /// no way to set it through command-line.
    pub plaintext_compilation_errors: bool,
}

/// Expected result of running the tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Print the token sequence.
    Tokens,

    /// Print the syntax tree as an s-expression.
    Ast,

    /// Only report whether the program parses.
    Check,
}

impl Config {
    pub fn new() -> Config {
        let program = || {
            Arg::with_name("PROGRAM")
                .help("Path to the Corgi program")
                .required(true)
                .index(1)
        };

        let matches = App::new("corgi")
            .version(VERSION)
            .about("Front end tools for the Corgi language")
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .arg(
                Arg::with_name("strict-numbers")
                    .long("strict-numbers")
                    .help("Reject numbers with more than one fractional part")
                    .global(true),
            )
            .arg(
                Arg::with_name("verbose")
                    .short("v")
                    .long("verbose")
                    .multiple(true)
                    .help("Increase log verbosity (can be repeated)")
                    .global(true),
            )
            .subcommand(
                SubCommand::with_name("tokens")
                    .about("Prints the tokens of the program")
                    .arg(program()),
            )
            .subcommand(
                SubCommand::with_name("ast")
                    .about("Prints the syntax tree of the program")
                    .arg(program()),
            )
            .subcommand(
                SubCommand::with_name("check")
                    .about("Checks that the program parses")
                    .arg(program()),
            )
            .get_matches();

        let config_from_leaf_matches = |matches: &ArgMatches, target| Config {
            source_path: matches.value_of("PROGRAM").unwrap_or_default().to_string(),
            target,
            options: if matches.is_present("strict-numbers") {
                ParserOptions::strict()
            } else {
                ParserOptions::default()
            },
            verbosity: matches.occurrences_of("verbose"),
            plaintext_compilation_errors: false,
        };

        match matches.subcommand() {
            ("tokens", Some(matches)) => config_from_leaf_matches(matches, Target::Tokens),
            ("ast", Some(matches)) => config_from_leaf_matches(matches, Target::Ast),
            ("check", Some(matches)) => config_from_leaf_matches(matches, Target::Check),
            _ => unreachable!(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum RunResult {
    Ok,
    CompilerError,
}

/// Executes the requested tool on the program.
pub fn run(config: Config) -> RunResult {
    let source_code = match fs::read_to_string(&config.source_path) {
        Ok(source_code) => source_code,
        Err(error) => {
            eprintln!("Error while reading the source file:\n{}", error);
            return RunResult::CompilerError;
        }
    };
    info!(path = %config.source_path, bytes = source_code.len(), "loaded source");

    let result = match config.target {
        Target::Tokens => print_tokens(&source_code, &config.options),
        Target::Ast => corgi::parse_with(&source_code, &config.options)
            .map(|unit| println!("{}", unit.to_sexp().pretty_print(AST_LINE_WIDTH))),
        Target::Check => corgi::parse_with(&source_code, &config.options).map(|_| ()),
    };

    match result {
        Ok(()) => RunResult::Ok,
        Err(error) => {
            report_compilation_error(
                &config.source_path,
                &source_code,
                &CompilationError::from(&error),
                config.plaintext_compilation_errors,
            );
            RunResult::CompilerError
        }
    }
}

fn print_tokens(source_code: &str, options: &ParserOptions) -> Result<(), ParseError> {
    for token in corgi::tokenize_with(source_code, options) {
        println!("{}", token?);
    }
    Ok(())
}

fn report_compilation_error(
    file_name: &str,
    source_code: &str,
    error: &CompilationError,
    plaintext_stdout: bool,
) {
    if !plaintext_stdout {
        let mut files = SimpleFiles::new();
        let file_id = files.add(file_name, source_code);

        let writer = StandardStream::stderr(ColorChoice::Auto);
        let mut stream = writer.lock();
        let config = codespan_reporting::term::Config::default();

        let diagnostic = error.to_codespan(file_id);
        if let Err(error) = codespan_reporting::term::emit(&mut stream, &config, &files, &diagnostic)
        {
            eprintln!("Error while reporting a compilation error:\n{}", error);
        }
    } else {
        println!("{:?}", error);
    }
}
