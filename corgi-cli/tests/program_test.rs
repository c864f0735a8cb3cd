use test_generator::test_resources;

use corgi::options::ParserOptions;
use corgi_cli::{Config, RunResult, Target};

#[test_resources("corgi-cli/tests/samples/good/*.corgi")]
fn check_good_program(path: &str) {
    assert_eq!(run(path, Target::Check), RunResult::Ok);
    assert_eq!(run(path, Target::Ast), RunResult::Ok);
    assert_eq!(run(path, Target::Tokens), RunResult::Ok);
}

#[test_resources("corgi-cli/tests/samples/compile_error/*.corgi")]
fn check_compile_error_program(path: &str) {
    assert_eq!(run(path, Target::Check), RunResult::CompilerError);
}

fn run(path: &str, target: Target) -> RunResult {
    let config = Config {
        source_path: strip_crate_name(path),
        target,
        options: ParserOptions::default(),
        verbosity: 0,
        plaintext_compilation_errors: true,
    };
    corgi_cli::run(config)
}

// Because of how [test_resources] works with workspaces, the compilation working directory
// is different from the runtime working directory (first is workspace, second is crate).
// This is why we need to strip the first part from the test path.
fn strip_crate_name(path: &str) -> String {
    let parts: Vec<String> = path.split('/').skip(1).map(String::from).collect();
    parts.join("/")
}
