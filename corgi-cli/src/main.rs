use std::process;

use corgi_cli::{logging, run, Config, RunResult};

fn main() {
    let config = Config::new();
    logging::init(config.verbosity);

    if run(config) != RunResult::Ok {
        process::exit(1);
    }
}
