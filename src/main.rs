use std::env;
use std::process;

use backlog::color;
use backlog::config::{self, Config, DEFAULT_CONFIG_FILE, DEFAULT_INPUT, DEFAULT_OUTPUT};
use backlog::BacklogGenerator;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = config::parse_args(args);

    if cli.help {
        print_help();
        return;
    }

    if cli.version {
        println!("backlog {}", VERSION);
        return;
    }

    let result = Config::load(&cli)
        .map_err(backlog::BacklogError::from)
        .and_then(|config| BacklogGenerator::new(config).run());

    if let Err(e) = result {
        eprintln!("{}", color::error(&format!("error: {}", e)));
        process::exit(1);
    }
}

fn print_help() {
    println!(
        r#"backlog - generate a Markdown backlog from a GitHub issues export

USAGE:
    backlog [OPTIONS]

OPTIONS:
    -h, --help              Show this help message
    -V, --version           Show version
    -c, --config <PATH>     Path to config file (default: {config})
    -i, --input <PATH>      Issues export, a JSON array (default: {input})
    -o, --output <PATH>     Generated backlog (default: {output})
    --log-file <PATH>       Append a run log to this file
    -q, --quiet             Only print the final status line

ENVIRONMENT:
    BACKLOG_INPUT           Same as --input
    BACKLOG_OUTPUT          Same as --output
    BACKLOG_LOG_FILE        Same as --log-file (empty disables)

CONFIG FILE:
{toml}"#,
        config = DEFAULT_CONFIG_FILE,
        input = DEFAULT_INPUT,
        output = DEFAULT_OUTPUT,
        toml = Config::default_toml()
    );
}
