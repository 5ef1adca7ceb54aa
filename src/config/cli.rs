/// CLI arguments parsed from command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Path to config file.
    pub config: Option<String>,
    /// Path to the issues export.
    pub input: Option<String>,
    /// Path to the generated backlog.
    pub output: Option<String>,
    /// Path to the run log.
    pub log_file: Option<String>,
    /// Suppress progress output.
    pub quiet: bool,
    /// Show help.
    pub help: bool,
    /// Show version.
    pub version: bool,
}

/// Parse CLI arguments from an iterator.
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    // Skip program name
    args.next();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-V" | "--version" => cli.version = true,
            "-q" | "--quiet" => cli.quiet = true,
            "-c" | "--config" => cli.config = args.next(),
            "-i" | "--input" => cli.input = args.next(),
            "-o" | "--output" => cli.output = args.next(),
            "--log-file" => cli.log_file = args.next(),
            _ => {} // Ignore unknown flags
        }
    }

    cli
}
