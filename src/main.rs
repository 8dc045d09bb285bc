use clap::error::ErrorKind;
use clap::Parser as _;
use markdown2html::{classify, io, render, Error, Options};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "Usage: markdown2html README.md README.html";

/// Convert a Markdown file to HTML
#[derive(Debug, clap::Parser)]
#[command(author, version, about, override_usage = "markdown2html README.md README.html")]
struct Cli {
    /// Markdown file to read
    input: PathBuf,

    /// HTML file to write (overwritten)
    output: PathBuf,

    /// Close an open list of the other kind before starting a new list
    #[arg(long, env = "MARKDOWN2HTML_STRICT_LISTS")]
    strict_lists: bool,

    /// Strip exactly one `((`/`[[` and `))`/`]]` around bracket syntax
    #[arg(long, env = "MARKDOWN2HTML_EXACT_DELIMITERS")]
    exact_delimiters: bool,

    /// Print the classified lines as JSON to stdout
    #[arg(long)]
    dump_blocks: bool,

    /// Positional arguments past the output file are ignored
    #[arg(num_args = 0.., trailing_var_arg = true, hide = true)]
    extra: Vec<OsString>,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            strict_lists: self.strict_lists,
            exact_delimiters: self.exact_delimiters,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            log::debug!("argument error: {:?}", err.kind());
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = cli.options();
    log::debug!(
        "converting {} -> {} ({:?})",
        cli.input.display(),
        cli.output.display(),
        options
    );

    if !cli.extra.is_empty() {
        log::debug!("ignoring {} extra arguments: {:?}", cli.extra.len(), cli.extra);
    }

    let lines = io::read_lines(&cli.input)?;
    let blocks = classify(&lines, options);
    io::write_fragments(&cli.output, &render(&blocks, options))?;

    if cli.dump_blocks {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    }

    Ok(())
}
