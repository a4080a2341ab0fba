extern crate quotefix;

use quotefix::{logger, normalize_with, Options, Summary, TARGET_PATH};
use structopt::{clap::AppSettings, StructOpt};
use tracing::error;

#[derive(StructOpt, Debug)]
#[structopt(name = "quotefix", setting = AppSettings::TrailingVarArg)]
/// Replaces curly quotes in the page template with straight ones.
struct Opt {
    #[structopt(short = "v", parse(from_occurrences))]
    /// Verbosity of output.
    verbose: usize,

    /// Reports how many quotes would be fixed instead of fixing them.
    #[structopt(long)]
    dry_run: bool,

    /// Anything else on the command line. The target is always the same page, so it's ignored.
    #[structopt(hidden = true)]
    _rest: Vec<String>,
}

/// The line printed once a run succeeds.
fn report(summary: &Summary) -> String {
    if summary.written {
        return "All quotes fixed".to_owned();
    }
    match summary.counts.total() {
        1 => "Dry run: 1 quote would be fixed".to_owned(),
        n => format!("Dry run: {} quotes would be fixed", n),
    }
}

fn main() {
    let Opt {
        verbose, dry_run, ..
    } = Opt::from_args();
    logger::init_cli_logger(verbose);

    match normalize_with(TARGET_PATH, Options { dry_run }) {
        Ok(summary) => println!("{}", report(&summary)),
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
