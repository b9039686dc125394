//! hboi - HBO-I professional tasks query tool
//!
//! Prints the professional tasks of the Open-ICT framework, optionally
//! narrowed by architecture layer, activity and level.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use competenties::vocabulary::{ACTIVITIES, LAYERS};
use competenties::{cli, Config, FilterCriteria, TASKS};

#[derive(Parser, Debug)]
#[command(
    name = "hboi",
    version,
    about = "Retrieve HBO-I professional tasks from the Open-ICT competency framework.",
    after_help = help_epilog()
)]
struct Cli {
    /// Filter by architecture layer
    #[arg(long)]
    layer: Option<String>,

    /// Filter by activity
    #[arg(long)]
    activity: Option<String>,

    /// Filter by level (1-4)
    #[arg(long, value_parser = cli::level_parser())]
    level: Option<String>,

    /// Directory containing hboi-nl.json
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log loading and filtering details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn help_epilog() -> String {
    cli::epilog(
        &[
            ("Architecture layers", LAYERS.values()),
            ("Activities", ACTIVITIES.values()),
        ],
        "hboi",
        &[
            "",
            "--layer \"Software\"",
            "--activity \"Ontwerpen\"",
            "--layer \"Software\" --activity \"Realiseren\"",
            "--layer \"Software\" --level 2",
            "--level 3",
        ],
    )
}

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => return cli::parse_failure(e),
    };

    let config = Config::new(args.data_dir, args.verbose);
    cli::init_tracing(&config);

    let criteria = FilterCriteria::new([args.layer, args.activity, args.level]);
    cli::finish(cli::run(&TASKS, &config, &criteria))
}
