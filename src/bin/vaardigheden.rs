//! vaardigheden - student skills query tool
//!
//! Prints the student skills of the Open-ICT framework, optionally narrowed
//! by skill and level.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use competenties::vocabulary::SKILLS as SKILL_NAMES;
use competenties::{cli, Config, FilterCriteria, SKILLS};

#[derive(Parser, Debug)]
#[command(
    name = "vaardigheden",
    version,
    about = "Retrieve student skills from the Open-ICT competency framework.",
    after_help = help_epilog()
)]
struct Cli {
    /// Filter by skill name
    #[arg(long)]
    skill: Option<String>,

    /// Filter by level (1-4)
    #[arg(long, value_parser = cli::level_parser())]
    level: Option<String>,

    /// Directory containing vaardigheden-nl.json
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log loading and filtering details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn help_epilog() -> String {
    cli::epilog(
        &[("Valid skills", SKILL_NAMES.values())],
        "vaardigheden",
        &[
            "",
            "--skill \"Samenwerken\"",
            "--skill \"Samenwerken\" --level 2",
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

    let criteria = FilterCriteria::new([args.skill, args.level]);
    cli::finish(cli::run(&SKILLS, &config, &criteria))
}
