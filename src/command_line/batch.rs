use std::io::{stdin, stdout};

use crate::batch::console::{Console, ConsoleOptions, ConsoleOutcome};
use crate::batch::{BatchConfig, DirectoryDriver};
use crate::command_line::prelude::*;

pub const NAME: &str = "batch";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Convert every SDF file in a directory, one .txt of SMILES per file")
        .arg(
            Arg::new("input-dir")
                .required(false)
                .long("input-dir")
                .short('i')
                .num_args(1)
                .help("Defaults to sdf/ next to the executable"),
        )
        .arg(
            Arg::new("output-dir")
                .required(false)
                .long("output-dir")
                .short('o')
                .num_args(1)
                .help("Defaults to out/ next to the executable"),
        )
        .arg(
            Arg::new("yes")
                .long("yes")
                .short('y')
                .action(ArgAction::SetTrue)
                .help("Do not ask for confirmation"),
        )
        .arg(
            Arg::new("no-wait")
                .long("no-wait")
                .action(ArgAction::SetTrue)
                .help("Exit without waiting for a key press"),
        )
        .args(parse_option_args())
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let defaults = BatchConfig::beside_executable()?;
    let input_dir = matches
        .get_one::<String>("input-dir")
        .map(PathBuf::from)
        .unwrap_or(defaults.input_dir);
    let output_dir = matches
        .get_one::<String>("output-dir")
        .map(PathBuf::from)
        .unwrap_or(defaults.output_dir);

    let options = ConsoleOptions {
        assume_yes: matches.get_flag("yes"),
        wait_for_key: !matches.get_flag("no-wait"),
    };

    log::info!(
        "batch input_dir={}, output_dir={}, options={:?}",
        input_dir.display(),
        output_dir.display(),
        options
    );

    let driver = DirectoryDriver::new(
        BatchConfig::new(input_dir, output_dir),
        rdkit_converter(matches),
    );

    let mut console = Console::new(stdin().lock(), stdout().lock(), options);
    match console.run(&driver)? {
        ConsoleOutcome::Completed(summary) => log::debug!(
            "{} files converted, {} failed",
            summary.succeeded(),
            summary.failed()
        ),
        outcome => log::debug!("batch ended early: {:?}", outcome),
    }

    Ok(())
}
