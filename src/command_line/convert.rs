use std::io::{stdout, Write};

use crate::batch::write_lines;
use crate::command_line::prelude::*;

pub const NAME: &str = "convert";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Convert a single SD file and print its SMILES")
        .arg(Arg::new("sdf").required(true).long("sdf").num_args(1))
        .arg(
            Arg::new("output")
                .required(false)
                .short('o')
                .long("output")
                .num_args(1)
                .help("Write the SMILES here instead of stdout"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the full conversion result as JSON"),
        )
        .args(parse_option_args())
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let sdf = matches
        .get_one::<String>("sdf")
        .ok_or(eyre::eyre!("Failed to extract sdf path"))?;
    let output = matches.get_one::<String>("output").map(PathBuf::from);

    let converter = rdkit_converter(matches);
    let result = converter.convert_with_progress(sdf, |event| {
        log::debug!("{}: {}%", sdf, event.percent);
    })?;

    if let Some(output) = output {
        write_lines(&output, &result.succeeded)?;
        return Ok(());
    }

    let mut out = stdout().lock();
    if matches.get_flag("json") {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        for smiles in &result.succeeded {
            writeln!(out, "{}", smiles)?;
        }
    }

    Ok(())
}
