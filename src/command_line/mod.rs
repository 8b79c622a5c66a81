pub mod batch;
pub mod convert;
pub mod rest_api_server;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::conversion::{BatchConverter, RdkitSmilesEncoder};
use crate::sdf::{ParseOptions, SdfSource};

pub mod prelude {
    pub use std::path::PathBuf;

    pub use clap::{Arg, ArgAction, ArgMatches, Command};

    pub use super::{parse_option_args, parse_options, rdkit_converter};
}

pub fn cli() -> Command {
    Command::new("sdf2smiles")
        .about("Convert SDF molecule records to SMILES")
        .subcommand(batch::command())
        .subcommand(convert::command())
        .subcommand(rest_api_server::command())
}

/// Without a subcommand the batch sweep runs with its defaults.
pub async fn dispatch(matches: &ArgMatches) -> eyre::Result<()> {
    match matches.subcommand() {
        Some((batch::NAME, args)) => batch::action(args),
        Some((convert::NAME, args)) => convert::action(args),
        Some((rest_api_server::NAME, args)) => rest_api_server::action(args).await,
        Some((other, _args)) => Err(eyre::eyre!("can't handle {}", other)),
        None => {
            let args = batch::command().try_get_matches_from([batch::NAME])?;
            batch::action(&args)
        }
    }
}

/// RDKit parser flags shared by every subcommand.
pub fn parse_option_args() -> Vec<Arg> {
    vec![
        Arg::new("no-sanitize")
            .long("no-sanitize")
            .action(ArgAction::SetTrue)
            .help("Skip RDKit sanitization of each record"),
        Arg::new("keep-hs")
            .long("keep-hs")
            .action(ArgAction::SetTrue)
            .help("Keep explicit hydrogens"),
        Arg::new("lenient")
            .long("lenient")
            .action(ArgAction::SetTrue)
            .help("Turn off strict mol block parsing"),
    ]
}

pub fn parse_options(matches: &ArgMatches) -> ParseOptions {
    ParseOptions {
        sanitize: !matches.get_flag("no-sanitize"),
        remove_hs: !matches.get_flag("keep-hs"),
        strict_parsing: !matches.get_flag("lenient"),
    }
}

pub fn rdkit_converter(matches: &ArgMatches) -> BatchConverter<SdfSource, RdkitSmilesEncoder> {
    BatchConverter::new(SdfSource::new(parse_options(matches)), RdkitSmilesEncoder)
}
