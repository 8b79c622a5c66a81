mod common;

use common::{tempdir, write_file, MOL_BLOCK};
use sdf2smiles::command_line::{self, convert, parse_options};

#[test]
fn test_convert_to_output_file() -> eyre::Result<()> {
    let dir = tempdir("cli-tests-");
    let sdf = write_file(dir.path(), "mols.sdf", &format!("{}$$$$\n", MOL_BLOCK));
    let output = dir.path().join("mols.txt");
    let sdf_arg = sdf.display().to_string();
    let output_arg = output.display().to_string();

    let matches = convert::command().try_get_matches_from([
        "convert",
        "--sdf",
        sdf_arg.as_str(),
        "--output",
        output_arg.as_str(),
    ])?;
    convert::action(&matches)?;

    assert_eq!(
        std::fs::read_to_string(&output)?,
        "CC(=O)OC(CC(=O)[O-])C[N+](C)(C)C\n"
    );

    Ok(())
}

#[test]
fn test_convert_missing_file_fails() -> eyre::Result<()> {
    let dir = tempdir("cli-tests-");
    let missing = dir.path().join("missing.sdf").display().to_string();

    let matches = convert::command().try_get_matches_from(["convert", "--sdf", missing.as_str()])?;

    assert!(convert::action(&matches).is_err());

    Ok(())
}

#[test]
fn test_subcommands_parse() -> eyre::Result<()> {
    let matches = command_line::cli().try_get_matches_from([
        "sdf2smiles",
        "batch",
        "--input-dir",
        "/data/sdf",
        "--yes",
        "--keep-hs",
    ])?;

    let (name, args) = matches
        .subcommand()
        .ok_or(eyre::eyre!("expected a subcommand"))?;
    assert_eq!(name, "batch");
    assert_eq!(
        args.get_one::<String>("input-dir").map(String::as_str),
        Some("/data/sdf")
    );
    assert!(args.get_flag("yes"));
    assert!(!parse_options(args).remove_hs);

    let matches = command_line::cli().try_get_matches_from([
        "sdf2smiles",
        "rest-api-server",
        "spec",
        "-o",
        "x.json",
    ])?;
    assert_eq!(
        matches.subcommand().map(|(name, _)| name),
        Some("rest-api-server")
    );

    Ok(())
}
