use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// Build scripts can't access src/ modules, so the arguments are repeated here
fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=build.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("odtgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert LaTeX or Markdown dialect documents to OpenDocument text markup")
        .arg(
            Arg::new("input")
                .help("Input file path (reads stdin when omitted)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("markdown")
                .short('M')
                .long("markdown")
                .help("Parse the input as the Markdown dialect")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("FORMAT")
                .help("Source format")
                .value_parser(["latex", "markdown"])
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an odtgen.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("dump-ast")
                .long("dump-ast")
                .help("Write the parsed tree to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        );

    generate_to(Bash, &mut cmd, "odtgen", &outdir)?;
    generate_to(Zsh, &mut cmd, "odtgen", &outdir)?;
    generate_to(Fish, &mut cmd, "odtgen", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
