// Command-line interface for odtgen
//
// Reads a document written in the LaTeX or Markdown dialect and writes the
// body of an OpenDocument text file.
//
// Usage:
//  odtgen [INPUT] [-o FILE]                 - Convert, dialect detected from the extension
//  odtgen -M [INPUT]                        - Force the Markdown dialect
//  odtgen --from latex < doc.tex            - Read from stdin with an explicit dialect
//  odtgen doc.tex --dump-ast                - Also write the tree dump to stderr
//
// Without INPUT the source is read from stdin. Diagnostics go to stderr,
// stdout carries only the converted markup.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use odtgen_babel::external::{CommandHighlighter, FsSourceLoader};
use odtgen_babel::formats::treeviz::to_treeviz_str;
use odtgen_babel::formats::{LatexFormat, MarkdownFormat};
use odtgen_babel::FormatRegistry;
use odtgen_config::{Loader, OdtgenConfig, PROJECT_FILE};
use std::fs;
use std::io::{self, Read};
use std::process;

const DEFAULT_DIALECT: &str = "latex";
const OUTPUT_FORMAT: &str = "odt";

fn build_cli() -> Command {
    Command::new("odtgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert LaTeX or Markdown dialect documents to OpenDocument text markup")
        .long_about(
            "odtgen converts a document written in a small LaTeX dialect or a small\n\
            Markdown dialect into OpenDocument text body markup.\n\n\
            The dialect is taken from --from, then -M, then the input file extension,\n\
            falling back to latex.\n\n\
            Examples:\n  \
            odtgen doc.tex                   # Convert to stdout\n  \
            odtgen notes.md -o notes.fodt    # Markdown to a file\n  \
            odtgen -M < notes.txt            # Markdown from stdin\n  \
            odtgen doc.tex --dump-ast        # Also dump the tree to stderr",
        )
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
                .help("Source format (overrides -M and extension detection)")
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
        )
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let matches = build_cli().get_matches();
    init_logger(matches.get_count("verbose"));

    let config = load_cli_config(&matches);
    let registry = build_registry(&config);

    let input = matches.get_one::<String>("input").map(String::as_str);
    let from = select_dialect(&registry, &matches, input);
    log::debug!("converting {} as {from}", input.unwrap_or("<stdin>"));

    let source = read_source(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {e}", input.unwrap_or("<stdin>"));
        process::exit(1);
    });

    let doc = registry.parse(&source, &from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        process::exit(1);
    });

    if config.inspect.dump_ast {
        eprint!("{}", to_treeviz_str(&doc));
    }

    let markup = registry.serialize(&doc, OUTPUT_FORMAT).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        process::exit(1);
    });

    match matches.get_one::<String>("output") {
        Some(path) => fs::write(path, markup).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            process::exit(1);
        }),
        None => print!("{markup}"),
    }
}

fn read_source(input: Option<&str>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn select_dialect(registry: &FormatRegistry, matches: &ArgMatches, input: Option<&str>) -> String {
    if let Some(from) = matches.get_one::<String>("from") {
        return from.clone();
    }
    if matches.get_flag("markdown") {
        return "markdown".to_string();
    }
    input
        .and_then(|path| registry.detect_format_from_filename(path))
        .filter(|name| {
            registry
                .get(name)
                .is_ok_and(|format| format.supports_parsing())
        })
        .unwrap_or_else(|| DEFAULT_DIALECT.to_string())
}

fn build_registry(config: &OdtgenConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(LatexFormat::new(FsSourceLoader::new((&config.latex).into())));

    let highlight = &config.markdown.highlight;
    let markdown = if highlight.enabled {
        let highlighter = CommandHighlighter::new(highlight.into());
        if highlighter.is_available() {
            MarkdownFormat::with_highlighter(highlighter)
        } else {
            log::warn!(
                "highlighter '{}' not found, code blocks will not be highlighted",
                highlight.program
            );
            MarkdownFormat::new()
        }
    } else {
        MarkdownFormat::new()
    };
    registry.register(markdown);
    registry
}

fn load_cli_config(matches: &ArgMatches) -> OdtgenConfig {
    let mut loader = Loader::new().with_optional_file(PROJECT_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("dump-ast") {
        loader = loader
            .set_override("inspect.dump_ast", true)
            .unwrap_or_else(|err| {
                eprintln!("Failed to apply --dump-ast: {err}");
                process::exit(1);
            });
    }

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        process::exit(1);
    })
}
