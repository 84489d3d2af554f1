use anyhow::{Context, Result, bail};
use markdown_lite_config::Config;
use markdown_lite_engine::{MarkdownConverter, io};
use std::{
    env,
    io::{Read, stdin},
    path::PathBuf,
    process,
};

const USAGE: &str = "[--append] [--config <path>] <input.md|-> [output.html]";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    append: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args {
        input: None,
        output: None,
        config: None,
        append: false,
    };
    let mut positional = vec![];

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--append" => parsed.append = true,
            "--config" => {
                let Some(path) = iter.next() else {
                    bail!("--config needs a path");
                };
                parsed.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            _ => positional.push(arg),
        }
    }

    match positional.as_slice() {
        [input] => parsed.input = stdin_or_path(input),
        [input, output] => {
            parsed.input = stdin_or_path(input);
            parsed.output = Some(PathBuf::from(output));
        }
        _ => bail!("expected an input and an optional output"),
    }
    Ok(parsed)
}

fn stdin_or_path(arg: &str) -> Option<PathBuf> {
    (arg != "-").then(|| PathBuf::from(arg))
}

fn load_converter(config_path: Option<&PathBuf>) -> Result<MarkdownConverter> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file {} not found", path.display()))?,
        None => Config::load()?.unwrap_or_else(|| {
            log::info!(
                "No config file at {}, using default style",
                Config::config_path().display()
            );
            Config::default()
        }),
    };
    Ok(config.converter()?)
}

fn run(args: &Args) -> Result<()> {
    let converter = load_converter(args.config.as_ref())?;

    let source = match &args.input {
        Some(path) => io::read_source(path)?,
        None => {
            let mut buf = String::new();
            stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let html = converter.to_html(&source);

    match &args.output {
        Some(target) => {
            io::populate(target, &html, !args.append)?;
            log::info!("Wrote {}", target.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map_or("markdown-lite-cli", String::as_str);

    let args = match parse_args(argv.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        process::exit(1);
    }
}
