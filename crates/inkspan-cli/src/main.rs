use anyhow::{Context, Result};
use inkspan_config::Config;
use inkspan_engine::{DelimiterRule, default_rules, markdown_to_html, paragraphs, text_to_spans_with};
use std::{
    env,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    /// The rendered `<div>` document.
    Html,
    /// One debug line per span, paragraphs separated by a blank line.
    Spans,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Render {
        output: Output,
        input: Option<PathBuf>,
    },
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, String> {
    let mut output = Output::Html;
    let mut input = None;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--spans" => output = Output::Spans,
            "-" => {}
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}"));
            }
            path if input.is_none() => input = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument: {extra}")),
        }
    }

    Ok(Command::Render { output, input })
}

fn print_usage() {
    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "inkspan-cli".to_string());
    eprintln!("Usage: {program_name} [--spans] [FILE]");
    eprintln!("Reads FILE (or stdin) and prints HTML, or the inline spans with --spans.");
    eprintln!("Delimiter rules are read from {}", Config::config_path().display());
}

fn load_rules(config_path: &Path) -> Result<Vec<DelimiterRule>> {
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(config_path).context("Failed to load config file")? {
        Some(config) => {
            log::info!("Loaded {} delimiter rules from config", config.rules.len());
            Ok(config.rules)
        }
        None => {
            log::info!("No config file found, using built-in delimiter rules");
            Ok(default_rules())
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn render_spans(text: &str, rules: &[DelimiterRule]) -> Result<String> {
    let mut out = String::new();
    for (i, paragraph) in paragraphs(text).iter().enumerate() {
        let spans = text_to_spans_with(paragraph, rules)
            .with_context(|| format!("In paragraph {}", i + 1))?;
        if i > 0 {
            out.push('\n');
        }
        for span in spans {
            out.push_str(&format!("{span:?}\n"));
        }
    }
    Ok(out)
}

fn run(output: Output, input: Option<PathBuf>) -> Result<()> {
    let rules = load_rules(&Config::config_path())?;
    let text = read_input(input.as_ref())?;
    log::info!("Read {} bytes of input", text.len());

    match output {
        Output::Html => println!("{}", markdown_to_html(&text, &rules)?),
        Output::Spans => print!("{}", render_spans(&text, &rules)?),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::info!("inkspan starting up");

    let (output, input) = match parse_args(env::args().skip(1)) {
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Ok(Command::Render { output, input }) => (output, input),
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(output, input) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
