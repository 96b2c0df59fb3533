use anyhow::{Context, Result};
use clap::Parser;
use markdown_structure_config::{Config, DisplayConfig};
use markdown_structure_engine::{
    Document, OutputFormat, ParserOptions, StructuralParser, io, render, render::to_stats_report,
};
use std::io::Write;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "markdown-structure")]
#[command(about = "Outline the block structure of markdown documents")]
struct Args {
    /// Markdown files, directories to scan, or `-` for stdin
    #[arg(default_value = io::STDIN_PATH)]
    paths: Vec<PathBuf>,

    /// Output format: tree, json or stats
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Treat pipe tables as ordinary text
    #[arg(long)]
    no_tables: bool,

    /// Treat code fences as ordinary text
    #[arg(long)]
    no_code: bool,

    /// Treat list items as ordinary text
    #[arg(long)]
    no_lists: bool,

    /// Do not append the statistics report to tree output
    #[arg(long)]
    no_stats: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Args {
    fn parser_options(&self, config: &Config) -> ParserOptions {
        ParserOptions {
            tables: config.parser.tables && !self.no_tables,
            code: config.parser.code && !self.no_code,
            lists: config.parser.lists && !self.no_lists,
        }
    }

    fn display(&self, config: &Config) -> DisplayConfig {
        DisplayConfig {
            format: self.format.unwrap_or(config.display.format),
            show_stats: config.display.show_stats && !self.no_stats,
        }
    }
}

/// Renders one document, always ending in a newline.
fn report(doc: &Document, display: DisplayConfig) -> Result<String> {
    let mut out = render(doc, display.format)?;
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    if display.format == OutputFormat::Tree && display.show_stats {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&to_stats_report(doc));
    }
    Ok(out)
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let config =
        Config::load_or_default(args.config.as_deref()).context("Failed to load config")?;
    let parser = StructuralParser::new(args.parser_options(&config));
    let display = args.display(&config);
    log::debug!("Parser options: {:?}, display: {:?}", parser.options(), display);

    let inputs = io::resolve_inputs(&args.paths).context("Failed to resolve inputs")?;
    let with_banner = inputs.len() > 1;

    for (index, path) in inputs.iter().enumerate() {
        let text =
            io::read_source(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let doc = parser.parse(&text);
        log::info!("{}: {} block(s)", path.display(), doc.structure().len());

        if with_banner {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "==> {} <==", path.display())?;
        }
        out.write_all(report(&doc, display)?.as_bytes())?;
    }

    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let stdout = std::io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
