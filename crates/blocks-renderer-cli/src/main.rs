//! blocks-render - render a JSON block document to HTML

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Result, anyhow};
use blocks_renderer_config::{Config, RenderConfig};
use blocks_renderer_dioxus::{BlocksRenderer, BlocksRendererProps};
use blocks_renderer_engine::{Document, io};
use clap::Parser;
use dioxus::dioxus_core::VirtualDom;

#[derive(Parser, Debug)]
#[command(name = "blocks-render")]
#[command(version, about = "Render a rich text block document to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    blocks-render post.json                      Print the HTML fragment
    blocks-render post.json -o post.html         Write it to a file
    blocks-render post.json --standalone         Print a complete HTML page")]
struct Cli {
    /// JSON document: an array of block nodes
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (defaults to the configured output, then stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Config file (defaults to ~/.config/blocks-renderer/config.toml if it exists)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Wrap the fragment in a minimal HTML page
    #[arg(long)]
    standalone: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let document = io::read_document(&cli.input)?;
    log::info!(
        "Rendering {} root nodes from {}",
        document.len(),
        cli.input.display()
    );

    let mut html = render_html(document, config.render);
    if cli.standalone {
        html = standalone_page(&page_title(&cli.input), &html);
    }

    match cli.output.as_ref().or(config.output.as_ref()) {
        Some(path) => {
            io::write_output(path, &html)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

/// An explicitly named config file must exist; the default one is optional
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from_path(path)?
            .ok_or_else(|| anyhow!("Config file not found: {}", path.display())),
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config file at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn render_html(document: Document, render: RenderConfig) -> String {
    let props = BlocksRendererProps::new(document).with_config(render);
    let mut dom = VirtualDom::new_with_props(BlocksRenderer, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn page_title(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Document".to_string())
}

fn standalone_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        html_escape::encode_text(title)
    )
}
