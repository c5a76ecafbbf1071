//! Selkie CLI
//!
//! Builds a CSS selector from fragments given on the command line.
//!
//! Usage:
//!   selkie element=div id=main class=container
//!   selkie element=ul combine='>' element=li pseudo-class=first-child
//!   selkie --json 'attr=href$=".png"'

mod step;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use selkie_common::json::serialize;
use serde_json::json;

use crate::step::{Step, build_selector, parse_step};

#[derive(Parser, Debug)]
#[command(name = "selkie", version, about = "Build CSS selectors from fragments")]
struct Cli {
    /// Print `{"selector": "..."}` instead of the bare selector.
    #[arg(short, long)]
    json: bool,

    /// Do not warn about empty names or unknown combinators.
    #[arg(short, long)]
    quiet: bool,

    /// Fragments applied left to right, each written as `kind=value`.
    ///
    /// Kinds: element, id, class, attr, pseudo-class, pseudo-element, combine.
    #[arg(required = true, value_parser = parse_step)]
    steps: Vec<Step>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let selector = build_selector(&cli.steps, !cli.quiet);
    let text = match selector.stringify() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            eprintln!("  built: {selector}");
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serialize(&json!({ "selector": text }))?);
    } else {
        println!("{text}");
    }

    Ok(())
}
