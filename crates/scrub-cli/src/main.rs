use std::fs::{self, File};
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use scrub::FilterPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "scrub-cli",
    about = "Normalize JSON API responses: strip pagination/URL fields, unwrap data envelopes",
    version
)]
struct Args {
    /// Filter the whole response instead of unwrapping a top-level "data" envelope
    #[arg(long)]
    raw: bool,

    /// Keep URL-bearing fields (url, *_url)
    #[arg(long)]
    keep_urls: bool,

    /// Keep pagination metadata fields (links, meta, per_page, ...)
    #[arg(long)]
    keep_pagination: bool,

    /// Remove an additional field by exact name (repeatable)
    #[arg(long = "remove", value_name = "FIELD")]
    remove: Vec<String>,

    /// Keep only these fields (repeatable; no restriction when unset)
    #[arg(long = "keep", value_name = "FIELD")]
    keep: Vec<String>,

    /// JSON file with a base FilterPolicy; flags above apply on top
    #[arg(long, value_name = "FILE")]
    policy: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn build_policy(args: &Args) -> Result<FilterPolicy> {
    let mut policy = match &args.policy {
        Some(path) => {
            let s = fs::read_to_string(path)
                .with_context(|| format!("reading policy file {}", path.display()))?;
            serde_json::from_str(&s)
                .with_context(|| format!("parsing policy file {}", path.display()))?
        }
        None => FilterPolicy::default(),
    };
    if args.keep_urls {
        policy.remove_urls = false;
    }
    if args.keep_pagination {
        policy.remove_pagination_meta = false;
    }
    policy
        .custom_fields_to_remove
        .extend(args.remove.iter().cloned());
    policy.fields_to_keep.extend(args.keep.iter().cloned());
    Ok(policy)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let policy = build_policy(&args)?;
    let value = scrub::normalize_from_str(&buf, !args.raw, &policy)
        .context("normalizing input")?;

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", serde_json::to_string(&value)?);
    }

    Ok(())
}
