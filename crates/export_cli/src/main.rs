//! mapa-export - export a mind-map tree to PDF
//!
//! Reads the editor's tree JSON and writes `mapa-mental.pdf` (or, with
//! `--abnt` and cover metadata, `mapa-mental-abnt.pdf`) to the output
//! directory.

use anyhow::{bail, Context, Result};
use export_engine::{export_abnt, export_plain};
use map_model::{CoverInfo, MindMap};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: mapa-export [--abnt] [--cover cover.json] [--out DIR] tree.json";

struct Args {
    tree: PathBuf,
    abnt: bool,
    cover: Option<PathBuf>,
    out: PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut abnt = false;
    let mut cover = None;
    let mut out = PathBuf::from(".");
    let mut tree = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--abnt" => abnt = true,
            "--cover" => {
                cover = Some(PathBuf::from(
                    args.next().context("--cover requires a file path")?,
                ));
            }
            "--out" => {
                out = PathBuf::from(args.next().context("--out requires a directory")?);
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ if arg.starts_with('-') => bail!("unknown option {arg}\n{USAGE}"),
            _ => {
                if tree.is_some() {
                    bail!("unexpected extra argument {arg}\n{USAGE}");
                }
                tree = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(Args {
        tree: tree.with_context(|| USAGE.to_string())?,
        abnt,
        cover,
        out,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = parse_args()?;

    let tree_json = std::fs::read_to_string(&args.tree)
        .with_context(|| format!("failed to read {}", args.tree.display()))?;
    let map = MindMap::from_json(&tree_json).context("failed to parse the map tree")?;
    tracing::info!(
        nodes = map.node_count(),
        depth = map.depth(),
        "map loaded"
    );

    let output = if args.abnt {
        let cover_path = args
            .cover
            .context("--abnt requires --cover with the cover metadata")?;
        let cover_json = std::fs::read_to_string(&cover_path)
            .with_context(|| format!("failed to read {}", cover_path.display()))?;
        let mut cover: CoverInfo =
            serde_json::from_str(&cover_json).context("failed to parse the cover metadata")?;
        if cover.year.trim().is_empty() {
            cover.year = chrono::Local::now().format("%Y").to_string();
        }
        export_abnt(&map, &cover).await?
    } else {
        export_plain(&map).await?
    };

    let path = args.out.join(output.file_name);
    std::fs::write(&path, &output.bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("{} ({} páginas)", path.display(), output.page_count);
    Ok(())
}
