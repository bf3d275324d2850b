mod console;
mod export;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use catex_core::CategoryRecord;
use catex_scraper::{run_scrape, split_links, GateClient};

use crate::console::ConsoleProgress;
use crate::export::{write_exports, ExportFormat};

#[derive(Debug, Parser)]
#[command(name = "catex")]
#[command(about = "Catalog scrape and export tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Crawl category links, enrich the products, and write export files.
    Scrape(ScrapeArgs),
    /// Re-export a previously saved tree without scraping again.
    Export(ExportArgs),
}

#[derive(Debug, clap::Args)]
struct ScrapeArgs {
    /// Category links to crawl.
    links: Vec<String>,

    /// File with additional links, one per line or comma-separated.
    #[arg(long)]
    links_file: Option<PathBuf>,

    /// Fetch replacement images from the image search (overrides config).
    #[arg(long, conflicts_with = "no_images")]
    images: bool,

    /// Keep the site-native galleries (overrides config).
    #[arg(long)]
    no_images: bool,

    /// Directory for the saved tree and export files.
    #[arg(long, default_value = "export")]
    out_dir: PathBuf,

    /// Export formats to write.
    #[arg(long = "format", value_enum, default_values_t = [ExportFormat::Csv])]
    formats: Vec<ExportFormat>,

    /// Write one file per category instead of a combined file.
    #[arg(long)]
    split: bool,
}

#[derive(Debug, clap::Args)]
struct ExportArgs {
    /// Saved tree (the `tree.json` a scrape run wrote).
    input: PathBuf,

    /// Directory for the export files.
    #[arg(long, default_value = "export")]
    out_dir: PathBuf,

    /// Export formats to write.
    #[arg(long = "format", value_enum, default_values_t = [ExportFormat::Csv])]
    formats: Vec<ExportFormat>,

    /// Restrict the export to these category names (implies per-category files).
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Write one file per category instead of a combined file.
    #[arg(long)]
    split: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape(args) => scrape(args).await,
        Commands::Export(args) => export(&args),
    }
}

async fn scrape(args: ScrapeArgs) -> anyhow::Result<()> {
    let config = catex_core::load_app_config()?;
    let client = GateClient::from_config(&config)?;

    let mut links = args.links;
    if let Some(file) = &args.links_file {
        let raw = std::fs::read_to_string(file)?;
        links.extend(split_links(&raw));
    }
    anyhow::ensure!(!links.is_empty(), "no category links supplied");

    let enable_image_search = if args.images {
        true
    } else if args.no_images {
        false
    } else {
        config.image_search_enabled
    };

    let mut progress = ConsoleProgress::default();
    let report = run_scrape(
        &client,
        &config.site_base_url,
        &links,
        enable_image_search,
        &mut progress,
    )
    .await;

    for error in &report.errors {
        tracing::warn!(error = %error, "recorded during run");
    }
    println!("{}", report.summary);

    std::fs::create_dir_all(&args.out_dir)?;
    let tree_path = args.out_dir.join("tree.json");
    std::fs::write(&tree_path, serde_json::to_string_pretty(&report.categories)?)?;
    println!("Дерево сохранено: {}", tree_path.display());

    let written = write_exports(
        &report.categories,
        &args.formats,
        &[],
        args.split,
        &args.out_dir,
    )?;
    for path in written {
        println!("Файл выгрузки: {}", path.display());
    }

    Ok(())
}

fn export(args: &ExportArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.input)?;
    let tree: Vec<CategoryRecord> = serde_json::from_str(&raw)?;

    let written = write_exports(
        &tree,
        &args.formats,
        &args.categories,
        args.split,
        &args.out_dir,
    )?;
    for path in written {
        println!("Файл выгрузки: {}", path.display());
    }

    Ok(())
}
