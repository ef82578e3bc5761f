use case_catalog::paths::PublishPaths;
use case_catalog::{catalog, config, output, publish};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "case-catalog")]
#[command(about = "Build the before/after case catalog for a restoration portfolio")]
#[command(long_about = "\
Build the before/after case catalog for a restoration portfolio

Every subfolder of a category root is one case. Images directly inside it
are grouped by filename:

  workspace/
  ├── catalog.toml                 # Optional overrides (see gen-config)
  └── 2025-12/
      ├── 가방/                    # Category root
      │   └── 에르메스_버킨/       # Case → title \"에르메스 · 버킨\"
      │       ├── A1.jpg           # before (A + number)
      │       ├── A1.HEIC          # dropped: same photo as A1.jpg
      │       ├── 복원후.jpg       # after (contains 후)
      │       └── detail.webp      # gallery
      └── crs-portfolio/data/      # cases.json, cases-data.js

Classification (first match wins):
  before:  contains 전, or the word \"before\"
  after:   contains 후, or the word \"after\"
  before:  starts with A + number (A1, A_02, a-3)
  after:   starts with B + number
  gallery: everything else

Run without a command to scan and write the catalog.")]
#[command(version)]
struct Cli {
    /// Workspace root; category roots and output are resolved against it
    #[arg(long, default_value = ".", global = true)]
    workspace: PathBuf,

    /// Config file (default: <workspace>/catalog.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan all roots and write cases.json and cases-data.js (default)
    Build,
    /// Scan all roots and list the cases without writing anything
    Check,
    /// Print a stock catalog.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("CASE_CATALOG_LOG", "warn"))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let workspace = cli.workspace.canonicalize()?;
            let config = load_config(&workspace, cli.config.as_deref())?;
            let catalog = scan_workspace(&workspace, &config)?;
            let artifacts = publish::publish(
                &catalog,
                &config.output_root(&workspace),
                &config.js_global,
            )?;
            output::print_write_output(&artifacts, &catalog);
        }
        Command::Check => {
            let workspace = cli.workspace.canonicalize()?;
            let config = load_config(&workspace, cli.config.as_deref())?;
            println!("==> Checking {}", workspace.display());
            let catalog = scan_workspace(&workspace, &config)?;
            output::print_catalog_output(&catalog);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn load_config(
    workspace: &Path,
    explicit: Option<&Path>,
) -> Result<config::CatalogConfig, config::ConfigError> {
    match explicit {
        Some(path) if !path.exists() => Err(config::ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("config file not found: {}", path.display()),
        ))),
        Some(path) => config::load_config(path),
        None => config::load_config(&workspace.join(config::CONFIG_FILE)),
    }
}

fn scan_workspace(
    workspace: &Path,
    config: &config::CatalogConfig,
) -> Result<case_catalog::types::Catalog, case_catalog::scan::ScanError> {
    let paths = PublishPaths::new(workspace, config.primary_root(workspace));
    catalog::build_catalog(
        &config.scan_roots(workspace),
        &paths,
        &config.generated_from,
    )
}
