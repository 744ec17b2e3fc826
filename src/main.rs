use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use folder_icons::config::loader;
use folder_icons::{IconConfiguration, IconPack, resolve_into};

#[derive(Parser)]
#[command(name = "folder-icons", version, about = "Folder icon manifest generator")]
struct Cli {
    /// Path to config file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the selected folder theme and write the icon manifest.
    Generate(GenerateArgs),
    /// List the themes of the configured catalog.
    Themes,
    /// Validate the configured catalog.
    Check,
}

#[derive(clap::Args, Default)]
struct GenerateArgs {
    /// Folder theme to use instead of the configured one ("none" disables).
    #[arg(long)]
    theme: Option<String>,

    /// Icon packs to enable, replacing the configured set.
    #[arg(long, value_delimiter = ',', conflicts_with = "no_packs")]
    packs: Option<Vec<IconPack>>,

    /// Disable every icon pack.
    #[arg(long)]
    no_packs: bool,

    /// Existing manifest (e.g. file icons) to merge folder icons into.
    #[arg(long)]
    base: Option<PathBuf>,

    /// Write the manifest here instead of the configured output.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = loader::load_config(cli.config.as_deref())?;
    let catalog = loader::load_catalog(&config)?;

    match cli.command {
        Some(Commands::Themes) => {
            for name in catalog.names() {
                println!("{name}");
            }
            Ok(())
        }
        Some(Commands::Check) => {
            catalog.validate()?;
            println!("{} folder themes ok", catalog.themes().len());
            Ok(())
        }
        Some(Commands::Generate(args)) => generate(&config, &catalog, args),
        None => generate(&config, &catalog, GenerateArgs::default()),
    }
}

fn generate(
    config: &folder_icons::config::types::AppConfig,
    catalog: &folder_icons::Catalog,
    args: GenerateArgs,
) -> Result<()> {
    let mut options = config.options.clone();
    if let Some(theme) = args.theme {
        options.folder_theme = theme;
    }
    if args.no_packs {
        options.activated_packs.clear();
    } else if let Some(packs) = args.packs {
        options.activated_packs = packs;
    }

    let base: IconConfiguration = match args.base {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("parsing manifest {}", path.display()))?
        }
        None => IconConfiguration::new(),
    };

    tracing::info!(theme = %options.folder_theme, "generating folder icons");
    let manifest = resolve_into(catalog.themes(), base, &options, &config.icons.paths());
    let json = serde_json::to_string_pretty(&manifest)?;

    match args.output.as_ref().or(config.output.as_ref()) {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
