use anyhow::{Context, Result};
use clap::Parser;
use slugpress::{
    build::{build_site, list_paths},
    cli::{Cli, Commands},
    config::SiteConfig,
    content::GhostClient,
    serve::serve_site,
};
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));
    let source = GhostClient::new(&config.cms).context("Failed to create content API client")?;

    match &cli.command {
        Commands::Build { .. } => build_site(config, &source).map(|_| ()),
        Commands::Paths => {
            for slug in list_paths(&source)? {
                println!("{slug}");
            }
            Ok(())
        }
        Commands::Serve { .. } => {
            build_site(config, &source)?;
            serve_site(config)
        }
    }
}

/// Load configuration: file (if present), then environment, then CLI flags.
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_env();
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
