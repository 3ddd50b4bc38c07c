use clap::{Parser, Subcommand};
use portfolio_site::catalog::Catalog;
use portfolio_site::{audit, config, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let hash = env!("PORTFOLIO_GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Static generator for a single-page personal portfolio")]
#[command(long_about = "\
Static generator for a single-page personal portfolio

The page content is compiled in. The site directory only holds presentation
settings and files to publish alongside the page:

  site/
  ├── config.toml        # Title, contact links, color palettes (optional)
  └── assets/            # Copied verbatim to the output root
      └── Resume.pdf     # Linked from the hero, about, and contact sections

Run 'portfolio-site gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site directory (config.toml and assets/)
    #[arg(long, default_value = "site", global = true)]
    site: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page and copy assets into the output directory
    Build,
    /// Validate config and catalog without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.site.display());
            let site_config = config::load_config(&cli.site)?;
            let catalog = Catalog::standard();

            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&catalog, &site_config, &cli.site, &cli.output)?;
            output::print_build_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.site.display());
            config::load_config(&cli.site)?;
            let catalog = Catalog::standard();
            let findings = audit::audit(&catalog);
            output::print_check_output(&catalog, &findings);
            if audit::has_errors(&findings) {
                return Err("catalog has errors".into());
            }
            println!("==> Site is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
