//! Marrow CLI
//!
//! Scaffold, theme and extend projects built with Marrow UI.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use marrow::{Package, cmd, package::PACKAGE_DIR_ENV};

/// Command-line interface for Marrow UI.
#[derive(Parser)]
#[command(
    name = "marrow",
    version,
    about = "Marrow UI – A sleek UI kit built with Tailwind CSS and Alpine.js"
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory holding the bundled config, assets and templates
    #[arg(long, global = true, env = PACKAGE_DIR_ENV)]
    package_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Initialize Marrow UI in the current project
    Init {
        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,
    },
    /// Add component(s) to your project
    Add {
        /// Component names (e.g. button card dialog)
        names: Vec<String>,
        /// Add all components
        #[arg(long)]
        all: bool,
    },
    /// Generate theme CSS from marrow.config.toml
    Build {
        /// Path to configuration file
        #[arg(short, long, default_value = "marrow.config.toml")]
        config: PathBuf,
        /// Output stylesheet
        #[arg(short, long, default_value = "marrow-theme.css")]
        output: PathBuf,
    },
    /// List all available components
    List,
    /// Build a documentation site from pages and layouts
    Site {
        /// Source directory (pages/, layouts/, css/, js/)
        #[arg(long, default_value = "src")]
        src: PathBuf,
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,
        /// Path to configuration file
        #[arg(short, long, default_value = "marrow.config.toml")]
        config: PathBuf,
    },
    /// Extract component templates from documentation pages
    Extract {
        /// Directory of component documentation pages
        #[arg(long)]
        pages: PathBuf,
        /// Output directory for templates
        #[arg(long, default_value = "templates/components")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    marrow::init_tracing(cli.verbose);

    let cwd = std::env::current_dir().wrap_err("Failed to read current directory")?;
    let package = cli
        .package_dir
        .map(Package::new)
        .unwrap_or_else(Package::bundled);
    tracing::debug!(package = %package.root().display(), "Using package");

    match cli.command {
        Commands::Init { force } => {
            cmd::init::run(&cwd, &package, force)?;
        }
        Commands::Add { names, all } => {
            cmd::add::run(&cwd, &package, &names, all)?;
        }
        Commands::Build { config, output } => {
            cmd::build::run(&cwd, &config, &output)?;
        }
        Commands::List => {
            cmd::list::run(&package)?;
        }
        Commands::Site { src, out, config } => {
            cmd::site::run(&cwd, &src, &out, &config)?;
        }
        Commands::Extract { pages, out } => {
            cmd::extract::run(&cwd, &pages, &out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_init_parsing() {
        let cli = Cli::parse_from(["marrow", "init", "--force"]);

        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_add_names() {
        let cli = Cli::parse_from(["marrow", "add", "button", "card", "tabs"]);

        match cli.command {
            Commands::Add { names, all } => {
                assert_eq!(names, vec!["button", "card", "tabs"]);
                assert!(!all);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_add_all() {
        let cli = Cli::parse_from(["marrow", "add", "--all"]);

        match cli.command {
            Commands::Add { names, all } => {
                assert!(names.is_empty());
                assert!(all);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_build_defaults() {
        let cli = Cli::parse_from(["marrow", "build"]);

        match cli.command {
            Commands::Build { config, output } => {
                assert_eq!(config, PathBuf::from("marrow.config.toml"));
                assert_eq!(output, PathBuf::from("marrow-theme.css"));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_site_parsing() {
        let cli = Cli::parse_from(["marrow", "site", "--src", "docs", "--out", "public"]);

        match cli.command {
            Commands::Site { src, out, config } => {
                assert_eq!(src, PathBuf::from("docs"));
                assert_eq!(out, PathBuf::from("public"));
                assert_eq!(config, PathBuf::from("marrow.config.toml"));
            }
            _ => panic!("Expected Site command"),
        }
    }

    #[test]
    fn test_cli_extract_requires_pages() {
        assert!(Cli::try_parse_from(["marrow", "extract"]).is_err());

        let cli = Cli::parse_from(["marrow", "extract", "--pages", "src/pages/docs/components"]);
        match cli.command {
            Commands::Extract { pages, out } => {
                assert_eq!(pages, PathBuf::from("src/pages/docs/components"));
                assert_eq!(out, PathBuf::from("templates/components"));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from(["marrow", "list", "-vv", "--package-dir", "/opt/marrow"]);

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.package_dir, Some(PathBuf::from("/opt/marrow")));
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_cli_unknown_command() {
        assert!(Cli::try_parse_from(["marrow", "deploy"]).is_err());
    }
}
