//! Marrow CLI Library
//!
//! Command implementations for the `marrow` binary, exposed as a library so
//! they can be driven from integration tests.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (init, add, build, list, site, extract)
//! - [`package`] - Location of the bundled config, assets and templates
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use marrow::{Package, cmd};
//!
//! // Copy two components into ./components/ui
//! let names = vec!["button".to_string(), "card".to_string()];
//! cmd::add::run(Path::new("."), &Package::bundled(), &names, false).unwrap();
//! ```

pub mod cmd;
pub mod package;

pub use marrow_core::ThemeConfig;
pub use package::Package;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
