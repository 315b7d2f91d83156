//! Logging setup for the tablekit binary
//!
//! Library code logs through the `log` facade. The binary installs
//! env_logger on stderr so stdout only ever carries schema documents.
//! `RUST_LOG` overrides the level chosen here.

use env_logger::{Builder, Env, Target};

/// Install the global logger. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .try_init();
}
