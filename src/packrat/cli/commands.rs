//! # CLI Layer
//!
//! This module is **one possible UI client** for packrat; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Locate the config dir, load config, apply flag overrides
//! 3. **Dispatch**: Route commands to handlers
//! 4. **Output Formatting**: Colors and tables via `render`

use super::render;
use super::session::{build_profile, Session};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use packrat::config::{PackratConfig, CONFIG_KEYS};
use packrat::error::{PackratError, Result};
use packrat::profile::ProfileKind;
use std::io::{self, Write};
use std::path::PathBuf;

const CONFIG_DIR_ENV: &str = "PACKRAT_CONFIG_DIR";

/// Settings for one run: config file values with flags applied on top.
struct AppContext {
    config_dir: PathBuf,
    config: PackratConfig,
    profile: Option<ProfileKind>,
    capacity: Option<usize>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;
    render::configure_color(ctx.config.color && !cli.no_color);

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&ctx),
        Some(Commands::Profiles) => handle_profiles(),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir(cli.config_dir.clone())?;
    let config = PackratConfig::load(&config_dir)?;

    let profile = cli.profile.or(config.profile);
    let capacity = cli.capacity.or(config.capacity);

    Ok(AppContext {
        config_dir,
        config,
        profile,
        capacity,
    })
}

/// Flag, then `PACKRAT_CONFIG_DIR`, then the platform config dir.
fn resolve_config_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "packrat", "packrat")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            PackratError::Config(format!(
                "no home directory found; pass --config-dir or set {}",
                CONFIG_DIR_ENV
            ))
        })
}

fn handle_menu(ctx: &AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    match ctx.profile {
        Some(kind) => session.run_menu(build_profile(kind, ctx.capacity)),
        None => session.run_picker(ctx.capacity),
    }
}

fn handle_profiles() -> Result<()> {
    print!("{}", render::render_profiles());
    io::stdout().flush()?;
    Ok(())
}

fn handle_config(mut ctx: AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, ctx.config.get(key)?);
            }
        }
        (Some(key), None) => {
            println!("{}", ctx.config.get(&key)?);
        }
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.config_dir)?;
            println!("{} = {}", key, ctx.config.get(&key)?);
        }
    }
    Ok(())
}
