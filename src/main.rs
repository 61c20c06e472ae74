use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rust_passgen::analyzer;
use rust_passgen::charset::build_alphabet;
use rust_passgen::core::config::PersistedSettings;
use rust_passgen::core::session::SessionCollections;
use rust_passgen::export::{self, ExportFormat};
use rust_passgen::generators::PasswordGenerator;
use rust_passgen::models::GenerationConfig;
use rust_passgen::utils::default_settings_path;

#[derive(Parser, Debug)]
#[command(author, version, about = "Randomized password generator with strength scoring", long_about = None)]
struct Args {
    /// Password length (4-128)
    #[arg(long, short = 'l', env = "PASSGEN_LENGTH",
          value_parser = clap::value_parser!(u16).range(4..=128))]
    length: Option<u16>,

    /// How many passwords to generate (1-10)
    #[arg(long, short = 'n', env = "PASSGEN_QUANTITY",
          value_parser = clap::value_parser!(u16).range(1..=10))]
    quantity: Option<u16>,

    /// Leave lowercase letters out of the character set
    #[arg(long)]
    no_lowercase: bool,

    /// Leave uppercase letters out of the character set
    #[arg(long)]
    no_uppercase: bool,

    /// Leave digits out of the character set
    #[arg(long)]
    no_numbers: bool,

    /// Leave special characters out of the character set
    #[arg(long)]
    no_symbols: bool,

    /// Extra characters appended to the character set verbatim
    #[arg(long)]
    custom: Option<String>,

    /// Remove visually confusable characters (il1Lo0O)
    #[arg(long)]
    exclude_similar: bool,

    /// Remove punctuation prone to quoting trouble
    #[arg(long)]
    exclude_ambiguous: bool,

    /// Characters to remove from the character set
    #[arg(long)]
    exclude: Option<String>,

    /// Do not force one character from every enabled class
    #[arg(long)]
    no_must_include: bool,

    /// Seed for reproducible output (switches to a deterministic RNG
    /// instead of the OS source)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the batch to this file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Export format: txt or json
    #[arg(long, default_value = "txt", value_parser = parse_format)]
    format: ExportFormat,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, env = "PASSGEN_SETTINGS")]
    settings: Option<PathBuf>,

    /// Persist the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,

    /// Dark display mode flag carried in the settings file
    #[arg(long)]
    dark_mode: bool,
}

fn parse_format(s: &str) -> std::result::Result<ExportFormat, String> {
    s.parse()
}

// Settings first, explicit flags last
fn apply_args(args: &Args, config: &mut GenerationConfig) {
    if let Some(length) = args.length {
        config.length = length as usize;
    }
    if let Some(quantity) = args.quantity {
        config.quantity = quantity as usize;
    }
    if args.no_lowercase {
        config.include_lowercase = false;
    }
    if args.no_uppercase {
        config.include_uppercase = false;
    }
    if args.no_numbers {
        config.include_numbers = false;
    }
    if args.no_symbols {
        config.include_symbols = false;
    }
    if let Some(custom) = &args.custom {
        config.custom_chars = custom.clone();
    }
    if let Some(exclude) = &args.exclude {
        config.exclude_chars = exclude.clone();
    }
    config.exclude_similar = args.exclude_similar;
    config.exclude_ambiguous = args.exclude_ambiguous;
    if args.no_must_include {
        config.must_include_each = false;
    }
}

fn load_settings(path: &PathBuf) -> Result<PersistedSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings = serde_json::from_str(&raw)
        .with_context(|| format!("parsing settings in {}", path.display()))?;
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings_path = args.settings.clone().or_else(default_settings_path);

    let mut config = GenerationConfig::default();
    let mut dark_mode = false;

    // Restore the persisted subset before layering explicit flags on top.
    if let Some(path) = settings_path.as_ref().filter(|p| p.exists()) {
        match load_settings(path) {
            Ok(settings) => {
                dark_mode = settings.dark_mode;
                settings.apply(&mut config);
                log::info!("Loaded settings from {}", path.display());
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings file: {e:#}");
            }
        }
    }

    apply_args(&args, &mut config);
    if args.dark_mode {
        dark_mode = true;
    }

    let alphabet = build_alphabet(&config);
    if alphabet.is_empty() {
        log::warn!("Character set is empty; nothing to generate");
    }

    let batch = match args.seed {
        Some(seed) => {
            log::info!("Using seeded RNG; output is reproducible, not secret");
            PasswordGenerator::seeded(seed).generate_batch(&alphabet, &config)
        }
        None => PasswordGenerator::new().generate_batch(&alphabet, &config),
    };

    let mut session = SessionCollections::new();
    session.record_batch(batch);

    for password in session.current() {
        let analysis = analyzer::analyze(&password.value);
        println!(
            "{}  [{} {}/100]",
            password.value, analysis.level, analysis.score
        );
        for hint in &analysis.feedback {
            println!("    hint: {hint}");
        }
    }

    if let Some(path) = &args.export {
        let rendered = export::render_batch(session.current(), args.format)?;
        fs::write(path, rendered)
            .with_context(|| format!("writing export to {}", path.display()))?;
        log::info!(
            "Exported {} passwords to {}",
            session.current().len(),
            path.display()
        );
    }

    if args.save_settings {
        match settings_path.as_ref() {
            Some(path) => {
                let snapshot = PersistedSettings::capture(&config, dark_mode);
                fs::write(path, serde_json::to_string_pretty(&snapshot)?)
                    .with_context(|| format!("writing settings to {}", path.display()))?;
                log::info!("Saved settings to {}", path.display());
            }
            None => log::warn!("No settings path available; nothing saved"),
        }
    }

    Ok(())
}
