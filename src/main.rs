// SPDX-License-Identifier: PMPL-1.0-or-later

//! langsel: command-line front end for translation catalogs
//!
//! Drives the same selector the host application embeds, with the host's
//! refresh hooks reported on the console.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use langsel::backend::{CatalogBackend, CatalogFormat, ModuleBundle, PoBackend};
use langsel::catalog::{self, Catalog, SourceIndex};
use langsel::config::LanguageConfig;
use langsel::error::LangError;
use langsel::registry::{self, LangId};
use langsel::select::{HostHooks, LanguageSelector, SelectOutcome, SystemLocales};
use langsel::settings::{JsonSettings, SettingsStore};
use langsel::translate::Translate;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "langsel")]
#[command(version)]
#[command(about = "Translation catalog tool for the language dialog")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (json/yaml/yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Language directory (default: Languages beside the executable)
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,

    /// Catalog format
    #[arg(short, long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Settings file holding the persisted language choice
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List installed languages
    List,

    /// Report the language declared by catalog files
    Probe {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Parse a catalog and report whether it would be accepted
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Template to validate references against
        #[arg(short, long)]
        template: Option<PathBuf>,
    },

    /// Translate placeholders or line numbers with a catalog
    Translate {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// `Merge.rc:<line>` placeholders, bare line numbers or plain text
        #[arg(value_name = "TEXT", required = true)]
        texts: Vec<String>,
    },

    /// Compile a .po catalog into a .lang module
    Compile {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (default: INPUT with a .lang extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Switch language as the language dialog would
    Select {
        /// Language id (0x040c), locale tag (fr-FR) or LANG_X,SUBLANG_Y pair
        #[arg(value_name = "LANGUAGE")]
        language: String,

        /// Do not persist the choice
        #[arg(long)]
        no_save: bool,
    },

    /// Pick the startup language from settings and OS locales
    Init,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Po,
    Lang,
}

impl From<FormatArg> for CatalogFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Po => CatalogFormat::Po,
            FormatArg::Lang => CatalogFormat::Lang,
        }
    }
}

/// Reports host refresh requests instead of performing them.
struct ConsoleHost;

impl HostHooks for ConsoleHost {
    fn rebuild_menus(&mut self) {
        println!("  {} rebuild menus", "→".cyan());
    }

    fn refresh_titles(&mut self) {
        println!("  {} refresh document titles", "→".cyan());
    }

    fn refresh_indicators(&mut self) {
        println!("  {} refresh status bar indicators", "→".cyan());
    }

    fn set_thread_locale(&mut self, id: LangId) {
        println!("  {} thread locale {}", "→".cyan(), id);
    }

    fn set_process_locale(&mut self, locale: &str) {
        println!("  {} process locale {}", "→".cyan(), locale);
    }

    fn notify_error(&mut self, error: &LangError) {
        eprintln!("{} {}", "error:".red().bold(), error);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);
    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::List => {
            let selector = build_selector(&config)?;
            let choices = selector.available();
            let current = selector.current_index(&choices);

            println!("{}", "INSTALLED LANGUAGES".bold().yellow());
            println!("  Directory: {}", config.language_dir().display());
            for (index, choice) in choices.iter().enumerate() {
                let marker = if Some(index) == current { "*" } else { " " };
                let label = choice.label(|_| None, config.ansi_codepage);
                let file = choice
                    .path
                    .as_deref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "(built-in)".to_string());
                println!("{} {} {:<40} {}", marker.green(), choice.id, label, file.dimmed());
            }
            if choices.len() == 1 {
                println!("{}", "No translations installed".yellow());
            }
        }

        Commands::Probe { files } => {
            let backend = config.backend()?;
            for file in &files {
                match backend.probe(file) {
                    Some(id) => {
                        let name = registry::lookup_by_id(id)
                            .map(|desc| desc.english_name)
                            .unwrap_or("unknown");
                        println!("{}: {} ({})", file.display(), id, name.green());
                    }
                    None => println!("{}: {}", file.display(), "no language declaration".red()),
                }
            }
        }

        Commands::Check { file, template } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("reading catalog {}", file.display()))?;
            let parsed = match &template {
                Some(template) => {
                    let raw = std::fs::read(template)
                        .with_context(|| format!("reading template {}", template.display()))?;
                    Catalog::parse_with_template(&bytes, &SourceIndex::parse(&raw))
                }
                None => Catalog::parse(&bytes),
            };
            let language = catalog::probe_bytes(&bytes);
            match parsed {
                Ok(parsed) => {
                    println!("{} {}", "ACCEPTED".green().bold(), file.display());
                    println!(
                        "  Language: {}",
                        language.map(|id| id.to_string()).unwrap_or_else(|| "undeclared".into())
                    );
                    println!("  Codepage: {}", parsed.codepage());
                    println!("  Strings: {}", parsed.len());
                }
                Err(err) => {
                    println!("{} {}", "REJECTED".red().bold(), file.display());
                    println!("  {}", err);
                    return Err(anyhow!("catalog {} rejected", file.display()));
                }
            }
        }

        Commands::Translate { file, texts } => {
            let module = config
                .backend()?
                .load(&file)
                .with_context(|| format!("loading {}", file.display()))?;
            let translator = langsel::Translator::new(Some(&module.catalog), config.ansi_codepage);
            for text in &texts {
                let translated = match text.parse::<u32>() {
                    Ok(line) => translator.translate_line(line),
                    Err(_) => translator.translate_text(text),
                };
                match translated {
                    Some(value) => println!("{} => {}", text, value.green()),
                    None => println!("{} => {}", text, text.dimmed()),
                }
            }
        }

        Commands::Compile { input, output } => {
            let module = PoBackend::new()
                .load(&input)
                .with_context(|| format!("compiling {}", input.display()))?;
            let language = catalog::probe_language(&input)
                .ok_or_else(|| anyhow!("{} declares no known language", input.display()))?;
            let output =
                output.unwrap_or_else(|| input.with_extension(CatalogFormat::Lang.extension()));
            ModuleBundle::compile(
                &module.catalog,
                language,
                &config.host_version,
                config.ansi_codepage,
            )
            .write(&output)?;
            println!(
                "Compiled {} strings for {} to {}",
                module.catalog.len(),
                language,
                output.display()
            );
        }

        Commands::Select { language, no_save } => {
            let target = parse_language(&language)?;
            let mut selector = build_selector(&config)?;
            selector.initialize(&SystemLocales, &mut langsel::select::NoHost);
            println!("Switching from {} to {}", selector.current(), target);

            match selector.select(target, !no_save, &mut ConsoleHost) {
                Ok(SelectOutcome::Switched(id)) => println!("{} {}", "Switched to".green(), id),
                Ok(SelectOutcome::Unchanged(id)) => println!("{} {}", "Already using".yellow(), id),
                Err(err) if err.is_catalog_fault() => {
                    return Err(anyhow!("catalog for {} is unusable; reinstall it", target))
                }
                Err(_) => return Err(anyhow!("language switch to {} failed", target)),
            }
        }

        Commands::Init => {
            let mut selector = build_selector(&config)?;
            if let Some(id) = selector.settings().language_override() {
                println!("Persisted override: {}", id);
            }
            let id = selector.initialize(&SystemLocales, &mut ConsoleHost);
            let name = registry::lookup_by_id(id)
                .map(|desc| desc.english_name)
                .unwrap_or("unknown");
            println!("Startup language: {} ({})", id, name.green());
        }
    }

    Ok(())
}

fn setup_tracing(verbose: bool) {
    let default = if verbose { "langsel=debug" } else { "langsel=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_config(cli: &Cli) -> Result<LanguageConfig> {
    let executable = std::env::current_exe().context("locating executable")?;
    let mut config = match &cli.config {
        Some(path) => LanguageConfig::load(path)?,
        None => LanguageConfig::default(),
    };
    if let Some(dir) = &cli.dir {
        config.language_dir = Some(dir.clone());
    }
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    if let Some(settings) = &cli.settings {
        config.settings_path = Some(settings.clone());
    }
    config.fill_paths(&executable);
    Ok(config)
}

fn build_selector(
    config: &LanguageConfig,
) -> Result<LanguageSelector<Box<dyn CatalogBackend>, JsonSettings>> {
    let settings_path = config.settings_path();
    let settings = JsonSettings::open(&settings_path)
        .with_context(|| format!("opening settings {}", settings_path.display()))?;
    Ok(LanguageSelector::new(
        config.backend()?,
        settings,
        config.language_dir(),
        config.selector_options(),
    ))
}

/// Accepts `0x040c`, `1036`, `LANG_FRENCH,SUBLANG_FRENCH` or a locale tag.
fn parse_language(value: &str) -> Result<LangId> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        let raw = u16::from_str_radix(hex, 16)
            .with_context(|| format!("invalid language id {}", value))?;
        return Ok(LangId::from_raw(raw));
    }
    if let Ok(raw) = value.parse::<u16>() {
        return Ok(LangId::from_raw(raw));
    }
    if let Some((lang, sublang)) = value.split_once(',') {
        let index = registry::lookup_by_names(lang.trim(), sublang.trim())
            .ok_or_else(|| anyhow!("unknown language pair {}", value))?;
        return registry::descriptor(index)
            .map(|desc| desc.id)
            .ok_or_else(|| anyhow!("unknown language pair {}", value));
    }
    registry::lookup_by_tag(value)
        .map(|desc| desc.id)
        .ok_or_else(|| anyhow!("unknown language {}", value))
}
