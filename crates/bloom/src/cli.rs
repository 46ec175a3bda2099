//! Command-line interface.
//!
//! ```text
//! bloom build [TEMPLATE]          render themes for every variant
//! bloom build-template <INPUT>    turn a theme back into a template
//! bloom init [THEME_FILE]         add README section and LICENSE
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bloom_render::{
    formats_table, ExtractOptions, FormatConfig, Notation, Variant, DEFAULT_PREFIX,
};
use clap::{Args, Parser, Subcommand};
use console::style;

use crate::builder::{self, find_default_template, Extracted};
use crate::config::{BuildConfig, BuildTemplateConfig};
use crate::scaffold;

#[derive(Debug, Parser)]
#[command(name = "bloom")]
#[command(version, about = "Rosé Pine theme generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate theme files from a template
    Build(BuildArgs),
    /// Build a template from an existing theme file
    BuildTemplate(BuildTemplateArgs),
    /// Initialise a theme repository
    Init(InitArgs),
}

/// Color formatting flags shared by `build` and `build-template`.
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// Token prefix
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Color output format
    #[arg(short, long, default_value = "hex", long_help = format_long_help())]
    pub format: Notation,

    /// Remove decorators from color values
    #[arg(long)]
    pub plain: bool,

    /// Remove commas from color values
    #[arg(long)]
    pub no_commas: bool,

    /// Remove spaces from color values
    #[arg(long)]
    pub no_spaces: bool,
}

impl FormatArgs {
    pub fn format_config(&self) -> FormatConfig {
        FormatConfig::new(self.format)
            .plain(self.plain)
            .commas(!self.no_commas)
            .spaces(!self.no_spaces)
    }
}

fn format_long_help() -> String {
    format!("Color output format:\n{}", formats_table())
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Template file or directory (default: ./template.*)
    pub template: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    #[command(flatten)]
    pub format: FormatArgs,

    /// Generate one theme per accent even without accent tokens
    #[arg(long)]
    pub accents: bool,
}

#[derive(Debug, Clone, Args)]
pub struct BuildTemplateArgs {
    /// Theme file or directory to convert
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Variant the theme was built for (main, moon, dawn)
    #[arg(short, long, default_value = "main")]
    pub variant: Variant,

    #[command(flatten)]
    pub format: FormatArgs,

    /// Also turn `dark`/`light` into the appearance token
    #[arg(long)]
    pub include_appearance: bool,
}

#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Existing theme file to create a template from
    pub theme_file: Option<PathBuf>,

    /// Variant the theme file was built for (main, moon, dawn)
    #[arg(short, long, default_value = "main")]
    pub variant: Variant,

    /// Template output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

/// Runs a parsed command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build(args) => run_build(args),
        Command::BuildTemplate(args) => run_build_template(args),
        Command::Init(args) => run_init(args, Path::new(".")),
    }
}

fn run_build(args: BuildArgs) -> Result<()> {
    let template = match args.template {
        Some(path) => path,
        None => find_default_template(Path::new("."))?,
    };

    println!("Building themes from {}...", template.display());

    let config = BuildConfig::new(&template)
        .with_output(&args.output)
        .with_prefix(args.format.prefix.as_str())
        .with_format(args.format.format_config())
        .with_accents(args.accents);
    let report = builder::build(&config).context("error building themes")?;

    println!(
        "{} themes generated in {}",
        report.written.len(),
        args.output.display()
    );
    Ok(())
}

fn run_build_template(args: BuildTemplateArgs) -> Result<()> {
    let config = BuildTemplateConfig::new(&args.input)
        .with_output(&args.output)
        .with_variant(args.variant)
        .with_prefix(args.format.prefix.as_str())
        .with_format(args.format.format_config())
        .with_extract(ExtractOptions {
            include_appearance: args.include_appearance,
        });

    let results = builder::build_template(&config).context("error building template")?;
    report_extracted(&results, config.format.notation);
    Ok(())
}

fn run_init(args: InitArgs, dir: &Path) -> Result<()> {
    println!("Initialising theme...");

    // Scaffolding failures are reported and do not stop the remaining steps.
    match scaffold::ensure_readme(dir) {
        Ok(readme) => {
            report_rename(&readme);
            println!("Updated {}", scaffold::README);
        }
        Err(err) => eprintln!("Error updating README: {err}"),
    }

    match scaffold::ensure_license(dir) {
        Ok(license) => {
            report_rename(&license);
            if license.written {
                println!("Updated {}", scaffold::LICENSE);
            }
        }
        Err(err) => eprintln!("Error updating LICENSE: {err}"),
    }

    if let Some(theme_file) = args.theme_file {
        println!("Creating template from {}...", theme_file.display());
        let config = BuildTemplateConfig::new(&theme_file)
            .with_output(&args.output)
            .with_variant(args.variant);
        let results = builder::build_template(&config).context("error creating template")?;
        report_extracted(&results, config.format.notation);
        println!("Template created in {}", args.output.display());
    }

    println!("Theme initialised");
    Ok(())
}

fn report_rename(file: &scaffold::Scaffolded) {
    if let Some(from) = &file.renamed_from {
        println!("Renamed {} to {}", from.display(), file.path.display());
    }
}

/// Prints written templates, with the format table for files that had no
/// recognised colors.
fn report_extracted(results: &[Extracted], notation: Notation) {
    for result in results {
        if !result.matched {
            println!(
                "{}",
                style(format!(
                    "No matches for specified format ({notation}) in {}. Available formats:",
                    result.input.display()
                ))
                .yellow()
            );
            println!("{}", formats_table());
        }
        println!("Template written to {}", result.output.display());
    }
}
