//! Tonecraft CLI - hair-color formulation advisor

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tonecraft_core::{
    config, plan_sessions_with_config, recommend_with_config, render_json, render_plan_text,
    render_text, FormulaStore, FormulationRecommendation, FormulationRequest, HairCondition,
    HairProfile, ResolvedConfig, ScalpCondition, Texture, ToneSpecification,
};

#[derive(Parser)]
#[command(name = "tonecraft")]
#[command(
    about = "Hair-color formulation advisor: developer strength, processing time, mixing ratio, toning, and session planning"
)]
#[command(version = env!("TONECRAFT_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a single formulation recommendation
    Recommend {
        #[command(flatten)]
        client: ClientArgs,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Plan the journey as safely-bounded sessions
    Plan {
        #[command(flatten)]
        client: ClientArgs,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Manage saved formulas
    Formulas {
        #[command(subcommand)]
        action: FormulasAction,

        /// Path to the formula store
        #[arg(long, default_value = ".tonecraft/formulas.db")]
        db: PathBuf,
    },
    /// Validate a configuration file
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum FormulasAction {
    /// Compute a recommendation from client inputs and save it
    Save {
        /// User the formula belongs to
        #[arg(long)]
        user: String,

        /// Label for the saved formula
        #[arg(long)]
        label: String,

        #[command(flatten)]
        client: ClientArgs,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List a user's saved formulas
    List {
        /// User whose formulas to list
        #[arg(long)]
        user: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Delete a saved formula by id
    Delete {
        /// User the formula belongs to
        #[arg(long)]
        user: String,

        /// Id of the formula to delete
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file without computing anything
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

/// Client inputs shared by recommend, plan, and formulas save
#[derive(Args)]
struct ClientArgs {
    /// Current level (1 darkest - 10 lightest)
    #[arg(long)]
    start: u8,

    /// Target level (1 darkest - 10 lightest)
    #[arg(long)]
    target: u8,

    /// Porosity (1 low - 10 high)
    #[arg(long, default_value_t = 5)]
    porosity: u8,

    /// Hair texture
    #[arg(long, value_enum, default_value_t = TextureArg::Medium)]
    texture: TextureArg,

    /// Scalp condition
    #[arg(long, value_enum, default_value_t = ScalpArg::Healthy)]
    scalp: ScalpArg,

    /// Hair is resistant to processing
    #[arg(long)]
    resistant: bool,

    /// Hair was previously bleached
    #[arg(long)]
    bleached: bool,

    /// Hair was previously color-treated
    #[arg(long)]
    color_treated: bool,

    /// Current tone name, e.g. "Ash Black"
    #[arg(long)]
    start_tone: Option<String>,

    /// Target tone name, e.g. "Copper Black"
    #[arg(long)]
    target_tone: Option<String>,

    /// Tone intensity (1-10)
    #[arg(long, default_value_t = 5)]
    tone_intensity: u8,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum TextureArg {
    Fine,
    Medium,
    Coarse,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ScalpArg {
    Healthy,
    Sensitive,
    Irritated,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl ClientArgs {
    fn to_request(&self) -> anyhow::Result<FormulationRequest> {
        // Tones travel together; reject half-specified input before the engine runs
        if self.start_tone.is_some() != self.target_tone.is_some() {
            anyhow::bail!("--start-tone and --target-tone must be provided together");
        }

        let texture = match self.texture {
            TextureArg::Fine => Texture::Fine,
            TextureArg::Medium => Texture::Medium,
            TextureArg::Coarse => Texture::Coarse,
        };
        let scalp = match self.scalp {
            ScalpArg::Healthy => ScalpCondition::Healthy,
            ScalpArg::Sensitive => ScalpCondition::Sensitive,
            ScalpArg::Irritated => ScalpCondition::Irritated,
        };

        Ok(FormulationRequest {
            profile: HairProfile {
                starting_level: self.start,
                target_level: self.target,
                porosity: self.porosity,
            },
            condition: HairCondition {
                texture,
                scalp,
                resistant: self.resistant,
                bleached: self.bleached,
                color_treated: self.color_treated,
            },
            start_tone: self
                .start_tone
                .as_ref()
                .map(|name| ToneSpecification::new(name.clone(), self.tone_intensity)),
            target_tone: self
                .target_tone
                .as_ref()
                .map(|name| ToneSpecification::new(name.clone(), self.tone_intensity)),
        })
    }
}

fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<ResolvedConfig> {
    let root = std::env::current_dir()?;
    let resolved = config::load_and_resolve(&root, explicit.map(PathBuf::as_path))
        .context("failed to load configuration")?;
    if let Some(path) = &resolved.config_path {
        eprintln!("Using config: {}", path.display());
    }
    Ok(resolved)
}

fn compute_recommendation(
    client: &ClientArgs,
    config_path: Option<&PathBuf>,
) -> anyhow::Result<FormulationRecommendation> {
    let resolved = load_config(config_path)?;
    let request = client.to_request()?;
    recommend_with_config(&request, &resolved)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            client,
            format,
            config: config_path,
        } => {
            let recommendation = compute_recommendation(&client, config_path.as_ref())?;
            match format {
                OutputFormat::Text => print!("{}", render_text(&recommendation)),
                OutputFormat::Json => println!("{}", render_json(&recommendation)),
            }
        }
        Commands::Plan {
            client,
            format,
            config: config_path,
        } => {
            let resolved = load_config(config_path.as_ref())?;
            let request = client.to_request()?;
            let plan = plan_sessions_with_config(&request, &resolved)?;
            match format {
                OutputFormat::Text => print!("{}", render_plan_text(&plan)),
                OutputFormat::Json => println!("{}", render_json(&plan)),
            }
        }
        Commands::Formulas { action, db } => match action {
            FormulasAction::Save {
                user,
                label,
                client,
                config: config_path,
            } => {
                let recommendation = compute_recommendation(&client, config_path.as_ref())?;
                let mut store = FormulaStore::open(&db)?;
                let saved = store.save(&user, &label, &recommendation)?;
                println!("Saved formula {} ({}) for {}", saved.id, saved.label, user);
            }
            FormulasAction::List { user, format } => {
                let store = FormulaStore::open(&db)?;
                let formulas = store.list(&user)?;
                match format {
                    OutputFormat::Json => println!("{}", render_json(&formulas)),
                    OutputFormat::Text => {
                        if formulas.is_empty() {
                            println!("No saved formulas for {}", user);
                        } else {
                            println!(
                                "{:<6} {:<20} {:<10} {:<8} {}",
                                "ID", "LABEL", "DEVELOPER", "TIME", "RATIO"
                            );
                            for formula in &formulas {
                                let developer =
                                    format!("{} vol", formula.recommendation.developer_volume);
                                let time = format!(
                                    "{} min",
                                    formula.recommendation.processing_time_minutes
                                );
                                println!(
                                    "{:<6} {:<20} {:<10} {:<8} {}",
                                    formula.id,
                                    formula.label,
                                    developer,
                                    time,
                                    formula.recommendation.mixing_ratio
                                );
                            }
                        }
                    }
                }
            }
            FormulasAction::Delete { user, id } => {
                let mut store = FormulaStore::open(&db)?;
                if store.delete(&user, id)? {
                    println!("Deleted formula {}", id);
                } else {
                    anyhow::bail!("no formula {} saved for {}", id, user);
                }
            }
        },
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let root = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&root, path.as_deref());
                match resolved {
                    Ok(resolved) => {
                        if let Some(ref p) = resolved.config_path {
                            println!("Config valid: {}", p.display());
                        } else {
                            println!("No config file found. Using defaults.");
                        }
                    }
                    Err(e) => anyhow::bail!("invalid configuration: {:#}", e),
                }
            }
            ConfigAction::Show { path } => {
                let root = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&root, path.as_deref())?;
                if let Some(ref p) = resolved.config_path {
                    println!("Config: {}", p.display());
                } else {
                    println!("Config: defaults (no file found)");
                }
                println!(
                    "base_processing_minutes    = {}",
                    resolved.base_processing_minutes
                );
                println!(
                    "minimum_processing_minutes = {}",
                    resolved.minimum_processing_minutes
                );
                println!("application_minutes        = {}", resolved.application_minutes);
                println!("toning_minutes             = {}", resolved.toning_minutes);
                println!(
                    "max_lift_per_session       = {}",
                    resolved.max_lift_per_session
                );
                println!(
                    "days_between_sessions      = {}",
                    resolved.days_between_sessions
                );
                println!(
                    "high_porosity_threshold    = {}",
                    resolved.high_porosity_threshold
                );
                println!(
                    "bond_builder_threshold     = {}",
                    resolved.bond_builder_threshold
                );
            }
        },
    }

    Ok(())
}
