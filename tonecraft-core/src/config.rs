//! Configuration file support for Tonecraft
//!
//! Loads salon-specific configuration from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.tonecraftrc.json` in the working root
//! 3. `tonecraft.config.json` in the working root
//!
//! All fields are optional. CLI flags take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tonecraft configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TonecraftConfig {
    /// Processing-time tunables
    #[serde(default)]
    pub timing: Option<TimingConfig>,

    /// Session-planning tunables
    #[serde(default)]
    pub sessions: Option<SessionConfig>,

    /// Condition-adjustment thresholds
    #[serde(default)]
    pub adjustments: Option<AdjustmentConfig>,
}

/// Processing-time tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimingConfig {
    /// Nominal processing minutes before scaling (default: 30)
    pub base_processing_minutes: Option<u32>,
    /// Enforced processing floor in minutes (default: 15)
    pub minimum_processing_minutes: Option<u32>,
    /// Fixed application phase in minutes (default: 15)
    pub application_minutes: Option<u32>,
    /// Toning phase in minutes when a toner applies (default: 20)
    pub toning_minutes: Option<u32>,
}

/// Session-planning tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Maximum safe lift per salon visit (default: 4)
    pub max_lift_per_session: Option<u8>,
    /// Cooldown between visits in days (default: 14)
    pub days_between_sessions: Option<u32>,
}

/// Condition-adjustment thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjustmentConfig {
    /// Porosity above which developer strength is reduced (default: 7)
    pub high_porosity_threshold: Option<u8>,
    /// Level difference above which a bond builder is advised (default: 3)
    pub bond_builder_threshold: Option<u8>,
}

/// Resolved configuration with defaults applied
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_processing_minutes: u32,
    pub minimum_processing_minutes: u32,
    pub application_minutes: u32,
    pub toning_minutes: u32,
    pub max_lift_per_session: u8,
    pub days_between_sessions: u32,
    pub high_porosity_threshold: u8,
    pub bond_builder_threshold: u8,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl TonecraftConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        if let Some(ref t) = self.timing {
            let base = t.base_processing_minutes.unwrap_or(30);
            let minimum = t.minimum_processing_minutes.unwrap_or(15);
            let application = t.application_minutes.unwrap_or(15);
            let toning = t.toning_minutes.unwrap_or(20);

            for (name, value) in [
                ("timing.base_processing_minutes", base),
                ("timing.minimum_processing_minutes", minimum),
                ("timing.application_minutes", application),
                ("timing.toning_minutes", toning),
            ] {
                if value == 0 {
                    anyhow::bail!("{} must be positive (got {})", name, value);
                }
            }
            if minimum > base {
                anyhow::bail!(
                    "timing.minimum_processing_minutes ({}) must not exceed timing.base_processing_minutes ({})",
                    minimum,
                    base
                );
            }
        }

        if let Some(ref s) = self.sessions {
            let max_lift = s.max_lift_per_session.unwrap_or(4);
            let days = s.days_between_sessions.unwrap_or(14);

            if !(1..=9).contains(&max_lift) {
                anyhow::bail!(
                    "sessions.max_lift_per_session must be between 1 and 9 (got {})",
                    max_lift
                );
            }
            if days == 0 {
                anyhow::bail!("sessions.days_between_sessions must be positive (got {})", days);
            }
        }

        if let Some(ref a) = self.adjustments {
            let porosity = a.high_porosity_threshold.unwrap_or(7);
            let bond = a.bond_builder_threshold.unwrap_or(3);

            if !(1..=10).contains(&porosity) {
                anyhow::bail!(
                    "adjustments.high_porosity_threshold must be between 1 and 10 (got {})",
                    porosity
                );
            }
            if !(1..=9).contains(&bond) {
                anyhow::bail!(
                    "adjustments.bond_builder_threshold must be between 1 and 9 (got {})",
                    bond
                );
            }
        }

        Ok(())
    }

    /// Resolve config into a form ready for use
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let (base, minimum, application, toning) = match &self.timing {
            Some(t) => (
                t.base_processing_minutes.unwrap_or(30),
                t.minimum_processing_minutes.unwrap_or(15),
                t.application_minutes.unwrap_or(15),
                t.toning_minutes.unwrap_or(20),
            ),
            None => (30, 15, 15, 20),
        };

        let (max_lift, days) = match &self.sessions {
            Some(s) => (
                s.max_lift_per_session.unwrap_or(4),
                s.days_between_sessions.unwrap_or(14),
            ),
            None => (4, 14),
        };

        let (porosity_threshold, bond_threshold) = match &self.adjustments {
            Some(a) => (
                a.high_porosity_threshold.unwrap_or(7),
                a.bond_builder_threshold.unwrap_or(3),
            ),
            None => (7, 3),
        };

        Ok(ResolvedConfig {
            base_processing_minutes: base,
            minimum_processing_minutes: minimum,
            application_minutes: application,
            toning_minutes: toning,
            max_lift_per_session: max_lift,
            days_between_sessions: days,
            high_porosity_threshold: porosity_threshold,
            bond_builder_threshold: bond_threshold,
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Result<Self> {
        TonecraftConfig::default().resolve()
    }
}

/// Discover and load a config file from the working root
///
/// Search order:
/// 1. `.tonecraftrc.json`
/// 2. `tonecraft.config.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(root: &Path) -> Result<Option<(TonecraftConfig, PathBuf)>> {
    let rc_path = root.join(".tonecraftrc.json");
    if rc_path.exists() {
        let config = load_config_file(&rc_path)?;
        return Ok(Some((config, rc_path)));
    }

    let config_path = root.join("tonecraft.config.json");
    if config_path.exists() {
        let config = load_config_file(&config_path)?;
        return Ok(Some((config, config_path)));
    }

    Ok(None)
}

/// Load a config file from an explicit path
pub fn load_config_file(path: &Path) -> Result<TonecraftConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))
}

/// Load and resolve configuration, preferring an explicit path
pub fn load_and_resolve(root: &Path, explicit_path: Option<&Path>) -> Result<ResolvedConfig> {
    if let Some(path) = explicit_path {
        let config = load_config_file(path)?;
        let mut resolved = config.resolve()?;
        resolved.config_path = Some(path.to_path_buf());
        return Ok(resolved);
    }

    match discover_config(root)? {
        Some((config, path)) => {
            let mut resolved = config.resolve()?;
            resolved.config_path = Some(path);
            Ok(resolved)
        }
        None => ResolvedConfig::defaults(),
    }
}
