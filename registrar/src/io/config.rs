//! Rule configuration stored in `registrar.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::rules::{
    CreditCeilingRule, CreditFloorRule, DEFAULT_MAX_CREDITS, DEFAULT_MIN_CREDITS,
    PrerequisiteRule, ValidationRule,
};

/// Default config file name used by the binary.
pub const DEFAULT_CONFIG_FILE: &str = "registrar.toml";

/// Registrar configuration (TOML).
///
/// `rules` is evaluated in file order. Missing fields default to the stock
/// floor(12), ceiling(24), prerequisite list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegistrarConfig {
    pub rules: Vec<RuleConfig>,
}

/// One entry of the `[[rules]]` array.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConfig {
    CreditFloor {
        #[serde(default = "default_min_credits")]
        min_credits: u32,
    },
    CreditCeiling {
        #[serde(default = "default_max_credits")]
        max_credits: u32,
    },
    Prerequisite,
}

fn default_min_credits() -> u32 {
    DEFAULT_MIN_CREDITS
}

fn default_max_credits() -> u32 {
    DEFAULT_MAX_CREDITS
}

impl RuleConfig {
    pub fn build(self) -> Box<dyn ValidationRule> {
        match self {
            Self::CreditFloor { min_credits } => Box::new(CreditFloorRule::new(min_credits)),
            Self::CreditCeiling { max_credits } => Box::new(CreditCeilingRule::new(max_credits)),
            Self::Prerequisite => Box::new(PrerequisiteRule),
        }
    }
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                RuleConfig::CreditFloor {
                    min_credits: DEFAULT_MIN_CREDITS,
                },
                RuleConfig::CreditCeiling {
                    max_credits: DEFAULT_MAX_CREDITS,
                },
                RuleConfig::Prerequisite,
            ],
        }
    }
}

impl RegistrarConfig {
    /// Reject a floor that sits above a ceiling; no record could ever pass.
    pub fn validate(&self) -> Result<()> {
        let highest_floor = self
            .rules
            .iter()
            .filter_map(|rule| match rule {
                RuleConfig::CreditFloor { min_credits } => Some(*min_credits),
                _ => None,
            })
            .max();
        let lowest_ceiling = self
            .rules
            .iter()
            .filter_map(|rule| match rule {
                RuleConfig::CreditCeiling { max_credits } => Some(*max_credits),
                _ => None,
            })
            .min();

        match (highest_floor, lowest_ceiling) {
            (Some(min), Some(max)) if min > max => Err(anyhow!(
                "min_credits {min} exceeds max_credits {max}: no registration can pass"
            )),
            _ => Ok(()),
        }
    }

    /// Instantiate the configured rules in file order.
    pub fn build_rules(&self) -> Vec<Box<dyn ValidationRule>> {
        self.rules.iter().map(|rule| rule.build()).collect()
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RegistrarConfig::default()`.
pub fn load_config(path: &Path) -> Result<RegistrarConfig> {
    if !path.exists() {
        let cfg = RegistrarConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read registrar config {}", path.display()))?;
    let cfg: RegistrarConfig = toml::from_str(&contents)
        .with_context(|| format!("parse registrar config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &RegistrarConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize registrar config")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("registrar config path has no parent {}", path.display()))?;
    fs::create_dir_all(parent)
        .with_context(|| format!("create config directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp registrar config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("replace registrar config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, RegistrarConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("registrar.toml");
        let cfg = RegistrarConfig::default();
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn parses_rules_in_file_order_with_defaults() {
        let cfg: RegistrarConfig = toml::from_str(
            r#"
            [[rules]]
            kind = "prerequisite"

            [[rules]]
            kind = "credit_ceiling"
            max_credits = 20

            [[rules]]
            kind = "credit_floor"
            "#,
        )
        .expect("parse");
        assert_eq!(
            cfg.rules,
            vec![
                RuleConfig::Prerequisite,
                RuleConfig::CreditCeiling { max_credits: 20 },
                RuleConfig::CreditFloor { min_credits: 12 },
            ]
        );
        let names: Vec<&str> = cfg.build_rules().iter().map(|rule| rule.name()).collect();
        assert_eq!(
            names,
            vec!["PrerequisiteRule", "CreditCeilingRule", "CreditFloorRule"]
        );
    }

    #[test]
    fn empty_rules_table_is_allowed() {
        let cfg: RegistrarConfig = toml::from_str("rules = []").expect("parse");
        cfg.validate().expect("validate");
        assert!(cfg.build_rules().is_empty());
    }

    #[test]
    fn rejects_floor_above_ceiling() {
        let cfg = RegistrarConfig {
            rules: vec![
                RuleConfig::CreditFloor { min_credits: 30 },
                RuleConfig::CreditCeiling { max_credits: 24 },
            ],
        };
        let err = cfg.validate().expect_err("invalid bounds");
        assert!(err.to_string().contains("exceeds max_credits"));
    }

    #[test]
    fn rejects_unknown_rule_kind() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("registrar.toml");
        fs::write(&path, "[[rules]]\nkind = \"gpa\"\n").expect("write");
        let err = load_config(&path).expect_err("unknown kind");
        let message = format!("{err:#}");
        assert!(message.contains("parse registrar config"));
        assert!(message.contains("registrar.toml"));
    }
}
