//! Pattern catalog for PII detection
//!
//! The catalog is an ordered list of [`PatternRule`]s, one per category.
//! Order comes from [`CategoryId`] and never from the pattern file, so a
//! user override can change what a category matches but not how it ranks.

use crate::detection::models::CategoryId;
use crate::domain::{Result, ShieldError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which slice of the canonical catalog to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVariant {
    /// All thirteen categories
    #[default]
    Extended,
    /// Email, SSN, PAN, Aadhaar, phone and credit card only
    Minimal,
}

impl CatalogVariant {
    /// Whether a category belongs to this variant
    pub fn includes(&self, category: CategoryId) -> bool {
        match self {
            Self::Extended => true,
            Self::Minimal => category.in_minimal(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extended => "extended",
            Self::Minimal => "minimal",
        }
    }
}

impl fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extended" => Ok(Self::Extended),
            "minimal" => Ok(Self::Minimal),
            _ => Err(format!("Unknown catalog variant: {s}")),
        }
    }
}

/// Compiled rule for one category
#[derive(Debug, Clone)]
pub struct PatternRule {
    id: CategoryId,
    regex: Regex,
}

impl PatternRule {
    /// Compile a rule, reporting a bad regex as a configuration error
    pub fn new(id: CategoryId, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            ShieldError::Configuration(format!("Invalid regex for category '{id}': {e}"))
        })?;

        Ok(Self {
            id,
            regex,
        })
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// `[patterns]` table shared by the built-in library and override files
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatternOverrides {
    /// Category wire name to regex source
    #[serde(default)]
    pub patterns: BTreeMap<String, String>,
}

impl PatternOverrides {
    /// Parse overrides from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load overrides from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ShieldError::Configuration(format!(
                "Failed to read pattern file {}: {e}",
                path.as_ref().display()
            ))
        })?;

        Self::from_toml(&content)
    }

    fn resolved(&self) -> Result<BTreeMap<CategoryId, &str>> {
        let mut resolved = BTreeMap::new();
        for (name, pattern) in &self.patterns {
            let category: CategoryId = name.parse().map_err(|e: String| {
                ShieldError::Configuration(format!("Invalid pattern entry '{name}': {e}"))
            })?;
            resolved.insert(category, pattern.as_str());
        }
        Ok(resolved)
    }
}

/// Ordered, immutable set of pattern rules
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    variant: CatalogVariant,
    rules: Vec<PatternRule>,
}

impl PatternCatalog {
    /// Build the catalog from the embedded pattern library
    pub fn builtin(variant: CatalogVariant) -> Result<Self> {
        Self::with_overrides(variant, &PatternOverrides::default())
    }

    /// Build the catalog with some categories' regexes replaced
    pub fn with_overrides(variant: CatalogVariant, overrides: &PatternOverrides) -> Result<Self> {
        let library = PatternOverrides::from_toml(Self::default_library())?;
        let mut sources = library.resolved()?;
        sources.extend(overrides.resolved()?);

        let mut rules = Vec::new();
        for category in CategoryId::ALL {
            if !variant.includes(category) {
                continue;
            }
            let pattern = sources.get(&category).ok_or_else(|| {
                ShieldError::Configuration(format!("No pattern defined for category '{category}'"))
            })?;
            rules.push(PatternRule::new(category, pattern)?);
        }

        Ok(Self { variant, rules })
    }

    /// TOML source of the built-in pattern library
    pub fn default_library() -> &'static str {
        include_str!("../../../patterns/pii_patterns.toml")
    }

    /// Rules in catalog order
    pub fn categories(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Rule for one category, if the variant includes it
    pub fn rule(&self, category: CategoryId) -> Option<&PatternRule> {
        self.rules.iter().find(|rule| rule.id == category)
    }

    pub fn variant(&self) -> CatalogVariant {
        self.variant
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
