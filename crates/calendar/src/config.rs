//! Calendar configuration.

use kalends_daynumber::{DayNumber, DayZero};
use kalends_math::AdditionRuleset;
use kalends_schema::SchemaKind;
use kalends_scope::CalendarScope;
use serde::Deserialize;
use tracing::debug;

use crate::calendar::Calendar;
use crate::error::ConfigError;

/// Named epochs accepted in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedEpoch {
    NewStyle,
    OldStyle,
    SundayBeforeNewStyle,
    Coptic,
    Ethiopic,
    Egyptian,
    Armenian,
    FrenchRepublican,
    TabularIslamic,
    Positivist,
}

impl NamedEpoch {
    pub fn day_number(self) -> DayNumber {
        match self {
            Self::NewStyle => DayZero::NEW_STYLE,
            Self::OldStyle => DayZero::OLD_STYLE,
            Self::SundayBeforeNewStyle => DayZero::SUNDAY_BEFORE_NEW_STYLE,
            Self::Coptic => DayZero::COPTIC,
            Self::Ethiopic => DayZero::ETHIOPIC,
            Self::Egyptian => DayZero::EGYPTIAN,
            Self::Armenian => DayZero::ARMENIAN,
            Self::FrenchRepublican => DayZero::FRENCH_REPUBLICAN,
            Self::TabularIslamic => DayZero::TABULAR_ISLAMIC,
            Self::Positivist => DayZero::POSITIVIST,
        }
    }
}

/// Epoch of a configured calendar: a well-known name or a raw day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum Epoch {
    Named(NamedEpoch),
    DayNumber(i32),
}

impl Default for Epoch {
    /// Returns the new-style epoch, January 1st, 1 CE (Gregorian).
    fn default() -> Self {
        Self::Named(NamedEpoch::NewStyle)
    }
}

impl Epoch {
    pub fn day_number(self) -> DayNumber {
        match self {
            Self::Named(named) => named.day_number(),
            Self::DayNumber(days) => DayNumber::from_days_since_zero(days),
        }
    }
}

/// Configuration for a [`Calendar`].
///
/// Read it from TOML or assemble it with the builder methods.
///
/// # Example
///
/// ```
/// use kalends_calendar::CalendarConfig;
/// use kalends_math::AdditionRule;
/// use kalends_schema::SchemaKind;
///
/// let config = CalendarConfig::from_toml_str(
///     r#"
///     name = "coptic"
///     schema = "coptic13"
///     epoch = "coptic"
///
///     [rules]
///     date = "exact"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.schema(), SchemaKind::Coptic13);
///
/// let calendar = config.with_max_year(3000).build().unwrap();
/// assert_eq!(calendar.rules().date, AdditionRule::Exact);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    name: String,
    schema: SchemaKind,
    #[serde(default)]
    epoch: Epoch,
    #[serde(default = "default_min_year")]
    min_year: i32,
    #[serde(default = "default_max_year")]
    max_year: i32,
    #[serde(default)]
    rules: AdditionRuleset,
}

fn default_min_year() -> i32 {
    1
}
fn default_max_year() -> i32 {
    9999
}

impl CalendarConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `epoch = new_style`, `min_year = 1`, `max_year = 9999`,
    /// every addition rule `truncate`.
    pub fn new(name: impl Into<String>, schema: SchemaKind) -> Self {
        Self {
            name: name.into(),
            schema,
            epoch: Epoch::default(),
            min_year: default_min_year(),
            max_year: default_max_year(),
            rules: AdditionRuleset::default(),
        }
    }

    /// Parses a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML, unknown keys, or
    /// unknown schema, epoch or rule names.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_schema(mut self, schema: SchemaKind) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_epoch(mut self, epoch: Epoch) -> Self {
        self.epoch = epoch;
        self
    }

    pub fn with_min_year(mut self, year: i32) -> Self {
        self.min_year = year;
        self
    }

    pub fn with_max_year(mut self, year: i32) -> Self {
        self.max_year = year;
        self
    }

    pub fn with_rules(mut self, rules: AdditionRuleset) -> Self {
        self.rules = rules;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> SchemaKind {
        self.schema
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn rules(&self) -> AdditionRuleset {
        self.rules
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] if the name is blank or the
    /// year range is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig {
                reason: "name must not be empty".to_string(),
            });
        }
        if self.min_year > self.max_year {
            return Err(ConfigError::InvalidConfig {
                reason: format!(
                    "min_year ({}) must not exceed max_year ({})",
                    self.min_year, self.max_year
                ),
            });
        }
        Ok(())
    }

    /// Validates the configuration and builds the calendar.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] from [`validate`](Self::validate),
    /// or [`ConfigError::Calendar`] if the schema cannot cover the years.
    #[tracing::instrument(skip(self), fields(name = %self.name, schema = self.schema.name()))]
    pub fn build(&self) -> Result<Calendar, ConfigError> {
        self.validate()?;
        let scope = CalendarScope::new(
            self.schema.schema(),
            self.epoch.day_number(),
            self.min_year..=self.max_year,
        )?;
        debug!("built calendar from config");
        Ok(Calendar::new(self.name.clone(), scope).with_rules(self.rules))
    }
}
