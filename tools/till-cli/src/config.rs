//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use till_commerce::catalog::PriceEditPolicy;
use till_commerce::Currency;
use till_observability::{LogFormat, LogLevel};
use till_register::{CatalogSeed, RegisterConfig};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Terminal settings.
    #[serde(default)]
    pub terminal: TerminalConfig,

    /// Catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Register settings derived from this config.
    pub fn register_config(&self) -> RegisterConfig {
        RegisterConfig::new(self.terminal.name.clone())
            .with_currency(self.terminal.currency)
            .with_seed(self.catalog.seed)
            .with_price_edit(self.catalog.price_edit)
    }
}

/// Terminal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Terminal name, attached to every log line.
    #[serde(default = "default_terminal_name")]
    pub name: String,

    /// Currency code for prices and totals.
    #[serde(default)]
    pub currency: Currency,
}

fn default_terminal_name() -> String {
    "till-1".to_string()
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            name: default_terminal_name(),
            currency: Currency::default(),
        }
    }
}

/// Catalog settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Starting products: "demo" or "empty".
    #[serde(default)]
    pub seed: CatalogSeed,

    /// Handling of unreadable price edits: "coerce" or "reject".
    #[serde(default)]
    pub price_edit: PriceEditPolicy,
}

/// Logging settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written to stderr.
    #[serde(default)]
    pub level: LogLevel,

    /// "human" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

/// Generate a default till.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Till register configuration

[terminal]
name = "{name}"
currency = "INR"

[catalog]
# "demo" starts with the sample grocery list, "empty" with nothing
seed = "demo"
# "coerce" stores unreadable price edits as 0, "reject" refuses them
price_edit = "coerce"

[logging]
level = "info"
format = "human"
"#,
        name = name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config("lane-3")).unwrap();
        assert_eq!(config.terminal.name, "lane-3");
        assert_eq!(config.terminal.currency, Currency::INR);
        assert_eq!(config.catalog.seed, CatalogSeed::Demo);
        assert_eq!(config.catalog.price_edit, PriceEditPolicy::Coerce);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
[catalog]
price_edit = "reject"
"#,
        )
        .unwrap();
        assert_eq!(config.terminal.name, "till-1");
        assert_eq!(config.catalog.price_edit, PriceEditPolicy::Reject);

        let register = config.register_config();
        assert_eq!(register.terminal, "till-1");
        assert_eq!(register.price_edit, PriceEditPolicy::Reject);
    }

    #[test]
    fn test_currency_code_is_case_insensitive() {
        let config: CliConfig = toml::from_str(
            r#"
[terminal]
currency = "inr"
"#,
        )
        .unwrap();
        assert_eq!(config.terminal.currency, Currency::INR);
        assert!(toml::from_str::<CliConfig>("[terminal]\ncurrency = \"rupees\"\n").is_err());
    }

    #[test]
    fn test_json_config() {
        let config: CliConfig =
            serde_json::from_str(r#"{"terminal": {"currency": "USD"}, "logging": {"format": "json"}}"#)
                .unwrap();
        assert_eq!(config.terminal.currency, Currency::USD);
        assert_eq!(config.logging.format, LogFormat::Json);
    }
}
