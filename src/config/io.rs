use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Id of the `<script type="application/toml">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "folio-motion-config";

/// Parse the sectioned TOML form into a flat config.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables =
        toml::from_str(contents).context("Invalid folio-motion config TOML")?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config))
        .context("Failed to serialize folio-motion config")
}

/// Resolve the effective config from the embedded block's text, if any.
///
/// A missing block means defaults; an unparsable one is logged and also
/// yields defaults so the page is still enhanced.
pub fn load_config(contents: Option<&str>) -> AppConfig {
    let Some(contents) = contents.map(str::trim).filter(|text| !text.is_empty()) else {
        debug!(element = CONFIG_ELEMENT_ID, "No embedded config; using defaults");
        return AppConfig::default();
    };

    match parse_config(contents) {
        Ok(config) => {
            info!(element = CONFIG_ELEMENT_ID, "Loaded embedded config");
            config
        }
        Err(err) => {
            warn!(element = CONFIG_ELEMENT_ID, "Falling back to default config: {err:#}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn missing_block_yields_defaults() {
        assert_eq!(load_config(None), AppConfig::default());
        assert_eq!(load_config(Some("   \n")), AppConfig::default());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = load_config(Some(
            r#"
            [dom]
            navbar_id = "site-header"

            [logging]
            log_level = "debug"
            "#,
        ));

        assert_eq!(config.navbar_id, "site-header");
        assert_eq!(config.nav_links_id, "navLinks");
        assert_eq!(config.scrolled_class, "scrolled");
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let config = load_config(Some("[classes\nactive = 3"));
        assert_eq!(config, AppConfig::default());
        assert!(parse_config("[timing]\nresize_debounce_ms = \"soon\"").is_err());
    }

    #[test]
    fn top_level_keys_are_not_read_as_settings() {
        let config = parse_config("navbar_id = \"site-header\"\nlog_level = \"debug\"").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn serialized_config_uses_sectioned_tables() {
        let mut config = AppConfig::default();
        config.visible_class = "in-view".to_string();

        let text = serialize_config(&config).unwrap();
        assert!(text.contains("[classes]"));
        assert!(text.contains("visible = \"in-view\""));
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}
