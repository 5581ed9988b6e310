use std::env;
use std::str::FromStr;

use crate::graph::GraphKind;
use crate::{Error, Result};

/// How the path report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::InvalidArgument(format!(
                "unknown output format '{}', expected 'text' or 'json'",
                other
            ))),
        }
    }
}

/// Configuration for the `sssp` command line tool
#[derive(Debug, Clone)]
pub struct Config {
    pub source: String,
    pub destination: String,
    pub format: OutputFormat,
    pub graph_kind: GraphKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: "torino".to_string(),
            destination: "catania".to_string(),
            format: OutputFormat::Text,
            graph_kind: GraphKind::Directed,
        }
    }
}

impl Config {
    pub const SOURCE_VAR: &'static str = "SSSP_SOURCE";
    pub const DESTINATION_VAR: &'static str = "SSSP_DESTINATION";
    pub const FORMAT_VAR: &'static str = "SSSP_FORMAT";
    pub const UNDIRECTED_VAR: &'static str = "SSSP_UNDIRECTED";

    /// Defaults overridden by the `SSSP_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(source) = lookup(Self::SOURCE_VAR) {
            config.source = non_empty(Self::SOURCE_VAR, source)?;
        }
        if let Some(destination) = lookup(Self::DESTINATION_VAR) {
            config.destination = non_empty(Self::DESTINATION_VAR, destination)?;
        }
        if let Some(format) = lookup(Self::FORMAT_VAR) {
            config.format = format.parse()?;
        }
        if let Some(flag) = lookup(Self::UNDIRECTED_VAR) {
            config.graph_kind = match flag.trim() {
                "1" | "true" | "yes" => GraphKind::Undirected,
                "0" | "false" | "no" | "" => GraphKind::Directed,
                other => {
                    return Err(Error::InvalidArgument(format!(
                        "{} must be a boolean, got '{}'",
                        Self::UNDIRECTED_VAR,
                        other
                    )))
                }
            };
        }

        Ok(config)
    }
}

fn non_empty(var: &str, value: String) -> Result<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{} must not be empty", var)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.source, "torino");
        assert_eq!(config.destination, "catania");
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.graph_kind, GraphKind::Directed);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SSSP_SOURCE", "milano"),
            ("SSSP_FORMAT", "JSON"),
            ("SSSP_UNDIRECTED", "true"),
        ]))
        .unwrap();
        assert_eq!(config.source, "milano");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.graph_kind, GraphKind::Undirected);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("SSSP_FORMAT", "xml")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SSSP_SOURCE", "  ")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SSSP_UNDIRECTED", "maybe")])).is_err());
    }
}
