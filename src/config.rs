// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlNode};
use miette::{Diagnostic, IntoDiagnostic};
use std::error::Error;
use std::fmt;
use tokio::fs::read_to_string;
use tracing::Level;

pub const DEFAULT_CONFIG_PATH: &str = "config.kdl";

#[derive(Clone, Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
	pub level: Level,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self { level: Level::INFO }
	}
}

#[derive(Debug, Diagnostic)]
pub enum ConfigError {
	#[diagnostic(help("add a `{0}` block to the config file"))]
	MissingSection(&'static str),
	#[diagnostic(help("add `{key}` inside the `{section}` block"))]
	MissingValue { section: &'static str, key: &'static str },
	#[diagnostic(help("expected one of: trace, debug, info, warn, error"))]
	InvalidLogLevel(String),
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingSection(section) => write!(f, "config is missing the `{}` section", section),
			Self::MissingValue { section, key } => {
				write!(f, "config section `{}` is missing a string value for `{}`", section, key)
			}
			Self::InvalidLogLevel(level) => write!(f, "`{}` is not a log level", level),
		}
	}
}

impl Error for ConfigError {}

pub async fn parse_config(config_path: &str) -> miette::Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	let config = parse_config_document(&config_file_contents)?;
	Ok(config)
}

pub fn parse_config_document(contents: &str) -> miette::Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let web_section = section(&document, "web").ok_or(ConfigError::MissingSection("web"))?;
	let bind_addr = string_value(web_section, "bind-addr").ok_or(ConfigError::MissingValue {
		section: "web",
		key: "bind-addr",
	})?;
	let web = WebConfig { bind_addr };

	let logging = match section(&document, "logging") {
		Some(logging_section) => match string_value(logging_section, "level") {
			Some(level) => LoggingConfig {
				level: level.parse().map_err(|_| ConfigError::InvalidLogLevel(level.clone()))?,
			},
			None => LoggingConfig::default(),
		},
		None => LoggingConfig::default(),
	};

	Ok(ConfigData { web, logging })
}

fn section<'a>(document: &'a KdlDocument, name: &str) -> Option<&'a KdlDocument> {
	document.get(name).and_then(KdlNode::children)
}

fn string_value(section: &KdlDocument, key: &str) -> Option<String> {
	section
		.get_arg(key)
		.and_then(|value| value.as_string())
		.map(String::from)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_config_parses() {
		let config = parse_config_document(
			r#"
			web {
				bind-addr "0.0.0.0:8080"
			}
			logging {
				level "debug"
			}
			"#,
		)
		.expect("config is valid");
		assert_eq!(config.web.bind_addr, "0.0.0.0:8080");
		assert_eq!(config.logging.level, Level::DEBUG);
	}

	#[test]
	fn logging_defaults_to_info() {
		let config = parse_config_document("web { bind-addr \"127.0.0.1:3000\"; }").expect("config is valid");
		assert_eq!(config.logging.level, Level::INFO);
	}

	#[test]
	fn missing_bind_address_is_an_error() {
		let error = parse_config_document("web { }").expect_err("bind-addr is required");
		assert!(error.to_string().contains("bind-addr"));
	}

	#[test]
	fn missing_web_section_is_an_error() {
		let error = parse_config_document("logging { level \"warn\"; }").expect_err("web is required");
		assert!(error.to_string().contains("`web`"));
	}

	#[test]
	fn unknown_log_level_is_an_error() {
		let error = parse_config_document("web { bind-addr \"127.0.0.1:3000\"; }\nlogging { level \"loud\"; }")
			.expect_err("level is invalid");
		assert!(error.to_string().contains("loud"));
	}
}
