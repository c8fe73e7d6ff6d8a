// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use mobile_garage::config::{DEFAULT_CONFIG_PATH, parse_config};
	use mobile_garage::web::server::run_server;

	let config_path = std::env::args()
		.nth(1)
		.unwrap_or_else(|| String::from(DEFAULT_CONFIG_PATH));
	let config = parse_config(&config_path).await?;

	tracing_subscriber::fmt().with_max_level(config.logging.level).init();
	tracing::info!(path = %config_path, bind_addr = %config.web.bind_addr, "Loaded configuration");

	run_server(&config).await
}

#[cfg(not(feature = "ssr"))]
fn main() {}
