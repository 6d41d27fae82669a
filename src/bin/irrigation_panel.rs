// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line front-end: run one calculation and print the panel.
//!
//! # Usage
//!
//! ```bash
//! irrigation-panel [--check] [<soil_moisture> <temperature> <sunlight>]
//! ```
//!
//! # Example
//!
//! ```bash
//! IRRIGATION_API_URL=http://localhost:5000 irrigation-panel 25 35 90
//! ```
//!
//! Values outside their range are clamped. Set `RUST_LOG=debug` to see the
//! request and response bodies.

use std::env;
use std::process::ExitCode;

use irrigation_panel::{CalculationService, PanelConfig, Subscribable};
use tracing_subscriber::EnvFilter;

fn usage(program: &str) {
    eprintln!("Usage: {program} [--check] [<soil_moisture> <temperature> <sunlight>]");
    eprintln!();
    eprintln!("  soil_moisture  0-100 (%)");
    eprintln!("  temperature    0-40 (°C)");
    eprintln!("  sunlight       0-100 (%)");
    eprintln!("  --check        query the service status first");
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("irrigation-panel", String::as_str);

    let check = args.iter().skip(1).any(|a| a == "--check");
    let values: Vec<&String> = args.iter().skip(1).filter(|a| *a != "--check").collect();

    let parsed = match values.as_slice() {
        [] => None,
        [moisture, temperature, sunlight] => {
            match (moisture.parse::<f64>(), temperature.parse::<f64>(), sunlight.parse::<f64>()) {
                (Ok(m), Ok(t), Ok(s)) => Some((m, t, s)),
                _ => {
                    eprintln!("All three values must be numbers.");
                    usage(program);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        _ => {
            usage(program);
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = PanelConfig::from_env()?;
    tracing::info!(base_url = %config.http().base_url(), "Using calculation service");
    let panel = config.into_panel()?;

    if check {
        match panel.orchestrator().service().status().await {
            Ok(status) => println!(
                "Service {}: {}",
                status.status(),
                status.message().unwrap_or("no message")
            ),
            Err(e) => eprintln!("Service check failed: {e}"),
        }
    }

    if let Some((moisture, temperature, sunlight)) = parsed {
        panel.set_soil_moisture(moisture);
        panel.set_temperature(temperature);
        panel.set_sunlight(sunlight);
    }

    panel.on_loading(|| eprintln!("Calculating..."));

    let Some(outcome) = panel.calculate().await else {
        return Ok(ExitCode::FAILURE);
    };

    println!("{}", panel.view());

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
