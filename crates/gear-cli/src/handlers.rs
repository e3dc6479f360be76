//! Command handlers.

use crate::client::LicenseClient;
use chrono::{DateTime, Utc};
use console::style;
use gear_api::ServerConfig;
use gear_api::handlers::licenses::VerifyResponse;
use gear_core::Plan;
use gear_licensing::{KeyIssuer, KeyVerifier};
use std::net::SocketAddr;

/// Run the API server.
pub async fn serve(bind: Option<SocketAddr>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ServerConfig::from_env()?;
    if let Some(bind) = bind {
        config.bind_addr = bind;
    }
    gear_api::serve(config).await?;
    Ok(())
}

/// Issue a key locally, or through a running API.
pub async fn issue(plan: Plan, remote: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let key = match remote {
        Some(url) => LicenseClient::new(url).generate(plan).await?.license_key,
        None => {
            let config = ServerConfig::from_env()?;
            KeyIssuer::new(config.secret).issue(plan).to_string()
        }
    };

    println!("{}", key);
    Ok(())
}

/// Verify a key locally, or through a running API. Returns whether it is valid.
pub async fn verify(
    key: &str,
    remote: Option<&str>,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let response = match remote {
        Some(url) => LicenseClient::new(url).verify(key).await?,
        None => {
            let config = ServerConfig::from_env()?;
            VerifyResponse::from(KeyVerifier::new(config.secret).verify(key))
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_verification(&response);
    }

    Ok(response.valid)
}

/// Print the fields of a key without checking them.
pub fn inspect(key: &str) -> Result<(), Box<dyn std::error::Error>> {
    let key = gear_licensing::inspect(key)?;

    let plan = match key.plan() {
        Some(plan) => plan.to_string(),
        None => style("unknown").red().to_string(),
    };

    println!("{} {}", style("Plan:").bold(), plan);
    println!(
        "{} {} ({})",
        style("Issued:").bold(),
        format_instant(key.issued_at_datetime()),
        key.issued_at()
    );
    println!("{} {}", style("Signature:").bold(), key.signature());
    println!(
        "  {}",
        style("Signature and expiry not checked; use `gear verify`").dim()
    );
    Ok(())
}

fn print_verification(response: &VerifyResponse) {
    let message = response.message.as_deref().unwrap_or_default();
    if !response.valid {
        println!("{} {}", style("✗").red(), message);
        return;
    }

    println!("{} {}", style("✓").green(), message);
    if let Some(plan) = response.plan {
        println!("  Plan: {}", style(plan).bold());
    }
    if let Some(valid_until) = response.valid_until {
        println!(
            "  Valid until: {}",
            format_instant(DateTime::from_timestamp_millis(valid_until))
        );
    }
}

fn format_instant(instant: Option<DateTime<Utc>>) -> String {
    instant
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "out of range".to_string())
}
