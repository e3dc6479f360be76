//! CLI command definitions.

use clap::Subcommand;
use gear_core::Plan;
use std::net::SocketAddr;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the license API server
    Serve {
        /// Address to listen on (overrides GEAR_BIND_ADDR)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },

    /// Issue a new license key
    Issue {
        /// Plan: monthly or lifetime
        plan: Plan,

        /// Ask a running license API instead of signing locally
        #[arg(long, env = "GEAR_API_URL")]
        remote: Option<String>,
    },

    /// Verify a license key
    Verify {
        /// License key
        key: String,

        /// Ask a running license API instead of verifying locally
        #[arg(long, env = "GEAR_API_URL")]
        remote: Option<String>,

        /// Print the API-shaped JSON result
        #[arg(long)]
        json: bool,
    },

    /// Show what a license key claims, without checking its signature
    Inspect {
        /// License key
        key: String,
    },
}
