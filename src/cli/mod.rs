//! CLI module for PMP Project Hub
//!
//! - `serve`: run the HTTP server
//! - `token`: mint a bearer token for local testing

pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

/// PMP Project Hub - project and team management API
#[derive(Parser)]
#[command(name = "pmp-project-hub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Print a signed bearer token for a user id
    Token(token::TokenArgs),
}
