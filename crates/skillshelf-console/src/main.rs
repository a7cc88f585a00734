mod config;
mod service;

use anyhow::Result;
use config::Config;
use service::ConsoleService;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Create and run console service
    let console = ConsoleService::new(config);
    console.run()
}
