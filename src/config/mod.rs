pub mod manifest;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "loggen")]
#[command(about = "Generates companion logging classes for types described in a round manifest")]
pub struct CliConfig {
    /// TOML manifest describing the round's candidate types
    #[arg(long)]
    pub manifest: String,

    /// Source root the generated .java files are written under
    #[arg(long, default_value = "./generated")]
    pub out: String,

    /// Fully-qualified log facility; overrides the manifest
    #[arg(long)]
    pub log_facility: Option<String>,

    /// Write the round report as JSON to this path
    #[arg(long)]
    pub summary_json: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("manifest", &self.manifest)?;
        validation::validate_path("out", &self.out)?;
        if let Some(facility) = &self.log_facility {
            validation::validate_non_empty_string("log_facility", facility)?;
        }
        Ok(())
    }
}
