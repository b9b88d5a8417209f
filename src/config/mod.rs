use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_origin, validate_port, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "matriculas-api")]
#[command(about = "Course-enrollment REST API")]
pub struct CliConfig {
    /// Listen port; the PORT environment variable overrides the default.
    #[arg(long, env = "PORT", default_value = "3333")]
    pub port: u16,

    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Browser origins allowed by CORS.
    #[arg(long = "cors-origin", value_delimiter = ',', default_value = "http://localhost:5173")]
    pub cors_origins: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_port("port", self.port)?;
        validate_non_empty_string("bind", &self.bind)?;
        for origin in &self.cors_origins {
            validate_origin("cors_origin", origin)?;
        }
        Ok(())
    }
}
