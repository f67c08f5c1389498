use crate::utils::error::{EngineError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dinewise-engine")]
#[command(about = "Personalized menu projection with dynamic pricing")]
pub struct CliConfig {
    /// Restaurant catalog JSON file (array of restaurants)
    #[arg(long, default_value = "./data/restaurants.json")]
    pub catalog_file: String,

    /// Fetch the catalog from an HTTP service instead of a file
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Preference JSON file (user id -> preferences)
    #[arg(long, default_value = "./data/preferences.json")]
    pub preferences_file: String,

    /// Fetch preferences from an HTTP service instead of a file
    #[arg(long)]
    pub preferences_url: Option<String>,

    /// User whose preferences drive the projection
    #[arg(long)]
    pub user_id: String,

    /// Restaurant to project; not needed with --recommend
    #[arg(long)]
    pub restaurant_id: Option<String>,

    /// Rank restaurants for the user instead of projecting one menu
    #[arg(long)]
    pub recommend: bool,

    /// Preview prices at a fixed local time (HH:MM) instead of now
    #[arg(long)]
    pub at: Option<String>,

    /// Keep re-projecting on a fixed cadence until interrupted
    #[arg(long)]
    pub watch: bool,

    /// Re-projection cadence in seconds for --watch
    #[arg(long, default_value = "60")]
    pub refresh_seconds: u64,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "csv,json")]
    pub output_formats: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log CPU/memory stats per phase
    #[arg(long)]
    pub monitor: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.catalog_url {
            validation::validate_url("catalog_url", url)?;
        } else {
            validation::validate_path("catalog_file", &self.catalog_file)?;
        }

        if let Some(url) = &self.preferences_url {
            validation::validate_url("preferences_url", url)?;
        } else {
            validation::validate_path("preferences_file", &self.preferences_file)?;
        }

        validation::validate_non_empty_string("user_id", &self.user_id)?;

        // --recommend 模式不需要指定餐廳
        if !self.recommend {
            match &self.restaurant_id {
                Some(id) => validation::validate_non_empty_string("restaurant_id", id)?,
                None => {
                    return Err(EngineError::MissingConfigError {
                        field: "restaurant_id".to_string(),
                    })
                }
            }
        }

        if let Some(at) = &self.at {
            validation::parse_preview_time("at", at)?;
        }

        validation::validate_positive_number("refresh_seconds", self.refresh_seconds, 1)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("output_formats", &self.output_formats)?;

        Ok(())
    }
}
