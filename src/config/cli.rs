use crate::config::{DEFAULT_DATA_PATH, DEFAULT_HOST, DEFAULT_PORT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_positive_number,
    validate_slider, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "launch-dash")]
#[command(about = "Interactive dashboard for launch success records")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data_path: String,

    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, default_value = "0")]
    pub slider_min: f64,

    #[arg(long, default_value = "10000")]
    pub slider_max: f64,

    #[arg(long, default_value = "1000")]
    pub slider_step: f64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            slider_min: 0.0,
            slider_max: 10000.0,
            slider_step: 1000.0,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn slider(&self) -> (f64, f64, f64) {
        (self.slider_min, self.slider_max, self.slider_step)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_path", &self.data_path)?;
        validate_file_extension("data_path", &self.data_path, &["csv"])?;
        validate_non_empty_string("host", &self.host)?;
        validate_positive_number("port", self.port, 1)?;
        validate_slider(self.slider_min, self.slider_max, self.slider_step)
    }
}
