// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ProcessorError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub describer: DescriberConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DescriberConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub max_table_rows: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    pub min_section_content_len: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub format: String,
    pub default_output: String,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PAPER_DISTILL")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ProcessorError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| ProcessorError::Config(e.to_string()))?;

        config.fill_api_key_from_env();
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        let mut config = Self {
            describer: DescriberConfig {
                api_key: None,
                model: "openai/gpt-oss-120b".to_string(),
                endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
                timeout_secs: 30,
                max_table_rows: 20,
            },
            extraction: ExtractionConfig {
                min_section_content_len: 50,
            },
            output: OutputConfig {
                format: "html".to_string(),
                default_output: "processed_output".to_string(),
            },
        };

        config.fill_api_key_from_env();
        config
    }

    fn fill_api_key_from_env(&mut self) {
        if self.describer.api_key.as_deref().unwrap_or("").is_empty() {
            self.describer.api_key = std::env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty());
        }
    }

    fn validate(&self) -> Result<()> {
        if self.describer.timeout_secs == 0 {
            return Err(ProcessorError::Config(
                "describer timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.describer.max_table_rows == 0 {
            return Err(ProcessorError::Config(
                "max_table_rows must be greater than 0".to_string(),
            ));
        }

        if self.extraction.min_section_content_len == 0 {
            return Err(ProcessorError::Config(
                "min_section_content_len must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
