// file: src/describer/remote.rs
// description: Groq API integration for table and equation descriptions
// reference: https://console.groq.com/docs/api-reference

use crate::config::DescriberConfig;
use crate::describer::{Describer, RuleBasedDescriber};
use crate::error::{ProcessorError, Result};
use futures::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const TABLE_MAX_TOKENS: u32 = 300;
const EQUATION_MAX_TOKENS: u32 = 200;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

pub struct RemoteDescriber {
    client: Client,
    config: DescriberConfig,
}

impl RemoteDescriber {
    pub fn new(config: DescriberConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn request_completion(&self, prompt: String, max_tokens: u32) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            max_tokens,
        };

        let api_key = self.config.api_key.as_deref().unwrap_or_default();

        let response = self
            .client
            .post(&self.config.endpoint)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ProcessorError::Describer(format!("Failed to send description request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProcessorError::Describer(format!(
                "Description request failed with status {}: {}",
                status, error_text
            )));
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            ProcessorError::Describer(format!("Failed to parse description response: {}", e))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ProcessorError::Describer("No completion returned from describer".to_string())
            })?;

        // Single flowing paragraph regardless of how the model wraps lines
        let paragraph = content.split_whitespace().collect::<Vec<_>>().join(" ");
        if paragraph.is_empty() {
            return Err(ProcessorError::Describer(
                "Describer returned empty content".to_string(),
            ));
        }

        debug!("Received description of {} chars", paragraph.len());
        Ok(paragraph)
    }

    fn table_prompt(&self, rows: &[Vec<String>]) -> String {
        let table_text = rows
            .iter()
            .take(self.config.max_table_rows)
            .map(|row| row.join(" | "))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Describe this table in ONE comprehensive paragraph. Include:\n\
             - What type of data the table contains\n\
             - The main columns and what they represent\n\
             - Key findings or patterns in the data\n\
             - Any notable values or trends\n\n\
             Keep it to one flowing paragraph. Do not use bullet points or multiple paragraphs.\n\n\
             Table data:\n{}",
            table_text
        )
    }

    fn equation_prompt(&self, equation: &str) -> String {
        format!(
            "Describe this mathematical equation/formula in ONE clear paragraph. Explain:\n\
             - What the equation represents\n\
             - What each variable or symbol means\n\
             - What the equation is used for\n\n\
             Keep it to one flowing paragraph in plain English. Do not use mathematical \
             notation in your description.\n\n\
             Equation: {}",
            equation
        )
    }
}

impl Describer for RemoteDescriber {
    fn name(&self) -> &str {
        "remote"
    }

    fn describe_table<'a>(&'a self, rows: &'a [Vec<String>]) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move {
            match self
                .request_completion(self.table_prompt(rows), TABLE_MAX_TOKENS)
                .await
            {
                Ok(description) => Ok(description),
                Err(e) => {
                    warn!("Remote table description failed ({}), using rule-based fallback", e);
                    Ok(RuleBasedDescriber::table_summary(rows))
                }
            }
        })
    }

    fn describe_equation<'a>(&'a self, equation: &'a str) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move {
            match self
                .request_completion(self.equation_prompt(equation), EQUATION_MAX_TOKENS)
                .await
            {
                Ok(description) => Ok(description),
                Err(e) => {
                    warn!(
                        "Remote equation description failed ({}), using rule-based fallback",
                        e
                    );
                    Ok(RuleBasedDescriber::equation_summary(equation))
                }
            }
        })
    }
}
