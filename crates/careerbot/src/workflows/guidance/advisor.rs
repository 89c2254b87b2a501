//! Advisory text generation. The quiz never fails because of this collaborator: any error
//! is replaced by [`FALLBACK_ADVICE`].

use std::fmt::Debug;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::AdvisorConfig;

pub const FALLBACK_ADVICE: &str = "(Career advisor offline.)";

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("advisor disabled")]
    Disabled,
    #[error("advisor request failed: {0}")]
    Transport(String),
    #[error("advisor returned status {0}")]
    Status(u16),
    #[error("advisor response malformed: {0}")]
    Malformed(String),
}

/// One-shot text generator consulted when a quiz finishes.
pub trait AdvisorGateway: Debug + Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, AdvisorError>;
}

/// Returns generated advice, or the fixed placeholder when the generator is unavailable.
pub fn advice_or_fallback(gateway: &dyn AdvisorGateway, prompt: &str) -> String {
    match gateway.generate(prompt) {
        Ok(text) => text,
        Err(AdvisorError::Disabled) => FALLBACK_ADVICE.to_string(),
        Err(error) => {
            tracing::warn!(%error, "advisor unavailable; using fallback advice");
            FALLBACK_ADVICE.to_string()
        }
    }
}

pub fn gateway_from_config(config: &AdvisorConfig) -> Box<dyn AdvisorGateway> {
    if config.enabled {
        Box::new(OllamaAdvisor::new(
            &config.endpoint,
            &config.model,
            config.timeout,
        ))
    } else {
        Box::new(OfflineAdvisor)
    }
}

/// Used when advice generation is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineAdvisor;

impl AdvisorGateway for OfflineAdvisor {
    fn generate(&self, _prompt: &str) -> Result<String, AdvisorError> {
        Err(AdvisorError::Disabled)
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Blocking client for an Ollama-compatible `/api/generate` endpoint.
///
/// A client is built per request, on the blocking worker that issues it, never inside the
/// async runtime.
#[derive(Debug)]
pub struct OllamaAdvisor {
    timeout: Duration,
    url: String,
    model: String,
}

impl OllamaAdvisor {
    pub fn new(endpoint: &str, model: &str, timeout: Duration) -> Self {
        Self {
            timeout,
            url: format!("{}/api/generate", endpoint.trim_end_matches('/')),
            model: model.to_string(),
        }
    }

    fn client(&self) -> Result<reqwest::blocking::Client, AdvisorError> {
        reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| AdvisorError::Transport(format!("client setup failed: {err}")))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AdvisorGateway for OllamaAdvisor {
    fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        let started = Instant::now();
        let response = self
            .client()?
            .post(&self.url)
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()
            .map_err(|err| AdvisorError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdvisorError::Status(status.as_u16()));
        }

        let body: GenerateResponse = response
            .json()
            .map_err(|err| AdvisorError::Malformed(err.to_string()))?;

        let text = body
            .response
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| AdvisorError::Malformed("missing response text".to_string()))?;

        tracing::debug!(
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "advisor text generated"
        );
        Ok(text)
    }
}
