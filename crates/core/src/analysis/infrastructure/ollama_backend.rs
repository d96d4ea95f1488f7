use std::net::{TcpStream, ToSocketAddrs};

use crate::analysis::domain::language_model::LanguageModel;
use crate::shared::constants::{
    OLLAMA_DEFAULT_HOST, OLLAMA_DEFAULT_MODEL, OLLAMA_DEFAULT_PORT, OLLAMA_PROBE_TIMEOUT,
};

/// Language model served by a local Ollama instance over its blocking
/// HTTP API (`POST /api/generate`, non-streaming, temperature 0).
pub struct OllamaBackend {
    host: String,
    port: u16,
    model: String,
    client: reqwest::blocking::Client,
}

impl OllamaBackend {
    pub fn new(host: &str, port: u16, model: &str) -> Self {
        Self {
            host: host.to_string(),
            port,
            model: model.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn generate_url(&self) -> String {
        format!("http://{}:{}/api/generate", self.host, self.port)
    }
}

impl Default for OllamaBackend {
    fn default() -> Self {
        Self::new(OLLAMA_DEFAULT_HOST, OLLAMA_DEFAULT_PORT, OLLAMA_DEFAULT_MODEL)
    }
}

impl LanguageModel for OllamaBackend {
    /// Plain TCP connect with a short timeout; no HTTP round trip.
    fn is_reachable(&self) -> bool {
        let addrs = match (self.host.as_str(), self.port).to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(_) => return false,
        };
        for addr in addrs {
            if TcpStream::connect_timeout(&addr, OLLAMA_PROBE_TIMEOUT).is_ok() {
                return true;
            }
        }
        false
    }

    fn generate(&self, prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": { "temperature": 0 },
        });

        let response = self.client.post(self.generate_url()).json(&body).send()?;
        if !response.status().is_success() {
            return Err(format!("Ollama returned status {}", response.status()).into());
        }

        let payload: serde_json::Value = response.json()?;
        let text = response_text(&payload).ok_or("Ollama reply missing 'response' field")?;
        Ok(text.to_string())
    }
}

fn response_text(payload: &serde_json::Value) -> Option<&str> {
    payload.get("response").and_then(|v| v.as_str())
}
