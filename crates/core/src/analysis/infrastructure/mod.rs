pub mod ollama_backend;
