//! LLM provider abstraction: provider profiles, chat completion client,
//! and model discovery.

mod client;
mod models;
mod provider;

pub use client::{
    ChatClient, ChatError, ChatRequest, ChatResponse, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
    DEFAULT_TOP_P, TokenUsage,
};
pub use models::{
    ModelCache, ModelInfo, ModelList, ModelPricing, OPENROUTER_CACHE_TTL, fetch_models,
    fetch_openai_models, fetch_openrouter_models, sort_openai_models, sort_openrouter_models,
};
pub use provider::{Provider, ProviderConfig, validate_config};
