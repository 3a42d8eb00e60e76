//! Model discovery for OpenAI and OpenRouter.
//!
//! Discovery degrades gracefully: network and API failures produce an empty
//! model list plus a human-readable error string, never an `Err`. Callers
//! treat `error` presence as the failure signal and keep manual model entry
//! usable.

use reqwest::Client;
use serde::Deserialize;
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

use super::provider::Provider;

/// How long a fetched OpenRouter model list stays fresh.
pub const OPENROUTER_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Metadata for a single discoverable model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub owned_by: Option<String>,
    pub created: Option<i64>,
    pub context_length: Option<u32>,
    pub pricing: Option<ModelPricing>,
}

impl ModelInfo {
    /// The name shown in listings, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Per-token prices in USD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPricing {
    pub prompt: f64,
    pub completion: f64,
}

/// Result of a discovery call. `error` set means the list is unusable.
#[derive(Debug, Clone, Default)]
pub struct ModelList {
    pub models: Vec<ModelInfo>,
    pub error: Option<String>,
}

impl ModelList {
    fn failed(error: impl Into<String>) -> Self {
        Self {
            models: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// A model list with an expiry window.
///
/// Freshness is judged against an `Instant` supplied by the caller, so tests
/// can simulate the passage of time without real delays.
#[derive(Debug)]
pub struct ModelCache {
    ttl: Duration,
    entry: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    fetched_at: Instant,
    models: Vec<ModelInfo>,
}

impl ModelCache {
    pub const fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// Returns the cached list if it was stored less than `ttl` before `now`.
    pub fn get(&self, now: Instant) -> Option<Vec<ModelInfo>> {
        self.entry
            .as_ref()
            .filter(|entry| now.duration_since(entry.fetched_at) < self.ttl)
            .map(|entry| entry.models.clone())
    }

    pub fn put(&mut self, models: Vec<ModelInfo>, now: Instant) {
        self.entry = Some(CacheEntry {
            fetched_at: now,
            models,
        });
    }
}

// Process-wide cache for the unauthenticated OpenRouter listing. Keyed
// globally, not per-key. Locked only around get/put, never across an await.
static OPENROUTER_CACHE: OnceLock<Mutex<ModelCache>> = OnceLock::new();

fn openrouter_cache() -> &'static Mutex<ModelCache> {
    OPENROUTER_CACHE.get_or_init(|| Mutex::new(ModelCache::new(OPENROUTER_CACHE_TTL)))
}

#[derive(Debug, Deserialize)]
struct OpenAiModelsResponse {
    #[serde(default)]
    data: Vec<OpenAiModel>,
}

#[derive(Debug, Deserialize)]
struct OpenAiModel {
    id: String,
    owned_by: Option<String>,
    created: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterModelsResponse {
    #[serde(default)]
    data: Vec<OpenRouterModel>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterModel {
    id: String,
    name: Option<String>,
    description: Option<String>,
    context_length: Option<u32>,
    pricing: Option<OpenRouterPricing>,
}

// OpenRouter reports per-token prices as strings, e.g. "0.00003".
#[derive(Debug, Deserialize)]
struct OpenRouterPricing {
    prompt: Option<String>,
    completion: Option<String>,
}

impl OpenRouterPricing {
    fn parse(&self) -> Option<ModelPricing> {
        let prompt = self.prompt.as_deref()?.parse().ok()?;
        let completion = self.completion.as_deref()?.parse().ok()?;
        Some(ModelPricing { prompt, completion })
    }
}

/// Fetches the model list for `provider`.
///
/// OpenAI requires a non-empty API key; OpenRouter is unauthenticated and
/// served from the process-wide cache when fresh. Custom providers are not
/// supported for discovery.
pub async fn fetch_models(provider: Provider, api_key: Option<&str>) -> ModelList {
    match provider {
        Provider::OpenAi => fetch_openai_models(api_key.unwrap_or_default()).await,
        Provider::OpenRouter => fetch_openrouter_models().await,
        Provider::Custom => ModelList::failed("Unsupported provider for model fetching"),
    }
}

/// Queries `https://api.openai.com/v1/models` with bearer auth.
pub async fn fetch_openai_models(api_key: &str) -> ModelList {
    if api_key.trim().is_empty() {
        return ModelList::failed("API key is required for OpenAI");
    }

    let url = "https://api.openai.com/v1/models";
    let response = match Client::new()
        .get(url)
        .header("Authorization", format!("Bearer {api_key}"))
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => return ModelList::failed(format!("Failed to fetch models: {e}")),
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return ModelList::failed(format!("OpenAI API error: {status} {body}"));
    }

    let parsed: OpenAiModelsResponse = match response.json().await {
        Ok(p) => p,
        Err(e) => return ModelList::failed(format!("Failed to parse model list: {e}")),
    };

    let mut models: Vec<ModelInfo> = parsed
        .data
        .into_iter()
        .map(|m| ModelInfo {
            id: m.id,
            name: None,
            description: None,
            owned_by: m.owned_by,
            created: m.created,
            context_length: None,
            pricing: None,
        })
        .collect();

    sort_openai_models(&mut models);

    ModelList {
        models,
        error: None,
    }
}

const OPENROUTER_MODELS_URL: &str = "https://openrouter.ai/api/v1/models";

/// Queries the OpenRouter model listing (no auth), caching results for
/// [`OPENROUTER_CACHE_TTL`].
pub async fn fetch_openrouter_models() -> ModelList {
    fetch_openrouter_models_from(OPENROUTER_MODELS_URL).await
}

async fn fetch_openrouter_models_from(url: &str) -> ModelList {
    if let Ok(cache) = openrouter_cache().lock()
        && let Some(models) = cache.get(Instant::now())
    {
        return ModelList {
            models,
            error: None,
        };
    }

    let response = match Client::new().get(url).send().await {
        Ok(r) => r,
        Err(e) => return ModelList::failed(format!("Failed to fetch models: {e}")),
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return ModelList::failed(format!("OpenRouter API error: {status} {body}"));
    }

    let parsed: OpenRouterModelsResponse = match response.json().await {
        Ok(p) => p,
        Err(e) => return ModelList::failed(format!("Failed to parse model list: {e}")),
    };

    let mut models: Vec<ModelInfo> = parsed
        .data
        .into_iter()
        .map(|m| ModelInfo {
            id: m.id,
            name: m.name,
            description: m.description,
            owned_by: None,
            created: None,
            context_length: m.context_length,
            pricing: m.pricing.as_ref().and_then(OpenRouterPricing::parse),
        })
        .collect();

    sort_openrouter_models(&mut models);

    if let Ok(mut cache) = openrouter_cache().lock() {
        cache.put(models.clone(), Instant::now());
    }

    ModelList {
        models,
        error: None,
    }
}

/// Orders models owned by OpenAI first, then lexicographically by id within
/// each partition.
pub fn sort_openai_models(models: &mut [ModelInfo]) {
    models.sort_by(|a, b| {
        let a_is_openai = a.owned_by.as_deref() == Some("openai");
        let b_is_openai = b.owned_by.as_deref() == Some("openai");
        b_is_openai.cmp(&a_is_openai).then_with(|| a.id.cmp(&b.id))
    });
}

/// Orders models lexicographically by display name, falling back to id.
pub fn sort_openrouter_models(models: &mut [ModelInfo]) {
    models.sort_by(|a, b| a.display_name().cmp(b.display_name()));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn model(id: &str, owned_by: Option<&str>, name: Option<&str>) -> ModelInfo {
        ModelInfo {
            id: id.to_string(),
            name: name.map(String::from),
            description: None,
            owned_by: owned_by.map(String::from),
            created: None,
            context_length: None,
            pricing: None,
        }
    }

    #[test]
    fn test_sort_openai_models_partitions_by_owner() {
        let mut models = vec![
            model("zeta", Some("vendor"), None),
            model("gpt-4o", Some("openai"), None),
            model("alpha", Some("vendor"), None),
            model("babbage", Some("openai"), None),
        ];

        sort_openai_models(&mut models);

        let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["babbage", "gpt-4o", "alpha", "zeta"]);
    }

    #[test]
    fn test_sort_openai_models_missing_owner_sorts_last() {
        let mut models = vec![
            model("no-owner", None, None),
            model("gpt-4o", Some("openai"), None),
        ];

        sort_openai_models(&mut models);
        assert_eq!(models[0].id, "gpt-4o");
    }

    #[test]
    fn test_sort_openrouter_models_by_name_with_id_fallback() {
        let mut models = vec![
            model("vendor/z-model", None, Some("Aardvark")),
            model("vendor/a-model", None, None),
            model("vendor/m-model", None, Some("Zebra")),
        ];

        sort_openrouter_models(&mut models);

        let names: Vec<&str> = models.iter().map(ModelInfo::display_name).collect();
        assert_eq!(names, vec!["Aardvark", "Zebra", "vendor/a-model"]);
    }

    #[test]
    fn test_cache_hit_within_ttl() {
        let now = Instant::now();
        let mut cache = ModelCache::new(Duration::from_secs(300));
        cache.put(vec![model("gpt-4o", None, None)], now);

        let hit = cache.get(now + Duration::from_secs(299));
        assert_eq!(hit.unwrap()[0].id, "gpt-4o");
    }

    #[test]
    fn test_cache_returns_identical_list() {
        let now = Instant::now();
        let mut cache = ModelCache::new(Duration::from_secs(300));
        let models = vec![model("a", None, None), model("b", None, None)];
        cache.put(models.clone(), now);

        assert_eq!(cache.get(now), Some(models));
    }

    #[test]
    fn test_cache_miss_when_stale() {
        let now = Instant::now();
        let mut cache = ModelCache::new(Duration::from_secs(300));
        cache.put(vec![model("gpt-4o", None, None)], now);

        assert!(cache.get(now + Duration::from_secs(300)).is_none());
    }

    #[test]
    fn test_cache_miss_when_empty() {
        let cache = ModelCache::new(OPENROUTER_CACHE_TTL);
        assert!(cache.get(Instant::now()).is_none());
    }

    #[test]
    fn test_openrouter_pricing_parse() {
        let pricing = OpenRouterPricing {
            prompt: Some("0.00003".to_string()),
            completion: Some("0.00006".to_string()),
        };

        let parsed = pricing.parse().unwrap();
        assert!((parsed.prompt - 0.00003).abs() < f64::EPSILON);
        assert!((parsed.completion - 0.00006).abs() < f64::EPSILON);
    }

    #[test]
    fn test_openrouter_pricing_parse_rejects_garbage() {
        let pricing = OpenRouterPricing {
            prompt: Some("free".to_string()),
            completion: Some("0.1".to_string()),
        };
        assert!(pricing.parse().is_none());
    }

    #[test]
    fn test_openrouter_wire_schema() {
        let raw = r#"{"data": [{
            "id": "anthropic/claude-3.5-sonnet",
            "name": "Claude 3.5 Sonnet",
            "description": "A model",
            "context_length": 200000,
            "pricing": {"prompt": "0.000003", "completion": "0.000015"}
        }]}"#;

        let parsed: OpenRouterModelsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].context_length, Some(200_000));
        assert!(parsed.data[0].pricing.as_ref().unwrap().parse().is_some());
    }

    #[test]
    fn test_openai_wire_schema() {
        let raw = r#"{"data": [{"id": "gpt-4o", "owned_by": "openai", "created": 1715367049}]}"#;

        let parsed: OpenAiModelsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.data[0].id, "gpt-4o");
        assert_eq!(parsed.data[0].owned_by.as_deref(), Some("openai"));
    }

    #[tokio::test]
    async fn test_fetch_models_custom_provider_degrades() {
        let list = fetch_models(Provider::Custom, None).await;
        assert!(list.models.is_empty());
        assert_eq!(
            list.error.as_deref(),
            Some("Unsupported provider for model fetching")
        );
    }

    #[tokio::test]
    async fn test_fetch_openai_models_requires_key() {
        let list = fetch_openai_models("  ").await;
        assert!(list.models.is_empty());
        assert_eq!(list.error.as_deref(), Some("API key is required for OpenAI"));
    }

    #[tokio::test]
    async fn test_openrouter_fetch_serves_second_call_from_cache() {
        // The server answers exactly one request, so the second fetch can
        // only succeed by hitting the cache populated by the first.
        let base = crate::test_support::serve_once(
            "HTTP/1.1 200 OK",
            r#"{"data": [{"id": "vendor/model", "name": "Model"}]}"#,
        );
        let url = format!("{base}/models");

        let first = fetch_openrouter_models_from(&url).await;
        assert!(first.error.is_none());
        assert_eq!(first.models.len(), 1);
        assert_eq!(first.models[0].id, "vendor/model");

        let second = fetch_openrouter_models_from(&url).await;
        assert!(second.error.is_none());
        assert_eq!(second.models, first.models);
    }
}
