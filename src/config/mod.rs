mod manager;

pub use manager::{
    API_KEY_ENV, ConfigFile, ConfigManager, DEFAULT_MODEL, LlmSettings, ResolveOptions,
    ResolvedSettings, resolve_settings,
};
