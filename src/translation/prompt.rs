//! System prompt registry.
//!
//! Maps a target identifier to the fixed system prompt biasing the completion
//! toward that style. Identifiers without a registered prompt fall back to a
//! generic translation instruction so an unmapped target still produces a
//! translation attempt instead of a hard failure.

/// Generic fallback used when a target has no registered prompt.
pub const FALLBACK_PROMPT: &str = "You are a helpful translator. Translate the given text \
     accurately while preserving the original meaning and tone.";

/// Registered system prompts, keyed by target identifier.
const PROMPTS: &[(&str, &str)] = &[
    // Japanese variants
    (
        "ja_kind",
        "You are a translator. Translate the given text to Japanese using a kind, gentle tone. \
         Be polite and considerate in your translation.",
    ),
    (
        "ja_formal_friendly",
        "You are a translator. Translate the given text to Japanese using formal but friendly \
         language. Maintain politeness while being approachable.",
    ),
    (
        "ja_formal_aggr",
        "You are a translator. Translate the given text to Japanese using formal, assertive \
         language. Be direct and authoritative while maintaining proper keigo.",
    ),
    (
        "ja_twitter",
        "You are a translator. Translate the given text to Japanese using casual Twitter/social \
         media style. Use modern slang and abbreviations where appropriate.",
    ),
    (
        "ja_n1",
        "You are a translator. Translate the given text to Japanese at JLPT N1 level. Use \
         advanced vocabulary and complex grammar structures.",
    ),
    (
        "ja_n2",
        "You are a translator. Translate the given text to Japanese at JLPT N2 level. Use \
         intermediate-advanced vocabulary and grammar.",
    ),
    (
        "ja_n3",
        "You are a translator. Translate the given text to Japanese at JLPT N3 level. Use \
         intermediate vocabulary and grammar structures.",
    ),
    (
        "ja_n4",
        "You are a translator. Translate the given text to Japanese at JLPT N4 level. Use \
         basic-intermediate vocabulary and simple grammar.",
    ),
    (
        "ja_n5",
        "You are a translator. Translate the given text to Japanese at JLPT N5 level. Use basic \
         vocabulary and simple grammar structures.",
    ),
    // English variants
    (
        "en_casual",
        "You are a translator. Translate the given text to casual, conversational English. Use \
         informal language and contractions.",
    ),
    (
        "en_formal",
        "You are a translator. Translate the given text to formal English. Use proper grammar \
         and avoid contractions.",
    ),
    (
        "en_formal_friendly",
        "You are a translator. Translate the given text to formal yet friendly English. Be \
         professional but approachable.",
    ),
    (
        "en_internet",
        "You are a translator. Translate the given text to internet/online English. Use modern \
         slang, abbreviations, and casual web language.",
    ),
    (
        "en_offensive_internet",
        "You are a translator. Translate the given text to offensive internet English. Use \
         strong language and aggressive tone typical of online arguments.",
    ),
];

/// Returns the registered prompt for an identifier, if any.
pub fn registered_prompt(identifier: &str) -> Option<&'static str> {
    PROMPTS
        .iter()
        .find(|(key, _)| *key == identifier)
        .map(|(_, prompt)| *prompt)
}

/// Returns the system prompt for an identifier, falling back to
/// [`FALLBACK_PROMPT`] when none is registered.
pub fn system_prompt_for(identifier: &str) -> &'static str {
    registered_prompt(identifier).unwrap_or(FALLBACK_PROMPT)
}
