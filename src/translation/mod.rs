mod prompt;
mod target;
mod translator;

pub use prompt::{FALLBACK_PROMPT, registered_prompt, system_prompt_for};
pub use target::{
    BaseLang, TARGETS, TranslationTarget, find_target, print_targets, targets_for_lang,
};
pub use translator::{
    DebugTrace, RequestTrace, ResponseTrace, TRANSLATION_MAX_TOKENS, TRANSLATION_TEMPERATURE,
    TRANSLATION_TOP_P, TranslateError, Translation, build_request, translate_text,
};
