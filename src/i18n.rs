use std::collections::HashMap;

use fluent_templates::{
    fluent_bundle::{FluentArgs, FluentValue},
    static_loader, Loader,
};
use once_cell::sync::Lazy;
use teloxide::types::User;
use unic_langid::{langid, LanguageIdentifier};

use crate::core::config;
use crate::poll::MalformedReason;

static_loader! {
    static LOCALES = {
        locales: "./locales",
        fallback_language: "ru",
        // Telegram shows the Unicode isolation marks around numbers literally
        customise: |bundle| bundle.set_use_isolating(false),
    };
}

/// Supported language codes.
pub static SUPPORTED_LANGS: &[&str] = &["ru", "en"];

/// Language of last resort when even the configured one does not parse.
static DEFAULT_LANG: Lazy<LanguageIdentifier> = Lazy::new(|| langid!("ru"));

/// Strips the region ("en-US", "ru_RU") and lowercases what is left.
fn base_language(code: &str) -> String {
    code.split(['-', '_']).next().unwrap_or(code).to_lowercase()
}

/// Normalizes a language code into a LanguageIdentifier (falls back to default).
pub fn lang_from_code(code: &str) -> LanguageIdentifier {
    base_language(code).parse().unwrap_or_else(|_| DEFAULT_LANG.clone())
}

/// Language configured for users whose Telegram locale we do not translate.
pub fn configured_lang() -> LanguageIdentifier {
    match is_language_supported(&config::BOT_LANGUAGE) {
        Some(code) => lang_from_code(code),
        None => DEFAULT_LANG.clone(),
    }
}

/// Picks the language for the user who triggered an update.
pub fn lang_for_user(user: Option<&User>) -> LanguageIdentifier {
    user.and_then(|u| u.language_code.as_deref())
        .and_then(is_language_supported)
        .map(lang_from_code)
        .unwrap_or_else(configured_lang)
}

/// Returns a localized string for the given key.
/// Converts literal `\n` sequences to actual newlines for proper Telegram formatting.
pub fn t(lang: &LanguageIdentifier, key: &str) -> String {
    let text = LOCALES
        .lookup(lang, key)
        .unwrap_or_else(|| LOCALES.lookup(&DEFAULT_LANG, key).unwrap_or_else(|| key.to_string()));
    text.replace("\\n", "\n")
}

/// Returns a localized string with arguments for interpolation.
/// Converts literal `\n` sequences to actual newlines for proper Telegram formatting.
pub fn t_args(lang: &LanguageIdentifier, key: &str, args: &FluentArgs) -> String {
    let args_map: HashMap<String, FluentValue> = args.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();

    let text = LOCALES.lookup_with_args(lang, key, &args_map).unwrap_or_else(|| {
        LOCALES
            .lookup_with_args(&DEFAULT_LANG, key, &args_map)
            .unwrap_or_else(|| key.to_string())
    });
    text.replace("\\n", "\n")
}

/// Instructive reply for a `/poll` command that could not be parsed.
pub fn malformed_poll_text(lang: &LanguageIdentifier, reason: MalformedReason) -> String {
    match reason {
        MalformedReason::MissingArguments => t(lang, "poll-usage"),
        MalformedReason::EmptyQuestion => t(lang, "poll-empty-question"),
        MalformedReason::TooFewOptions => t(lang, "poll-too-few-options"),
        MalformedReason::TooManyOptions => {
            let mut args = FluentArgs::new();
            args.set("max", config::poll::MAX_OPTIONS);
            t_args(lang, "poll-too-many-options", &args)
        }
    }
}

/// Checks if a language code is supported by the bot.
/// Returns the normalized language code if supported, None otherwise.
pub fn is_language_supported(code: &str) -> Option<&'static str> {
    let normalized = base_language(code);
    SUPPORTED_LANGS.iter().copied().find(|c| *c == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_known_translation() {
        let ru = lang_from_code("ru");
        let en = lang_from_code("en");

        assert_eq!(t(&ru, "poll-expired"), "Опрос устарел!");
        assert_eq!(t(&en, "poll-expired"), "This poll is outdated!");
    }

    #[test]
    fn converts_newlines() {
        let en = lang_from_code("en");
        let text = t(&en, "start-greeting");

        assert!(text.contains('\n'));
        assert!(!text.contains("\\n"));
        assert!(text.contains("/poll Where shall we go this weekend? | Cinema | Park"));
    }

    #[test]
    fn interpolates_without_isolation_marks() {
        let en = lang_from_code("en");
        let mut args = FluentArgs::new();
        args.set("count", 3);

        assert_eq!(t_args(&en, "poll-total", &args), "Total voted: 3");
    }

    #[test]
    fn malformed_reasons_have_replies() {
        let ru = lang_from_code("ru");
        assert_eq!(
            malformed_poll_text(&ru, MalformedReason::TooFewOptions),
            "Нужен минимум вопрос и 2 варианта ответа!"
        );
        assert!(malformed_poll_text(&ru, MalformedReason::MissingArguments).starts_with("Используйте формат:"));
        assert!(malformed_poll_text(&ru, MalformedReason::TooManyOptions).contains("99"));
    }

    #[test]
    fn test_is_language_supported() {
        assert_eq!(is_language_supported("en"), Some("en"));
        assert_eq!(is_language_supported("ru"), Some("ru"));
        assert_eq!(is_language_supported("en-GB"), Some("en"));
        assert_eq!(is_language_supported("RU"), Some("ru"));
        assert_eq!(is_language_supported("ru_RU"), Some("ru"));
        assert_eq!(is_language_supported("en_us"), Some("en"));

        assert_eq!(is_language_supported("de"), None);
        assert_eq!(is_language_supported("unknown"), None);
    }

    #[test]
    fn test_lang_from_code_strips_region() {
        assert_eq!(lang_from_code("en-US").to_string(), "en");
        assert_eq!(lang_from_code("ru_RU").to_string(), "ru");
    }
}
