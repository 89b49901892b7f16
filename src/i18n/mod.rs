//! Internationalization module for the bilingual page copy.
//!
//! Provides translation services using a simple key-value approach for runtime language switching.

use std::collections::HashMap;

/// Supported page locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    /// Get the locale identifier string (also its persisted form).
    pub fn id(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Spanish => "Español",
        }
    }

    /// Two-letter label for the toggle button.
    pub fn short_label(&self) -> &'static str {
        match self {
            Locale::English => "EN",
            Locale::Spanish => "ES",
        }
    }

    /// Parse from a locale identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_lowercase();
        if id.starts_with("en") {
            Some(Locale::English)
        } else if id.starts_with("es") {
            Some(Locale::Spanish)
        } else {
            None
        }
    }

    /// The other locale.
    pub fn toggled(&self) -> Self {
        match self {
            Locale::English => Locale::Spanish,
            Locale::Spanish => Locale::English,
        }
    }

    /// Get all supported locales.
    pub fn all() -> &'static [Locale] {
        &[Locale::English, Locale::Spanish]
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn ftl_content(locale: Locale) -> &'static str {
    match locale {
        Locale::English => include_str!("locales/en/main.ftl"),
        Locale::Spanish => include_str!("locales/es/main.ftl"),
    }
}

fn parse_ftl(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Parse key = value
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

/// Translation service holding every locale's strings.
pub struct TranslationService {
    /// Current locale
    current_locale: Locale,
    /// Translations per locale
    translations: HashMap<Locale, HashMap<String, String>>,
}

impl Default for TranslationService {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationService {
    /// Create a new translation service.
    pub fn new() -> Self {
        let translations = Locale::all()
            .iter()
            .map(|locale| (*locale, parse_ftl(ftl_content(*locale))))
            .collect();

        Self {
            current_locale: Locale::English,
            translations,
        }
    }

    /// Get the current locale.
    pub fn locale(&self) -> Locale {
        self.current_locale
    }

    /// Set the current locale.
    pub fn set_locale(&mut self, locale: Locale) {
        self.current_locale = locale;
    }

    /// Translate a message by key.
    pub fn translate(&self, key: &str) -> String {
        // Try current locale
        if let Some(value) = self
            .translations
            .get(&self.current_locale)
            .and_then(|t| t.get(key))
        {
            return value.clone();
        }

        // Fall back to English
        if let Some(value) = self
            .translations
            .get(&Locale::English)
            .and_then(|t| t.get(key))
        {
            return value.clone();
        }

        // Return key as fallback
        key.to_string()
    }

    /// Translate a message with arguments.
    /// Arguments are substituted for `{ $key }` patterns.
    pub fn translate_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut result = self.translate(key);
        for (arg_key, arg_value) in args {
            let pattern = format!("{{ ${} }}", arg_key);
            result = result.replace(&pattern, arg_value);
        }
        result
    }
}
