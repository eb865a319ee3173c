// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;
use url::{form_urlencoded, Url};

/// Default placeholder image service.
pub const DEFAULT_PLACEHOLDER_URL: &str = "https://via.placeholder.com";

const PLACEHOLDER_SIZE: &str = "400x300";
const MAX_DISPLAY_CHARS: usize = 25;

static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid punctuation regex"));
static SEPARATOR_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("valid separator regex"));

/// 占位图主题
#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    pub category: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
    pub keywords: &'static [&'static str],
}

/// Theme table, scanned top to bottom; the first match wins.
///
/// `storage` sits ahead of `kitchen` so that names like "Storage Tin" keep the
/// storage colours even though `tin` is a kitchen keyword too. `home` is last
/// and doubles as the fallback.
pub static THEMES: [Theme; 8] = [
    Theme {
        category: "storage",
        background: "3498DB",
        foreground: "FFFFFF",
        keywords: &["storage", "box", "crate", "tin", "holder", "container"],
    },
    Theme {
        category: "kitchen",
        background: "2C3E50",
        foreground: "ECF0F1",
        keywords: &["mug", "tea", "coffee", "sugar", "dispenser", "jar", "cake", "tin"],
    },
    Theme {
        category: "christmas",
        background: "C0392B",
        foreground: "FFFFFF",
        keywords: &["christmas", "star", "stocking", "xmas"],
    },
    Theme {
        category: "toy",
        background: "F39C12",
        foreground: "FFFFFF",
        keywords: &["toy", "dolly", "spaceboy", "bubbles", "children"],
    },
    Theme {
        category: "bottle",
        background: "8E44AD",
        foreground: "FFFFFF",
        keywords: &["bottle", "water", "hot"],
    },
    Theme {
        category: "tea",
        background: "16A085",
        foreground: "FFFFFF",
        keywords: &["tea", "coffee"],
    },
    Theme {
        category: "metal",
        background: "7F8C8D",
        foreground: "FFFFFF",
        keywords: &["metal", "sign", "zinc", "wire"],
    },
    Theme {
        category: "home",
        background: "27AE60",
        foreground: "FFFFFF",
        keywords: &["door", "wall", "clock", "sign", "hanger"],
    },
];

const FALLBACK_THEME: usize = 7;

/// Pick the theme for a raw product name.
pub fn classify(raw_name: &str) -> &'static Theme {
    let lower = raw_name.to_lowercase();
    THEMES
        .iter()
        .find(|theme| {
            lower.contains(theme.category) || theme.keywords.iter().any(|k| lower.contains(k))
        })
        .unwrap_or(&THEMES[FALLBACK_THEME])
}

/// Display text for the placeholder: punctuation dropped, separators collapsed
/// to `+`, at most 25 characters.
pub fn display_text(raw_name: &str) -> String {
    let stripped = DISALLOWED_CHARS.replace_all(raw_name, "");
    let joined = SEPARATOR_RUNS.replace_all(&stripped, "+");
    joined.chars().take(MAX_DISPLAY_CHARS).collect()
}

/// Builds themed placeholder image URLs. Pure and deterministic.
#[derive(Debug, Clone)]
pub struct PlaceholderGenerator {
    base_url: String,
}

impl Default for PlaceholderGenerator {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PLACEHOLDER_URL.to_string(),
        }
    }
}

impl PlaceholderGenerator {
    pub fn new(base_url: &str) -> Self {
        match Url::parse(base_url) {
            Ok(url) if url.has_host() => Self {
                base_url: base_url.trim_end_matches('/').to_string(),
            },
            _ => {
                warn!(
                    "Invalid placeholder service URL {:?}, using {}",
                    base_url, DEFAULT_PLACEHOLDER_URL
                );
                Self::default()
            }
        }
    }

    pub fn generate(&self, raw_name: &str) -> String {
        let theme = classify(raw_name);
        let text: String =
            form_urlencoded::byte_serialize(display_text(raw_name).as_bytes()).collect();
        format!(
            "{}/{}/{}/{}?text={}",
            self.base_url, PLACEHOLDER_SIZE, theme.background, theme.foreground, text
        )
    }
}
