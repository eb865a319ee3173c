// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_QUALIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(set of \d+|large|medium|small)\s+").expect("valid leading qualifier regex")
});

static TRAILING_DESCRIPTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+(design|style|holder|metal|sign)$")
        .expect("valid trailing descriptor regex")
});

/// Strip one leading size/quantity qualifier and one trailing descriptor word.
///
/// `"Set Of 3 Cake Tins Pantry Design"` becomes `"Cake Tins Pantry"`.
pub fn normalize(raw: &str) -> String {
    let without_prefix = LEADING_QUALIFIER.replace(raw.trim(), "");
    let cleaned = TRAILING_DESCRIPTOR.replace(&without_prefix, "");
    cleaned.trim().to_string()
}
