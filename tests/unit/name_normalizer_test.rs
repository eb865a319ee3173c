// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use prodimg::domain::services::name_normalizer::normalize;

#[test]
fn test_normalize_leaves_plain_names_alone() {
    for name in ["Coffee Mug", "Tea Caddy", "Cookie Jar"] {
        assert_eq!(normalize(name), name);
    }
}

#[test]
fn test_normalize_strips_one_prefix_and_one_suffix() {
    assert_eq!(normalize("Small Lantern Style"), "Lantern");
    assert_eq!(normalize("set of 6 Coasters"), "Coasters");
    assert_eq!(normalize("Medium Storage Tin"), "Storage Tin");
    assert_eq!(normalize("Wall Clock Metal"), "Wall Clock");
}

#[test]
fn test_normalize_only_matches_whole_leading_words() {
    // "Largest" is not the "Large" prefix
    assert_eq!(normalize("Largest Bowl"), "Largest Bowl");
    assert_eq!(normalize("Signature Candle"), "Signature Candle");
}

#[test]
fn test_normalize_blank_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
}
