// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use prodimg::domain::services::placeholder::{classify, display_text, PlaceholderGenerator};

#[test]
fn test_storage_wins_over_later_themes() {
    let generator = PlaceholderGenerator::default();
    assert_eq!(
        generator.generate("Storage Tin Vintage Leaf"),
        "https://via.placeholder.com/400x300/3498DB/FFFFFF?text=Storage%2BTin%2BVintage%2BLeaf"
    );
    assert_eq!(classify("Storage Tin Vintage Leaf").category, "storage");
}

#[test]
fn test_unmatched_name_uses_home_theme() {
    assert_eq!(classify("Garden Gnome").category, "home");
}

#[test]
fn test_generate_is_deterministic() {
    let generator = PlaceholderGenerator::default();
    let name = "Christmas Tree Bauble, Red & Gold";
    assert_eq!(generator.generate(name), generator.generate(name));
}

#[test]
fn test_generated_url_has_fixed_shape() {
    let generator = PlaceholderGenerator::default();
    let url = generator.generate("Retro Toy Robot!!");
    assert!(url.starts_with("https://via.placeholder.com/400x300/"));
    assert!(url.contains("?text="));
    assert!(!url.contains(' '));
}

#[test]
fn test_display_text_is_bounded() {
    let text = display_text("An Extremely Long Product Name That Keeps Going");
    assert!(text.chars().count() <= 25);
    assert!(!text.contains(' '));
}

#[test]
fn test_custom_base_url() {
    let generator = PlaceholderGenerator::new("http://localhost:9000/");
    assert!(generator
        .generate("Tea Caddy")
        .starts_with("http://localhost:9000/400x300/"));
}
