//! Tests for section splitting

use super::*;

/// Lowercase filler of exactly `len` characters (no markers can match)
fn filler(len: usize) -> String {
    let mut s = String::new();
    while s.len() < len {
        s.push_str("ipsum ");
    }
    s.truncate(len);
    s
}

/// `count` lowercase words separated by spaces
fn words(count: usize) -> String {
    vec!["data"; count].join(" ")
}

/// Every section's content appears in `text`, in order
fn assert_in_source_order(text: &str, sections: &[Section]) {
    let mut cursor = 0;
    for section in sections {
        let found = text[cursor..]
            .find(&section.content)
            .unwrap_or_else(|| panic!("section {:?} not found in order", section.title));
        cursor += found + section.content.len();
    }
}

#[test]
fn test_two_bold_markers_with_introduction() {
    let mut text = filler(120);
    text.push_str("**First Topic**: ");
    text.push_str(&filler(400 - text.len()));
    assert_eq!(text.len(), 400);
    text.push_str("**Second Topic**: ");
    text.push_str(&words(560));

    let sections = split(&text);
    assert_eq!(sections.len(), 3);

    assert_eq!(sections[0].title, "Introduction");
    assert_eq!(sections[0].content, text[..120].trim());
    assert!(sections[0].default_open);

    assert_eq!(sections[1].title, "First Topic");
    assert!(sections[1].default_open);
    assert!(!sections[1].content.contains("**"));

    assert_eq!(sections[2].title, "Second Topic");
    assert!(!sections[2].default_open);
    assert!(sections[2].content.starts_with("data data"));

    assert_in_source_order(&text, &sections);
}

#[test]
fn test_no_introduction_when_first_marker_is_early() {
    let text = format!(
        "{}**Alpha**: {} **Beta**: {}",
        filler(100),
        words(30),
        words(30)
    );
    let sections = split(&text);
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta"]);
}

#[test]
fn test_introduction_threshold_is_strict() {
    // Exactly 100 characters before the first marker: no introduction
    let at_100 = format!("{}**Alpha**: {} **Beta**: {}", filler(100), words(30), words(30));
    assert_eq!(split(&at_100)[0].title, "Alpha");

    // 101 characters: introduction emitted
    let at_101 = format!("{}**Alpha**: {} **Beta**: {}", filler(101), words(30), words(30));
    assert_eq!(split(&at_101)[0].title, "Introduction");
}

#[test]
fn test_section_length_boundary_50_dropped_51_kept() {
    let fifty = "x".repeat(50);
    let fifty_one = "y".repeat(51);
    let text = format!("**Alpha**: {} **Beta**: {}", fifty, fifty_one);

    let sections = split(&text);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Beta");
    assert_eq!(sections[0].content, fifty_one);
}

#[test]
fn test_only_first_match_opens_even_when_dropped() {
    // First marker's fragment is too short; second section must stay closed
    let text = format!("**Alpha**: short **Beta**: {}", words(30));
    let sections = split(&text);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Beta");
    assert!(!sections[0].default_open);
}

#[test]
fn test_all_fragments_too_short_gives_empty_marker_result() {
    let text = "**Alpha**: tiny **Beta**: also tiny";
    let (tier, sections) = split_with_tier(text).unwrap();
    assert_eq!(tier, SplitTier::Markers);
    assert!(sections.is_empty());
}

#[test]
fn test_single_marker_falls_back_to_paragraphs() {
    let text = format!(
        "**Only**: {}\n\n{}\n\n{}\n\n{}",
        words(40),
        words(40),
        words(40),
        words(40)
    );
    let (tier, sections) = split_with_tier(&text).unwrap();
    assert_eq!(tier, SplitTier::Paragraphs);
    assert_eq!(sections.len(), 2);
}

#[test]
fn test_few_paragraphs_without_markers_is_empty() {
    let text = format!("{}\n\n{}\n\n{}", words(200), words(200), words(200));
    assert!(split_with_tier(&text).is_none());
    assert!(split(&text).is_empty());
}

#[test]
fn test_five_paragraphs_without_markers() {
    let paras: Vec<String> = (0..5).map(|_| words(120)).collect();
    let text = paras.join("\n\n");

    let sections = split(&text);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "Introduction");
    assert!(sections[0].default_open);
    assert_eq!(sections[0].content, paras[..3].join("\n\n"));
    assert_eq!(sections[1].title, "Details");
    assert!(!sections[1].default_open);
    assert_eq!(sections[1].content, paras[3..].join("\n\n"));
}

#[test]
fn test_paragraph_split_reconstructs_paragraph_set() {
    let text = "alpha one\n\nbeta two\n\n  \n\ngamma three\n\ndelta four\n\nepsilon five\n\nzeta six";
    let sections = split(text);
    let joined = format!("{}\n\n{}", sections[0].content, sections[1].content);
    assert_eq!(
        joined.split("\n\n").collect::<Vec<_>>(),
        paragraphs::paragraphs(text)
    );
}

#[test]
fn test_mixed_markers_in_source_order() {
    let text = format!(
        "{}\nOverview: {}\n1. Gather inputs: {}\nKey Concepts: {}",
        filler(150),
        words(20),
        words(20),
        words(20)
    );
    let sections = split(&text);
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Introduction", "Overview", "Gather inputs", "Key Concepts"]
    );
    assert_in_source_order(&text, &sections);
    assert!(sections.iter().all(|s| !s.content.contains("Key Concepts:")));
}

#[test]
fn test_empty_text_has_no_sections() {
    assert!(split("").is_empty());
}

#[test]
fn test_split_is_deterministic() {
    let text = format!("**A b**: {} Model Training: {}", words(20), words(20));
    assert_eq!(split(&text), split(&text));
}
