//! Integration tests for line sorting.

mod common;

use common::MockDoc;
use sortlines::model::{Attribute, AttributeKind, Paint, Rgb, StyleAttributes, TextNode};
use sortlines::sort::{
    extract_characters, join_lines, sort_lines, sorted_characters, split_on, Character,
};
use sortlines::{Error, StyledText};

fn node_with_lines(lines: &[&str]) -> TextNode {
    TextNode::with_text("1:1", &lines.join("\n"))
}

fn sized(size: f32) -> StyleAttributes {
    StyleAttributes::default().with_font_size(size)
}

#[test]
fn test_scenario_simple_lines() {
    let mut node = node_with_lines(&["banana", "apple", "cherry"]);
    sort_lines(&mut node).unwrap();
    assert_eq!(node.lines(), vec!["apple", "banana", "cherry"]);
}

#[test]
fn test_scenario_blank_line_sorts_last() {
    let mut node = node_with_lines(&["zebra", "", "apple"]);
    sort_lines(&mut node).unwrap();
    assert_eq!(node.lines(), vec!["apple", "zebra", ""]);
}

#[test]
fn test_scenario_uppercase_before_lowercase() {
    let mut node = node_with_lines(&["  Beta", "alpha  "]);
    sort_lines(&mut node).unwrap();
    assert_eq!(node.lines(), vec!["  Beta", "alpha  "]);

    let mut node = node_with_lines(&["alpha  ", "  Beta"]);
    sort_lines(&mut node).unwrap();
    assert_eq!(node.lines(), vec!["  Beta", "alpha  "]);
}

#[test]
fn test_scenario_mixed_fill_left_to_host() {
    // "cherry": position 4 is the second 'r'
    let mut node = TextNode::new("1:1");
    let red = vec![Paint::solid(Rgb::new(1.0, 0.0, 0.0))];
    node.default_style = StyleAttributes::default().with_fills(red.clone());
    node.push_styled("cherry\napple", &StyleAttributes::default());
    {
        let style = node.style_at_mut(4).unwrap();
        style.fills = Attribute::Indeterminate;
        style.font_size = Attribute::Concrete(30.0);
    }

    let mut doc = MockDoc::new(node);
    let report = sort_lines(&mut doc).unwrap();

    assert_eq!(doc.inner.text(), "apple\ncherry");
    assert_eq!(report.attributes_skipped, 1);
    assert_eq!(doc.writes_of(AttributeKind::Fills), 11);
    assert_eq!(doc.writes_of(AttributeKind::FontSize), 12);

    let moved = doc.inner.style_at(10).unwrap();
    assert_eq!(moved.font_size, Attribute::Concrete(30.0));
    assert_eq!(moved.fills, Attribute::Concrete(red));

    // Every other position got its own fill back
    let black = StyleAttributes::default().fills;
    assert_eq!(doc.inner.style_at(0).unwrap().fills, black);
}

#[test]
fn test_empty_document_untouched() {
    let mut doc = MockDoc::text("1:1", "");
    let report = sort_lines(&mut doc).unwrap();

    assert_eq!(report.lines, 0);
    assert_eq!(doc.content_writes, 0);
    assert!(doc.writes.is_empty());
}

#[test]
fn test_content_length_preserved() {
    let inputs = [
        "a",
        "\n",
        "\n\n\n",
        "b\na\n",
        "  x  \n\ty\n z",
        "日本\n中文\n한국어",
        "🦀 crab\n🐍 snake",
    ];
    for input in inputs {
        let mut node = TextNode::with_text("1:1", input);
        let before = node.len();
        sort_lines(&mut node).unwrap();
        assert_eq!(node.len(), before, "length changed for {:?}", input);
    }
}

#[test]
fn test_sorting_twice_matches_once() {
    let mut node = TextNode::new("1:1");
    node.push_styled("apple\n", &sized(14.0));
    node.push_styled("pear\n", &sized(18.0));
    node.push_styled("\n", &sized(22.0));
    node.push_styled("  fig", &sized(26.0));

    sort_lines(&mut node).unwrap();
    let once = node.clone();
    sort_lines(&mut node).unwrap();
    assert_eq!(node, once);
}

#[test]
fn test_sorting_twice_keeps_text_when_first_line_moves() {
    // Line breaks restyle from whatever character comes first, so only the
    // text is stable here
    let mut node = TextNode::new("1:1");
    node.push_styled("pear\n", &sized(14.0));
    node.push_styled("apple", &sized(26.0));

    sort_lines(&mut node).unwrap();
    let once = node.text();
    sort_lines(&mut node).unwrap();
    assert_eq!(node.text(), once);
    assert_eq!(node.style_at(5).unwrap().font_size, Attribute::Concrete(26.0));
}

#[test]
fn test_blank_lines_keep_relative_order() {
    let mut node = TextNode::new("1:1");
    node.push_styled(" ", &sized(10.0));
    node.push_styled("\nb\n", &StyleAttributes::default());
    node.push_styled(" ", &sized(20.0));
    node.push_styled("\na", &StyleAttributes::default());

    sort_lines(&mut node).unwrap();

    assert_eq!(node.text(), "a\nb\n \n ");
    assert_eq!(node.style_at(4).unwrap().font_size, Attribute::Concrete(10.0));
    assert_eq!(node.style_at(6).unwrap().font_size, Attribute::Concrete(20.0));
}

#[test]
fn test_styles_travel_with_characters() {
    let mut node = TextNode::new("1:1");
    node.push_styled("banana", &sized(10.0));
    node.push_styled("\n", &StyleAttributes::default());
    node.push_styled("apple", &sized(20.0));

    let before: Vec<(char, StyleAttributes)> = node
        .iter()
        .map(|(c, style)| (c, style.clone()))
        .collect();
    sort_lines(&mut node).unwrap();

    assert_eq!(node.text(), "apple\nbanana");
    for i in 0..5 {
        assert_eq!(node.style_at(i), Some(&before[7 + i].1));
    }
    for i in 0..6 {
        assert_eq!(node.style_at(6 + i), Some(&before[i].1));
    }
}

#[test]
fn test_partition_join_round_trip() {
    let mut node = TextNode::new("1:1");
    node.push_styled("\nb\n\n", &sized(12.0));
    node.push_styled("a", &sized(16.0));
    node.push_styled("\n", &sized(12.0));

    let characters = extract_characters(&node).unwrap();
    let line_break = characters[0].to_line_break();
    let lines = split_on(characters.clone(), Character::is_line_break);
    assert_eq!(lines.len(), 5);

    assert_eq!(join_lines(lines, &line_break), characters);
}

#[test]
fn test_dry_run_matches_sort() {
    let mut node = node_with_lines(&["b", "c", "a"]);
    let planned: String = sorted_characters(&node)
        .unwrap()
        .unwrap()
        .iter()
        .map(|c| c.character)
        .collect();

    assert_eq!(node.text(), "b\nc\na");
    sort_lines(&mut node).unwrap();
    assert_eq!(node.text(), planned);
}

#[test]
fn test_writes_content_once_then_every_attribute() {
    let mut doc = MockDoc::text("1:1", "b\na");
    let report = sort_lines(&mut doc).unwrap();

    assert_eq!(doc.content_writes, 1);
    assert_eq!(doc.writes.len(), 3 * 9);
    assert_eq!(report.attributes_applied, 27);
    assert_eq!(report.attributes_skipped, 0);
    assert_eq!(doc.writes[0], (AttributeKind::FontSize, 0..1));
    assert_eq!(doc.writes[9], (AttributeKind::FontSize, 1..2));
}

#[test]
fn test_setter_failure_aborts() {
    let mut doc = MockDoc::text("1:1", "b\na").failing_on(AttributeKind::LineHeight, 1);
    let result = sort_lines(&mut doc);

    assert!(matches!(result, Err(Error::Other(_))));
    // Content and the first position were written before the failure
    assert_eq!(doc.content(), "a\nb");
    assert_eq!(doc.writes.len(), 9 + 5);
}

#[test]
fn test_getter_failure_aborts_before_writing() {
    let mut doc = MockDoc::text("1:1", "b\na").failing_get(AttributeKind::LetterSpacing, 2);
    let before = doc.inner.clone();

    let result = sort_lines(&mut doc);

    assert!(matches!(result, Err(Error::Other(msg)) if msg.contains("letterSpacing at 2")));
    assert_eq!(doc.content_writes, 0);
    assert!(doc.writes.is_empty());
    assert_eq!(doc.inner, before);

    // The dry run reports the same failure
    assert!(sorted_characters(&doc).is_err());
}

#[test]
fn test_invalid_font_size_surfaces() {
    let mut node = TextNode::with_text("1:1", "b\na");
    node.style_at_mut(2).unwrap().font_size = Attribute::Concrete(0.0);

    let result = sort_lines(&mut node);
    assert!(matches!(
        result,
        Err(Error::InvalidValue {
            kind: AttributeKind::FontSize,
            ..
        })
    ));
}
