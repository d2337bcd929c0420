#![allow(non_snake_case)]

use super::*;
use serde_json::json;
use test_case::test_case;

// capitalize / uncapitalize

#[test_case("hello", "Hello" ; "lowercase word")]
#[test_case("Hello", "Hello" ; "already capitalized")]
#[test_case("h", "H" ; "single char")]
#[test_case("", "" ; "empty")]
#[test_case("éclair", "Éclair" ; "non ascii")]
fn capitalize___first_char_uppercased(input: &str, expected: &str) {
    assert_eq!(capitalize(input), expected);
}

#[test_case("Hello", "hello" ; "capitalized word")]
#[test_case("hello", "hello" ; "already lowercase")]
#[test_case("ID", "iD" ; "only first char")]
#[test_case("", "" ; "empty")]
fn uncapitalize___first_char_lowercased(input: &str, expected: &str) {
    assert_eq!(uncapitalize(input), expected);
}

// left_justified

#[test]
fn left_justified___short_text___padded_to_width() {
    assert_eq!(left_justified("ab", 5), "ab   ");
}

#[test]
fn left_justified___text_at_or_over_width___unchanged() {
    assert_eq!(left_justified("abcde", 5), "abcde");
    assert_eq!(left_justified("abcdefg", 5), "abcdefg");
}

#[test]
fn spaces___count___that_many_spaces() {
    assert_eq!(spaces(0), "");
    assert_eq!(spaces(3), "   ");
}

// format_block / format_comment

#[test]
fn format_comment___short_text___single_line_framed_by_pads() {
    let block = format_comment("The user id", 4, 80);

    assert_eq!(block, "    //\n    // The user id\n    //\n");
}

#[test]
fn format_comment___empty_text___empty_string() {
    assert_eq!(format_comment("", 4, 80), "");
    assert_eq!(format_comment("   ", 4, 80), "");
}

#[test]
fn format_comment___long_text___lines_within_width() {
    let text = "The quick brown fox jumps over the lazy dog and then keeps running through \
                the forest until it reaches the river where it finally stops to rest";

    let block = format_comment(text, 4, 40);

    let lines: Vec<&str> = block.lines().collect();
    assert!(lines.len() > 3);
    for line in &lines {
        assert!(line.chars().count() <= 40, "line too long: {line:?}");
    }
}

#[test]
fn format_comment___long_text___every_content_line_prefixed() {
    let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu";

    let block = format_comment(text, 2, 24);

    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines.first(), Some(&"  //"));
    assert_eq!(lines.last(), Some(&"  //"));
    for line in &lines[1..lines.len() - 1] {
        assert!(line.starts_with("  // "), "unprefixed line: {line:?}");
    }
}

#[test]
fn format_comment___long_text___word_order_preserved() {
    let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu";

    let block = format_comment(text, 2, 24);

    let words: Vec<&str> = block
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("//"))
        .flat_map(str::split_whitespace)
        .collect();
    assert_eq!(words, text.split_whitespace().collect::<Vec<_>>());
}

#[test]
fn format_comment___word_longer_than_width___gets_own_line() {
    let block = format_comment("a supercalifragilisticexpialidocious b", 0, 12);

    assert_eq!(
        block,
        "//\n// a\n// supercalifragilisticexpialidocious\n// b\n//\n"
    );
}

#[test]
fn format_block___custom_prefix___pad_uses_trimmed_prefix() {
    let block = format_block("one two three", 1, 80, " * ");

    assert_eq!(block, " *\n  * one two three\n *\n");
}

// split

#[test]
fn split___quoted_delimiter___not_a_split_point() {
    assert_eq!(split(r#"a,"b,c",d"#, ','), vec!["a", r#""b,c""#, "d"]);
}

#[test_case("a,b,c", ',', vec!["a", "b", "c"] ; "plain")]
#[test_case("a", ',', vec!["a"] ; "no delimiter")]
#[test_case("", ',', vec![] ; "empty")]
#[test_case("a,b,", ',', vec!["a", "b"] ; "trailing delimiter")]
#[test_case(",a", ',', vec!["", "a"] ; "leading delimiter")]
#[test_case("a,,b", ',', vec!["a", "", "b"] ; "adjacent delimiters")]
#[test_case(r#""a,b",c"#, ',', vec![r#""a,b""#, "c"] ; "quote at start")]
#[test_case(r#"a\",b"#, ',', vec![r#"a\""#, "b"] ; "escaped quote does not toggle")]
#[test_case("x:y;z", ';', vec!["x:y", "z"] ; "other delimiter")]
fn split___cases(input: &str, delim: char, expected: Vec<&str>) {
    assert_eq!(split(input, delim), expected);
}

#[test]
fn split___unterminated_quote___rest_is_one_piece() {
    assert_eq!(split(r#"a,"b,c"#, ','), vec!["a", r#""b,c"#]);
}

// camel_snake_to_kebab

#[test_case("Contacts", "contacts" ; "single word")]
#[test_case("ContactList", "contact-list" ; "pascal")]
#[test_case("contactList", "contact-list" ; "camel")]
#[test_case("contact_list", "contact-list" ; "snake")]
#[test_case("HTTPServer", "httpserver" ; "acronym run")]
#[test_case("contact_List", "contact-list" ; "mixed separator")]
fn camel_snake_to_kebab___converts(input: &str, expected: &str) {
    assert_eq!(camel_snake_to_kebab(input), expected);
}

// default_literal

#[test]
fn default_literal___absent_or_null___null() {
    assert_eq!(default_literal(None), "null");
    assert_eq!(default_literal(Some(&json!(null))), "null");
}

#[test]
fn default_literal___scalars___rendered() {
    assert_eq!(default_literal(Some(&json!(true))), "true");
    assert_eq!(default_literal(Some(&json!(42))), "42");
    assert_eq!(default_literal(Some(&json!(-1.5))), "-1.5");
    assert_eq!(default_literal(Some(&json!("hi \"there\""))), r#""hi \"there\"""#);
}

#[test]
fn default_literal___composite___null() {
    assert_eq!(default_literal(Some(&json!([1, 2]))), "null");
    assert_eq!(default_literal(Some(&json!({"a": 1}))), "null");
}
