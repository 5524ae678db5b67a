use keymap_drawer::keycodes::{
    build_keycode_map, default_keycode_map, EFFECTIVE_KEYCODE_COUNT, KEYCODE_ASSIGNMENTS,
};
use keymap_drawer::ParseConfig;
use rstest::rstest;
use std::collections::HashMap;

#[test]
fn test_every_key_holds_its_last_assignment() {
    let mut last: HashMap<&str, &str> = HashMap::new();
    for &(keycode, glyph) in KEYCODE_ASSIGNMENTS {
        last.insert(keycode, glyph);
    }

    let map = default_keycode_map();
    assert_eq!(map.len(), last.len());
    assert_eq!(map.len(), EFFECTIVE_KEYCODE_COUNT);
    for (keycode, glyph) in last {
        assert_eq!(map[keycode], glyph, "{}", keycode);
    }
}

#[test]
fn test_colon_is_the_only_duplicate_that_changes() {
    let mut first: HashMap<&str, &str> = HashMap::new();
    let mut changed = Vec::new();
    for &(keycode, glyph) in KEYCODE_ASSIGNMENTS {
        match first.get(keycode) {
            Some(prev) if *prev != glyph => changed.push(keycode),
            Some(_) => {}
            None => {
                first.insert(keycode, glyph);
            }
        }
    }
    assert_eq!(changed, ["COLON"]);
}

#[rstest]
#[case("AT", "@")]
#[case("HASH", "#")]
#[case("PLUS", "+")]
#[case("DOT", ".")]
#[case("LT", "<")]
#[case("GT", ">")]
#[case("DQT", "\"")]
#[case("NUHS", "#")]
#[case("COLON", "'")]
#[case("COLN", ":")]
fn test_duplicated_keys(#[case] keycode: &str, #[case] glyph: &str) {
    assert_eq!(default_keycode_map()[keycode], glyph);
}

// These look like transcription slips but are kept until confirmed upstream.
#[rstest]
#[case("APOS", ".")]
#[case("APOSTROPHE", "<")]
#[case("LBKT", "]")]
#[case("SQT", "\"")]
#[case("COLON", "'")]
fn test_suspect_entries_preserved(#[case] keycode: &str, #[case] glyph: &str) {
    assert_eq!(default_keycode_map()[keycode], glyph);
}

#[rstest]
#[case("BSLS", "\\")]
#[case("NON_US_BSLH", "|")]
#[case("PIPE2", "|")]
#[case("TILDE2", "~")]
#[case("LEFT_CURLY_BRACE", "{")]
#[case("RBKT", "]")]
#[case("GRV", "`")]
fn test_plain_entries(#[case] keycode: &str, #[case] glyph: &str) {
    assert_eq!(default_keycode_map()[keycode], glyph);
}

#[test]
fn test_confusable_brackets_left_out() {
    let map = default_keycode_map();
    assert!(!map.contains_key("LBRC"));
    assert!(!map.contains_key("RBRC"));
}

#[test]
fn test_build_keycode_map_order_matters() {
    let forward = build_keycode_map([("X", "1"), ("X", "2")]);
    let backward = build_keycode_map([("X", "2"), ("X", "1")]);
    assert_eq!(forward["X"], "2");
    assert_eq!(backward["X"], "1");
}

#[test]
fn test_glyph_lookup_uppercases() {
    let config = ParseConfig::default();
    assert_eq!(config.glyph("excl"), Some("!"));
    assert_eq!(config.glyph("EXCL"), Some("!"));
    assert_eq!(config.glyph("A"), None);
}

#[test]
fn test_display_label_falls_back_to_keycode() {
    let config = ParseConfig::default();
    assert_eq!(config.display_label("QUES"), "?");
    assert_eq!(config.display_label("LBRC"), "LBRC");
}
