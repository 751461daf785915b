use pregcompat::{Context, MatchFlags, SplitFlags};
use serde_json::json;

#[test]
fn rows_serialize_as_keyed_maps() {
    let row = Context::new()
        .match_one(r"/(?P<k>\w)=(\d)/", "a=1", MatchFlags::empty(), 0)
        .expect("compile")
        .expect("match");
    let value = serde_json::to_value(&row).expect("serialize");
    assert_eq!(value, json!({"0": "a=1", "k": "a", "1": "a", "2": "1"}));
}

#[test]
fn offset_captures_serialize_as_pairs() {
    let row = Context::new()
        .match_one("/(x)?b/", "ab", MatchFlags::OFFSET_CAPTURE | MatchFlags::UNMATCHED_AS_NULL, 0)
        .expect("compile")
        .expect("match");
    let value = serde_json::to_value(&row).expect("serialize");
    assert_eq!(value, json!({"0": ["b", 1], "1": [null, -1]}));
}

#[test]
fn pattern_order_serializes_by_column() {
    let matches = Context::new()
        .match_all(r"/(\d)/", "1 2", MatchFlags::empty(), 0)
        .expect("compile");
    let value = serde_json::to_value(&matches).expect("serialize");
    assert_eq!(value, json!({"0": ["1", "2"], "1": ["1", "2"]}));
}

#[test]
fn set_order_serializes_by_row() {
    let matches = Context::new()
        .match_all(r"/\d/", "1 2", MatchFlags::SET_ORDER, 0)
        .expect("compile");
    let value = serde_json::to_value(&matches).expect("serialize");
    assert_eq!(value, json!([{"0": "1"}, {"0": "2"}]));
}

#[test]
fn split_pieces_serialize_with_optional_offsets() {
    let mut ctx = Context::new();
    let plain = ctx.split("/-/", "a-b", -1, SplitFlags::empty()).expect("compile");
    assert_eq!(serde_json::to_value(&plain).expect("serialize"), json!(["a", "b"]));

    let located = ctx
        .split("/-/", "a-b", -1, SplitFlags::OFFSET_CAPTURE)
        .expect("compile");
    assert_eq!(
        serde_json::to_value(&located).expect("serialize"),
        json!([["a", 0], ["b", 2]])
    );
}

#[test]
fn replaced_serializes_output_and_count() {
    let replaced = Context::new()
        .replace("/a/", "o", vec!["aa", "b"], -1)
        .expect("compile");
    let value = serde_json::to_value(&replaced).expect("serialize");
    assert_eq!(value, json!({"output": ["oo", "b"], "count": 2}));
}
