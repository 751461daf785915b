use pregcompat::{CaptureKey, Context, GlobalMatches, MatchFlags, PregError};

fn ctx() -> Context {
    Context::new()
}

#[test]
fn case_insensitive_single_match() {
    let row = ctx()
        .match_one("/hello/i", "Hello world", MatchFlags::empty(), 0)
        .expect("compile")
        .expect("match");
    assert_eq!(row[0], "Hello");
    assert_eq!(row.whole(), "Hello");
}

#[test]
fn no_match_is_not_an_error() {
    let result = ctx().match_one("/xyz/", "hello", MatchFlags::empty(), 0);
    assert!(matches!(result, Ok(None)));
}

#[test]
fn compile_failure_is_distinct_from_no_match() {
    let result = ctx().match_one("/(/", "hello", MatchFlags::empty(), 0);
    assert!(matches!(result, Err(PregError::Compile { .. })));
}

#[test]
fn groups_are_numbered_from_one() {
    let row = ctx()
        .match_one(r"/(\d+)-(\d+)/", "date: 2024-01", MatchFlags::empty(), 0)
        .expect("compile")
        .expect("match");
    assert_eq!(row.len(), 3);
    assert_eq!(row[0], "2024-01");
    assert_eq!(row[1], "2024");
    assert_eq!(row[2], "01");
}

#[test]
fn named_groups_precede_their_numbers() {
    let row = ctx()
        .match_one(r"/(?P<year>\d{4})-(?P<month>\d\d)/", "on 2024-03", MatchFlags::empty(), 0)
        .expect("compile")
        .expect("match");
    let keys: Vec<String> = row.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["0", "year", "1", "month", "2"]);
    assert_eq!(row["year"], "2024");
    assert_eq!(row[1], "2024");
    assert_eq!(row["month"], "03");
}

#[test]
fn unmatched_groups_read_as_empty_text() {
    let row = ctx()
        .match_one("/(a)(b)?(c)/", "ac", MatchFlags::empty(), 0)
        .expect("compile")
        .expect("match");
    assert_eq!(row[2].text.as_deref(), Some(""));
    assert_eq!(row[3], "c");
}

#[test]
fn unmatched_groups_as_null() {
    let row = ctx()
        .match_one("/(a)(b)?/", "a", MatchFlags::UNMATCHED_AS_NULL, 0)
        .expect("compile")
        .expect("match");
    assert_eq!(row[1], "a");
    assert_eq!(row[2].text, None);
    assert_eq!(row[2].offset, None);
}

#[test]
fn offset_capture_reports_exact_group_positions() {
    let row = ctx()
        .match_one("/(a)(b)?(a)/", "xxaa", MatchFlags::OFFSET_CAPTURE, 0)
        .expect("compile")
        .expect("match");
    assert_eq!(row[0].offset, Some(2));
    assert_eq!(row[1].offset, Some(2));
    assert_eq!(row[2].offset, Some(-1));
    assert_eq!(row[2].text.as_deref(), Some(""));
    assert_eq!(row[3].offset, Some(3));
}

#[test]
fn offset_capture_with_null_unmatched() {
    let row = ctx()
        .match_one(
            "/(x)?y/",
            "ay",
            MatchFlags::OFFSET_CAPTURE | MatchFlags::UNMATCHED_AS_NULL,
            0,
        )
        .expect("compile")
        .expect("match");
    assert_eq!(row[1].text, None);
    assert_eq!(row[1].offset, Some(-1));
}

#[test]
fn search_offset_shifts_reported_positions() {
    let row = ctx()
        .match_one("/a/", "banana", MatchFlags::OFFSET_CAPTURE, 2)
        .expect("compile")
        .expect("match");
    assert_eq!(row[0], "a");
    assert_eq!(row[0].offset, Some(3));
}

#[test]
fn negative_offset_counts_from_the_end() {
    let row = ctx()
        .match_one(r"/\w+/", "hello world", MatchFlags::empty(), -5)
        .expect("compile")
        .expect("match");
    assert_eq!(row[0], "world");
}

#[test]
fn offset_past_the_end_never_matches() {
    let result = ctx().match_one("/a/", "abc", MatchFlags::empty(), 10);
    assert!(matches!(result, Ok(None)));
}

#[test]
fn search_starts_at_the_sliced_subject() {
    // The slice starts at the offset, so `^` anchors there.
    let row = ctx()
        .match_one("/^b/", "abc", MatchFlags::OFFSET_CAPTURE, 1)
        .expect("compile")
        .expect("match");
    assert_eq!(row[0].offset, Some(1));
}

#[test]
fn global_match_defaults_to_pattern_order() {
    let matches = ctx()
        .match_all(r"/(\d)(\w)/", "1a 2b 3c", MatchFlags::empty(), 0)
        .expect("compile");
    assert_eq!(matches.count(), 3);
    let columns = matches.as_pattern_order().expect("pattern order");
    let whole: Vec<&str> = columns[0].iter().map(|v| v.text_or_empty()).collect();
    assert_eq!(whole, vec!["1a", "2b", "3c"]);
    let letters: Vec<&str> = columns[2].iter().map(|v| v.text_or_empty()).collect();
    assert_eq!(letters, vec!["a", "b", "c"]);
}

#[test]
fn global_match_in_set_order() {
    let matches = ctx()
        .match_all(r"/(\d)(\w)/", "1a 2b", MatchFlags::SET_ORDER, 0)
        .expect("compile");
    let rows = matches.as_set_order().expect("set order");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "1a");
    assert_eq!(rows[1][1], "2");
    assert_eq!(rows[1][2], "b");
}

#[test]
fn orders_agree_on_occurrence_count() {
    let mut ctx = ctx();
    for (pattern, subject) in [
        (r"/\w+/", "the quick brown fox"),
        ("/x*/", "axbxx"),
        ("/z/", "no zeds here? one z"),
        ("/q/", "nothing"),
    ] {
        let set = ctx
            .match_all(pattern, subject, MatchFlags::SET_ORDER, 0)
            .expect("compile");
        let columns = ctx
            .match_all(pattern, subject, MatchFlags::PATTERN_ORDER, 0)
            .expect("compile");
        let by_column = columns.as_pattern_order().expect("pattern order");
        assert_eq!(set.count(), by_column[0].len(), "{pattern} on {subject}");
        assert_eq!(set.count(), columns.count());
    }
}

#[test]
fn pattern_order_keeps_whole_match_key_without_occurrences() {
    let matches = ctx()
        .match_all("/(a)(?P<n>b)/", "zzz", MatchFlags::empty(), 0)
        .expect("compile");
    assert_eq!(matches.count(), 0);
    let columns = matches.as_pattern_order().expect("pattern order");
    let keys: Vec<&CaptureKey> = columns.keys().collect();
    assert_eq!(keys[0], &CaptureKey::Index(0));
    assert!(columns[0].is_empty());
    assert!(columns["n"].is_empty());
}

#[test]
fn zero_length_matches_do_not_loop() {
    let matches = ctx()
        .match_all("/x*/", "abc", MatchFlags::SET_ORDER, 0)
        .expect("compile");
    assert_eq!(matches.count(), 4);
}

#[test]
fn global_offsets_refer_to_the_full_subject() {
    let matches = ctx()
        .match_all("/o/", "foo boo", MatchFlags::SET_ORDER | MatchFlags::OFFSET_CAPTURE, 3)
        .expect("compile");
    let offsets: Vec<Option<isize>> = matches
        .as_set_order()
        .expect("set order")
        .iter()
        .map(|row| row[0].offset)
        .collect();
    assert_eq!(offsets, vec![Some(5), Some(6)]);
}

#[test]
fn conflicting_order_flags_are_a_caller_error() {
    let mut ctx = ctx();
    let err = ctx
        .match_all("/a/", "a", MatchFlags::SET_ORDER | MatchFlags::PATTERN_ORDER, 0)
        .expect_err("invalid flags");
    assert!(matches!(err, PregError::Argument { .. }));
    assert_eq!(err.error_code(), None);
}

#[test]
fn multiline_and_dotall_modifiers() {
    let mut ctx = ctx();
    let lines = ctx
        .match_all("/^\\w+$/m", "one\ntwo", MatchFlags::empty(), 0)
        .expect("compile");
    assert_eq!(lines.count(), 2);

    assert!(ctx.is_match("/a.b/s", "a\nb").expect("compile"));
    assert!(!ctx.is_match("/a.b/", "a\nb").expect("compile"));
}

#[test]
fn unicode_subjects_report_byte_offsets() {
    let row = ctx()
        .match_one("/ü/u", "grün", MatchFlags::OFFSET_CAPTURE, 0)
        .expect("compile")
        .expect("match");
    assert_eq!(row[0].offset, Some(2));
}

#[test]
fn set_order_rows_are_independent_matches() {
    let matches = ctx()
        .match_all("/(a)|(b)/", "ab", MatchFlags::SET_ORDER | MatchFlags::UNMATCHED_AS_NULL, 0)
        .expect("compile");
    let GlobalMatches::SetOrder(rows) = matches else {
        panic!("expected set order");
    };
    assert_eq!(rows[0][1], "a");
    assert_eq!(rows[0][2].text, None);
    assert_eq!(rows[1][1].text, None);
    assert_eq!(rows[1][2], "b");
}

#[test]
fn dollar_does_not_match_before_a_trailing_newline() {
    let mut ctx = ctx();
    let plain = ctx.match_one("/a$/", "a\n", MatchFlags::empty(), 0);
    assert!(matches!(plain, Ok(None)));

    let row = ctx
        .match_one("/a$/m", "a\n", MatchFlags::empty(), 0)
        .expect("compile")
        .expect("match");
    assert_eq!(row[0], "a");
}
