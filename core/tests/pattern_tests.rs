use pregcompat::{Context, ErrorCode, ParseErrorKind, PregError, parse_literal};

fn parse_kind(literal: &str) -> ParseErrorKind {
    parse_literal(literal).expect_err("literal should be rejected").kind
}

#[test]
fn splits_body_and_modifiers() {
    let parsed = parse_literal("/ab+c/im").expect("parse");
    assert_eq!(parsed.source, "ab+c");
    assert_eq!(parsed.delimiter, '/');
    assert!(parsed.flags.ignore_case);
    assert!(parsed.flags.multiline);
    assert!(!parsed.flags.dotall);
    assert_eq!(parsed.flag_string(), "im");
}

#[test]
fn body_ends_at_last_delimiter() {
    let parsed = parse_literal("/a/b/i").expect("parse");
    assert_eq!(parsed.source, "a/b");
    assert!(parsed.flags.ignore_case);
}

#[test]
fn escaped_delimiters_stay_in_the_body() {
    let parsed = parse_literal(r"/a\/b/").expect("parse");
    assert_eq!(parsed.source, r"a\/b");
}

#[test]
fn accepts_other_delimiters() {
    assert_eq!(parse_literal("#a/b#").expect("parse").source, "a/b");
    assert_eq!(parse_literal("~x~s").expect("parse").source, "x");
    assert_eq!(parse_literal("{a{2}}i").expect("parse").source, "a{2}");
    assert_eq!(parse_literal("(foo)").expect("parse").source, "foo");
    assert_eq!(parse_literal("[x]").expect("parse").source, "x");
}

#[test]
fn skips_leading_whitespace() {
    assert_eq!(parse_literal("  /a/").expect("parse").source, "a");
}

#[test]
fn empty_body_is_allowed() {
    assert_eq!(parse_literal("//").expect("parse").source, "");
}

#[test]
fn rejects_malformed_literals() {
    assert_eq!(parse_kind(""), ParseErrorKind::Empty);
    assert_eq!(parse_kind("   "), ParseErrorKind::Empty);
    assert_eq!(parse_kind("/"), ParseErrorKind::MissingEndDelimiter('/'));
    assert_eq!(parse_kind("/abc"), ParseErrorKind::MissingEndDelimiter('/'));
    assert_eq!(parse_kind("{abc"), ParseErrorKind::MissingMatchingDelimiter('}'));
    assert_eq!(parse_kind("abc"), ParseErrorKind::InvalidDelimiter('a'));
    assert_eq!(parse_kind(r"\abc\"), ParseErrorKind::InvalidDelimiter('\\'));
}

#[test]
fn rejects_unknown_modifiers() {
    assert_eq!(parse_kind("/a/g"), ParseErrorKind::UnknownModifier('g'));
    assert_eq!(parse_kind("/a/iq"), ParseErrorKind::UnknownModifier('q'));
}

#[test]
fn eval_modifier_is_a_hard_failure() {
    assert_eq!(parse_kind("/a/e"), ParseErrorKind::EvalModifier);
    assert_eq!(parse_kind("/a/ie"), ParseErrorKind::EvalModifier);
}

#[test]
fn error_span_points_at_the_modifier() {
    let err = parse_literal("/abc/iz").expect_err("z is unknown");
    assert_eq!(err.span.offset(), 6);
    assert_eq!(err.span.len(), 1);
    assert_eq!(err.to_string(), "Unknown modifier 'z'");
}

#[test]
fn compatibility_modifiers_are_accepted() {
    let parsed = parse_literal("/a/AUDSJ").expect("parse");
    assert_eq!(parsed.flag_string(), "");
}

#[test]
fn padding_in_modifiers_is_ignored() {
    let parsed = parse_literal("/a/i \n").expect("parse");
    assert_eq!(parsed.flag_string(), "i");
}

#[test]
fn duplicate_modifiers_collapse() {
    let parsed = parse_literal("/a/iimmi").expect("parse");
    assert_eq!(parsed.flag_string(), "im");
}

#[test]
fn extended_mode_strips_whitespace_and_comments() {
    let parsed = parse_literal("/a b #comment\nc/x").expect("parse");
    assert!(parsed.extended);
    assert_eq!(parsed.source, "abc");
    assert_eq!(parsed.flag_string(), "");

    let mut ctx = Context::new();
    let row = ctx
        .match_one("/a b #comment\nc/x", "xxabcxx", Default::default(), 0)
        .expect("compile")
        .expect("match");
    assert_eq!(row[0], "abc");
}

#[test]
fn extended_mode_keeps_class_contents() {
    let mut ctx = Context::new();
    let row = ctx
        .match_one("/ a [ #] b /x", "a#b", Default::default(), 0)
        .expect("compile")
        .expect("match");
    assert_eq!(row[0], "a#b");
}

#[test]
fn display_reassembles_the_literal() {
    let parsed = parse_literal("{a+}is").expect("parse");
    assert_eq!(parsed.to_string(), "{a+}is");
}

#[test]
fn parse_then_compile_follows_native_syntax() {
    let mut ctx = Context::new();
    assert!(ctx.compile("/(?P<word>\\w+)/u").is_ok());
    assert!(ctx.compile("/(?<word>\\w+)/").is_ok());

    let err = ctx.compile("/(unclosed/").expect_err("native rejection");
    assert!(matches!(err, PregError::Compile { .. }));
    assert_eq!(err.error_code(), Some(ErrorCode::Internal));
    assert!(err.to_string().starts_with("Compilation failed:"));
}
