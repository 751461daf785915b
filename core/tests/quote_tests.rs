use pregcompat::{Context, MatchFlags, quote};
use proptest::prelude::*;

#[test]
fn quoted_text_matches_literally() {
    let mut ctx = Context::new();
    let text = "price: $5.00 (approx.) [x|y] {1,2} a+b? ^#!";
    let literal = format!("/{}/", quote(text, Some('/')));
    let row = ctx
        .match_one(&literal, &format!("-> {text} <-"), MatchFlags::OFFSET_CAPTURE, 0)
        .expect("compile")
        .expect("match");
    assert_eq!(row[0], text);
    assert_eq!(row[0].offset, Some(3));
}

#[test]
fn quoted_delimiter_keeps_the_literal_well_formed() {
    let mut ctx = Context::new();
    let literal = format!("#{}#", quote("a#b", Some('#')));
    assert!(ctx.is_match(&literal, "xa#bx").expect("compile"));
    assert!(!ctx.is_match(&literal, "ab").expect("compile"));
}

proptest! {
    #[test]
    fn quote_round_trips(text in "[ -~]{1,20}") {
        let mut ctx = Context::new();
        let literal = format!("/{}/", quote(&text, Some('/')));
        let subject = format!("<<{text}>>");
        let matches = ctx
            .match_all(&literal, &subject, MatchFlags::SET_ORDER, 0)
            .expect("quoted text always compiles");
        prop_assert_eq!(matches.count(), subject.matches(text.as_str()).count());
        let rows = matches.as_set_order().unwrap_or_default();
        for row in rows {
            prop_assert_eq!(row.whole(), text.as_str());
        }
    }
}
