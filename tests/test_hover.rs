//! Hover text for each kind of response.

mod common;

use common::{cursor, fixture, span, span_within};
use rstest::rstest;
use strata::ide::{hover, walk};

#[rstest]
#[case::method_header("def initialize(x, y = 0)", "def initialize: NilClass")]
#[case::singleton_method("def self.count", "def count: Integer")]
#[case::instance_variable("@x", "@x: Integer")]
#[case::class_variable("@@count", "@@count: Integer")]
#[case::module_name("Geo", "Geo: T.class_of(Geo)")]
#[case::aliased_constant("Origin", "Geo::Point: T.class_of(Geo::Point)")]
fn test_hover_contents(#[case] needle: &str, #[case] expected: &str) {
    let f = fixture();
    let at = span(needle, 0);
    let responses = walk(&f.table, &f.tree, &cursor(at)).unwrap();

    let result = hover(&f.table, &responses).unwrap();

    assert_eq!(result.contents, expected);
    assert_eq!(result.term_loc, at);
}

#[test]
fn test_hover_on_argument() {
    let f = fixture();
    let y_loc = span_within("y = 0", 0, "y");
    let responses = walk(&f.table, &f.tree, &cursor(y_loc)).unwrap();

    let result = hover(&f.table, &responses).unwrap();
    assert_eq!(result.contents, "y: Integer");
    assert_eq!(result.term_loc, y_loc);
}

#[test]
fn test_hover_on_nothing() {
    let f = fixture();
    let gap = span_within("@x = x", 0, "=");
    let responses = walk(&f.table, &f.tree, &cursor(gap)).unwrap();
    assert!(hover(&f.table, &responses).is_none());
}
