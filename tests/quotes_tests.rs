// Host-side tests for quote rotation.

use glowfield_core::{QuoteRotator, DEFAULT_QUOTES};

#[test]
fn starts_at_first_quote() {
    let r = QuoteRotator::with_defaults(Some(1));
    assert_eq!(r.current(), DEFAULT_QUOTES[0]);
    assert_eq!(r.len(), DEFAULT_QUOTES.len());
}

#[test]
fn advance_picks_from_the_list() {
    let mut r = QuoteRotator::with_defaults(Some(2));
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        let q = r.advance().to_string();
        assert!(DEFAULT_QUOTES.contains(&q.as_str()));
        assert_eq!(r.current(), q);
        seen.insert(q);
    }
    // Uniform picks over 200 draws reach every entry.
    assert_eq!(seen.len(), DEFAULT_QUOTES.len());
}

#[test]
fn seeded_rotators_agree() {
    let mut a = QuoteRotator::with_defaults(Some(3));
    let mut b = QuoteRotator::with_defaults(Some(3));
    for _ in 0..20 {
        assert_eq!(a.advance(), b.advance());
    }
}

#[test]
fn empty_rotator_yields_empty_text() {
    let mut r = QuoteRotator::new(Vec::new(), Some(4));
    assert!(r.is_empty());
    assert_eq!(r.current(), "");
    assert_eq!(r.advance(), "");
}
