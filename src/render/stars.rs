//! Two star-rendering rules coexist here on purpose: product cards and the
//! detail view round to whole stars, while the generated page hero keeps
//! the legacy half-star rule. They read the same `rating` field but are
//! distinct display contracts; unifying them would silently change one
//! surface (see DESIGN.md).

/// Card/detail rule: `round(rating)` filled stars out of 5, no halves.
pub fn whole(rating: f64) -> String {
    let filled = (rating.round().clamp(0.0, 5.0)) as usize;
    let mut out = String::with_capacity(5 * 3);
    for _ in 0..filled {
        out.push('★');
    }
    for _ in filled..5 {
        out.push('☆');
    }
    out
}

/// Page-generator rule: nearest half star, rendered with a half glyph.
pub fn half(rating: f64) -> String {
    let halves = ((rating.clamp(0.0, 5.0)) * 2.0).round() as usize;
    let filled = halves / 2;
    let has_half = halves % 2 == 1;
    let mut out = String::with_capacity(5 * 3);
    for _ in 0..filled {
        out.push('★');
    }
    if has_half {
        out.push('⯪');
    }
    for _ in (filled + usize::from(has_half))..5 {
        out.push('☆');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_rounds_to_nearest_star() {
        assert_eq!(whole(4.2), "★★★★☆");
        assert_eq!(whole(4.5), "★★★★★");
        assert_eq!(whole(4.49), "★★★★☆");
        assert_eq!(whole(0.0), "☆☆☆☆☆");
        assert_eq!(whole(5.0), "★★★★★");
    }

    #[test]
    fn whole_clamps_out_of_range_input() {
        assert_eq!(whole(-1.0), "☆☆☆☆☆");
        assert_eq!(whole(9.0), "★★★★★");
    }

    #[test]
    fn half_renders_the_half_glyph() {
        assert_eq!(half(4.5), "★★★★⯪");
        assert_eq!(half(4.2), "★★★★☆");
        assert_eq!(half(4.3), "★★★★⯪");
        assert_eq!(half(3.0), "★★★☆☆");
    }

    #[test]
    fn the_two_rules_disagree_where_the_source_did() {
        // 4.5 is the canonical divergence: whole rounds up, half splits.
        assert_ne!(whole(4.5), half(4.5));
    }
}
