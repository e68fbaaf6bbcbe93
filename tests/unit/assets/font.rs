use super::*;

#[test]
fn default_font_measures_fixed_cells() {
    assert_eq!(DefaultFont.measure(""), 0);
    assert_eq!(DefaultFont.measure("A"), 5);
    assert_eq!(DefaultFont.measure("YouTube Timestamp Bookmarker"), 28 * 6 - 1);
}

#[test]
fn default_font_counts_chars_not_bytes() {
    assert_eq!(DefaultFont.measure("é"), DefaultFont.measure("e"));
}

#[test]
fn coverage_mask_has_measured_size() {
    let (w, h, mask) = DefaultFont.coverage_mask("Hi!");
    assert_eq!((w, h), (17, DefaultFont::CELL_HEIGHT));
    assert_eq!(mask.len(), (w * h) as usize);
    // 'H' left column is solid over the 7 glyph rows.
    for row in 0..7 {
        assert_eq!(mask[row * w as usize], 255);
    }
    // Gap column between glyphs stays empty.
    for row in 0..8 {
        assert_eq!(mask[row * w as usize + 5], 0);
    }
}

#[test]
fn unknown_chars_render_as_question_mark() {
    let (_, _, a) = DefaultFont.coverage_mask("\u{2603}");
    let (_, _, b) = DefaultFont.coverage_mask("?");
    assert_eq!(a, b);
}

#[test]
fn provider_falls_back_when_nothing_resolves() {
    let source = FontSource {
        paths: vec![PathBuf::from("target/no-such-font-dir/missing.ttf")],
        family: None,
    };
    let mut fonts = FontProvider::resolve(&source);
    assert!(fonts.is_default());
    assert_eq!(fonts.family_name(), DefaultFont::FAMILY);
    assert_eq!(fonts.measure("abc", 40), DefaultFont.measure("abc"));
}

#[test]
fn unreadable_font_bytes_are_a_resolution_failure() {
    let err = ResolvedFont::from_bytes(b"not a font".to_vec(), 0).unwrap_err();
    assert!(matches!(err, PromoError::FontResolution(_)));
    assert!(err.is_recoverable());
}

#[test]
fn unknown_system_family_is_a_resolution_failure() {
    let err = ResolvedFont::from_system_family("promokit-no-such-family-7f3a").unwrap_err();
    assert!(matches!(err, PromoError::FontResolution(_)));
}

#[test]
fn zero_size_measures_zero() {
    let mut fonts = FontProvider::default_font();
    assert_eq!(fonts.measure("title", 0), 0);
    assert_eq!(fonts.measure("", 30), 0);
}

#[test]
fn font_source_json_defaults_missing_fields() {
    let s: FontSource = serde_json::from_str(r#"{"family": "Inter"}"#).unwrap();
    assert_eq!(s.family.as_deref(), Some("Inter"));
    assert_eq!(s.paths, FontSource::default().paths);
}
