use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PromoError::invalid_dimension("x")
            .to_string()
            .contains("invalid dimension:")
    );
    assert!(
        PromoError::asset_load("x")
            .to_string()
            .contains("asset load failure:")
    );
    assert!(
        PromoError::font_resolution("x")
            .to_string()
            .contains("font resolution failure:")
    );
    assert!(PromoError::io("x").to_string().contains("io failure:"));
    assert!(
        PromoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_asset_and_font_errors_are_recoverable() {
    assert!(PromoError::asset_load("x").is_recoverable());
    assert!(PromoError::font_resolution("x").is_recoverable());
    assert!(!PromoError::invalid_dimension("x").is_recoverable());
    assert!(!PromoError::io("x").is_recoverable());
    assert!(!PromoError::serde("x").is_recoverable());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PromoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
