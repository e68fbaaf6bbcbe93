use super::*;

#[test]
fn rgb_from_hex_accepts_optional_hash() {
    assert_eq!(Rgb8::from_hex("#1A1A1A").unwrap(), Rgb8::gray(26));
    assert_eq!(Rgb8::from_hex("ff0000").unwrap(), Rgb8::new(255, 0, 0));
    assert!(Rgb8::from_hex("#12345").is_err());
    assert!(Rgb8::from_hex("#zz0000").is_err());
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        Canvas::filled(0, 10, PixelFormat::Rgb8, &[0, 0, 0]),
        Err(PromoError::InvalidDimension(_))
    ));
    assert!(matches!(
        Canvas::transparent(10, 0),
        Err(PromoError::InvalidDimension(_))
    ));
}

#[test]
fn from_raw_checks_length() {
    assert!(Canvas::from_raw(2, 2, PixelFormat::Rgb8, vec![0; 12]).is_ok());
    assert!(Canvas::from_raw(2, 2, PixelFormat::Rgba8, vec![0; 12]).is_err());
}

#[test]
fn fill_rect_clips_to_canvas() {
    let mut c = Canvas::filled(4, 3, PixelFormat::Rgb8, &[0, 0, 0]).unwrap();
    c.fill_rect(PixelRect::new(-2, 1, 4, 10), Rgb8::WHITE);

    assert_eq!(c.pixel(0, 0), &[0, 0, 0]);
    assert_eq!(c.pixel(0, 1), &[255, 255, 255]);
    assert_eq!(c.pixel(1, 2), &[255, 255, 255]);
    assert_eq!(c.pixel(2, 1), &[0, 0, 0]);
}

#[test]
fn fill_rect_on_rgba_is_opaque() {
    let mut c = Canvas::transparent(2, 2).unwrap();
    c.fill_rect(PixelRect::new(0, 0, 1, 1), Rgb8::new(1, 2, 3));
    assert_eq!(c.pixel(0, 0), &[1, 2, 3, 255]);
    assert_eq!(c.pixel(1, 1), &[0, 0, 0, 0]);
}

#[test]
fn clip_outside_is_none() {
    assert_eq!(PixelRect::new(10, 0, 5, 5).clip_to(10, 10), None);
    assert_eq!(PixelRect::new(0, 0, 0, 5).clip_to(10, 10), None);
    assert_eq!(
        PixelRect::new(8, 8, 5, 5).clip_to(10, 10),
        Some((8, 8, 10, 10))
    );
}

#[test]
fn rgb8_serializes_as_hex() {
    let json = serde_json::to_string(&Rgb8::new(0x1A, 0xFF, 0x00)).unwrap();
    assert_eq!(json, "\"#1AFF00\"");
    let back: Rgb8 = serde_json::from_str("\"#1aff00\"").unwrap();
    assert_eq!(back, Rgb8::new(0x1A, 0xFF, 0x00));
    assert!(serde_json::from_str::<Rgb8>("\"#12\"").is_err());
}
