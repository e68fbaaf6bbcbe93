use super::*;

#[test]
fn alpha_over_endpoints() {
    assert_eq!(alpha_over(26, 200, 0), 26);
    assert_eq!(alpha_over(26, 200, 255), 200);
}

#[test]
fn alpha_over_midpoint_rounds_to_nearest() {
    // (0 * 127 + 255 * 128 + 127) / 255 = 128
    assert_eq!(alpha_over(0, 255, 128), 128);
    // (26 * 155 + 102 * 100 + 127) / 255 = 56.3 -> 56
    assert_eq!(alpha_over(26, 102, 100), 56);
}

#[test]
fn over_rgba_transparent_src_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over_rgba(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn over_rgba_opaque_src_replaces_dst() {
    assert_eq!(over_rgba([1, 2, 3, 200], [9, 8, 7, 255]), [9, 8, 7, 255]);
}

#[test]
fn over_rgba_onto_transparent_keeps_src_color() {
    assert_eq!(
        over_rgba([0, 0, 0, 0], [100, 110, 120, 77]),
        [100, 110, 120, 77]
    );
}

#[test]
fn over_rgba_onto_opaque_matches_alpha_over() {
    let dst = [26, 26, 26, 255];
    let src = [102, 126, 234, 100];
    let out = over_rgba(dst, src);
    assert_eq!(out[3], 255);
    for i in 0..3 {
        assert_eq!(out[i], alpha_over(dst[i], src[i], 100));
    }
}

#[test]
fn over_rgba_accumulates_alpha() {
    let out = over_rgba([0, 0, 255, 128], [255, 0, 0, 128]);
    // 128 + 128 * 127 / 255 ~= 192
    assert!((191..=193).contains(&out[3]));
    assert!(out[0] > out[2]);
}

#[test]
fn fill_coverage_clips_and_blends() {
    let mut canvas = Canvas::filled(3, 2, PixelFormat::Rgb8, &[0, 0, 0]).unwrap();
    let data = [255u8, 0, 128, 255];
    fill_coverage(
        &mut canvas,
        CoverageMask {
            x: 2,
            y: 0,
            width: 2,
            height: 2,
            data: &data,
        },
        Rgb8::WHITE,
        255,
    );

    assert_eq!(canvas.pixel(2, 0), &[255, 255, 255]);
    assert_eq!(canvas.pixel(2, 1), &[128, 128, 128]);
    assert_eq!(canvas.pixel(1, 0), &[0, 0, 0]);
}

#[test]
fn fill_coverage_respects_opacity_on_rgba() {
    let mut canvas = Canvas::transparent(1, 1).unwrap();
    fill_coverage(
        &mut canvas,
        CoverageMask {
            x: 0,
            y: 0,
            width: 1,
            height: 1,
            data: &[255],
        },
        Rgb8::new(10, 20, 30),
        0,
    );
    assert_eq!(canvas.pixel(0, 0), &[0, 0, 0, 0]);

    fill_coverage(
        &mut canvas,
        CoverageMask {
            x: 0,
            y: 0,
            width: 1,
            height: 1,
            data: &[255],
        },
        Rgb8::new(10, 20, 30),
        255,
    );
    assert_eq!(canvas.pixel(0, 0), &[10, 20, 30, 255]);
}
