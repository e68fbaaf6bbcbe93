use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_export").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn rgba_canvas() -> Canvas {
    Canvas::from_raw(
        2,
        1,
        PixelFormat::Rgba8,
        vec![200, 100, 50, 255, 200, 100, 50, 128],
    )
    .unwrap()
}

#[test]
fn flattened_export_has_no_alpha() {
    let dir = scratch("flatten");
    let path = dir.join("tile.png");
    let format = save_png(&rgba_canvas(), &path, true).unwrap();
    assert_eq!(format, ExportFormat::Rgb8);

    let img = image::open(&path).unwrap();
    assert!(!img.color().has_alpha());
    let rgb = img.to_rgb8();
    assert_eq!(rgb.get_pixel(0, 0).0, [200, 100, 50]);
    assert_eq!(
        rgb.get_pixel(1, 0).0,
        [
            alpha_over(0, 200, 128),
            alpha_over(0, 100, 128),
            alpha_over(0, 50, 128)
        ]
    );
}

#[test]
fn alpha_is_preserved_without_flattening() {
    let dir = scratch("alpha");
    let path = dir.join("icon.png");
    let format = save_png(&rgba_canvas(), &path, false).unwrap();
    assert_eq!(format, ExportFormat::Rgba8);

    let img = image::open(&path).unwrap();
    assert!(img.color().has_alpha());
    assert_eq!(img.to_rgba8().get_pixel(1, 0).0, [200, 100, 50, 128]);
}

#[test]
fn rgb_canvas_is_written_as_rgb_either_way() {
    let dir = scratch("rgb");
    let canvas = Canvas::filled(3, 3, PixelFormat::Rgb8, &[9, 8, 7]).unwrap();
    for (name, flatten) in [("a.png", true), ("b.png", false)] {
        let path = dir.join(name);
        assert_eq!(save_png(&canvas, &path, flatten).unwrap(), ExportFormat::Rgb8);
        let img = image::open(&path).unwrap();
        assert!(!img.color().has_alpha());
    }
}

#[test]
fn missing_directory_is_an_io_error_and_leaves_nothing() {
    let dir = scratch("missing");
    let path = dir.join("no-such-subdir").join("tile.png");
    let err = save_png(&rgba_canvas(), &path, true).unwrap_err();
    assert!(matches!(err, PromoError::Io(_)));
    assert!(!path.exists());
}

#[test]
fn failed_rename_removes_the_temporary_file() {
    let dir = scratch("rename");
    // A non-empty directory in the way makes the final rename fail.
    let path = dir.join("tile.png");
    std::fs::create_dir_all(path.join("occupied")).unwrap();

    let err = save_png(&rgba_canvas(), &path, true).unwrap_err();
    assert!(matches!(err, PromoError::Io(_)));

    let leftovers: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|n| n.to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "{leftovers:?}");
}

#[test]
fn overwrites_existing_output() {
    let dir = scratch("overwrite");
    let path = dir.join("tile.png");
    std::fs::write(&path, b"stale").unwrap();
    save_png(&rgba_canvas(), &path, true).unwrap();
    assert_eq!(image::open(&path).unwrap().width(), 2);
}

#[test]
fn format_labels() {
    assert_eq!(ExportFormat::Rgb8.to_string(), "24-bit PNG (no alpha)");
    assert_eq!(ExportFormat::Rgba8.to_string(), "32-bit PNG (alpha)");
}
