use super::*;

#[test]
fn garbage_font_bytes_are_rejected() {
    let err = ParleyShaper::from_font_bytes(vec![0xde, 0xad, 0xbe, 0xef]).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn empty_font_bytes_are_rejected() {
    assert!(ParleyShaper::from_font_bytes(Vec::new()).is_err());
}

#[test]
fn shaper_is_usable_as_a_trait_object() {
    struct Fixed;
    impl TextShaper for Fixed {
        fn shape(&mut self, text: &str, _size_px: f32) -> OvermarkResult<ShapedText> {
            Ok(ShapedText {
                width: text.len() as f64,
                height: 1.0,
                glyphs: None,
            })
        }
    }

    let mut shaper: Box<dyn TextShaper> = Box::new(Fixed);
    let shaped = shaper.shape("abcd", 14.0).unwrap();
    assert_eq!(shaped.width, 4.0);
    assert!(shaped.glyphs.is_none());
}

#[test]
fn chip_brush_defaults_to_transparent_black() {
    let b = ChipBrush::default();
    assert_eq!((b.r, b.g, b.b, b.a), (0, 0, 0, 0));
}
