use super::*;

fn frame(width: u32, height: u32, px: [u8; 4]) -> OverlayFrame {
    OverlayFrame {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: true,
    }
}

#[test]
fn source_over_blends_premultiplied_pixels() {
    // Half-transparent red over opaque white.
    let mut dst = vec![255, 255, 255, 255];
    premul_over_in_place(&mut dst, &[128, 0, 0, 128]).unwrap();
    assert_eq!(dst, vec![255, 127, 127, 255]);
}

#[test]
fn transparent_source_pixels_leave_the_destination_alone() {
    let mut dst = vec![10, 20, 30, 40];
    premul_over_in_place(&mut dst, &[0, 0, 0, 0]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 40]);
}

#[test]
fn opaque_source_pixels_fully_replace_the_destination() {
    let mut dst = vec![10, 20, 30, 255];
    premul_over_in_place(&mut dst, &[200, 100, 50, 255]).unwrap();
    assert_eq!(dst, vec![200, 100, 50, 255]);
}

#[test]
fn mismatched_or_ragged_buffers_are_rejected() {
    let mut dst = vec![0; 8];
    assert!(premul_over_in_place(&mut dst, &[0; 4]).is_err());
    let mut dst = vec![0; 6];
    assert!(premul_over_in_place(&mut dst, &[0; 6]).is_err());
}

#[test]
fn composite_over_blends_equal_sized_frames() {
    let mut base = frame(2, 2, [255, 255, 255, 255]);
    let overlay = frame(2, 2, [128, 0, 0, 128]);
    composite_over(&mut base, &overlay).unwrap();
    assert_eq!(&base.data[0..4], &[255, 127, 127, 255]);
    assert_eq!(&base.data[12..16], &[255, 127, 127, 255]);
}

#[test]
fn composite_over_rejects_size_mismatches() {
    let mut base = frame(2, 2, [0, 0, 0, 0]);
    let overlay = frame(2, 3, [0, 0, 0, 0]);
    assert!(composite_over(&mut base, &overlay).is_err());
}

#[test]
fn composite_over_rejects_straight_alpha_frames() {
    let mut base = frame(2, 2, [0, 0, 0, 0]);
    let mut overlay = frame(2, 2, [0, 0, 0, 0]);
    overlay.premultiplied = false;
    assert!(composite_over(&mut base, &overlay).is_err());
}
