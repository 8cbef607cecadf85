use super::*;

// Small deterministic generator so the linearity sweep stays reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    fn dim(&mut self) -> u32 {
        1 + self.next_u32() % 4096
    }

    fn coord(&mut self) -> f64 {
        f64::from(self.next_u32() % 100_000) / 10.0
    }
}

#[test]
fn scaling_is_exactly_linear() {
    let mut rng = Lcg(0x5eed);
    for _ in 0..500 {
        let dims = Dimensions::new((rng.dim(), rng.dim()), (rng.dim(), rng.dim())).unwrap();
        let map = dims.scale_map();
        let (x, y) = (rng.coord(), rng.coord());

        let p = map.point(x, y);
        assert_eq!(p.x, x * map.sx);
        assert_eq!(p.y, y * map.sy);
        assert_eq!(
            map.sx,
            f64::from(dims.display_width) / f64::from(dims.natural_width)
        );
        assert_eq!(
            map.sy,
            f64::from(dims.display_height) / f64::from(dims.natural_height)
        );
    }
}

#[test]
fn scale_map_is_per_axis_not_uniform() {
    let dims = Dimensions::new((100, 200), (200, 100)).unwrap();
    let map = dims.scale_map();
    let p = map.point(50.0, 50.0);
    assert_eq!(p.x, 100.0);
    assert_eq!(p.y, 25.0);
}

#[test]
fn subpixel_coordinates_pass_through_unrounded() {
    let map = ScaleMap { sx: 0.5, sy: 0.5 };
    let p = map.point(3.0, 5.0);
    assert_eq!(p.x, 1.5);
    assert_eq!(p.y, 2.5);
}

#[test]
fn mirrored_rects_keep_negative_extent() {
    let r = ScaleMap::IDENTITY.rect(30.0, 10.0, 10.0, 40.0);
    assert_eq!(r.x0, 30.0);
    assert_eq!(r.x1, 10.0);
    assert!(r.width() < 0.0);
}

#[test]
fn zero_natural_dimensions_are_rejected() {
    assert!(Dimensions::new((0, 100), (10, 10)).is_err());
    assert!(Dimensions::new((100, 0), (10, 10)).is_err());
}

#[test]
fn clock_advances_by_fixed_step() {
    let mut clock = OverlayClock::new();
    assert_eq!(clock.value(), 0.0);
    assert_eq!(clock.advance(), CLOCK_STEP);
    clock.advance();
    assert!((clock.value() - 2.0 * CLOCK_STEP).abs() < 1e-12);
}
