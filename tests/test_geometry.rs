use chicken_shooter::geometry::{BoundingBox, Vec2};

fn square(x: f32, y: f32, size: f32) -> BoundingBox {
    BoundingBox::from_extent(Vec2::new(x, y), Vec2::splat(size))
}

#[test]
fn intersects_is_symmetric() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn touching_edges_do_not_intersect() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(10.0, 0.0, 10.0);
    assert!(!a.intersects(&b));
    assert!(!b.intersects(&a));
}

#[test]
fn containment_counts_as_intersection() {
    let outer = square(0.0, 0.0, 100.0);
    let inner = square(40.0, 40.0, 4.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn center_and_size() {
    let b = BoundingBox::from_extent(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
    assert_eq!(b.center(), Vec2::new(25.0, 40.0));
    assert_eq!(b.width(), 30.0);
    assert_eq!(b.height(), 40.0);
}

#[test]
fn is_within_checks_every_edge() {
    assert!(square(0.0, 0.0, 10.0).is_within(100.0, 100.0));
    assert!(square(90.0, 90.0, 10.0).is_within(100.0, 100.0));
    assert!(!square(-1.0, 50.0, 10.0).is_within(100.0, 100.0));
    assert!(!square(50.0, 95.0, 10.0).is_within(100.0, 100.0));
}

#[test]
fn normalize_zero_is_none() {
    assert_eq!(Vec2::ZERO.normalize(), None);
    assert_eq!(Vec2::new(f32::NAN, 1.0).normalize(), None);
}

#[test]
fn normalize_has_unit_length() {
    let n = Vec2::new(3.0, 4.0).normalize().unwrap();
    assert!((n.magnitude() - 1.0).abs() < 1e-6);
    assert!((n.x - 0.6).abs() < 1e-6);
}

#[test]
fn vector_arithmetic() {
    let mut v = Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0);
    assert_eq!(v, Vec2::new(4.0, 6.0));
    v -= Vec2::ONE;
    assert_eq!(v, Vec2::new(3.0, 5.0));
    assert_eq!(v * 2.0, Vec2::new(6.0, 10.0));
    assert_eq!(v.scaled_by(Vec2::new(2.0, 0.5)), Vec2::new(6.0, 2.5));
}
