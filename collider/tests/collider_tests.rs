use flo_svg_collider::*;

use flo_binding::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn square(x: f64, y: f64, size: f64) -> Polygon2D {
    Polygon2D::from(vec![(x, y), (x+size, y), (x+size, y+size), (x, y+size)])
}

fn notch_shape() -> ColliderShape {
    ColliderShape::new(vec![
        Polygon2D::from(vec![(0.0, 0.0), (5.0, 0.1), (10.0, 0.0), (10.0, 10.0), (5.0, 9.8), (0.0, 10.0)]),
        square(20.0, 0.0, 10.0),
        Polygon2D::from(vec![(50.0, 50.0), (60.0, 60.0)]),
    ])
}

///
/// Creates a notifiable that counts how many times it's been called
///
fn counter() -> (Arc<AtomicUsize>, Arc<dyn Notifiable>) {
    let count       = Arc::new(AtomicUsize::new(0));
    let notify_count= Arc::clone(&count);

    (count, notify(move || { notify_count.fetch_add(1, Ordering::SeqCst); }))
}

#[test]
fn collider_without_shape_has_no_paths() {
    let source      = ColliderShapeSource::new();
    let collider    = SvgCollider::new(&source);

    assert!(collider.paths().is_empty());
}

#[test]
fn collider_follows_source_shape() {
    let source      = ColliderShapeSource::new();
    let collider    = SvgCollider::with_settings(&source, ColliderSettings { quality: 1.0, ..ColliderSettings::default() });

    assert!(collider.paths().is_empty());

    source.set_shape(ColliderShape::new(vec![square(0.0, 0.0, 10.0)]));
    assert!(collider.paths() == vec![square(0.0, 0.0, 10.0)], "{:?}", collider.paths());

    source.clear();
    assert!(collider.paths().is_empty(), "{:?}", collider.paths());
}

#[test]
fn collider_matches_generator() {
    let source      = ColliderShapeSource::with_shape(notch_shape());
    let collider    = SvgCollider::new(&source);

    let expected    = generate_collider_paths(Some(&notch_shape()), &ColliderSettings::default());

    assert!(collider.paths() == expected, "{:?} != {:?}", collider.paths(), expected);
    assert!(collider.paths().len() == 2, "{:?}", collider.paths());
}

#[test]
fn changing_offset_rebuilds_from_source() {
    let source      = ColliderShapeSource::with_shape(notch_shape());
    let collider    = SvgCollider::with_settings(&source, ColliderSettings { quality: 0.8, offset: 0.0, ..ColliderSettings::default() });

    let direct      = generate_collider_paths(Some(&notch_shape()), &ColliderSettings { quality: 0.8, offset: 0.0, ..ColliderSettings::default() });
    let initial     = collider.paths();

    collider.set_offset(5.0);
    let inflated    = collider.paths();

    collider.set_offset(0.0);
    let restored    = collider.paths();

    assert!(initial == direct, "{:?} != {:?}", initial, direct);
    assert!(inflated != initial, "{:?}", inflated);
    assert!(restored == direct, "{:?} != {:?}", restored, direct);
}

#[test]
fn quality_is_clamped_when_set() {
    let source      = ColliderShapeSource::new();
    let collider    = SvgCollider::new(&source);

    collider.set_quality(3.0);
    assert!(collider.settings().quality == 1.0);

    collider.set_quality(-1.0);
    assert!(collider.settings().quality == 0.0);

    collider.set_quality(f64::NAN);
    assert!(collider.settings().quality == 0.0);
}

#[test]
fn non_finite_offset_is_ignored() {
    let source      = ColliderShapeSource::new();
    let collider    = SvgCollider::new(&source);

    collider.set_offset(2.0);
    collider.set_offset(f64::INFINITY);

    assert!(collider.settings().offset == 2.0);
}

#[test]
fn observers_are_notified_of_changes() {
    let source          = ColliderShapeSource::with_shape(notch_shape());
    let collider        = SvgCollider::new(&source);
    let (count, notify) = counter();

    collider.paths();
    let mut lifetime    = collider.when_paths_changed(notify);

    collider.set_quality(0.5);
    assert!(count.load(Ordering::SeqCst) == 1, "{}", count.load(Ordering::SeqCst));

    collider.paths();
    source.set_shape(ColliderShape::new(vec![square(0.0, 0.0, 4.0)]));
    assert!(count.load(Ordering::SeqCst) == 2, "{}", count.load(Ordering::SeqCst));

    collider.paths();
    lifetime.done();

    collider.set_offset(1.0);
    collider.paths();
    assert!(count.load(Ordering::SeqCst) == 2, "{}", count.load(Ordering::SeqCst));
}

#[test]
fn unchanged_settings_do_not_notify() {
    let source          = ColliderShapeSource::with_shape(notch_shape());
    let collider        = SvgCollider::new(&source);
    let (count, notify) = counter();

    collider.paths();
    let _lifetime       = collider.when_paths_changed(notify);

    collider.set_quality(0.9);
    collider.set_offset(0.0);

    assert!(count.load(Ordering::SeqCst) == 0, "{}", count.load(Ordering::SeqCst));
}

#[test]
fn source_notifies_when_shape_replaced() {
    let source          = ColliderShapeSource::new();
    let (count, notify) = counter();
    let _lifetime       = source.when_changed(notify);

    source.set_shape(ColliderShape::new(vec![square(0.0, 0.0, 1.0)]));

    assert!(count.load(Ordering::SeqCst) == 1, "{}", count.load(Ordering::SeqCst));
    assert!(source.shape().map(|shape| shape.polygons.len()) == Some(1));
}
