use flo_svg_fill::*;

fn stop(offset: f32, color: Color) -> GradientStop {
    GradientStop { offset, color }
}

fn close(a: f32, b: f32) -> bool {
    (a-b).abs() < 0.001
}

#[test]
fn atlas_shares_identical_ramps() {
    let mut atlas   = GradientAtlas::new();
    let first       = atlas.add_gradient(build_gradient_ramp(&[stop(0.0, Color::Rgb(1.0, 0.0, 0.0)), stop(100.0, Color::Rgb(0.0, 0.0, 1.0))]));
    let second      = atlas.add_gradient(build_gradient_ramp(&[stop(0.0, Color::Rgb(0.0, 1.0, 0.0))]));
    let third       = atlas.add_gradient(build_gradient_ramp(&[stop(0.0, Color::Rgb(1.0, 0.0, 0.0)), stop(100.0, Color::Rgb(0.0, 0.0, 1.0))]));

    assert!(first == GradientId(0));
    assert!(second == GradientId(1));
    assert!(third == first);
    assert!(atlas.len() == 2);
    assert!(atlas.get(second).map(|ramp| ramp.len()) == Some(2));
    assert!(atlas.get(GradientId(5)).is_none());
}

#[test]
fn atlas_rows_sample_each_ramp() {
    let mut atlas = GradientAtlas::new();
    atlas.add_gradient(build_gradient_ramp(&[stop(0.0, Color::Rgb(1.0, 0.0, 0.0)), stop(100.0, Color::Rgb(0.0, 0.0, 1.0))]));
    atlas.add_gradient(build_gradient_ramp(&[stop(0.0, Color::Rgba(0.0, 1.0, 0.0, 0.0))]));

    let rows = atlas.rows::<8>();

    assert!(rows.len() == 2);
    assert!(rows[0][0] == [255, 0, 0, 255], "{:?}", rows[0]);
    assert!(rows[0][7] == [0, 0, 255, 255], "{:?}", rows[0]);
    assert!(rows[1].iter().all(|texel| texel == &[0, 255, 0, 0]), "{:?}", rows[1]);
}

#[test]
fn opaque_conical_gradient_fill() {
    let element = ConicalGradientElement {
        stops: vec![stop(0.0, Color::Rgb(1.0, 1.0, 0.0)), stop(100.0, Color::Rgb(0.0, 1.0, 1.0))],
        ..ConicalGradientElement::default()
    };

    let mut atlas   = GradientAtlas::new();
    let brush       = ConicalGradientBrush::new(&element, &mut atlas);
    let fill        = brush.fill();

    assert!(!brush.alpha_blended());
    assert!(fill.blend == FillBlend::Opaque);
    assert!(fill.fill_type == FillType::Gradient);
    assert!(fill.gradient_type == Some(GradientType::Conical));
    assert!(fill.gradient == Some(GradientId(0)));
    assert!(fill.color == Color::Rgba(1.0, 1.0, 1.0, 1.0));
    assert!(fill.transform == Transform2D::identity());
}

#[test]
fn translucent_conical_gradient_fill() {
    let element = ConicalGradientElement {
        stops: vec![stop(0.0, Color::Rgb(1.0, 1.0, 0.0)), stop(100.0, Color::Rgba(0.0, 1.0, 1.0, 0.0))],
        ..ConicalGradientElement::default()
    };

    let mut atlas   = GradientAtlas::new();
    let fill        = ConicalGradientBrush::new(&element, &mut atlas).into_fill();

    assert!(fill.blend == FillBlend::AlphaBlended);
}

#[test]
fn conical_fill_transform_maps_unit_circle_onto_shape() {
    let element = ConicalGradientElement {
        cx:     SvgLength::Absolute(20.0),
        cy:     SvgLength::Absolute(30.0),
        r:      SvgLength::Absolute(10.0),
        stops:  vec![stop(0.0, Color::Rgb(1.0, 1.0, 1.0))],
        ..ConicalGradientElement::default()
    };

    let mut atlas   = GradientAtlas::new();
    let matrix      = Transform2D::translate(100.0, 0.0);
    let brush       = ConicalGradientBrush::with_bounds(&element, Rect::new(0.0, 0.0, 50.0, 50.0), matrix, Rect::new(0.0, 0.0, 50.0, 50.0), &mut atlas);
    let (x, y)      = brush.fill().transform.transform_point(1.0, 0.0);

    assert!(close(x, 130.0) && close(y, 30.0), "{:?}", (x, y));
}

#[test]
fn shape_points_map_back_into_gradient_space() {
    let element = ConicalGradientElement {
        cx:     SvgLength::Absolute(20.0),
        cy:     SvgLength::Absolute(30.0),
        r:      SvgLength::Absolute(10.0),
        stops:  vec![stop(0.0, Color::Rgb(1.0, 1.0, 1.0))],
        ..ConicalGradientElement::default()
    };

    let mut atlas   = GradientAtlas::new();
    let brush       = ConicalGradientBrush::with_bounds(&element, Rect::new(0.0, 0.0, 50.0, 50.0), Transform2D::translate(100.0, 0.0), Rect::new(0.0, 0.0, 50.0, 50.0), &mut atlas);

    let center      = brush.fill().gradient_point(120.0, 30.0).expect("fill transform should be invertible");
    let edge        = brush.fill().gradient_point(120.0, 35.0).expect("fill transform should be invertible");

    assert!(close(center.0, 0.0) && close(center.1, 0.0), "{:?}", center);
    assert!(close(edge.0, 0.0) && close(edge.1, 0.5), "{:?}", edge);
}

#[test]
fn zero_radius_gradient_has_no_gradient_space() {
    let element = ConicalGradientElement {
        r:      SvgLength::Absolute(0.0),
        stops:  vec![stop(0.0, Color::Rgb(1.0, 1.0, 1.0))],
        ..ConicalGradientElement::default()
    };

    let mut atlas   = GradientAtlas::new();
    let brush       = ConicalGradientBrush::with_bounds(&element, Rect::new(0.0, 0.0, 50.0, 50.0), Transform2D::identity(), Rect::new(0.0, 0.0, 50.0, 50.0), &mut atlas);

    assert!(brush.fill().gradient_point(10.0, 10.0).is_none());
}

#[test]
fn solid_fill_blend_follows_alpha() {
    assert!(Fill::solid(Color::Rgb(0.5, 0.5, 0.5)).blend == FillBlend::Opaque);
    assert!(Fill::solid(Color::Rgba(0.5, 0.5, 0.5, 0.1)).blend == FillBlend::AlphaBlended);
    assert!(Fill::solid(Color::Rgb(0.5, 0.5, 0.5)).fill_type == FillType::Solid);
}

#[test]
fn percent_lengths_resolve_against_reference() {
    assert!(SvgLength::Percent(25.0).resolve(200.0) == 50.0);
    assert!(SvgLength::Absolute(12.0).resolve(200.0) == 12.0);
}

#[test]
fn decompose_trs_matrix() {
    let matrix      = Matrix4x4::trs((5.0, -7.0), 30.0, (2.0, 3.0));
    let transform   = decompose_matrix(&matrix);

    assert!(close(transform.position.0, 5.0) && close(transform.position.1, -7.0), "{:?}", transform);
    assert!(close(transform.rotation, 30.0), "{:?}", transform);
    assert!(close(transform.scale.0, 2.0) && close(transform.scale.1, 3.0), "{:?}", transform);
}

#[test]
fn decompose_negative_rotation_wraps() {
    let transform = decompose_matrix(&Matrix4x4::trs((0.0, 0.0), -90.0, (1.0, 1.0)));

    assert!(close(transform.rotation, 270.0), "{:?}", transform);
}

#[test]
fn decompose_identity() {
    let transform = decompose_matrix(&Matrix4x4::identity());

    assert!(transform == SvgTransform2D::default(), "{:?}", transform);
}

#[test]
fn svg_transform_round_trip() {
    let original    = SvgTransform2D::new((1.0, 2.0), 45.0, (0.5, 4.0));
    let transform   = decompose_matrix(&original.matrix4x4());

    assert!(close(transform.position.0, 1.0) && close(transform.position.1, 2.0), "{:?}", transform);
    assert!(close(transform.rotation, 45.0), "{:?}", transform);
    assert!(close(transform.scale.0, 0.5) && close(transform.scale.1, 4.0), "{:?}", transform);
}

#[test]
fn svg_transform_matrix_agrees_with_4x4() {
    let transform   = SvgTransform2D::new((3.0, 4.0), 60.0, (2.0, 1.0));
    let Matrix4x4(m)= transform.matrix4x4();
    let (x, y)      = transform.matrix().transform_point(1.0, 1.0);

    assert!(close(x, m[0][0] + m[0][1] + m[0][3]), "{} {:?}", x, m);
    assert!(close(y, m[1][0] + m[1][1] + m[1][3]), "{} {:?}", y, m);
}
