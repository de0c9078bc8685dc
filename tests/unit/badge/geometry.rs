use super::*;

fn spec_with(value: BadgeValue) -> BadgeSpec {
    BadgeSpec {
        value: Some(value),
        ..BadgeSpec::default()
    }
}

#[test]
fn position_tags_round_trip() {
    for (tag, position) in [
        ("top-left", BadgePosition::TopLeft),
        ("top-right", BadgePosition::TopRight),
        ("bottom-left", BadgePosition::BottomLeft),
        ("bottom-right", BadgePosition::BottomRight),
    ] {
        assert_eq!(tag.parse::<BadgePosition>().unwrap(), position);
        assert_eq!(position.as_str(), tag);
    }
    assert!(BadgePosition::parse("center").is_err());
}

#[test]
fn anchors_follow_the_tag() {
    assert_eq!(
        BadgePosition::TopRight.anchors(),
        (VerticalEdge::Top, HorizontalEdge::Right)
    );
    assert_eq!(
        BadgePosition::BottomLeft.anchors(),
        (VerticalEdge::Bottom, HorizontalEdge::Left)
    );
}

#[test]
fn zero_parent_radius_is_pure_inward_pull() {
    // edge term vanishes; offset = -(1 + 0) * height/4
    let offset = corner_offset(0.0, 20.0, PixelDensity::default());
    assert_eq!(offset, -5.0);
}

#[test]
fn parent_radius_equal_to_height_doubles_the_pull() {
    // clamp(parent/height) saturates at 1, so the pull term is height/2.
    let offset = corner_offset(20.0, 20.0, PixelDensity::default());
    let edge = 20.0 * (1.0 - 45f64.to_radians().sin());
    assert_eq!(offset, (edge - 10.0).round());
}

#[test]
fn offset_snaps_to_the_device_pixel_grid() {
    assert_eq!(corner_offset(25.0, 20.0, PixelDensity::default()), -3.0);
    let half_pixel = PixelDensity::new(2.0).unwrap();
    assert_eq!(corner_offset(10.0, 20.0, half_pixel), -4.5);
}

#[test]
fn falsy_values_render_nothing() {
    let density = PixelDensity::default();
    let absent = BadgeSpec::default();
    assert_eq!(resolve_badge(&absent, density).unwrap(), None);
    assert_eq!(
        resolve_badge(&spec_with(BadgeValue::Count(0)), density).unwrap(),
        None
    );
    assert_eq!(
        resolve_badge(&spec_with(BadgeValue::Text(String::new())), density).unwrap(),
        None
    );
}

#[test]
fn text_badge_resolves_full_height_and_formatted_text() {
    let spec = BadgeSpec {
        value: Some(BadgeValue::Count(12)),
        parent_radius: 25.0,
        position: Some(BadgePosition::TopRight),
        ..BadgeSpec::default()
    };
    let state = resolve_badge(&spec, PixelDensity::default())
        .unwrap()
        .unwrap();
    assert_eq!(state.height, 20.0);
    assert_eq!(state.min_width, 20.0);
    assert_eq!(state.corner_radius, 10.0);
    assert_eq!(state.display_text.as_deref(), Some("9+"));
    assert_eq!(state.offset, Some(-3.0));
    assert!(state.has_text());
}

#[test]
fn indicator_badge_renders_at_half_height() {
    let state = resolve_badge(&spec_with(BadgeValue::Indicator), PixelDensity::default())
        .unwrap()
        .unwrap();
    assert_eq!(state.height, 10.0);
    assert_eq!(state.min_width, 10.0);
    assert_eq!(state.corner_radius, 5.0);
    assert_eq!(state.display_text, None);
    assert!(!state.has_text());
}

#[test]
fn size_is_clamped_and_radius_override_wins() {
    let density = PixelDensity::default();
    let small = BadgeSpec {
        size: 10.0,
        ..spec_with(BadgeValue::Count(1))
    };
    assert_eq!(resolve_badge(&small, density).unwrap().unwrap().height, 15.0);

    let large = BadgeSpec {
        size: 60.0,
        radius: Some(4.0),
        ..spec_with(BadgeValue::Count(1))
    };
    let state = resolve_badge(&large, density).unwrap().unwrap();
    assert_eq!(state.height, 45.0);
    assert_eq!(state.corner_radius, 4.0);
}

#[test]
fn invalid_configuration_is_rejected() {
    let density = PixelDensity::default();
    let bad_size = BadgeSpec {
        size: 0.0,
        ..spec_with(BadgeValue::Count(1))
    };
    assert!(resolve_badge(&bad_size, density).is_err());

    let bad_limit = BadgeSpec {
        limit: 0,
        ..spec_with(BadgeValue::Count(1))
    };
    assert!(resolve_badge(&bad_limit, density).is_err());

    let bad_parent = BadgeSpec {
        parent_radius: -1.0,
        ..spec_with(BadgeValue::Count(1))
    };
    assert!(resolve_badge(&bad_parent, density).is_err());
}

#[test]
fn anchor_origin_places_the_box_inside_the_parent() {
    let spec = BadgeSpec {
        value: Some(BadgeValue::Count(12)),
        parent_radius: 25.0,
        position: Some(BadgePosition::TopRight),
        ..BadgeSpec::default()
    };
    let state = resolve_badge(&spec, PixelDensity::default())
        .unwrap()
        .unwrap();
    // offset -3: the badge pokes out past the top and right edges.
    assert_eq!(state.anchor_origin(50.0), Some(kurbo::Point::new(33.0, -3.0)));

    let unpositioned = resolve_badge(&spec_with(BadgeValue::Count(1)), PixelDensity::default())
        .unwrap()
        .unwrap();
    assert_eq!(unpositioned.offset, None);
    assert_eq!(unpositioned.anchor_origin(50.0), None);
}
