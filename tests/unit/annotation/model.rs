use super::*;

#[test]
fn wire_format_is_tagged_camel_case() {
    let json = r#"{"type": "arrow", "startX": 1.0, "startY": 2.0, "endX": 3.0, "endY": 4.5}"#;
    let a: Annotation = serde_json::from_str(json).unwrap();
    assert_eq!(
        a,
        Annotation::Arrow {
            start_x: 1.0,
            start_y: 2.0,
            end_x: 3.0,
            end_y: 4.5,
        }
    );

    let json = r#"{"type": "severity_zone", "x1": 0, "y1": 0, "x2": 10, "y2": 10, "severity": 8}"#;
    let a: Annotation = serde_json::from_str(json).unwrap();
    assert!(matches!(a, Annotation::SeverityZone { severity: 8, .. }));
}

#[test]
fn label_text_is_optional_on_the_wire() {
    let a: Annotation =
        serde_json::from_str(r#"{"type": "label", "x": 5.0, "y": 6.0}"#).unwrap();
    assert_eq!(
        a,
        Annotation::Label {
            x: 5.0,
            y: 6.0,
            text: None,
        }
    );
}

#[test]
fn parse_annotations_skips_malformed_entries() {
    let json = r#"[
        {"type": "box", "x1": 0, "y1": 0, "x2": 10, "y2": 10},
        {"type": "box", "x1": 0},
        {"type": "teleporter", "x": 1, "y": 2},
        {"type": "rotating_indicator", "centerX": 4, "centerY": 8}
    ]"#;
    let list = parse_annotations(json).unwrap();
    assert_eq!(list.len(), 2);
    assert!(matches!(list[0], Annotation::Box { .. }));
    assert!(matches!(list[1], Annotation::RotatingIndicator { .. }));
}

#[test]
fn parse_annotations_rejects_non_arrays() {
    assert!(parse_annotations("{}").is_err());
    assert!(parse_annotations("not json").is_err());
}

#[test]
fn severity_tiers_have_three_buckets() {
    assert_eq!(SeverityTier::for_level(0), SeverityTier::Low);
    assert_eq!(SeverityTier::for_level(3), SeverityTier::Low);
    assert_eq!(SeverityTier::for_level(4), SeverityTier::Low);
    assert_eq!(SeverityTier::for_level(5), SeverityTier::Medium);
    assert_eq!(SeverityTier::for_level(7), SeverityTier::Medium);
    assert_eq!(SeverityTier::for_level(8), SeverityTier::High);
    assert_eq!(SeverityTier::for_level(42), SeverityTier::High);
}

#[test]
fn only_high_tier_pulses_and_colors_match_tier() {
    assert!(!SeverityTier::Low.pulses());
    assert!(!SeverityTier::Medium.pulses());
    assert!(SeverityTier::High.pulses());
    assert_ne!(SeverityTier::Low.color(), SeverityTier::Medium.color());
    assert_eq!(SeverityTier::Medium.color(), SeverityTier::High.color());
}
