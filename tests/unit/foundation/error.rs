use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OvermarkError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(OvermarkError::image("x").to_string().contains("image error:"));
    assert!(
        OvermarkError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        OvermarkError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OvermarkError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
