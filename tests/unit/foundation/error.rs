use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BedframeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BedframeError::prepare("x")
            .to_string()
            .contains("prepare error:")
    );
    assert!(
        BedframeError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BedframeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
