use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GraphError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GraphError::dimension("x")
            .to_string()
            .contains("dimension mismatch:")
    );
    assert!(
        GraphError::numeric_decay("x")
            .to_string()
            .contains("numeric decay:")
    );
    assert!(
        GraphError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GraphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
