use hexgrid::{HexConfig, HexLayout, HighlightTracker, ScreenConfig, ShaderConfig};
use validator::{ValidationErrors, ValidationErrorsKind};

/// Get the sorted list of field keys that failed validation
fn error_fields(err: anyhow::Error) -> (ValidationErrors, Vec<&'static str>) {
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    (validation_errors, error_fields)
}

#[test]
fn test_default_config_valid() {
    assert!(HexLayout::new(&ShaderConfig::default()).is_ok());
    assert!(HighlightTracker::new(&HexConfig::default()).is_ok());
}

#[test]
fn test_degenerate_radius() {
    for radius in &[0.0, -0.0, -32.0, f64::NAN, f64::INFINITY] {
        let config = ShaderConfig {
            radius: *radius,
            ..Default::default()
        };
        let err = HexLayout::new(&config).unwrap_err();
        let (validation_errors, fields) = error_fields(err);
        // Schema-level errors are filed under __all__
        assert_eq!(
            fields,
            vec!["__all__"],
            "incorrect validation errors for radius {} in {:#?}",
            radius,
            validation_errors
        );
    }
}

#[test]
fn test_shader_config_validation() {
    let config = ShaderConfig {
        radius: 0.0,                // invalid
        highlight_param: "".into(), // invalid
        ..Default::default()
    };

    let err = HexLayout::new(&config).unwrap_err();
    let (validation_errors, fields) = error_fields(err);
    assert_eq!(
        fields,
        vec!["__all__", "highlight_param"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_hex_config_validation() {
    let config = HexConfig {
        shader: ShaderConfig {
            radius: -1.0, // invalid
            ..Default::default()
        },
        screen: ScreenConfig {
            width: 800.0,  // valid
            height: -10.0, // invalid
        },
    };

    // This is a bit of a lazy check but it works well enough
    let err = HighlightTracker::new(&config).unwrap_err();
    let (validation_errors, fields) = error_fields(err);
    assert_eq!(
        fields,
        vec!["screen", "shader"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
    match &validation_errors.errors()["screen"] {
        ValidationErrorsKind::Struct(screen_errors) => {
            assert!(screen_errors.errors().contains_key("height"));
            assert!(!screen_errors.errors().contains_key("width"));
        }
        other => panic!("expected nested screen errors, got {:?}", other),
    }
}

#[test]
fn test_non_finite_screen() {
    for (width, height) in &[
        (800.0, f64::NAN),
        (f64::NAN, 600.0),
        (f64::INFINITY, 600.0),
        (800.0, f64::NEG_INFINITY),
    ] {
        let config = HexConfig {
            screen: ScreenConfig {
                width: *width,
                height: *height,
            },
            ..Default::default()
        };
        let err = HighlightTracker::new(&config).unwrap_err();
        let (validation_errors, fields) = error_fields(err);
        assert_eq!(
            fields,
            vec!["screen"],
            "incorrect validation errors for {}x{} in {:#?}",
            width,
            height,
            validation_errors
        );
        match &validation_errors.errors()["screen"] {
            ValidationErrorsKind::Struct(screen_errors) => {
                assert!(screen_errors.errors().contains_key("__all__"));
            }
            other => panic!("expected nested screen errors, got {:?}", other),
        }
    }
}
