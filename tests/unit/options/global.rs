use super::*;
use crate::foundation::color::Color;
use crate::options::model::LabelStrategy;

// The defaults are process-wide, so the whole lifecycle runs in one test.
#[test]
fn configure_snapshot_and_reset_lifecycle() {
    reset_defaults();
    assert_eq!(defaults(), Options::default());

    configure(&OptionsOverrides {
        label_strategy: Some(LabelStrategy::Initials),
        width: Some(48.0),
        ..OptionsOverrides::default()
    })
    .unwrap();
    let snap = defaults();
    assert_eq!(snap.label_strategy, LabelStrategy::Initials);
    assert_eq!(snap.width, Some(48.0));
    assert_eq!(snap.font_family, Options::default().font_family);

    // Invalid overrides are rejected and leave the defaults as they were.
    let err = configure(&OptionsOverrides {
        min_font_size: Some(99.0),
        ..OptionsOverrides::default()
    });
    assert!(err.is_err());
    assert_eq!(defaults(), snap);

    // Per-call overrides apply on top without touching the defaults.
    let d = compose_with_defaults(
        "John Smith",
        &OptionsOverrides {
            background_color: Some(Color::new("#222")),
            ..OptionsOverrides::default()
        },
    )
    .unwrap();
    assert_eq!(d.label(), "JS");
    assert_eq!(d.background_color.as_str(), "#222");
    assert_eq!((d.width, d.height), (Some(48.0), Some(48.0)));
    assert!(defaults().background_color.is_none());

    assert!(
        compose_with_defaults(
            "x",
            &OptionsOverrides {
                max_font_size: Some(-1.0),
                ..OptionsOverrides::default()
            }
        )
        .is_err()
    );

    reset_defaults();
    assert_eq!(defaults(), Options::default());
}
