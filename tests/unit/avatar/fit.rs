use super::*;

fn fit(label: &str, width: Option<f64>) -> FittedLabel {
    fit_label(label, width, 8.0, 16.0).unwrap()
}

#[test]
fn empty_label_is_not_fitted() {
    assert_eq!(fit_label("", Some(32.0), 8.0, 16.0), None);
}

#[test]
fn in_bounds_size_is_the_rounded_ratio() {
    // 32 / (5 * 0.75) = 8.53
    let f = fit("Smith", Some(32.0));
    assert_eq!(f.label, "Smith");
    assert_eq!(f.font_size, 9.0);

    // 64 / (6 * 0.75) = 14.2
    let f = fit("Robert", Some(64.0));
    assert_eq!(f.label, "Robert");
    assert_eq!(f.font_size, 14.0);
}

#[test]
fn rounding_is_half_up() {
    // 30 / (4 * 0.75) = 10.0, 31.5 / 3 = 10.5
    assert_eq!(fit("abcd", Some(30.0)).font_size, 10.0);
    assert_eq!(fit("abcd", Some(31.5)).font_size, 11.0);
}

#[test]
fn oversize_is_clamped_without_touching_label() {
    let f = fit("A", Some(32.0));
    assert_eq!(f.label, "A");
    assert_eq!(f.font_size, 16.0);
}

#[test]
fn undersize_collapses_and_jumps_to_max() {
    // 20 / 3.75 = 5.3 -> 5 < 8
    let f = fit("smith", Some(20.0));
    assert_eq!(f.label, "S");
    assert_eq!(f.font_size, 16.0);
}

#[test]
fn wide_glyphs_weigh_double() {
    // 32 / (2 * 1.5) = 10.67
    let f = fit("小明", Some(32.0));
    assert_eq!(f.label, "小明");
    assert_eq!(f.font_size, 11.0);

    // Same char count, narrow glyphs: 32 / 1.5 = 21.3 -> clamped.
    assert_eq!(fit("ab", Some(32.0)).font_size, 16.0);
}

#[test]
fn missing_zero_or_nan_width_defaults_to_32() {
    assert_eq!(fit("Smith", None), fit("Smith", Some(32.0)));
    assert_eq!(fit("Smith", Some(0.0)), fit("Smith", Some(32.0)));
    assert_eq!(fit("Smith", Some(f64::NAN)), fit("Smith", Some(32.0)));
}

#[test]
fn infinite_width_is_used_not_defaulted() {
    // At 32px "Robert" would collapse (32 / 4.5 = 7.1); unbounded width clamps to max instead.
    let f = fit("Robert", Some(f64::INFINITY));
    assert_eq!(f.label, "Robert");
    assert_eq!(f.font_size, 16.0);
}

#[test]
fn negative_width_is_used_not_defaulted() {
    let f = fit("Smith", Some(-32.0));
    assert_eq!(f.label, "S");
    assert_eq!(f.font_size, 16.0);
}

#[test]
fn collapse_always_means_one_char_at_max() {
    for label in ["Robert", "abcdef", "xyz", "一二三四五六七八"] {
        for width in [4.0, 8.0, 12.0, 20.0] {
            let text_width = label.chars().count() as f64
                * if is_latin_extended(label) { 0.75 } else { 1.5 };
            let raw = (width / text_width + 0.5).floor();
            let f = fit(label, Some(width));
            if raw < 8.0 {
                assert_eq!(f.label.chars().count(), 1, "{label} @ {width}");
                assert_eq!(f.font_size, 16.0);
            } else if raw <= 16.0 {
                assert_eq!(f.label, label);
                assert_eq!(f.font_size, raw);
            }
        }
    }
}
