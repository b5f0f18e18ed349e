use super::*;
use crate::foundation::color::Palette;
use crate::options::model::LabelStrategy;

struct Counting {
    inner: Rng64,
    calls: usize,
}

impl RandomSource for Counting {
    fn next_f64_01(&mut self) -> f64 {
        self.calls += 1;
        self.inner.next_f64_01()
    }
}

fn counting() -> Counting {
    Counting {
        inner: Rng64::new(3),
        calls: 0,
    }
}

fn opts(strategy: LabelStrategy, width: Option<f64>) -> Options {
    Options {
        label_strategy: strategy,
        width,
        ..Options::default()
    }
}

#[test]
fn john_smith_last_name_scenario() {
    let o = opts(LabelStrategy::LastName, Some(32.0));
    let mut rng = counting();
    let d = compose_with_rng("John Smith".into(), &o, &mut rng);

    let text = d.text.as_ref().unwrap();
    assert_eq!(text.label, "Smith");
    assert_eq!(text.font_size, 9.0);
    // 'S' = 83, 83 % 4 = 3
    assert_eq!(d.background_color.as_str(), "#E8541E");
    assert_eq!(d.text_color.as_str(), "#FFF");
    assert_eq!(d.font_family, "Verdana, Geneva, sans-serif");
    assert_eq!((d.width, d.height), (Some(32.0), Some(32.0)));
    assert_eq!(rng.calls, 0);
}

#[test]
fn empty_name_is_a_plain_block_with_random_color() {
    let o = Options::default();
    let mut rng = counting();
    let d = compose_with_rng(NameInput::Absent, &o, &mut rng);
    assert!(d.text.is_none());
    assert_eq!(d.label(), "");
    assert!(o.palette.colors().contains(&d.background_color));
    assert_eq!(rng.calls, 1);

    let d = compose_with_rng("".into(), &o, &mut rng);
    assert!(d.text.is_none());
    assert_eq!(rng.calls, 2);
}

#[test]
fn explicit_background_skips_randomness_even_without_name() {
    let o = Options {
        background_color: Some(Color::new("#000")),
        ..Options::default()
    };
    let mut rng = counting();
    let d = compose_with_rng(NameInput::Absent, &o, &mut rng);
    assert_eq!(d.background_color.as_str(), "#000");
    assert_eq!(rng.calls, 0);
}

#[test]
fn identical_inputs_give_identical_descriptors() {
    let o = opts(LabelStrategy::Initials, Some(40.0));
    for name in ["John Smith", "王小明", "Émile Zola", "x"] {
        assert_eq!(compose(name, &o), compose(name, &o), "{name}");
    }
}

#[test]
fn alexander_initials_is_a() {
    let d = compose("Alexander", &opts(LabelStrategy::Initials, None));
    let text = d.text.unwrap();
    assert_eq!(text.label, "A");
    // 32 / 0.75 = 42.7, clamped.
    assert_eq!(text.font_size, 16.0);
}

#[test]
fn wide_script_last_name_is_final_char() {
    let d = compose("王小明", &opts(LabelStrategy::LastName, None));
    assert_eq!(d.label(), "明");
}

#[test]
fn color_uses_post_fit_label() {
    // 's' = 115 and 'S' = 83 land on different slots of a 5-color palette.
    let palette = Palette::from_css(["#0", "#1", "#2", "#3", "#4"]);
    let o = Options {
        label_strategy: LabelStrategy::FirstName,
        palette,
        width: Some(20.0),
        ..Options::default()
    };
    let d = compose("smith jones", &o);
    // 20 / 3.75 = 5.3 < 8, so "smith" collapses to "S".
    assert_eq!(d.label(), "S");
    assert_eq!(d.text.as_ref().unwrap().font_size, 16.0);
    assert_eq!(d.background_color.as_str(), "#3");
}

#[test]
fn height_defaults_to_width_and_needs_a_width() {
    let o = Options {
        width: Some(40.0),
        height: Some(20.0),
        ..Options::default()
    };
    let d = compose("A", &o);
    assert_eq!((d.width, d.height), (Some(40.0), Some(20.0)));

    let o = Options {
        height: Some(20.0),
        ..Options::default()
    };
    let d = compose("A", &o);
    assert_eq!((d.width, d.height), (None, None));
}

#[test]
fn descriptor_json_omits_missing_text() {
    let mut rng = counting();
    let d = compose_with_rng(NameInput::Absent, &Options::default(), &mut rng);
    let v = serde_json::to_value(&d).unwrap();
    assert!(v.get("text").is_none());
    assert!(v.get("width").is_none());
    assert_eq!(v["textColor"], "#FFF");

    let d = compose("John Smith", &opts(LabelStrategy::LastName, Some(32.0)));
    let v = serde_json::to_value(&d).unwrap();
    assert_eq!(v["text"]["label"], "Smith");
    assert_eq!(v["text"]["fontSize"], 9.0);
}
