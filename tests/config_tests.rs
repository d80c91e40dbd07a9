use glam::Vec2;
use mousefx_core::*;
use std::time::Instant;

fn approx(a: Rgba, b: Rgba) -> bool {
    a.to_array()
        .iter()
        .zip(b.to_array())
        .all(|(x, y)| (x - y).abs() < 1e-3)
}

#[test]
fn defaults_match_documented_values() {
    let cfg = FxConfig::default();
    let e = &cfg.effects;
    assert!(e.enabled);
    assert!(!e.performance_mode);
    assert_eq!(e.density, 6);
    assert_eq!(e.duration, 1.6);
    assert_eq!(e.colors, vec!["#FF5252", "#FFC107", "#40C4FF"]);
    assert_eq!(e.size_range, [14.0, 28.0]);
    assert_eq!(e.speed_range, [150.0, 420.0]);
    assert_eq!(e.types, vec!["heart"]);
    assert!(e.random_pick);
    assert_eq!(e.trail_min_interval_ms, 18);
    assert_eq!(cfg.hotkeys.toggle_effects, "ctrl+alt+h");
    assert_eq!(cfg.hotkeys.quit, "ctrl+alt+q");
}

#[test]
fn partial_document_fills_defaults() {
    let cfg = FxConfig::from_json_str(
        r#"{ "effects": { "density": 12, "types": ["star", "coin"], "performanceMode": true } }"#,
    )
    .expect("parse");
    assert_eq!(cfg.effects.density, 12);
    assert_eq!(cfg.effects.types, vec!["star", "coin"]);
    assert!(cfg.effects.performance_mode);
    assert_eq!(cfg.effects.trail_life, 0.5);
    assert_eq!(cfg.hotkeys, HotkeysConfig::default());
    assert_eq!(cfg.app.name, "MouseFX");
}

#[test]
fn serialized_keys_are_camel_case() {
    let json = FxConfig::default().to_json_string().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");
    let effects = &value["effects"];
    for key in [
        "performanceMode",
        "sizeRange",
        "speedRange",
        "randomPick",
        "trailEnabled",
        "trailMinIntervalMs",
        "trailFlowerChance",
        "trailFlowerSizeRange",
    ] {
        assert!(effects.get(key).is_some(), "missing {key}");
    }
    assert!(value["hotkeys"].get("toggleEffects").is_some());
    assert!(value["app"].get("icon").is_none());
}

#[test]
fn validate_clamps_out_of_range_values() {
    let cfg = FxConfig::from_json_str(
        r#"{ "effects": {
            "density": 1000,
            "duration": 0.0,
            "sizeRange": [30, 10],
            "speedRange": [-50, 100],
            "trailFlowerChance": 4.0,
            "trailMinIntervalMs": 0,
            "colors": ["", "  "]
        } }"#,
    )
    .expect("parse");
    let e = &cfg.effects;
    assert_eq!(e.density, 64);
    assert_eq!(e.duration, 0.05);
    assert_eq!(e.size_range, [10.0, 30.0]);
    assert_eq!(e.speed_range, [0.0, 100.0]);
    assert_eq!(e.trail_flower_chance, 1.0);
    assert_eq!(e.trail_min_interval_ms, 1);
    assert_eq!(e.colors.len(), DEFAULT_COLORS.len());
}

#[test]
fn fractional_and_negative_counts_keep_the_document() {
    let cfg = FxConfig::from_json_str(
        r##"{
            "effects": {
                "density": 6.0,
                "trailDensity": 2.6,
                "trailMinIntervalMs": -5,
                "types": ["star", "coin"],
                "colors": ["#112233"]
            },
            "hotkeys": { "quit": "ctrl+shift+x" }
        }"##,
    )
    .expect("numeric fields accept any JSON number");
    assert_eq!(cfg.effects.density, 6);
    assert_eq!(cfg.effects.trail_density, 3);
    assert_eq!(cfg.effects.trail_min_interval_ms, 1);
    assert_eq!(cfg.effects.types, vec!["star", "coin"]);
    assert_eq!(cfg.effects.colors, vec!["#112233"]);
    assert_eq!(cfg.hotkeys.quit, "ctrl+shift+x");

    let negative = FxConfig::from_json_str(r#"{ "effects": { "density": -4 } }"#).expect("parse");
    assert_eq!(negative.effects.density, 0);
    let huge = FxConfig::from_json_str(r#"{ "effects": { "density": 1e12 } }"#).expect("parse");
    assert_eq!(huge.effects.density, 64);
}

#[test]
fn fractional_counts_survive_a_file_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(
        &path,
        r#"{ "effects": { "density": 4.0, "types": ["ripple"] } }"#,
    )
    .expect("write");
    let cfg = FxConfig::load_from(&path);
    assert_eq!(cfg.effects.density, 4);
    assert_eq!(cfg.effects.types, vec!["ripple"]);
}

#[test]
fn malformed_document_is_a_parse_error() {
    let err = FxConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    assert_eq!(FxConfig::load_from(&path), FxConfig::default());
    assert!(matches!(
        FxConfig::try_load_from(&path),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn invalid_file_loads_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, r#"{ "effects": 5 }"#).expect("write");
    assert_eq!(FxConfig::load_from(&path), FxConfig::default());
}

#[test]
fn save_then_load_drives_identical_engines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join(CONFIG_FILE);

    let mut cfg = FxConfig::default();
    cfg.effects.types = vec!["confetti".into(), "ripple".into()];
    cfg.effects.random_pick = false;
    cfg.effects.colors = vec!["#123456".into(), "gold".into()];
    cfg.debug = true;
    cfg.save_to(&path).expect("save");

    let loaded = FxConfig::load_from(&path);
    assert_eq!(loaded, cfg);

    let mut a = EffectEngine::new(&cfg.effects, 7);
    let mut b = EffectEngine::new(&loaded.effects, 7);
    let t = Instant::now();
    for engine in [&mut a, &mut b] {
        engine.spawn_burst(Vec2::new(100.0, 100.0));
        engine.spawn_trail(Vec2::new(110.0, 100.0), t);
        engine.step(0.01);
    }
    let snapshot = |e: &EffectEngine| {
        e.particles()
            .iter()
            .map(|p| (p.position, p.color, p.shape))
            .collect::<Vec<_>>()
    };
    assert_eq!(snapshot(&a), snapshot(&b));
}

#[test]
fn locate_prefers_explicit_path() {
    let explicit = std::path::Path::new("/tmp/somewhere/fx.json");
    assert_eq!(
        FxConfig::locate(Some(explicit)).as_deref(),
        Some(explicit)
    );
}

#[test]
fn settings_skip_unknown_types_and_bad_colors() {
    let cfg = EffectsConfig {
        types: vec!["heart".into(), "sparkle".into(), "COIN".into()],
        colors: vec!["#zzzzzz".into(), "#0f0".into(), "chartreuse-ish".into()],
        ..EffectsConfig::default()
    };
    let settings = EffectSettings::from_config(&cfg);
    assert_eq!(settings.kinds, vec![BurstKind::Heart, BurstKind::Coin]);
    assert_eq!(settings.palette.len(), 1);
    assert!(approx(settings.palette[0], Rgba::new(0.0, 1.0, 0.0, 1.0)));
}

#[test]
fn settings_fall_back_to_default_palette() {
    let cfg = EffectsConfig {
        colors: vec!["nope".into()],
        ..EffectsConfig::default()
    };
    let settings = EffectSettings::from_config(&cfg);
    assert_eq!(settings.palette.len(), DEFAULT_COLORS.len());
}

#[test]
fn derived_caps_follow_performance_mode() {
    let mut cfg = EffectsConfig {
        density: 40,
        trail_density: 0,
        ..EffectsConfig::default()
    };
    let normal = EffectSettings::from_config(&cfg);
    assert_eq!(normal.burst_density(), BURST_DENSITY_CAP);
    assert_eq!(normal.trail_density(), 1);
    assert_eq!(normal.draw_cap(), DRAW_CAP);
    assert_eq!(normal.trail_interval().as_millis(), 18);

    cfg.performance_mode = true;
    let perf = EffectSettings::from_config(&cfg);
    assert_eq!(perf.burst_density(), BURST_DENSITY_CAP_PERF);
    assert_eq!(perf.draw_cap(), DRAW_CAP_PERF);
    assert_eq!(perf.trail_interval().as_millis(), 40);
}

#[test]
fn burst_kind_names_round_trip() {
    for kind in BurstKind::ALL {
        assert_eq!(kind.to_string().parse::<BurstKind>(), Ok(kind));
    }
    assert_eq!(
        "glitter".parse::<BurstKind>(),
        Err(UnknownBurstKind("glitter".into()))
    );
}

#[test]
fn color_parsing_forms() {
    assert!(approx(
        Rgba::parse("#FF5252").unwrap(),
        Rgba::from_rgb8(0xFF, 0x52, 0x52)
    ));
    assert!(approx(Rgba::parse("#fff").unwrap(), Rgba::WHITE));
    let translucent = Rgba::parse("#80FF0000").unwrap();
    assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    assert!(approx(translucent.with_alpha(1.0), Rgba::new(1.0, 0.0, 0.0, 1.0)));
    assert!(approx(Rgba::parse(" Gold ").unwrap(), Rgba::from_rgb8(255, 215, 0)));

    assert_eq!(Rgba::parse(""), Err(ColorError::Empty));
    assert!(matches!(Rgba::parse("#12345"), Err(ColorError::InvalidHex(_))));
    assert!(matches!(Rgba::parse("#gggggg"), Err(ColorError::InvalidHex(_))));
    assert!(matches!(Rgba::parse("mauve"), Err(ColorError::UnknownName(_))));
}

#[test]
fn lighter_and_darker_work_in_hsv() {
    let dark_red = Rgba::new(0.5, 0.0, 0.0, 1.0);
    assert!(approx(dark_red.lighter(150.0), Rgba::new(0.75, 0.0, 0.0, 1.0)));

    // value overflow desaturates
    let red = Rgba::new(1.0, 0.0, 0.0, 0.4);
    assert!(approx(red.lighter(150.0), Rgba::new(1.0, 0.5, 0.5, 0.4)));

    assert!(approx(red.darker(200.0), Rgba::new(0.5, 0.0, 0.0, 0.4)));
    assert!(approx(red.lighter(50.0), red.darker(200.0)));
    assert!(approx(red.lighter(100.0), red));
}

#[test]
fn radial_paint_fades_outward() {
    let paint = Paint::Radial {
        center: Vec2::ZERO,
        radius: 10.0,
        inner: Rgba::WHITE.with_alpha(0.9),
        outer: Rgba::WHITE.with_alpha(0.0),
    };
    assert!((paint.color_at(Vec2::ZERO).a - 0.9).abs() < 1e-6);
    assert!((paint.color_at(Vec2::new(5.0, 0.0)).a - 0.45).abs() < 1e-6);
    assert_eq!(paint.color_at(Vec2::new(0.0, 20.0)).a, 0.0);
}
