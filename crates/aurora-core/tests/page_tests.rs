// Host-side tests for the loader phase machine, theme state, scroll-reveal
// predicate, and color/config plumbing.

use aurora_core::color::{random_rgb, Rgb};
use aurora_core::config::{ConfigError, TubesConfig};
use aurora_core::loader::{Loader, LoaderPhase};
use aurora_core::reveal::is_revealed;
use aurora_core::theme::{Theme, THEME_STORAGE_KEY};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------------- loader ----------------

#[test]
fn loader_walks_the_documented_timeline() {
    let mut loader = Loader::start(0.0);
    assert_eq!(loader.phase(), LoaderPhase::Running);

    assert_eq!(loader.advance(1499.0), None);
    assert_eq!(loader.phase(), LoaderPhase::Running);

    assert_eq!(loader.advance(1500.0), Some(LoaderPhase::Complete));
    assert_eq!(loader.advance(2499.0), None);
    assert_eq!(loader.phase(), LoaderPhase::Complete);

    assert_eq!(loader.advance(2500.0), Some(LoaderPhase::Hidden));
    assert_eq!(loader.advance(100_000.0), None);
    assert_eq!(loader.phase(), LoaderPhase::Hidden);
}

#[test]
fn loader_reports_each_transition_once_on_clock_jumps() {
    let mut loader = Loader::start(1_000.0);
    // a single big jump still surfaces Complete before Hidden
    assert_eq!(loader.advance(10_000.0), Some(LoaderPhase::Complete));
    assert_eq!(loader.advance(10_000.0), Some(LoaderPhase::Hidden));
    assert_eq!(loader.advance(10_000.0), None);
}

// ---------------- theme ----------------

#[test]
fn theme_double_toggle_is_identity() {
    for start in [Theme::Dark, Theme::Light] {
        assert_eq!(start.toggled().toggled(), start);
    }
}

#[test]
fn theme_round_trips_through_storage_strings() {
    for t in [Theme::Dark, Theme::Light] {
        assert_eq!(Theme::from_str(t.as_str()), Some(t));
    }
    assert_eq!(Theme::from_str("solarized"), None);
}

#[test]
fn absent_or_garbage_preference_means_dark() {
    assert_eq!(Theme::from_saved(None), Theme::Dark);
    assert_eq!(Theme::from_saved(Some("banana")), Theme::Dark);
    assert_eq!(Theme::from_saved(Some("light")), Theme::Light);
    assert!(!Theme::Dark.is_light());
    assert_eq!(THEME_STORAGE_KEY, "theme");
}

// ---------------- scroll reveal ----------------

#[test]
fn sections_reveal_below_three_quarters_of_the_viewport() {
    let vh = 1000.0;
    // top above the threshold and bottom on screen
    assert!(is_revealed(500.0, 1500.0, vh));
    // scrolled fully past: the whole section sits above the viewport
    assert!(!is_revealed(-2000.0, -100.0, vh));
    // still below the threshold line
    assert!(!is_revealed(800.0, 1800.0, vh));
}

#[test]
fn reveal_boundaries_are_exclusive() {
    let vh = 1000.0;
    assert!(!is_revealed(750.0, 1750.0, vh), "top exactly at the threshold");
    assert!(!is_revealed(-500.0, 0.0, vh), "bottom exactly at the top edge");
    assert!(is_revealed(749.9, 1749.9, vh));
}

// ---------------- colors & config ----------------

#[test]
fn hex_parsing_accepts_the_default_palette() {
    assert_eq!(Rgb::from_hex("#00f2ff"), Some(Rgb([0.0, 242.0 / 255.0, 1.0])));
    assert_eq!(Rgb::from_hex("#000000"), Some(Rgb([0.0, 0.0, 0.0])));
    assert_eq!(Rgb::from_hex("#ffffff"), Some(Rgb::WHITE));
    assert_eq!(Rgb::from_hex("00f2ff"), None);
    assert_eq!(Rgb::from_hex("#f2ff"), None);
    assert_eq!(Rgb::from_hex("#zzzzzz"), None);
}

#[test]
fn random_colors_are_in_range_and_usually_distinct() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut distinct = 0;
    let mut prev = random_rgb(&mut rng);
    for _ in 0..100 {
        let c = random_rgb(&mut rng);
        assert!(c.0.iter().all(|v| (0.0..=1.0).contains(v)));
        if c != prev {
            distinct += 1;
        }
        prev = c;
    }
    // collisions over a 24-bit space are vanishingly rare
    assert!(distinct >= 99);
}

#[test]
fn default_config_is_valid_and_graded() {
    let config = TubesConfig::default();
    config.validate().expect("default config must validate");
    assert_eq!(config.tube_count, 3);
    assert_eq!(config.points_per_tube, 20);

    // outer tubes are thicker and fainter
    assert!(config.radius_for(1) > config.radius_for(0));
    assert!(config.opacity_for(1) < config.opacity_for(0));
    assert!(config.opacity_for(config.tube_count - 1) > 0.0);
}

#[test]
fn short_palettes_cycle_instead_of_panicking() {
    let config = TubesConfig {
        tube_count: 5,
        palette: vec![Rgb([1.0, 0.0, 0.0]), Rgb([0.0, 1.0, 0.0])],
        ..TubesConfig::default()
    };
    config.validate().expect("short palette is fine");
    assert_eq!(config.color_for(0), config.color_for(2));
    assert_eq!(config.color_for(1), config.color_for(3));
}

#[test]
fn invalid_configs_name_the_offending_field() {
    let no_tubes = TubesConfig {
        tube_count: 0,
        ..TubesConfig::default()
    };
    assert!(matches!(no_tubes.validate(), Err(ConfigError::NoTubes(0))));

    let short_chain = TubesConfig {
        points_per_tube: 1,
        ..TubesConfig::default()
    };
    assert!(matches!(
        short_chain.validate(),
        Err(ConfigError::TooFewPoints(1))
    ));

    let empty_palette = TubesConfig {
        palette: Vec::new(),
        ..TubesConfig::default()
    };
    assert!(matches!(
        empty_palette.validate(),
        Err(ConfigError::EmptyPalette)
    ));
}
