//! Theme cycle order, labels, and palette distinctness.

use playground_core::Theme;

#[test]
fn test_cycle_wraps_after_the_last_theme() {
    let order = [
        Theme::NeoHolo,
        Theme::DarkQuantum,
        Theme::RetroGrid,
        Theme::MinimalLight,
    ];
    assert_eq!(Theme::ALL, order);

    let mut theme = Theme::NeoHolo;
    for expected in [
        Theme::DarkQuantum,
        Theme::RetroGrid,
        Theme::MinimalLight,
        Theme::NeoHolo,
    ] {
        theme = theme.next();
        assert_eq!(theme, expected);
    }
}

#[test]
fn test_labels() {
    let labels: Vec<&str> = Theme::ALL.iter().map(|theme| theme.label()).collect();
    assert_eq!(
        labels,
        ["neo holo", "dark quantum", "retro grid", "minimal light"]
    );
}

#[test]
fn test_palettes_are_distinct() {
    for (i, a) in Theme::ALL.iter().enumerate() {
        for b in &Theme::ALL[i + 1..] {
            assert_ne!(a.palette(), b.palette(), "{} vs {}", a.label(), b.label());
        }
    }
}

#[test]
fn test_light_theme_inverts_the_background() {
    // The three dark themes keep dark backgrounds with light text; the
    // light theme flips both.
    let light = Theme::MinimalLight.palette();
    assert!(light.background.r > 200 && light.text.r < 80);

    for theme in [Theme::NeoHolo, Theme::DarkQuantum, Theme::RetroGrid] {
        let palette = theme.palette();
        assert!(palette.background.r < 80 && palette.text.r > 100);
    }
}
