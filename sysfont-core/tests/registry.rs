use std::path::Path;

use sysfont_core::font::Font;
use sysfont_core::registry::Registry;

#[test]
fn basename_case_does_not_change_identity() {
    let registry = Registry::builtin();

    let upper = registry.match_fonts_by_filename(Path::new("/fonts/Arial.ttf"));
    let lower = registry.match_fonts_by_filename(Path::new("/other/arial.ttf"));

    assert_eq!(upper.len(), 1);
    assert_eq!(lower.len(), 1);
    assert_eq!(upper[0].name, lower[0].name);
    assert_eq!(upper[0].family, lower[0].family);
    assert_eq!(upper[0].filename, Path::new("/fonts/Arial.ttf"));
    assert_eq!(lower[0].filename, Path::new("/other/arial.ttf"));
}

#[test]
fn windows_short_names_resolve() {
    let fonts = Registry::builtin().match_fonts_by_filename(Path::new("C/Windows/Fonts/ARIALBD.TTF"));
    assert_eq!(
        fonts,
        vec![Font::new("Arial", "Arial Bold", "C/Windows/Fonts/ARIALBD.TTF")]
    );
}

#[test]
fn collection_files_list_every_face() {
    let fonts = Registry::builtin().match_fonts_by_filename(Path::new("/System/Library/Fonts/Times.ttc"));
    let names: Vec<&str> = fonts.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(
        names,
        vec!["Times Roman", "Times Bold", "Times Italic", "Times Bold Italic"]
    );
}

#[test]
fn unknown_basename_is_identified_through_its_family() {
    let path = Path::new("/fonts/Helvetica Neue Light.otf");
    let fonts = Registry::builtin().match_fonts_by_filename(path);

    assert_eq!(
        fonts,
        vec![Font::new("Helvetica Neue", "Helvetica Neue Light", path)]
    );
}

#[test]
fn unidentifiable_basename_is_empty() {
    assert!(Registry::builtin()
        .match_fonts_by_filename(Path::new("/fonts/Zxqv-Display.ttf"))
        .is_empty());
}

#[test]
fn match_family_flags_low_confidence() {
    let registry = Registry::builtin();

    let known = registry.match_family("Times Bold Italic");
    assert!(known.matched);
    assert_eq!(known.family, "Times");

    let unknown = registry.match_family("Qwerty Bold");
    assert!(!unknown.matched);
    assert_eq!(unknown.family, "qwerty");
}

#[test]
fn alternatives_fall_back_to_default_families() {
    let registry = Registry::builtin();
    let installed = vec![
        Font::new("Webdings", "Webdings", "/f/webdings.ttf"),
        Font::new("DejaVu Serif", "DejaVu Serif", "/f/DejaVuSerif.ttf"),
        Font::new("Liberation Sans", "Liberation Sans", "/f/LiberationSans-Regular.ttf"),
    ];

    let pool = registry.alternatives("not a grouped family", &installed);
    let families: Vec<&str> = pool.iter().map(|f| f.family.as_str()).collect();

    assert_eq!(families, vec!["DejaVu Serif", "Liberation Sans"]);
}

#[test]
fn alternatives_follow_the_matching_group() {
    let registry = Registry::builtin();
    let installed = vec![
        Font::new("Liberation Mono", "Liberation Mono", "/f/LiberationMono-Regular.ttf"),
        Font::new("Liberation Sans", "Liberation Sans", "/f/LiberationSans-Regular.ttf"),
    ];

    let pool = registry.alternatives("courier new", &installed);
    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].family, "Liberation Mono");
}

#[test]
fn every_default_and_alternative_is_a_registry_family() {
    let registry = Registry::builtin();
    let known: Vec<String> = registry.families().map(str::to_lowercase).collect();

    for family in registry
        .defaults()
        .iter()
        .chain(registry.alternative_groups().iter().flatten())
    {
        assert!(known.contains(&family.to_lowercase()), "{family}");
    }
}
