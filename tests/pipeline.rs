use std::cell::RefCell;
use std::rc::Rc;

use logoforge::generator::{demo_palettes, demo_patterns, demo_templates};
use logoforge::{
    Color, Compositor, DEFAULT_SIZES, Effect, LogoConfig, LogoError, LogoGenerator, Pattern, Template,
    random_config,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

fn file_names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_seeded_render_is_reproducible() {
    let mut rng = StdRng::seed_from_u64(2024);
    let config = random_config(&mut rng)
        .with_effects([Effect::Particles, Effect::LensFlare])
        .with_extra_shapes(true);
    let generator = LogoGenerator::new(160, 120);

    let a = generator.render_seeded(&config, 5).unwrap();
    let b = generator.render_seeded(&config, 5).unwrap();
    assert_eq!((a.width(), a.height()), (160, 120));
    assert_eq!(a.data(), b.data());
}

#[test]
fn test_batch_writes_numbered_pngs() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("nested").join("logos");
    let mut rng = StdRng::seed_from_u64(1);

    let paths = LogoGenerator::new(64, 64)
        .batch_generate(5, &out, "brand", &mut rng)
        .unwrap();

    assert_eq!(
        file_names(&paths),
        ["brand_001.png", "brand_002.png", "brand_003.png", "brand_004.png", "brand_005.png"]
    );
    for path in &paths {
        let img = image::open(path).unwrap();
        assert_eq!((img.width(), img.height()), (64, 64));
    }
}

#[test]
fn test_batch_of_zero_still_creates_dir() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("empty");
    let mut rng = StdRng::seed_from_u64(1);
    let paths = LogoGenerator::new(32, 32)
        .batch_generate(0, &out, "logo", &mut rng)
        .unwrap();
    assert!(paths.is_empty());
    assert!(out.is_dir());
}

#[test]
fn test_variations_are_named_and_sized() {
    let dir = tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let base = LogoConfig::new().with_template(Template::TechHexagon);

    let paths = LogoGenerator::new(80, 60)
        .generate_variations(&base, 3, dir.path(), &mut rng)
        .unwrap();

    assert_eq!(
        file_names(&paths),
        ["variation_001.png", "variation_002.png", "variation_003.png"]
    );
    let img = image::open(&paths[2]).unwrap();
    assert_eq!((img.width(), img.height()), (80, 60));
}

#[test]
fn test_size_variants_keep_the_design() {
    let dir = tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    let config = LogoConfig::new()
        .with_colors([Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)])
        .with_template(Template::MinimalCircle)
        .with_text("");
    let sizes = [(64, 64), (200, 100), (96, 160)];

    let paths = LogoGenerator::generate_size_variants(&config, Some(&sizes), dir.path(), &mut rng).unwrap();

    assert_eq!(
        file_names(&paths),
        ["logo_64x64.png", "logo_200x100.png", "logo_96x160.png"]
    );
    for (path, (w, h)) in paths.iter().zip(sizes) {
        let img = image::open(path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (w, h));
        // same template at every size: inner disc in the secondary color
        assert_eq!(img.get_pixel(w / 2, h / 2).0, [0, 0, 255, 255]);
    }
}

#[test]
fn test_default_sizes() {
    assert_eq!(DEFAULT_SIZES.len(), 5);
    assert_eq!(DEFAULT_SIZES[0], (64, 64));
    assert_eq!(DEFAULT_SIZES[4], (1024, 1024));
    assert!(DEFAULT_SIZES.iter().all(|(w, h)| w == h));
}

#[test]
fn test_saved_config_renders_identically() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("design.json");
    let mut rng = StdRng::seed_from_u64(10);
    let config = random_config(&mut rng).with_pattern(Pattern::Wave);

    config.save(&path).unwrap();
    let loaded = LogoConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let generator = LogoGenerator::new(96, 96);
    let a = generator.render_seeded(&config, 8).unwrap();
    let b = generator.render_seeded(&loaded, 8).unwrap();
    assert_eq!(a.data(), b.data());
}

#[test]
fn test_unwritable_output_is_io_error() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let err = LogoGenerator::new(16, 16)
        .batch_generate(1, &blocker.join("logos"), "logo", &mut rng)
        .unwrap_err();
    assert!(matches!(err, LogoError::Io { .. }), "{err:?}");
}

#[test]
fn test_compositor_orders_layers() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut compositor = Compositor::new(16, 16);
    for z in [3, 1, 2] {
        let order = Rc::clone(&order);
        compositor.add_layer(z, move |_| order.borrow_mut().push(z));
    }

    compositor.compose(Color::BLACK).unwrap();
    assert_eq!(*order.borrow(), vec![1, 2, 3]);
}

#[test]
fn test_catalog_demos_write_one_file_per_entry() {
    let dir = tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(6);

    let templates = demo_templates(&dir.path().join("templates"), &mut rng).unwrap();
    assert_eq!(templates.len(), Template::ALL.len());
    assert!(templates[0].ends_with("minimal_circle.png"));

    let patterns = demo_patterns(&dir.path().join("patterns")).unwrap();
    assert_eq!(patterns.len(), Pattern::ALL.len());
    assert!(patterns.iter().any(|p| p.ends_with("hexagon.png")));

    let palettes = demo_palettes(&dir.path().join("palettes"), &mut rng).unwrap();
    assert_eq!(palettes.len(), 8);
    assert!(palettes.iter().any(|p| p.ends_with("dark_elegance.png")));
    assert!(palettes.iter().all(|p| p.is_file()));
}
