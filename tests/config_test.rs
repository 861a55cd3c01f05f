//! Config loading from embedded and external files.

mod common;

use common::fixtures;
use photolab::assets::{AssetLoader, ConfigSource};
use photolab::models::AppConfig;
use photolab::services::KernelLibrary;
use pixel_engine::{ControlPoint, Preset};
use pretty_assertions::assert_eq;

#[test]
fn test_external_config_drives_library_and_curve() {
    let (_dir, loader) = fixtures::loader_for(fixtures::CUSTOM_CONFIG);
    assert!(matches!(loader.config_source(), ConfigSource::File(_)));

    let config = AppConfig::load_from_assets(&loader);
    let curve = config.curve.tone_curve().unwrap();
    assert_eq!(curve.low(), ControlPoint::new(64, 32));
    assert_eq!(curve.high(), ControlPoint::new(192, 224));

    let library = KernelLibrary::from_config(&config);
    assert_eq!(library.max_weight(), 8.0);

    // 8 is within the cap; the config kernel keeps its center
    let ridge = library.get("RIDGE").unwrap();
    assert_eq!(ridge.kernel.weight(1, 1), 8.0);
    assert_eq!(ridge.description.as_deref(), Some("Ridge detection"));

    // boxBlur was overridden by a 1x1 kernel
    let box_blur = library.get("box-blur").unwrap();
    assert!(!box_blur.builtin);
    assert_eq!(box_blur.kernel.size(), 1);
    assert_ne!(box_blur.kernel, Preset::BoxBlur.kernel());
}

#[test]
fn test_custom_kernel_cap_from_config() {
    let (_dir, loader) = fixtures::loader_for(fixtures::CUSTOM_CONFIG);
    let library = KernelLibrary::from_config(&AppConfig::load_from_assets(&loader));

    let kernel = library
        .custom(&[vec![0.0, 0.0, 0.0], vec![0.0, 99.0, 0.0], vec![0.0, 0.0, 0.0]])
        .unwrap();
    assert_eq!(kernel.weight(1, 1), 8.0);
}

#[test]
fn test_broken_external_config_uses_defaults() {
    let (_dir, loader) = fixtures::loader_for("filter: [oops");
    let config = AppConfig::load_from_assets(&loader);
    assert_eq!(config, AppConfig::default());
    assert_eq!(KernelLibrary::from_config(&config).entries().len(), Preset::ALL.len());
}

#[test]
fn test_init_writes_parseable_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let loader = AssetLoader::new(Some(path.clone()));

    let report = loader.init(false).unwrap();
    assert_eq!(report.written, vec![path.display().to_string()]);

    let written = std::fs::read_to_string(&path).unwrap();
    let config = AppConfig::from_yaml(&written).unwrap();
    assert_eq!(config, AppConfig::load_from_assets(&AssetLoader::default()));
}
