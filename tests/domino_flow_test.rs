//! End-to-end domino counting: PNG file -> config -> pipeline -> counts.

mod common;

use common::fixtures;
use pretty_assertions::assert_eq;
use raster_engine::{
    DominoCounter, DominoResult, PixelBuffer, StructuringElement, StructuringElementKind, WHITE,
};
use rasterlab::imaging::read_png;
use rasterlab::models::AppConfig;
use rasterlab::services::OperationRunner;

fn runner(config: AppConfig) -> OperationRunner {
    OperationRunner::new(config.validate().unwrap())
}

#[test]
fn test_tile_counted_from_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::png_file(dir.path(), "tile.png", &fixtures::domino_tile());

    let image = read_png(&path).unwrap();
    let result = runner(AppConfig::default()).count_pips(&image).unwrap();

    assert_eq!(
        result,
        DominoResult {
            top_pips: 2,
            bottom_pips: 2
        }
    );
    assert_eq!(result.total(), 4);
}

#[test]
fn test_configured_element_does_not_reach_pip_counting() {
    let config = AppConfig {
        structuring_element: StructuringElementKind::Cross,
        ..Default::default()
    };
    let settings = config.validate().unwrap();
    assert_eq!(settings.structuring_element, StructuringElement::cross());
    assert_eq!(
        settings.domino.structuring_element,
        StructuringElement::square()
    );
    assert_eq!(settings.domino, AppConfig::default().validate().unwrap().domino);

    let result = OperationRunner::new(settings)
        .count_pips(&fixtures::domino_tile())
        .unwrap();
    assert_eq!(
        result,
        DominoResult {
            top_pips: 2,
            bottom_pips: 2
        }
    );
}

#[test]
fn test_min_area_controls_speck() {
    // the 2x2 speck has area 4 and joins the top count once allowed
    let config = AppConfig {
        min_component_area: 4,
        ..Default::default()
    };
    let result = runner(config).count_pips(&fixtures::domino_tile()).unwrap();
    assert_eq!(result.top_pips, 3);
    assert_eq!(result.bottom_pips, 2);
}

#[test]
fn test_small_tile_with_tight_margin() {
    let mut tile = PixelBuffer::filled(10, 6, WHITE);
    fixtures::paint(&mut tile, 1, 0, 3, 2);
    fixtures::paint(&mut tile, 1, 4, 3, 2);

    let config = AppConfig {
        min_component_area: 1,
        divider_margin: 1,
        ..Default::default()
    };
    let result = runner(config).count_pips(&tile).unwrap();
    assert_eq!(
        result,
        DominoResult {
            top_pips: 1,
            bottom_pips: 0
        }
    );
}

#[test]
fn test_runner_matches_engine_builder() {
    let tile = fixtures::domino_tile();
    let settings = AppConfig::default().validate().unwrap();
    let via_runner = OperationRunner::new(settings.clone())
        .count_pips(&tile)
        .unwrap();
    let via_builder = DominoCounter::with_options(settings.domino)
        .count(&tile)
        .unwrap();
    assert_eq!(via_runner, via_builder);
}

#[test]
fn test_result_json_shape() {
    let result = runner(AppConfig::default())
        .count_pips(&fixtures::domino_tile())
        .unwrap();
    let json: serde_json::Value = serde_json::to_value(result).unwrap();
    assert_eq!(json, serde_json::json!({ "topPips": 2, "bottomPips": 2 }));
}
