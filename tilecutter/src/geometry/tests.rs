//! Tests for zoom level geometry planning

use super::*;

#[test]
fn test_1000x600_level_1() {
    // 1000×600 source at the coarsest level: longer side fits one tile
    let geom = plan_level(1000, 600, 256, 1);
    assert_eq!(geom.scale_percent, 25.6);
    assert_eq!(geom.columns, 1);
    assert_eq!(geom.rows, 1);
    assert_eq!(geom.padded_width, 256);
    assert_eq!(geom.padded_height, 256);
}

#[test]
fn test_1000x600_level_2() {
    let geom = plan_level(1000, 600, 256, 2);
    assert_eq!(geom.scale_percent, 51.2);
    assert_eq!(geom.scaled_width, 512.0);
    assert_eq!(geom.scaled_height, 307.2);
    assert_eq!(geom.columns, 2);
    assert_eq!(geom.rows, 2);
    assert_eq!(geom.padded_width, 512);
    assert_eq!(geom.padded_height, 512);
}

#[test]
fn test_1000x600_level_3() {
    // Past 100% scale: the source is upscaled beyond its native size
    let geom = plan_level(1000, 600, 256, 3);
    assert!((geom.scale_percent - 102.4).abs() < 1e-9);
    assert_eq!(geom.columns, 4);
    assert_eq!(geom.rows, 3);
    assert_eq!(geom.padded_width, 1024);
    assert_eq!(geom.padded_height, 768);
}

#[test]
fn test_portrait_source_scales_by_longer_side() {
    // 600×1000: the height is the governing side
    let geom = plan_level(600, 1000, 256, 1);
    assert_eq!(geom.scale_percent, 25.6);
    assert_eq!(geom.scaled_height, 256.0);
    assert!(geom.scaled_width < 256.0);
    assert_eq!(geom.columns, 1);
    assert_eq!(geom.rows, 1);
}

#[test]
fn test_square_source_needs_no_padding() {
    let geom = plan_level(512, 512, 256, 2);
    assert_eq!(geom.scaled_width, 512.0);
    assert_eq!(geom.scaled_height, 512.0);
    assert_eq!(geom.padded_width, 512);
    assert_eq!(geom.padded_height, 512);
}

#[test]
fn test_padding_is_smallest_covering_multiple() {
    for (w, h) in [(1000, 600), (799, 1305), (2048, 17), (333, 333)] {
        for level in 1..=5 {
            let geom = plan_level(w, h, 256, level);
            assert_eq!(geom.padded_width % 256, 0);
            assert_eq!(geom.padded_height % 256, 0);
            // Covers the scaled image...
            assert!(geom.padded_width as f64 >= geom.scaled_width);
            assert!(geom.padded_height as f64 >= geom.scaled_height);
            // ...without over-padding by a whole tile on either axis
            assert!((geom.padded_width as f64) < geom.scaled_width + 256.0);
            assert!((geom.padded_height as f64) < geom.scaled_height + 256.0);
        }
    }
}

#[test]
fn test_custom_tile_size() {
    let geom = plan_level(1000, 600, 100, 1);
    assert_eq!(geom.scale_percent, 10.0);
    assert_eq!(geom.scaled_width, 100.0);
    assert_eq!(geom.scaled_height, 60.0);
    assert_eq!(geom.columns, 1);
    assert_eq!(geom.rows, 1);
}

#[test]
fn test_planner_is_pure() {
    let a = plan_level(1920, 1080, 256, 4);
    let b = plan_level(1920, 1080, 256, 4);
    assert_eq!(a, b);
}

#[test]
fn test_tile_iterator_yields_full_grid() {
    let geom = plan_level(1000, 600, 256, 3);
    let tiles: Vec<_> = geom.tiles().collect();
    assert_eq!(tiles.len(), 12);
    assert_eq!(geom.tiles().len(), 12);

    // Column-major order: first window is the origin, second is one row down
    assert_eq!(
        tiles[0],
        TileWindow {
            column: 0,
            row: 0,
            crop_x: 0,
            crop_y: 0
        }
    );
    assert_eq!(
        tiles[1],
        TileWindow {
            column: 0,
            row: 1,
            crop_x: 0,
            crop_y: 256
        }
    );
    assert_eq!(
        tiles[11],
        TileWindow {
            column: 3,
            row: 2,
            crop_x: 768,
            crop_y: 512
        }
    );
}

#[test]
fn test_every_crop_window_is_in_bounds() {
    for level in 1..=4 {
        let geom = plan_level(1305, 799, 256, level);
        for tile in geom.tiles() {
            assert!(tile.crop_x + geom.tile_size <= geom.padded_width);
            assert!(tile.crop_y + geom.tile_size <= geom.padded_height);
        }
    }
}
