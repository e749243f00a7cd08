use assert_approx_eq::assert_approx_eq;
use hexgrid::{
    AxialPoint, CubePoint, HexConfig, HexLayout, HighlightTracker, PixelPoint,
    ShaderConfig, TileOrientation, TilePoint,
};
use serde_test::{assert_tokens, Token};

fn layout(radius: f64, orientation: TileOrientation) -> HexLayout {
    HexLayout::new(&ShaderConfig {
        radius,
        orientation,
        ..Default::default()
    })
    .unwrap()
}

/// Walk a line of pixels across the grid. Every sample should land on a
/// valid tile that's either the same as the last one or adjacent to it.
#[test]
fn test_pixel_walk_is_continuous() {
    for orientation in &[TileOrientation::PointyTop, TileOrientation::FlatTop] {
        let layout = layout(12.0, *orientation);
        let mut previous: Option<TilePoint> = None;
        for step in 0..2000 {
            let pixel = PixelPoint::new(
                -300.0 + step as f64 * 0.3,
                250.0 - step as f64 * 0.17,
            );
            let tile = layout.pixel_to_tile(pixel);
            let cube = tile.to_cube();
            assert_eq!(cube.x() + cube.y() + cube.z(), 0.0);

            let tile = TilePoint::try_from(tile).unwrap();
            if let Some(previous) = previous {
                assert!(
                    previous.distance_to(tile) <= 1,
                    "jumped from {} to {} at {}",
                    previous,
                    tile,
                    pixel
                );
            }
            previous = Some(tile);
        }
    }
}

/// The nearest tile center to any pixel is the tile it rounds to
#[test]
fn test_rounds_to_nearest_center() {
    for orientation in &[TileOrientation::PointyTop, TileOrientation::FlatTop] {
        let layout = layout(10.0, *orientation);
        for i in -20..20 {
            for j in -20..20 {
                let pixel = PixelPoint::new(i as f64 * 3.7, j as f64 * 2.9);
                let tile = layout.pixel_to_tile(pixel);
                let center = layout.hex_to_pixel(tile);
                let distance = |a: PixelPoint| {
                    let diff = a - pixel;
                    (diff.x * diff.x + diff.y * diff.y).sqrt()
                };
                let tile_point = TilePoint::try_from(tile).unwrap();
                for adjacent in tile_point.adjacents() {
                    let adjacent_center =
                        layout.hex_to_pixel(AxialPoint::from(adjacent));
                    assert!(
                        distance(center) <= distance(adjacent_center) + 1e-9,
                        "{} is closer to {} than {}",
                        pixel,
                        adjacent,
                        tile_point
                    );
                }
            }
        }
    }
}

#[test]
fn test_cube_round_trip_through_layout() {
    let layout = layout(32.0, TileOrientation::FlatTop);
    let hex = AxialPoint::new(2.0, -1.0);
    let back = layout.pixel_to_hex(layout.hex_to_pixel(hex));
    assert_approx_eq!(back.q, 2.0, 1e-6);
    assert_approx_eq!(back.r, -1.0, 1e-6);
    assert_eq!(CubePoint::from(back.round()).to_axial(), hex);
}

#[test]
fn test_tracker_follows_tile_centers() {
    let config = HexConfig::default();
    let mut tracker = HighlightTracker::new(&config).unwrap();
    let layout = *tracker.layout();
    let height = config.screen.height;

    for tile in TilePoint::new(4, 2).adjacents() {
        let center = layout.hex_to_pixel(AxialPoint::from(tile));
        // Convert back to raw screen space
        let raw = PixelPoint::new(center.x, height - center.y);
        let change = tracker.update(raw).unwrap();
        assert_eq!(change.current, AxialPoint::from(tile));
        assert_eq!(
            tracker.shader_param(&config.shader.highlight_param),
            Some([tile.q() as f64, tile.r() as f64, 0.0])
        );
    }
}

#[test]
fn test_orientation_serde() {
    assert_tokens(
        &TileOrientation::PointyTop,
        &[Token::UnitVariant {
            name: "TileOrientation",
            variant: "pointy_top",
        }],
    );
    assert_tokens(
        &TileOrientation::FlatTop,
        &[Token::UnitVariant {
            name: "TileOrientation",
            variant: "flat_top",
        }],
    );
    assert_eq!(
        "pointy_top".parse::<TileOrientation>().unwrap(),
        TileOrientation::PointyTop
    );
    assert_eq!(TileOrientation::FlatTop.to_string(), "flat_top");
}
