//! End-to-end pipeline tests: submit, transform, finalize, serialize.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::f64::consts::FRAC_PI_2;

use trazo::prelude::*;

fn outline_pixels(canvas: &Canvas, color: Rgb) -> HashSet<(i64, i64)> {
    let width = canvas.width() as i64;
    canvas
        .pixels()
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == color)
        .map(|(i, _)| (i as i64 % width, i as i64 / width))
        .collect()
}

#[test]
fn deferred_scene_renders_in_submission_order() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    canvas.fill(Rgb::WHITE);

    canvas.set_color(Rgb::RED);
    canvas.draw_line(0, 20, 39, 20);
    canvas.set_color(Rgb::BLUE);
    canvas.draw_circle(20, 20, 10).unwrap();
    canvas.finalize();

    // The circle was submitted after the line and owns the two crossings.
    assert_eq!(canvas.get_pixel(10, 20), Some(Rgb::BLUE));
    assert_eq!(canvas.get_pixel(30, 20), Some(Rgb::BLUE));
    // The line survives away from the circle.
    assert_eq!(canvas.get_pixel(2, 20), Some(Rgb::RED));
}

#[test]
fn all_line_algorithms_draw_the_same_diagonal_extremes() {
    for algo in [
        LineAlgorithm::Naive,
        LineAlgorithm::Dda,
        LineAlgorithm::Bresenham,
    ] {
        let mut canvas = Canvas::new(16, 16).unwrap();
        canvas.set_line_algorithm(algo);
        canvas.set_color(Rgb::GREEN);
        canvas.draw_line(0, 0, 15, 15);
        canvas.finalize();
        let set = outline_pixels(&canvas, Rgb::GREEN);
        assert!(set.contains(&(0, 0)), "{algo:?} missing start");
        assert!(set.contains(&(7, 7)), "{algo:?} missing middle");
    }
}

#[test]
fn rotated_path_stays_on_canvas() {
    let mut canvas = Canvas::new(60, 60).unwrap();
    canvas.set_color(Rgb::RED);

    let mut path = Path::new();
    path.move_to(30.0, 30.0);
    path.line_to(50.0, 30.0);

    let mut transform = AffineTransform::identity();
    // Rotate the scene a quarter turn about the canvas center.
    transform.concatenate(&AffineTransform::translation(30.0, 30.0));
    transform.concatenate(&AffineTransform::rotation(
        FRAC_PI_2,
        RotationDirection::CounterClockwise,
    ));
    transform.concatenate(&AffineTransform::translation(-30.0, -30.0));
    canvas.set_transform(transform);

    canvas.draw(Shape::Path(path));
    canvas.finalize();

    let set = outline_pixels(&canvas, Rgb::RED);
    // The horizontal spoke from (30,30) to (50,30) became a vertical one.
    assert!(set.contains(&(30, 30)));
    assert!(set.contains(&(30, 49)) || set.contains(&(30, 50)));
    assert!(!set.contains(&(50, 30)));
}

#[test]
fn boundary_fill_fills_circle_interior_on_large_canvas() {
    let mut canvas = Canvas::new(1000, 1000).unwrap();
    canvas.fill(Rgb::WHITE);

    canvas.set_color(Rgb::BLACK);
    canvas.draw_circle(500, 500, 200).unwrap();
    canvas.finalize();

    canvas.boundary_fill(500, 500, Rgb::RED, Rgb::BLACK);

    // Interior filled...
    assert_eq!(canvas.get_pixel(500, 500), Some(Rgb::RED));
    assert_eq!(canvas.get_pixel(400, 400), Some(Rgb::RED));
    // ...without leaking past the outline.
    assert_eq!(canvas.get_pixel(10, 10), Some(Rgb::WHITE));
    assert_eq!(canvas.get_pixel(500, 10), Some(Rgb::WHITE));
}

#[test]
fn scene_round_trips_through_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.ppm");

    let mut canvas = Canvas::new(64, 48).unwrap();
    canvas.fill(Rgb::WHITE);
    canvas.set_color(Rgb::BLUE);
    canvas.draw_rect(8, 8, 40, 24);
    canvas.finalize();

    PpmEncoder::write_to_file(&canvas, &path).unwrap();

    let header = PpmDecoder::read_header(&path).unwrap();
    assert_eq!(header.width, 64);
    assert_eq!(header.height, 48);
    assert_eq!(header.max_value, 255);

    // The payload is exactly width*height RGB triples after the header.
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), b"P6\n64 48\n255\n".len() + 64 * 48 * 3);
}

#[test]
fn bar_chart_scene_renders() {
    // A small version of the canonical bar-chart scene: axis line plus a
    // row of filled bars over a white background.
    let mut canvas = Canvas::new(200, 200).unwrap();
    canvas.fill(Rgb::WHITE);

    canvas.set_color(Rgb::BLACK);
    canvas.draw_line(0, 150, 199, 150);

    canvas.set_color(Rgb::from_packed(0xFFBB00));
    let mut x = 10;
    for value in [40i64, 80, 25, 60] {
        canvas.fill_rect(x, 150 - value, 20, value);
        x += 30;
    }
    canvas.finalize();

    assert_eq!(canvas.get_pixel(15, 130), Some(Rgb::from_packed(0xFFBB00)));
    assert_eq!(canvas.get_pixel(5, 150), Some(Rgb::BLACK));
    assert_eq!(canvas.get_pixel(190, 40), Some(Rgb::WHITE));
}
