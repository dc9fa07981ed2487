use image::Rgba;

use super::canvas::{Canvas, Shape};
use crate::variant::IconKind;

const AMBER: Rgba<u8> = Rgba([242, 179, 61, 255]);
const AMBER_DARK: Rgba<u8> = Rgba([217, 149, 43, 255]);
const BROWN: Rgba<u8> = Rgba([90, 70, 50, 255]);
const STEEL: Rgba<u8> = Rgba([138, 148, 166, 255]);
const BLUE: Rgba<u8> = Rgba([61, 126, 242, 255]);
const NAVY: Rgba<u8> = Rgba([27, 42, 74, 255]);
const SKY: Rgba<u8> = Rgba([91, 184, 245, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Draws the motif for `kind` onto a transparent canvas
pub fn draw_icon(canvas: &mut Canvas, kind: IconKind) {
    match kind {
        IconKind::Zip => draw_zip(canvas),
        IconKind::Aes => draw_aes(canvas),
        IconKind::Cloud => draw_cloud(canvas),
    }
}

/// Folder with a zipper running down the middle
fn draw_zip(canvas: &mut Canvas) {
    canvas.fill(
        &Shape::RoundRect {
            x0: 0.10,
            y0: 0.16,
            x1: 0.46,
            y1: 0.32,
            radius: 0.04,
        },
        AMBER_DARK,
    );
    canvas.fill(
        &Shape::RoundRect {
            x0: 0.08,
            y0: 0.24,
            x1: 0.92,
            y1: 0.86,
            radius: 0.06,
        },
        AMBER,
    );

    for i in 0..7 {
        let y = 0.28 + i as f32 * 0.07;
        canvas.fill(&Shape::rect(0.44, y, 0.50, y + 0.035), BROWN);
        canvas.fill(&Shape::rect(0.50, y + 0.035, 0.56, y + 0.07), BROWN);
    }

    canvas.fill(
        &Shape::RoundRect {
            x0: 0.43,
            y0: 0.77,
            x1: 0.57,
            y1: 0.90,
            radius: 0.03,
        },
        BROWN,
    );
    canvas.fill(
        &Shape::Circle {
            cx: 0.5,
            cy: 0.85,
            r: 0.025,
        },
        AMBER,
    );
}

/// Padlock
fn draw_aes(canvas: &mut Canvas) {
    canvas.fill(
        &Shape::Arch {
            cx: 0.5,
            cy: 0.40,
            outer: 0.22,
            inner: 0.14,
        },
        STEEL,
    );
    canvas.fill(&Shape::rect(0.28, 0.40, 0.36, 0.52), STEEL);
    canvas.fill(&Shape::rect(0.64, 0.40, 0.72, 0.52), STEEL);

    canvas.fill(
        &Shape::RoundRect {
            x0: 0.20,
            y0: 0.48,
            x1: 0.80,
            y1: 0.90,
            radius: 0.08,
        },
        BLUE,
    );

    canvas.fill(
        &Shape::Circle {
            cx: 0.5,
            cy: 0.63,
            r: 0.07,
        },
        NAVY,
    );
    canvas.fill(&Shape::rect(0.475, 0.63, 0.525, 0.79), NAVY);
}

/// Cloud with an upload bar
fn draw_cloud(canvas: &mut Canvas) {
    let puffs = [
        Shape::Circle {
            cx: 0.34,
            cy: 0.56,
            r: 0.17,
        },
        Shape::Circle {
            cx: 0.56,
            cy: 0.45,
            r: 0.22,
        },
        Shape::Circle {
            cx: 0.75,
            cy: 0.60,
            r: 0.14,
        },
        Shape::RoundRect {
            x0: 0.17,
            y0: 0.55,
            x1: 0.89,
            y1: 0.74,
            radius: 0.09,
        },
    ];
    for puff in &puffs {
        canvas.fill(puff, SKY);
    }

    canvas.fill(&Shape::rect(0.47, 0.46, 0.53, 0.66), WHITE);
    canvas.fill(&Shape::rect(0.41, 0.66, 0.59, 0.69), WHITE);
}
