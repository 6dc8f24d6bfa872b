// src/visualizer/svg.rs
//! SVG rendering of an [`Analysis`] as a 2×3 grid of line charts

use super::{Analysis, Panel, Panels};
use std::io;
use std::path::Path;

const WIDTH: f64 = 1800.0;
const HEIGHT: f64 = 1000.0;
const HEADER: f64 = 60.0;
const MARGIN: f64 = 55.0;
const GRID_LINES: usize = 4;

/// Render the selected panels of `analysis` as a standalone SVG document
///
/// Unselected panels leave their grid cell empty. Non-finite points are
/// dropped from the line, and a panel with no finite points is drawn as an
/// empty frame.
pub fn render_svg(analysis: &Analysis, panels: Panels) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = WIDTH,
        h = HEIGHT
    ));
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"28\" text-anchor=\"middle\">{}</text>\n",
        WIDTH / 2.0,
        HEADER * 0.6,
        analysis.title()
    ));

    let cell_w = WIDTH / Panel::COLS as f64;
    let cell_h = (HEIGHT - HEADER) / Panel::ROWS as f64;

    for panel in Panel::ALL {
        if !panels.contains(panel.flag()) {
            continue;
        }
        let (row, col) = panel.position();
        let frame = Frame {
            x: col as f64 * cell_w + MARGIN,
            y: HEADER + row as f64 * cell_h + MARGIN * 0.6,
            w: cell_w - 1.5 * MARGIN,
            h: cell_h - 1.6 * MARGIN,
        };
        render_panel(&mut out, analysis, panel, &frame);
    }

    out.push_str("</svg>\n");
    out
}

/// Render and write the SVG to `path`
pub fn save_svg<P: AsRef<Path>>(path: P, analysis: &Analysis, panels: Panels) -> io::Result<()> {
    std::fs::write(path, render_svg(analysis, panels))
}

struct Frame {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

/// Min/max over the finite values, widened when flat
fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return None;
    }
    if lo == hi {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.05 };
        return Some((lo - pad, hi + pad));
    }
    Some((lo, hi))
}

fn render_panel(out: &mut String, analysis: &Analysis, panel: Panel, frame: &Frame) {
    let ys = analysis.series(panel);

    out.push_str(&format!(
        "<g>\n<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"18\" text-anchor=\"middle\">{}</text>\n",
        frame.x + frame.w / 2.0,
        frame.y - 12.0,
        panel.title()
    ));
    out.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"black\"/>\n",
        frame.x, frame.y, frame.w, frame.h
    ));

    let points: Vec<(f64, f64)> = analysis
        .spots
        .iter()
        .copied()
        .zip(ys)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let (x_bounds, y_bounds) = match (
        bounds(points.iter().map(|p| p.0)),
        bounds(points.iter().map(|p| p.1)),
    ) {
        (Some(xb), Some(yb)) => (xb, yb),
        _ => {
            out.push_str("</g>\n");
            return;
        }
    };

    let to_px = |x: f64, y: f64| -> (f64, f64) {
        let px = frame.x + (x - x_bounds.0) / (x_bounds.1 - x_bounds.0) * frame.w;
        let py = frame.y + frame.h - (y - y_bounds.0) / (y_bounds.1 - y_bounds.0) * frame.h;
        (px, py)
    };

    for i in 1..GRID_LINES {
        let frac = i as f64 / GRID_LINES as f64;
        let gx = frame.x + frac * frame.w;
        let gy = frame.y + frac * frame.h;
        out.push_str(&format!(
            "<line x1=\"{gx:.2}\" y1=\"{:.2}\" x2=\"{gx:.2}\" y2=\"{:.2}\" stroke=\"#dddddd\"/>\n",
            frame.y,
            frame.y + frame.h
        ));
        out.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{gy:.2}\" x2=\"{:.2}\" y2=\"{gy:.2}\" stroke=\"#dddddd\"/>\n",
            frame.x,
            frame.x + frame.w
        ));
    }

    // axis extremes
    let label = |x: f64, y: f64, anchor: &str, text: String| {
        format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"12\" text-anchor=\"{}\">{}</text>\n",
            x, y, anchor, text
        )
    };
    out.push_str(&label(frame.x, frame.y + frame.h + 16.0, "start", format!("{:.2}", x_bounds.0)));
    out.push_str(&label(frame.x + frame.w, frame.y + frame.h + 16.0, "end", format!("{:.2}", x_bounds.1)));
    out.push_str(&label(frame.x - 4.0, frame.y + frame.h, "end", format!("{:.4}", y_bounds.0)));
    out.push_str(&label(frame.x - 4.0, frame.y + 10.0, "end", format!("{:.4}", y_bounds.1)));

    let coords: Vec<String> = points
        .iter()
        .map(|&(x, y)| {
            let (px, py) = to_px(x, y);
            format!("{:.2},{:.2}", px, py)
        })
        .collect();
    out.push_str(&format!(
        "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"2\" points=\"{}\"/>\n</g>\n",
        panel.color(),
        coords.join(" ")
    ));
}
