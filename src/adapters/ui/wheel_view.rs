//! Terminal rendering of the wheel and the spin animation.
//!
//! The wheel is drawn as the arc around the pointer, unrolled into a strip of
//! coloured cells with a `▼` marker above the centre. Cells are looked up with
//! the same geometry as the outcome, so the winner is the cell under the marker.

use crate::adapters::ui::palette::segment_color;
use crate::domain::wheel::{POINTER_DEG, segment_at, winning_index};
use crate::usecases::{PendingSpin, SpinOutcome};
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Width of the strip in cells.
pub const STRIP_WIDTH: usize = 48;
/// Angle of the wheel visible in the strip, centred on the pointer.
const VISIBLE_ARC_DEG: f64 = 180.0;
/// Labels longer than this are cut.
const MAX_LABEL_CHARS: usize = 12;

/// Shortens a label to fit on a segment.
pub fn segment_label(option: &str) -> String {
    if option.chars().count() > MAX_LABEL_CHARS {
        let head: String = option.chars().take(MAX_LABEL_CHARS).collect();
        format!("{}...", head)
    } else {
        option.to_string()
    }
}

/// Segment index of every strip cell, left to right.
pub fn strip_cells(n: usize, rotation: f64, width: usize) -> Vec<usize> {
    let step = VISIBLE_ARC_DEG / width as f64;
    let centre = width as f64 / 2.0;
    (0..width)
        .map(|j| {
            let deg = POINTER_DEG + (j as f64 + 0.5 - centre) * step;
            segment_at(deg, n, rotation)
        })
        .collect()
}

/// Two lines: the pointer marker and the coloured strip.
pub fn render_strip(n: usize, rotation: f64, width: usize) -> String {
    let marker = format!("{}{}", " ".repeat(width / 2), "▼".bold());
    let cells: String = strip_cells(n, rotation, width)
        .into_iter()
        .map(|i| "█".with(segment_color(i)).to_string())
        .collect();
    format!("{}\n{}", marker, cells)
}

/// `prev ‹ current › next` around the pointer, plain text.
pub fn pointer_window(options: &[String], rotation: f64) -> String {
    let n = options.len();
    if n == 0 {
        return String::new();
    }
    let idx = winning_index(rotation, n);
    if n == 1 {
        return format!("‹ {} ›", segment_label(&options[idx]));
    }
    let left = (idx + n - 1) % n;
    let right = (idx + 1) % n;
    format!(
        "{}  ‹ {} ›  {}",
        segment_label(&options[left]),
        segment_label(&options[idx]),
        segment_label(&options[right])
    )
}

/// `[#####-----] 50%`
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width).div_ceil(100).min(width);
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        percent
    )
}

/// Draws the wheel turning until the spin resolves. Returns the outcome.
pub async fn animate_spin(
    pending: PendingSpin,
    options: &[String],
    frame: Duration,
) -> Option<SpinOutcome> {
    let motion = pending.motion();
    let n = options.len();

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{prefix}\n{spinner:.magenta} {msg}") {
        pb.set_style(style.tick_strings(&["◐", "◓", "◑", "◒", "●"]));
    }

    let resolve = pending.resolve();
    tokio::pin!(resolve);
    let mut ticker = tokio::time::interval(frame);

    let outcome = loop {
        tokio::select! {
            out = &mut resolve => break out,
            _ = ticker.tick() => {
                let rotation = motion.rotation_now();
                pb.set_prefix(render_strip(n, rotation, STRIP_WIDTH));
                pb.set_message(format!("Spinning...  {}", pointer_window(options, rotation)));
                pb.tick();
            }
        }
    };

    match &outcome {
        Some(o) => {
            pb.set_prefix(render_strip(n, o.rotation, STRIP_WIDTH));
            pb.finish_with_message(format!("{} {}", "✔".green(), o.option.clone().bold()));
        }
        None => pb.abandon_with_message("the wheel stopped unexpectedly"),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn long_labels_are_cut() {
        assert_eq!(segment_label("Movie Night"), "Movie Night");
        assert_eq!(segment_label("Learn something new"), "Learn someth...");
        assert_eq!(segment_label("Ünïcödé labels!"), "Ünïcödé labe...");
    }

    #[test]
    fn centre_cell_is_the_winner() {
        for n in 1..13 {
            for k in 0..50 {
                let rotation = k as f64 * 37.3 + 0.1;
                let cells = strip_cells(n, rotation, STRIP_WIDTH);
                let under = segment_at(POINTER_DEG, n, rotation);
                assert_eq!(under, winning_index(rotation, n));
                assert!(cells.contains(&under));
            }
        }
    }

    #[test]
    fn strip_shows_neighbours_in_wheel_order() {
        // Unrotated 4-wheel: pointer at the start of segment 0, so the left half
        // of the strip is the tail of segment 3 and the right half segment 0.
        let cells = strip_cells(4, 0.0, 8);
        assert_eq!(cells, vec![3, 3, 3, 3, 0, 0, 0, 0]);
    }

    #[test]
    fn pointer_window_wraps() {
        let options = opts(&["A", "B", "C"]);
        assert_eq!(pointer_window(&options, 0.0), "C  ‹ A ›  B");
        assert_eq!(pointer_window(&opts(&["Solo"]), 42.0), "‹ Solo ›");
        assert_eq!(pointer_window(&[], 0.0), "");
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0, 10), "[----------] 0%");
        assert_eq!(progress_bar(50, 10), "[#####-----] 50%");
        assert_eq!(progress_bar(100, 10), "[##########] 100%");
        assert_eq!(progress_bar(33, 4), "[##--] 33%");
    }
}
