//! Animation helpers driven by elapsed time.
//!
//! Frames are derived from a `Duration` instead of a frame counter so the
//! loading screen renders identically for a given elapsed time.

use std::time::Duration;

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
const FRAME_INTERVAL_MS: u128 = 100;

/// Braille spinner character for `elapsed`.
pub fn spinner_char(elapsed: Duration) -> &'static str {
    let frame = (elapsed.as_millis() / FRAME_INTERVAL_MS) as usize;
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a progress bar of `width` cells for `progress` in `0.0..=1.0`.
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0)) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("{}{}", "▸".repeat(filled), "·".repeat(empty))
}

/// Trailing dots that cycle every 300 ms.
pub fn ellipsis(elapsed: Duration) -> &'static str {
    match (elapsed.as_millis() / 300) % 4 {
        0 => "",
        1 => ".",
        2 => "..",
        _ => "...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_advances_every_100ms() {
        assert_eq!(spinner_char(Duration::ZERO), "⠋");
        assert_eq!(spinner_char(Duration::from_millis(100)), "⠙");
        assert_eq!(spinner_char(Duration::from_millis(399)), "⠸");
        assert_eq!(spinner_char(Duration::from_millis(400)), "⠋");
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        let bar = render_progress_bar(0.5, 20);
        assert_eq!(bar.chars().filter(|c| *c == '▸').count(), 10);
        assert_eq!(bar.chars().filter(|c| *c == '·').count(), 10);
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(render_progress_bar(2.0, 4), "▸▸▸▸");
        assert_eq!(render_progress_bar(-1.0, 4), "····");
    }

    #[test]
    fn ellipsis_cycles() {
        assert_eq!(ellipsis(Duration::ZERO), "");
        assert_eq!(ellipsis(Duration::from_millis(950)), "...");
    }
}
