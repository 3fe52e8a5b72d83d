mod canvas;

use anyhow::{Context, Result};
use scopetrace::logging::{init_logging, LoggingConfig};

use canvas::Canvas;

const DEFAULT_FRAMES: u32 = 3;

fn main() -> Result<()> {
    init_logging(LoggingConfig {
        timestamps: false,
        ..LoggingConfig::default()
    });

    let frames = frame_count(std::env::args().nth(1))?;

    if !scopetrace::is_enabled() {
        log::warn!("scope timing is compiled out; build with debug assertions or `--features force-enable`");
    }

    let canvas = Canvas::demo();
    log::info!(
        "rendering {frames} frame(s) of a {}x{} canvas with {} layers",
        canvas.width,
        canvas.height,
        canvas.layers.len()
    );

    for index in 0..frames {
        let covered = canvas.render_frame(index);
        log::debug!("frame {index}: {covered} samples covered");
    }

    Ok(())
}

fn frame_count(arg: Option<String>) -> Result<u32> {
    match arg {
        None => Ok(DEFAULT_FRAMES),
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid frame count {s:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_count_defaults() {
        assert_eq!(frame_count(None).unwrap(), DEFAULT_FRAMES);
    }

    #[test]
    fn frame_count_parses() {
        assert_eq!(frame_count(Some("12".into())).unwrap(), 12);
    }

    #[test]
    fn frame_count_rejects_garbage() {
        let err = frame_count(Some("many".into())).unwrap_err();
        assert!(err.to_string().contains("\"many\""));
    }
}
