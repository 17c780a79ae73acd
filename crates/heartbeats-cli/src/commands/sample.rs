use anyhow::{bail, Result};

use heartbeats_core::presentation::OverlayStyle;
use heartbeats_core::sample::{self, Sample};
use heartbeats_core::timeline::{SmoothingMode, Viewport};
use heartbeats_core::AppConfig;

/// Offsets to sample
pub struct Range {
    pub from: f64,
    /// Bottom of the page when `None`
    pub to: Option<f64>,
    pub step: f64,
}

pub fn run(
    config: &AppConfig,
    viewport: Viewport,
    mode: SmoothingMode,
    range: Range,
    json: bool,
) -> Result<()> {
    if !range.step.is_finite() || range.step <= 0.0 {
        bail!("--step must be a positive number, got {}", range.step);
    }
    if viewport.height <= 0.0 || viewport.width <= 0.0 {
        bail!("viewport must have a positive size");
    }

    let timeline = &config.timeline;
    let profile = mode.resolve(&viewport, timeline.lightweight_breakpoint_px);
    let to = range
        .to
        .unwrap_or_else(|| timeline.max_scroll(viewport.height));
    let count = sample::offset_count(range.from, to, range.step);
    if count > sample::MAX_SAMPLES {
        bail!(
            "{} .. {} in steps of {} is {} samples, at most {} are allowed; use a larger --step",
            range.from,
            to,
            range.step,
            count,
            sample::MAX_SAMPLES
        );
    }
    let offsets = sample::offsets(range.from, to, range.step);
    let samples = sample::sample(
        timeline,
        profile,
        config.gallery.items.len(),
        viewport,
        &offsets,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&samples)?);
        return Ok(());
    }

    println!(
        "{} profile, viewport {}x{}",
        profile.label(),
        viewport.width,
        viewport.height
    );
    for boundary in timeline.phases.resolve(viewport.height) {
        println!(
            "  {:<10} {:>7.0} .. {:<7.0} px",
            boundary.id.name(),
            boundary.start_px,
            boundary.end_px
        );
    }
    println!();
    println!("{}", header());
    for sample in &samples {
        println!("{}", format_row(sample));
    }

    Ok(())
}

fn header() -> String {
    format!(
        "{:>8} {:>6} {:>8} {:>9} {:>8} {:>11}  {}",
        "offset", "hero", "gallery", "expansion", "hero-op", "track-vmin", "overlay"
    )
}

fn format_row(sample: &Sample) -> String {
    let overlay = match sample.style.expansion.overlay {
        OverlayStyle::Hidden => "hidden".to_string(),
        OverlayStyle::Revealing { inset } => {
            format!("inset {:.0}px {:.0}px", inset.top, inset.left)
        }
    };
    format!(
        "{:>8.0} {:>6.3} {:>8.3} {:>9.3} {:>8.2} {:>11.1}  {}",
        sample.offset,
        sample.phases.hero,
        sample.phases.gallery,
        sample.phases.expansion,
        sample.style.hero.opacity,
        sample.style.track.translate_x_vmin,
        overlay
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartbeats_core::timeline::DeviceProfile;

    fn samples_at(offsets: &[f64]) -> Vec<Sample> {
        let config = AppConfig::default();
        sample::sample(
            &config.timeline,
            DeviceProfile::Desktop,
            config.gallery.items.len(),
            Viewport::new(1280.0, 800.0),
            offsets,
        )
    }

    #[test]
    fn test_row_formatting() {
        let samples = samples_at(&[1080.0, 1800.0]);
        let row = format_row(&samples[0]);
        assert!(row.contains("1080"));
        assert!(row.contains("0.500"));
        assert!(row.ends_with("hidden"));
        assert!(format_row(&samples[1]).contains("inset"));
    }

    #[test]
    fn test_rejects_oversized_range() {
        let config = AppConfig::default();
        let range = Range {
            from: 0.0,
            to: Some(1e15),
            step: 1e-3,
        };
        let err = run(
            &config,
            Viewport::new(1280.0, 800.0),
            SmoothingMode::Desktop,
            range,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("--step"));
    }

    #[test]
    fn test_header_lines_up_with_rows() {
        let samples = samples_at(&[0.0]);
        let row = format_row(&samples[0]);
        assert_eq!(header().find("overlay"), row.find("hidden"));
    }
}
