use embedded_hal::delay::DelayNs;
use heapless::Vec;

use super::types::{FilteredPoint, RawSample, TouchSensor};
use crate::config::{
    TOUCH_BURST_MAX_SAMPLES, TOUCH_BURST_MIN_SAMPLES, TOUCH_PRESSURE_THRESHOLD,
    TOUCH_SAMPLE_DELAY_MS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    pub pressure_threshold: u16,
    pub sample_delay_ms: u32,
    /// Samples per burst, clamped to `TOUCH_BURST_MAX_SAMPLES`.
    pub burst_len: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            pressure_threshold: TOUCH_PRESSURE_THRESHOLD,
            sample_delay_ms: TOUCH_SAMPLE_DELAY_MS,
            burst_len: TOUCH_BURST_MAX_SAMPLES,
        }
    }
}

/// Burst sampler for resistive panels.
///
/// The controller's single readings jitter by tens of raw units and
/// occasionally spike when the plate contact bounces, so every contact cycle
/// takes a short burst and keeps only the central order statistics of each
/// axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleFilter {
    config: FilterConfig,
}

impl SampleFilter {
    pub const fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> FilterConfig {
        self.config
    }

    pub fn filter<S, D>(&self, sensor: &mut S, delay: &mut D) -> FilteredPoint
    where
        S: TouchSensor,
        D: DelayNs,
    {
        let burst_len = self.config.burst_len.min(TOUCH_BURST_MAX_SAMPLES);
        let mut burst: Vec<RawSample, TOUCH_BURST_MAX_SAMPLES> = Vec::new();
        while burst.len() < burst_len {
            let sample = sensor.poll_raw_sample();
            if sample.pressure <= self.config.pressure_threshold {
                // Lifted mid-burst; whatever was collected straddles the release.
                return FilteredPoint::fly();
            }
            let _ = burst.push(sample);
            delay.delay_ms(self.config.sample_delay_ms);
        }
        average_burst(&burst)
    }
}

/// Reduces a complete burst to one point. X and Y are ranked independently;
/// the pairing between them is deliberately dropped.
pub fn average_burst(samples: &[RawSample]) -> FilteredPoint {
    let count = samples.len().min(TOUCH_BURST_MAX_SAMPLES);
    if count < TOUCH_BURST_MIN_SAMPLES {
        return FilteredPoint::fly();
    }

    let mut xs = [0i32; TOUCH_BURST_MAX_SAMPLES];
    let mut ys = [0i32; TOUCH_BURST_MAX_SAMPLES];
    for (idx, sample) in samples[..count].iter().enumerate() {
        xs[idx] = i32::from(sample.x);
        ys[idx] = i32::from(sample.y);
    }
    let xs = &mut xs[..count];
    let ys = &mut ys[..count];
    xs.sort_unstable();
    ys.sort_unstable();

    let (start, len) = central_window(count);
    FilteredPoint::contact(
        window_mean(&xs[start..start + len]),
        window_mean(&ys[start..start + len]),
    )
}

// (first rank, window length) of the sorted values that get averaged.
fn central_window(count: usize) -> (usize, usize) {
    if count >= TOUCH_BURST_MAX_SAMPLES {
        (3, 4)
    } else if count >= 7 {
        (count / 2 - 1, 3)
    } else {
        (0, count)
    }
}

fn window_mean(values: &[i32]) -> f32 {
    let sum: i32 = values.iter().sum();
    sum as f32 / values.len() as f32
}
