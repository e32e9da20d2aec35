use num_complex::Complex;
use rustfft::FftPlanner;

/// Frequency of the strongest bin in the positive half of the spectrum
#[allow(dead_code)]
pub fn dominant_frequency(samples: &[f32], sample_rate: u32) -> f32 {
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(samples.len());

    let mut buffer: Vec<Complex<f32>> = samples
        .iter()
        .map(|&s| Complex { re: s, im: 0.0 })
        .collect();

    fft.process(&mut buffer);

    let bin_width = sample_rate as f32 / samples.len() as f32;
    let (peak_bin, _) = buffer
        .iter()
        .take(buffer.len() / 2)
        .enumerate()
        .map(|(i, c)| (i, c.norm()))
        .fold((0, 0.0f32), |best, cur| if cur.1 > best.1 { cur } else { best });

    peak_bin as f32 * bin_width
}

/// Peak absolute value of one channel
#[allow(dead_code)]
pub fn channel_peak(frames: &[[f32; 2]], channel: usize) -> f32 {
    frames
        .iter()
        .map(|f| f[channel].abs())
        .fold(0.0f32, f32::max)
}
