//! Common test utilities

use std::f64::consts::PI;
use std::io::Write;
use std::path::Path;

/// Generate a mono sine wave at the given frequency
pub fn generate_sine(freq: f64, sample_rate: u32, duration_secs: f64) -> Vec<f32> {
    let num_samples = (sample_rate as f64 * duration_secs) as usize;
    (0..num_samples)
        .map(|i| ((2.0 * PI * freq * i as f64 / sample_rate as f64).sin() * 0.5) as f32)
        .collect()
}

/// Sine with 50 ms raised-cosine fades, surrounded by `pad_secs` of silence
pub fn generate_tone_in_silence(
    freq: f64,
    sample_rate: u32,
    tone_secs: f64,
    pad_secs: f64,
) -> Vec<f32> {
    let pad = (sample_rate as f64 * pad_secs) as usize;
    let fade = (sample_rate as f64 * 0.05) as usize;
    let tone = generate_sine(freq, sample_rate, tone_secs);
    let n = tone.len();

    let mut samples = vec![0.0f32; pad];
    samples.extend(tone.iter().enumerate().map(|(i, &s)| {
        let edge = i.min(n - 1 - i);
        if edge < fade {
            let env = 0.5 * (1.0 - (PI * edge as f64 / fade as f64).cos());
            s * env as f32
        } else {
            s
        }
    }));
    samples.extend(std::iter::repeat_n(0.0f32, pad));
    samples
}

/// Generate digital silence
pub fn generate_silence(sample_rate: u32, duration_secs: f64) -> Vec<f32> {
    vec![0.0; (sample_rate as f64 * duration_secs) as usize]
}

/// Samples per MPEG-1 Layer III frame
pub const MP3_FRAME_SAMPLES: usize = 1152;

/// Sample rate of the frames written by `write_silent_mp3`
pub const MP3_SAMPLE_RATE: u32 = 44100;

/// Write `frames` of MPEG-1 Layer III digital silence (44.1 kHz, 128 kbps, mono).
///
/// Each frame is a header followed by zeroed side info and main data: no
/// Huffman bits, no bit reservoir, so every frame decodes to zeros.
pub fn write_silent_mp3(path: &Path, frames: usize) -> std::io::Result<()> {
    // sync 0xFFF | MPEG-1 | Layer III | no CRC / 128 kbps | 44.1 kHz | no padding / mono
    const HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0xC0];
    // 144 * bitrate / sample_rate
    const FRAME_BYTES: usize = 144 * 128_000 / 44_100;

    let mut frame = vec![0u8; FRAME_BYTES];
    frame[..4].copy_from_slice(&HEADER);

    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    for _ in 0..frames {
        file.write_all(&frame)?;
    }
    file.flush()
}

/// Write bytes that no audio format reader recognises
pub fn write_corrupt(path: &Path) -> std::io::Result<()> {
    std::fs::write(path, "this is plain text and not audio at all\n".repeat(64))
}

/// Write samples as a WAV file to the given path
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_wav_to(&mut file, samples, sample_rate)
}

/// Write samples as WAV data to a writer
fn write_wav_to<W: Write>(
    writer: &mut W,
    samples: &[f32],
    sample_rate: u32,
) -> std::io::Result<()> {
    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * bits_per_sample as u32 / 8;
    let block_align = channels * bits_per_sample / 8;
    let data_size = samples.len() as u32 * 2; // 16-bit = 2 bytes per sample
    let file_size = 36 + data_size;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // chunk size
    writer.write_all(&1u16.to_le_bytes())?; // PCM format
    writer.write_all(&channels.to_le_bytes())?;
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&block_align.to_le_bytes())?;
    writer.write_all(&bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;

    // Convert f32 samples to i16 and write
    for &sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        let i16_sample = (clamped * 32767.0) as i16;
        writer.write_all(&i16_sample.to_le_bytes())?;
    }

    Ok(())
}
