use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AudioError;

/// Mono samples at the file's native sample rate
pub(crate) struct AudioData {
    pub(crate) samples: Vec<f32>,
    pub(crate) sample_rate: u32,
    pub(crate) channels: u16,
}

impl AudioData {
    pub(crate) fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Borrow `duration_secs` of audio starting at `start_secs`.
    /// Fails if the file ends before the window does.
    pub(crate) fn slice_secs(&self, start_secs: f64, duration_secs: f64) -> Result<&[f32], AudioError> {
        let sr = self.sample_rate as f64;
        let start = (start_secs * sr).round() as usize;
        let end = start + (duration_secs * sr).round() as usize;

        if end > self.samples.len() {
            return Err(AudioError::TooShort {
                needed: start_secs + duration_secs,
                actual: self.duration_secs(),
            });
        }

        Ok(&self.samples[start..end])
    }
}

pub(crate) fn load_audio(path: &Path) -> Result<AudioData, AudioError> {
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(&ext.to_ascii_lowercase());
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(AudioError::Unsupported)?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != symphonia::core::codecs::CODEC_TYPE_NULL)
        .ok_or(AudioError::NoTrack)?;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(AudioError::UnknownSampleRate)?;
    let channels = track.codec_params.channels.map_or(1, |c| c.count() as u16);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(AudioError::Decoder)?;

    let track_id = track.id;
    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(AudioError::Packet(e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                log::warn!("{}: skipping undecodable packet: {}", path.display(), e);
                continue;
            }
            Err(e) => return Err(AudioError::Packet(e)),
        };

        let spec = *decoded.spec();
        let num_channels = spec.channels.count();

        let mut sample_buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);

        for chunk in sample_buf.samples().chunks(num_channels) {
            let mono: f32 = chunk.iter().sum::<f32>() / num_channels as f32;
            samples.push(mono);
        }
    }

    log::debug!(
        "{}: decoded {} samples at {} Hz ({} ch)",
        path.display(),
        samples.len(),
        sample_rate,
        channels
    );

    Ok(AudioData {
        samples,
        sample_rate,
        channels,
    })
}
