// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading (music and jacket images).
//!
//! The music track is decoded with symphonia only to validate it and
//! measure its length; samples are not kept. The jacket is decoded into
//! an RGBA buffer ready to be uploaded as an egui texture.

use crate::models::resource::Decode;
use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Duration;
use symphonia::core::{
    codecs::DecoderOptions,
    errors::Error,
    formats::FormatOptions,
    io::MediaSourceStream,
    meta::MetadataOptions,
    probe::Hint,
};

/// A decoded music track's length and its playing offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Music {
    duration: Duration,
    offset: Duration,
}

impl Music {
    /// A track of the given length. The offset starts at the beginning.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            offset: Duration::ZERO,
        }
    }

    /// A track of `frames` sample frames played at `sample_rate`.
    pub fn from_frames(frames: u64, sample_rate: u32) -> Self {
        if sample_rate == 0 {
            return Self::new(Duration::ZERO);
        }
        Self::new(Duration::from_secs_f64(frames as f64 / sample_rate as f64))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn playing_offset(&self) -> Duration {
        self.offset
    }

    /// Move the playing offset, clamped to the track length.
    pub fn set_playing_offset(&mut self, offset: Duration) {
        self.offset = offset.min(self.duration);
    }
}

/// A decoded jacket image in RGBA8.
#[derive(Debug, Clone, PartialEq)]
pub struct Jacket {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decodes music files with symphonia.
#[derive(Debug, Default, Clone, Copy)]
pub struct MusicDecoder;

impl Decode<Music> for MusicDecoder {
    fn decode(&self, path: &Path) -> Result<Music> {
        let file = File::open(path).with_context(|| format!("open music file {:?}", path))?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
            .map_err(|e| anyhow!(e))?;
        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| anyhow!("no default audio track"))?;
        let track_id = track.id;
        let codec_params = track.codec_params.clone();
        let sample_rate = codec_params
            .sample_rate
            .ok_or_else(|| anyhow!("audio track missing sample rate"))?;

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| anyhow!(e))?;

        let mut frames: u64 = 0;
        loop {
            match format.next_packet() {
                Ok(packet) => {
                    if packet.track_id() != track_id {
                        continue;
                    }
                    let decoded = match decoder.decode(&packet) {
                        Ok(buf) => buf,
                        Err(Error::DecodeError(_)) => continue,
                        Err(err) => return Err(anyhow!(err)),
                    };
                    frames += decoded.frames() as u64;
                }
                Err(Error::IoError(err)) if err.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(Error::ResetRequired) => {
                    decoder.reset();
                    continue;
                }
                Err(Error::DecodeError(_)) => continue,
                Err(err) => return Err(anyhow!(err)),
            }
        }

        if frames == 0 {
            return Err(anyhow!("no audio frames in {:?}", path));
        }

        Ok(Music::from_frames(frames, sample_rate))
    }
}

/// Decodes jacket images with the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct JacketDecoder;

impl Decode<Jacket> for JacketDecoder {
    fn decode(&self, path: &Path) -> Result<Jacket> {
        let img = image::open(path).with_context(|| format!("open jacket {:?}", path))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Jacket {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 16-bit mono PCM WAV of `frames` silent samples.
    fn write_wav(path: &Path, sample_rate: u32, frames: u32) {
        let data_len = frames * 2;
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&sample_rate.to_le_bytes());
        bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        bytes.resize(bytes.len() + data_len as usize, 0);
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn test_music_duration_from_frames() {
        let music = Music::from_frames(200 * 44_100, 44_100);
        assert_eq!(music.duration(), Duration::from_secs(200));
        assert_eq!(music.playing_offset(), Duration::ZERO);
        assert_eq!(Music::from_frames(1000, 0).duration(), Duration::ZERO);
    }

    #[test]
    fn test_music_offset_is_clamped_to_duration() {
        let mut music = Music::new(Duration::from_secs(10));

        music.set_playing_offset(Duration::from_secs(4));
        assert_eq!(music.playing_offset(), Duration::from_secs(4));

        music.set_playing_offset(Duration::from_secs(60));
        assert_eq!(music.playing_offset(), Duration::from_secs(10));
    }

    #[test]
    fn test_decode_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.wav");
        write_wav(&path, 8000, 8000);

        let music = MusicDecoder.decode(&path).unwrap();
        assert!((music.duration().as_secs_f64() - 1.0).abs() < 0.01);
        assert_eq!(music.playing_offset(), Duration::ZERO);
    }

    #[test]
    fn test_decode_missing_music_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MusicDecoder.decode(&dir.path().join("song.ogg")).is_err());
    }

    #[test]
    fn test_decode_garbage_music_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.ogg");
        std::fs::write(&path, b"definitely not audio").unwrap();
        assert!(MusicDecoder.decode(&path).is_err());
    }

    #[test]
    fn test_decode_png_jacket() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jacket.png");
        image::RgbaImage::from_pixel(4, 2, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let jacket = JacketDecoder.decode(&path).unwrap();
        assert_eq!((jacket.width, jacket.height), (4, 2));
        assert_eq!(jacket.pixels.len(), 4 * 2 * 4);
        assert_eq!(&jacket.pixels[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_decode_missing_jacket_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JacketDecoder.decode(&dir.path().join("jacket.png")).is_err());
    }
}
