// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback position read-out and seek control.
//!
//! The timeline slider runs from 1.0 at the start of the track down to
//! 0.0 at the end. Every operation is a no-op when no music is loaded.

use crate::io::media::Music;
use crate::models::resource::ResourceSlot;
use std::fmt;
use std::time::Duration;

/// Playing offset split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timecode {
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u32,
}

impl Timecode {
    pub fn from_duration(offset: Duration) -> Self {
        let whole_seconds = offset.as_secs();
        Self {
            minutes: whole_seconds / 60,
            seconds: whole_seconds % 60,
            milliseconds: (offset.as_millis() % 1000) as u32,
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}.{:03}",
            self.minutes, self.seconds, self.milliseconds
        )
    }
}

/// Maps the music slot's playing offset to and from a seek value.
pub struct PlaybackBridge<'a> {
    music: &'a mut ResourceSlot<Music>,
}

impl<'a> PlaybackBridge<'a> {
    pub fn new(music: &'a mut ResourceSlot<Music>) -> Self {
        Self { music }
    }

    /// Whether a track is loaded.
    pub fn is_available(&self) -> bool {
        self.music.is_loaded()
    }

    /// Current position as `1 - offset / duration`.
    pub fn current_seek_value(&self) -> Option<f64> {
        let music = self.music.get()?;
        let total = music.duration().as_secs_f64();
        if total <= 0.0 {
            return Some(1.0);
        }
        let value = 1.0 - music.playing_offset().as_secs_f64() / total;
        Some(value.clamp(0.0, 1.0))
    }

    /// Move the playing offset to `(1 - value) * duration`.
    pub fn seek_to(&mut self, value: f64) {
        let Some(music) = self.music.get_mut() else {
            return;
        };
        let value = if value.is_nan() { 1.0 } else { value.clamp(0.0, 1.0) };
        let total = music.duration().as_secs_f64();
        music.set_playing_offset(Duration::from_secs_f64((1.0 - value) * total));
    }

    pub fn formatted_timecode(&self) -> Option<Timecode> {
        self.music
            .get()
            .map(|music| Timecode::from_duration(music.playing_offset()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resource::Decode;
    use anyhow::Result;
    use std::path::{Path, PathBuf};

    struct SilentTrack(u64);

    impl Decode<Music> for SilentTrack {
        fn decode(&self, _path: &Path) -> Result<Music> {
            Ok(Music::new(Duration::from_secs(self.0)))
        }
    }

    fn loaded_slot(seconds: u64) -> ResourceSlot<Music> {
        let mut slot: ResourceSlot<Music> = ResourceSlot::new();
        slot.reload(&SilentTrack(seconds), PathBuf::from("/proj/song.ogg"));
        slot
    }

    #[test]
    fn test_seek_value_at_fifty_of_two_hundred_seconds() {
        let mut slot = loaded_slot(200);
        slot.get_mut()
            .unwrap()
            .set_playing_offset(Duration::from_secs(50));
        let bridge = PlaybackBridge::new(&mut slot);

        let value = bridge.current_seek_value().unwrap();
        assert!((value - 0.75).abs() < 1e-9);
        assert_eq!(
            bridge.formatted_timecode(),
            Some(Timecode {
                minutes: 0,
                seconds: 50,
                milliseconds: 0
            })
        );
    }

    #[test]
    fn test_seek_value_is_one_at_start_and_zero_at_end() {
        let mut slot = loaded_slot(10);
        let mut bridge = PlaybackBridge::new(&mut slot);
        assert_eq!(bridge.current_seek_value(), Some(1.0));

        bridge.seek_to(0.0);
        assert_eq!(bridge.current_seek_value(), Some(0.0));
        assert_eq!(
            bridge.formatted_timecode().map(|t| t.seconds),
            Some(10)
        );
    }

    #[test]
    fn test_seek_to_sets_inverted_offset() {
        let mut slot = loaded_slot(200);
        PlaybackBridge::new(&mut slot).seek_to(0.25);
        assert_eq!(
            slot.get().unwrap().playing_offset(),
            Duration::from_secs(150)
        );
    }

    #[test]
    fn test_seek_to_clamps_out_of_range_values() {
        let mut slot = loaded_slot(200);
        PlaybackBridge::new(&mut slot).seek_to(-3.0);
        assert_eq!(
            slot.get().unwrap().playing_offset(),
            Duration::from_secs(200)
        );

        PlaybackBridge::new(&mut slot).seek_to(7.5);
        assert_eq!(slot.get().unwrap().playing_offset(), Duration::ZERO);
    }

    #[test]
    fn test_seek_round_trip_moves_less_than_a_millisecond() {
        let mut slot = loaded_slot(200);
        for millis in [0u64, 1, 999, 12_345, 50_000, 123_456, 199_999, 200_000] {
            slot.get_mut()
                .unwrap()
                .set_playing_offset(Duration::from_millis(millis));
            let before = slot.get().unwrap().playing_offset();

            let mut bridge = PlaybackBridge::new(&mut slot);
            let value = bridge.current_seek_value().unwrap();
            bridge.seek_to(value);

            let after = slot.get().unwrap().playing_offset();
            let delta = if after > before { after - before } else { before - after };
            assert!(delta < Duration::from_millis(1), "moved {:?} at {}ms", delta, millis);
        }
    }

    #[test]
    fn test_nan_seek_goes_to_track_start() {
        let mut slot = loaded_slot(200);
        slot.get_mut()
            .unwrap()
            .set_playing_offset(Duration::from_secs(120));

        let mut bridge = PlaybackBridge::new(&mut slot);
        bridge.seek_to(f64::NAN);

        assert_eq!(bridge.current_seek_value(), Some(1.0));
        assert_eq!(slot.get().unwrap().playing_offset(), Duration::ZERO);
    }

    #[test]
    fn test_zero_length_track_stays_at_start() {
        let mut slot = loaded_slot(0);
        let mut bridge = PlaybackBridge::new(&mut slot);

        assert!(bridge.is_available());
        assert_eq!(bridge.current_seek_value(), Some(1.0));

        bridge.seek_to(0.0);
        assert_eq!(bridge.current_seek_value(), Some(1.0));
        assert_eq!(
            bridge.formatted_timecode(),
            Some(Timecode {
                minutes: 0,
                seconds: 0,
                milliseconds: 0
            })
        );
    }

    #[test]
    fn test_empty_slot_is_unavailable() {
        let mut slot: ResourceSlot<Music> = ResourceSlot::new();
        let mut bridge = PlaybackBridge::new(&mut slot);

        assert!(!bridge.is_available());
        assert_eq!(bridge.current_seek_value(), None);
        assert_eq!(bridge.formatted_timecode(), None);
        bridge.seek_to(0.5);
        assert!(!slot.is_loaded());
    }

    #[test]
    fn test_timecode_splits_minutes_seconds_millis() {
        let timecode = Timecode::from_duration(Duration::from_millis(3_723_045));
        assert_eq!(timecode.minutes, 62);
        assert_eq!(timecode.seconds, 3);
        assert_eq!(timecode.milliseconds, 45);
        assert_eq!(timecode.to_string(), "62:03.045");
    }
}
