// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Optional decoded resources (music, jacket).
//!
//! A slot is either empty or holds one fully decoded resource. Reloading
//! never reports an error to the caller: a missing or broken file leaves
//! the slot empty so the rest of the editor keeps working.

use anyhow::Result;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// Something that can turn a file into a resource of type `T`.
pub trait Decode<T> {
    fn decode(&self, path: &Path) -> Result<T>;
}

/// Contents of a slot.
#[derive(Debug, Clone, PartialEq)]
enum SlotState<T> {
    Empty,
    Loaded(T),
}

/// Container for one optional decoded resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSlot<T> {
    state: SlotState<T>,
    /// Path of the most recent load attempt.
    attempted: Option<PathBuf>,
    /// Bumped on every reload.
    generation: u64,
}

impl<T> Default for ResourceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceSlot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            state: SlotState::Empty,
            attempted: None,
            generation: 0,
        }
    }

    /// Replace the held resource with one decoded from `path`.
    ///
    /// The previous resource is dropped before decoding starts. If the
    /// decoder fails or panics the slot stays empty.
    pub fn reload(&mut self, decoder: &dyn Decode<T>, path: PathBuf) {
        self.state = SlotState::Empty;
        self.generation = self.generation.wrapping_add(1);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| decoder.decode(&path)));
        match outcome {
            Ok(Ok(resource)) => {
                log::info!("Loaded {}", path.display());
                self.state = SlotState::Loaded(resource);
            }
            Ok(Err(e)) => {
                log::warn!("Could not load {}: {:#}", path.display(), e);
            }
            Err(_) => {
                log::warn!("Decoder panicked while loading {}", path.display());
            }
        }
        self.attempted = Some(path);
    }

    pub fn get(&self) -> Option<&T> {
        match &self.state {
            SlotState::Loaded(resource) => Some(resource),
            SlotState::Empty => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            SlotState::Loaded(resource) => Some(resource),
            SlotState::Empty => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, SlotState::Loaded(_))
    }

    pub fn attempted_path(&self) -> Option<&Path> {
        self.attempted.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
