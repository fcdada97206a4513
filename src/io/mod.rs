// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for media, fumen files and settings.

pub mod media;
pub mod memon;
pub mod settings;
