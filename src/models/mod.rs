// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor data model.

pub mod fumen;
pub mod playback;
pub mod resource;
pub mod session;
