// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the fumen editor.

pub mod dialogs;
pub mod menu;
pub mod properties;
pub mod status;
pub mod timeline;
