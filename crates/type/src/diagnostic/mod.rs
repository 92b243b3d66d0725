// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

use serde::{Deserialize, Serialize};

mod render;
pub mod sequence;
pub mod storage;

pub use render::{DefaultRenderer, DiagnosticRenderer};

/// Structured error payload carried by every [`crate::Error`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}
