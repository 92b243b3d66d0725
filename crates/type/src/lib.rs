// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod diagnostic;
mod error;
mod r#macro;

pub use diagnostic::Diagnostic;
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
