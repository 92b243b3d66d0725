// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

//! Named persistent sequences for SQLite.
//!
//! Sequences are durable named counters stored in the database itself,
//! with PostgreSQL-style `nextval`/`currval` semantics. The operation
//! layer is stateless: every call runs against a caller-provided
//! [`rusqlite::Connection`], and per-session state (`currval`) lives in
//! the connection's temp namespace.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod catalog;
mod cursor;
mod diagnostic;
mod function;
pub mod sequence;
mod session;
pub mod test_utils;

pub use function::register;
pub use sequence::{SequenceDef, Sequences};
pub use seqlite_type::{Diagnostic, Error};
pub use session::{JournalMode, Session, SessionConfig, SynchronousMode};

pub type Result<T> = std::result::Result<T, Error>;
