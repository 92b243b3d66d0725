// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

mod currval;
mod drop;
mod find;
mod init;
mod list;
mod nextval;

/// Stateless operation layer over the sequence catalog and the session
/// cursor cache. Every operation runs against a caller-provided
/// connection; the connection is the session.
pub struct Sequences {}

/// One catalog row, as read back for introspection.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceDef {
	pub name: String,
	pub current_value: i64,
	pub initial_value: i64,
	pub increment: i64,
}
