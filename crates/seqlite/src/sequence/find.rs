// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

use rusqlite::Connection;
use tracing::instrument;

use crate::{
	Result,
	catalog,
	sequence::{SequenceDef, Sequences},
};

impl Sequences {
	/// Looks up a sequence definition by name. A database without a
	/// catalog table has no sequences.
	#[instrument(name = "sequence::find", level = "trace", skip(conn))]
	pub fn find(conn: &Connection, name: &str) -> Result<Option<SequenceDef>> {
		catalog::find(conn, name)
	}
}
