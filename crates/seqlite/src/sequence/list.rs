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
	/// Lists every sequence definition, ordered by name.
	#[instrument(name = "sequence::list", level = "trace", skip(conn))]
	pub fn list(conn: &Connection) -> Result<Vec<SequenceDef>> {
		catalog::list(conn)
	}
}
