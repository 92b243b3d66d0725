// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

use rusqlite::Connection;
use seqlite_type::{diagnostic::sequence::no_current_value, error};
use tracing::instrument;

use crate::{Result, cursor, sequence::Sequences};

impl Sequences {
	/// Returns the value the calling session's last nextval produced
	/// for this sequence. Pure read: it never advances the counter and
	/// never creates the cursor cache.
	#[instrument(name = "sequence::currval", level = "trace", skip(conn))]
	pub fn currval(conn: &Connection, name: &str) -> Result<i64> {
		cursor::read(conn, name)?.ok_or_else(|| error!(no_current_value(name)))
	}
}
