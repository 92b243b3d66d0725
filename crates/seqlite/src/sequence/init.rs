// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

use rusqlite::Connection;
use seqlite_type::{diagnostic::sequence::sequence_increment_zero, return_error};
use tracing::{debug, instrument};

use crate::{Result, catalog, cursor, sequence::Sequences};

impl Sequences {
	/// Creates or resets a named sequence so that the first nextval
	/// returns exactly `initial_value`, stepping by `increment` from
	/// then on. Returns `initial_value`.
	#[instrument(name = "sequence::init", level = "debug", skip(conn))]
	pub fn init(conn: &Connection, name: &str, initial_value: i64, increment: i64) -> Result<i64> {
		if increment == 0 {
			return_error!(sequence_increment_zero(name));
		}

		catalog::ensure(conn)?;
		catalog::upsert(conn, name, initial_value, increment)?;

		// A reset must not leave a stale currval behind in this
		// session. Best effort: a failed purge never fails the init.
		if let Err(err) = cursor::purge(conn, name) {
			debug!(sequence = name, %err, "cursor purge after init failed");
		}

		Ok(initial_value)
	}
}
