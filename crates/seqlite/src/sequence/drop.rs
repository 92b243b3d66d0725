// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

use rusqlite::Connection;
use tracing::{debug, instrument};

use crate::{Result, catalog, cursor, sequence::Sequences};

impl Sequences {
	/// Removes a sequence from the catalog. Dropping a name that was
	/// never initialized (or was already dropped) succeeds.
	#[instrument(name = "sequence::drop", level = "debug", skip(conn))]
	pub fn drop(conn: &Connection, name: &str) -> Result<()> {
		catalog::delete(conn, name)?;

		// Best effort: a failed purge never fails the drop.
		if let Err(err) = cursor::purge(conn, name) {
			debug!(sequence = name, %err, "cursor purge after drop failed");
		}

		Ok(())
	}
}
