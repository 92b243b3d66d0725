// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

//! Session cursor cache: the last value each sequence produced in the
//! calling session. Lives in the connection's temp namespace, so other
//! sessions never see it.

use rusqlite::{Connection, OptionalExtension, params};
use seqlite_type::Error;

use crate::{
	Result,
	diagnostic::{from_rusqlite_error, is_missing_table},
};

const CREATE_CACHE: &str = "CREATE TEMPORARY TABLE IF NOT EXISTS session_cursor_cache (
	name       TEXT NOT NULL PRIMARY KEY,
	last_value INTEGER
)";

/// Idempotent create of the cursor cache table. Issued on every store;
/// the temp table is per connection, so a memoized flag would leak
/// across sessions.
pub(crate) fn ensure(conn: &Connection) -> Result<()> {
	conn.execute(CREATE_CACHE, []).map_err(|e| Error(from_rusqlite_error(e)))?;
	Ok(())
}

/// Records the value a nextval just produced. Update-then-insert: the
/// storage engine may lack atomic upsert for session-scoped tables.
pub(crate) fn store(conn: &Connection, name: &str, value: i64) -> Result<()> {
	let changed = conn
		.execute("UPDATE session_cursor_cache SET last_value = ?1 WHERE name = ?2", params![value, name])
		.map_err(|e| Error(from_rusqlite_error(e)))?;

	if changed == 0 {
		conn.execute("INSERT INTO session_cursor_cache (name, last_value) VALUES (?1, ?2)", params![name, value])
			.map_err(|e| Error(from_rusqlite_error(e)))?;
	}

	Ok(())
}

/// Reads the session's last value for a sequence. Pure read: a session
/// that never ran nextval has no cache table, which reads as no row.
pub(crate) fn read(conn: &Connection, name: &str) -> Result<Option<i64>> {
	let result = conn
		.query_row("SELECT last_value FROM session_cursor_cache WHERE name = ?1", params![name], |row| {
			row.get(0)
		})
		.optional();

	match result {
		Ok(value) => Ok(value),
		Err(ref e) if is_missing_table(e) => Ok(None),
		Err(e) => Err(Error(from_rusqlite_error(e))),
	}
}

/// Removes the session's cursor row. Callers treat this as best-effort.
pub(crate) fn purge(conn: &Connection, name: &str) -> Result<()> {
	conn.execute("DELETE FROM session_cursor_cache WHERE name = ?1", params![name])
		.map_err(|e| Error(from_rusqlite_error(e)))?;
	Ok(())
}
