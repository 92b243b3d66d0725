// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

//! Durable sequence catalog: one row per sequence, shared by every
//! session of the database.

use rusqlite::{Connection, OptionalExtension, params};
use seqlite_type::Error;

use crate::{
	Result,
	diagnostic::{from_rusqlite_error, is_missing_table},
	sequence::SequenceDef,
};

// The typeof check keeps an advance past the 64-bit range from going
// through: the storage engine evaluates such an addition in floating
// point, and without the check it would store a REAL in the counter
// column instead of failing the statement.
const CREATE_CATALOG: &str = "CREATE TABLE IF NOT EXISTS sequence_catalog (
	name          TEXT NOT NULL PRIMARY KEY,
	current_value INTEGER CHECK (current_value IS NULL OR typeof(current_value) = 'integer'),
	initial_value INTEGER NOT NULL,
	increment     INTEGER NOT NULL CHECK (increment <> 0)
)";

/// Idempotent create of the catalog table.
pub(crate) fn ensure(conn: &Connection) -> Result<()> {
	conn.execute(CREATE_CATALOG, []).map_err(|e| Error(from_rusqlite_error(e)))?;
	Ok(())
}

/// Atomic upsert of a sequence definition. The counter is seeded one
/// step back so the first advance lands on the initial value; the seed
/// wraps, and a wrapped seed makes that advance fail inside the storage
/// engine instead of returning a wrong value.
pub(crate) fn upsert(conn: &Connection, name: &str, initial_value: i64, increment: i64) -> Result<()> {
	conn.execute(
		"INSERT OR REPLACE INTO sequence_catalog (name, current_value, initial_value, increment) \
		 VALUES (?1, ?2, ?3, ?4)",
		params![name, initial_value.wrapping_sub(increment), initial_value, increment],
	)
	.map_err(|e| Error(from_rusqlite_error(e)))?;
	Ok(())
}

/// Advances the counter by its increment. Returns the number of rows
/// changed; zero means the sequence does not exist.
pub(crate) fn advance(conn: &Connection, name: &str) -> Result<usize> {
	conn.execute(
		"UPDATE sequence_catalog SET current_value = current_value + increment WHERE name = ?1",
		params![name],
	)
	.map_err(|e| Error(from_rusqlite_error(e)))
}

/// Reads the counter value for a sequence.
pub(crate) fn read_current(conn: &Connection, name: &str) -> Result<Option<i64>> {
	conn.query_row("SELECT current_value FROM sequence_catalog WHERE name = ?1", params![name], |row| row.get(0))
		.optional()
		.map_err(|e| Error(from_rusqlite_error(e)))
}

/// Deletes the catalog row. Zero rows deleted is not an error.
pub(crate) fn delete(conn: &Connection, name: &str) -> Result<()> {
	conn.execute("DELETE FROM sequence_catalog WHERE name = ?1", params![name])
		.map_err(|e| Error(from_rusqlite_error(e)))?;
	Ok(())
}

fn read_def(row: &rusqlite::Row<'_>) -> rusqlite::Result<SequenceDef> {
	Ok(SequenceDef {
		name: row.get(0)?,
		current_value: row.get(1)?,
		initial_value: row.get(2)?,
		increment: row.get(3)?,
	})
}

/// Looks up a single definition. A database without a catalog table has
/// no sequences.
pub(crate) fn find(conn: &Connection, name: &str) -> Result<Option<SequenceDef>> {
	let result = conn.query_row(
		"SELECT name, current_value, initial_value, increment FROM sequence_catalog WHERE name = ?1",
		params![name],
		read_def,
	);

	match result {
		Ok(def) => Ok(Some(def)),
		Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
		Err(ref e) if is_missing_table(e) => Ok(None),
		Err(e) => Err(Error(from_rusqlite_error(e))),
	}
}

/// Lists every definition ordered by name.
pub(crate) fn list(conn: &Connection) -> Result<Vec<SequenceDef>> {
	let mut stmt = match conn
		.prepare("SELECT name, current_value, initial_value, increment FROM sequence_catalog ORDER BY name")
	{
		Ok(stmt) => stmt,
		Err(ref e) if is_missing_table(e) => return Ok(Vec::new()),
		Err(e) => return Err(Error(from_rusqlite_error(e))),
	};

	let rows = stmt.query_map([], read_def).map_err(|e| Error(from_rusqlite_error(e)))?;

	let mut result = Vec::new();
	for row in rows {
		result.push(row.map_err(|e| Error(from_rusqlite_error(e)))?);
	}

	Ok(result)
}
