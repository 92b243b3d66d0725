// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

//! SQL surface: scalar functions invoking the sequence operations on
//! the connection that calls them.

use rusqlite::{
	Connection,
	functions::{ConnectionRef, Context, FunctionFlags},
};
use seqlite_type::Error;

use crate::{Result, diagnostic::from_rusqlite_error, sequence::Sequences};

fn function_error(err: Error) -> rusqlite::Error {
	rusqlite::Error::UserFunctionError(Box::new(err))
}

fn invoking_connection<'a>(ctx: &'a Context<'_>) -> rusqlite::Result<ConnectionRef<'a>> {
	// SAFETY: the handle is used only inside the invoking callback, on
	// the calling thread.
	unsafe { ctx.get_connection() }
}

/// Registers the sequence SQL surface on a connection: `seq_init` (two
/// and three arguments), `seq_nextval`, `seq_currval` and `seq_drop`.
/// The functions have side effects and are registered direct-only.
pub fn register(conn: &Connection) -> Result<()> {
	let flags = FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DIRECTONLY;

	conn.create_scalar_function("seq_init", 2, flags, |ctx| {
		let name: String = ctx.get(0)?;
		let initial_value: i64 = ctx.get(1)?;
		let conn = invoking_connection(ctx)?;
		Sequences::init(&conn, &name, initial_value, 1).map_err(function_error)
	})
	.map_err(|e| Error(from_rusqlite_error(e)))?;

	conn.create_scalar_function("seq_init", 3, flags, |ctx| {
		let name: String = ctx.get(0)?;
		let initial_value: i64 = ctx.get(1)?;
		let increment: i64 = ctx.get(2)?;
		let conn = invoking_connection(ctx)?;
		Sequences::init(&conn, &name, initial_value, increment).map_err(function_error)
	})
	.map_err(|e| Error(from_rusqlite_error(e)))?;

	conn.create_scalar_function("seq_nextval", 1, flags, |ctx| {
		let name: String = ctx.get(0)?;
		let conn = invoking_connection(ctx)?;
		Sequences::nextval(&conn, &name).map_err(function_error)
	})
	.map_err(|e| Error(from_rusqlite_error(e)))?;

	conn.create_scalar_function("seq_currval", 1, flags, |ctx| {
		let name: String = ctx.get(0)?;
		let conn = invoking_connection(ctx)?;
		Sequences::currval(&conn, &name).map_err(function_error)
	})
	.map_err(|e| Error(from_rusqlite_error(e)))?;

	conn.create_scalar_function("seq_drop", 1, flags, |ctx| {
		let name: String = ctx.get(0)?;
		let conn = invoking_connection(ctx)?;
		Sequences::drop(&conn, &name).map_err(function_error)?;
		Ok(None::<i64>)
	})
	.map_err(|e| Error(from_rusqlite_error(e)))?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use rusqlite::Connection;

	use crate::function::register;

	fn connect() -> Connection {
		let conn = Connection::open_in_memory().unwrap();
		register(&conn).unwrap();
		conn
	}

	#[test]
	fn test_init_with_default_increment() {
		let conn = connect();

		let initial: i64 = conn.query_row("SELECT seq_init('orders', 5)", [], |row| row.get(0)).unwrap();
		assert_eq!(initial, 5);

		let first: i64 = conn.query_row("SELECT seq_nextval('orders')", [], |row| row.get(0)).unwrap();
		let second: i64 = conn.query_row("SELECT seq_nextval('orders')", [], |row| row.get(0)).unwrap();
		assert_eq!(first, 5);
		assert_eq!(second, 6);
	}

	#[test]
	fn test_init_with_explicit_increment() {
		let conn = connect();

		let initial: i64 =
			conn.query_row("SELECT seq_init('countdown', 10, -1)", [], |row| row.get(0)).unwrap();
		assert_eq!(initial, 10);

		let first: i64 = conn.query_row("SELECT seq_nextval('countdown')", [], |row| row.get(0)).unwrap();
		let second: i64 = conn.query_row("SELECT seq_nextval('countdown')", [], |row| row.get(0)).unwrap();
		assert_eq!(first, 10);
		assert_eq!(second, 9);
	}

	#[test]
	fn test_drop_returns_null() {
		let conn = connect();

		conn.query_row("SELECT seq_init('orders', 1)", [], |row| row.get::<_, i64>(0)).unwrap();
		let dropped: Option<i64> = conn.query_row("SELECT seq_drop('orders')", [], |row| row.get(0)).unwrap();
		assert_eq!(dropped, None);
	}

	#[test]
	fn test_errors_carry_the_diagnostic() {
		let conn = connect();

		conn.query_row("SELECT seq_init('orders', 1)", [], |row| row.get::<_, i64>(0)).unwrap();

		let err = conn.query_row("SELECT seq_nextval('absent')", [], |row| row.get::<_, i64>(0)).unwrap_err();
		assert!(err.to_string().contains("sequence name does not exist"));
	}
}
