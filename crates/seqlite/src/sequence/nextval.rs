// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

use rusqlite::Connection;
use seqlite_type::{diagnostic::sequence::unknown_sequence, return_error};
use tracing::instrument;

use crate::{Result, catalog, cursor, sequence::Sequences};

impl Sequences {
	/// Advances the sequence by its increment and returns the new
	/// value. Existence is decided by the advance itself: zero rows
	/// changed means the name is not registered.
	#[instrument(name = "sequence::nextval", level = "debug", skip(conn))]
	pub fn nextval(conn: &Connection, name: &str) -> Result<i64> {
		if catalog::advance(conn, name)? == 0 {
			return_error!(unknown_sequence(name));
		}

		// The row can vanish between the advance and the read when a
		// concurrent session drops the sequence.
		let value = match catalog::read_current(conn, name)? {
			Some(value) => value,
			None => return_error!(unknown_sequence(name)),
		};

		cursor::ensure(conn)?;
		cursor::store(conn, name, value)?;

		Ok(value)
	}
}

#[cfg(test)]
mod tests {
	use seqlite_type::diagnostic::sequence::unknown_sequence;

	use crate::{sequence::Sequences, test_utils::create_test_session};

	#[test]
	fn test_first_value_is_the_initial_value() {
		let session = create_test_session();

		Sequences::init(&session, "orders", 100, 5).unwrap();
		assert_eq!(Sequences::nextval(&session, "orders").unwrap(), 100);
	}

	#[test]
	fn test_steps_by_increment() {
		let session = create_test_session();

		Sequences::init(&session, "orders", 1, 1).unwrap();
		for expected in 1..=1000 {
			assert_eq!(Sequences::nextval(&session, "orders").unwrap(), expected);
		}
	}

	#[test]
	fn test_negative_increment_descends() {
		let session = create_test_session();

		Sequences::init(&session, "countdown", 10, -1).unwrap();
		assert_eq!(Sequences::nextval(&session, "countdown").unwrap(), 10);
		assert_eq!(Sequences::nextval(&session, "countdown").unwrap(), 9);
		assert_eq!(Sequences::nextval(&session, "countdown").unwrap(), 8);
	}

	#[test]
	fn test_unknown_name_fails() {
		let session = create_test_session();

		// The catalog exists, the name does not.
		Sequences::init(&session, "orders", 1, 1).unwrap();

		let err = Sequences::nextval(&session, "absent").unwrap_err();
		assert_eq!(err.diagnostic(), unknown_sequence("absent"));
	}

	#[test]
	fn test_missing_catalog_is_a_storage_error() {
		let session = create_test_session();

		let err = Sequences::nextval(&session, "orders").unwrap_err();
		assert_eq!(err.code, "STORAGE_001");
		assert!(err.message.contains("no such table"));
	}

	#[test]
	fn test_overflow_is_a_storage_error() {
		let session = create_test_session();

		Sequences::init(&session, "orders", i64::MAX, 1).unwrap();
		assert_eq!(Sequences::nextval(&session, "orders").unwrap(), i64::MAX);

		// Past i64::MAX the storage engine computes the sum in floating
		// point; the catalog's typeof check fails the update instead of
		// letting it store a REAL.
		let err = Sequences::nextval(&session, "orders").unwrap_err();
		assert_eq!(err.code, "STORAGE_001");
		assert!(err.message.contains("CHECK constraint failed"));
	}

	#[test]
	fn test_overflow_on_descent_is_a_storage_error() {
		let session = create_test_session();

		Sequences::init(&session, "countdown", i64::MIN + 1, -1).unwrap();
		assert_eq!(Sequences::nextval(&session, "countdown").unwrap(), i64::MIN + 1);
		assert_eq!(Sequences::nextval(&session, "countdown").unwrap(), i64::MIN);

		let err = Sequences::nextval(&session, "countdown").unwrap_err();
		assert_eq!(err.code, "STORAGE_001");
		assert!(err.message.contains("CHECK constraint failed"));
	}

	#[test]
	fn test_failed_overflow_leaves_the_counter_intact() {
		let session = create_test_session();

		Sequences::init(&session, "orders", i64::MAX, 1).unwrap();
		assert_eq!(Sequences::nextval(&session, "orders").unwrap(), i64::MAX);

		let _ = Sequences::nextval(&session, "orders");

		// The rejected advance must not corrupt the row or the cursor.
		let def = Sequences::find(&session, "orders").unwrap().unwrap();
		assert_eq!(def.current_value, i64::MAX);
		assert_eq!(Sequences::currval(&session, "orders").unwrap(), i64::MAX);
	}

	#[test]
	fn test_independent_sequences_do_not_interfere() {
		let session = create_test_session();

		Sequences::init(&session, "orders", 1, 1).unwrap();
		Sequences::init(&session, "invoices", 500, 25).unwrap();

		assert_eq!(Sequences::nextval(&session, "orders").unwrap(), 1);
		assert_eq!(Sequences::nextval(&session, "invoices").unwrap(), 500);
		assert_eq!(Sequences::nextval(&session, "orders").unwrap(), 2);
		assert_eq!(Sequences::nextval(&session, "invoices").unwrap(), 525);
	}
}
