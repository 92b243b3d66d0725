// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

use seqlite_type::{Diagnostic, diagnostic::storage::storage_error};

/// Converts a rusqlite error into a storage diagnostic, keeping the
/// storage engine's message verbatim.
pub(crate) fn from_rusqlite_error(err: rusqlite::Error) -> Diagnostic {
	storage_error(err.to_string())
}

/// True when the error reports a table that does not exist. SQLite
/// signals this with a generic error code, so the message is the only
/// discriminator.
pub(crate) fn is_missing_table(err: &rusqlite::Error) -> bool {
	matches!(err, rusqlite::Error::SqliteFailure(_, Some(message)) if message.starts_with("no such table"))
}
