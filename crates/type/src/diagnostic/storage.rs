// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

use crate::Diagnostic;

/// Creates a diagnostic for a failed storage statement. The storage
/// engine's own message is preserved verbatim.
pub fn storage_error(message: impl Into<String>) -> Diagnostic {
	let msg = message.into();
	Diagnostic {
		code: "STORAGE_001".to_string(),
		message: format!("storage operation failed: {}", msg),
		label: Some("statement failed".to_string()),
		help: Some("check that:\n\
	         • the database file is accessible\n\
	         • sufficient disk space is available\n\
	         • the database is not corrupted"
			.to_string()),
		notes: vec![msg],
	}
}

/// Creates a diagnostic for a failed session open.
pub fn connection_failed(path: impl Into<String>, error: impl Into<String>) -> Diagnostic {
	let path = path.into();
	let error = error.into();
	Diagnostic {
		code: "STORAGE_002".to_string(),
		message: format!("failed to open database at '{}': {}", path, error),
		label: Some("connection failed".to_string()),
		help: Some("ensure that:\n\
	         • the database path is correct\n\
	         • the database file exists (or can be created)\n\
	         • you have appropriate file permissions\n\
	         • the database is not locked by another process"
			.to_string()),
		notes: vec![format!("path: {}", path), format!("error: {}", error)],
	}
}
