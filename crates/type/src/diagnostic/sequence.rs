// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

use crate::Diagnostic;

/// Creates a diagnostic for a name with no catalog row.
pub fn unknown_sequence(name: impl Into<String>) -> Diagnostic {
	let name = name.into();
	Diagnostic {
		code: "SEQUENCE_001".to_string(),
		message: format!("sequence name does not exist: '{}'", name),
		label: Some("unknown sequence".to_string()),
		help: Some(format!("create the sequence first with seq_init('{}', <initial_value>)", name)),
		notes: vec![],
	}
}

/// Creates a diagnostic for currval before any nextval in the session.
pub fn no_current_value(name: impl Into<String>) -> Diagnostic {
	let name = name.into();
	Diagnostic {
		code: "SEQUENCE_002".to_string(),
		message: format!("currval is not yet defined in this session for this sequence: '{}'", name),
		label: Some("no current value in this session".to_string()),
		help: Some(format!("call seq_nextval('{}') in this session before seq_currval", name)),
		notes: vec!["currval reflects only values produced by the calling session".to_string()],
	}
}

/// Creates a diagnostic for an increment of zero.
pub fn sequence_increment_zero(name: impl Into<String>) -> Diagnostic {
	let name = name.into();
	Diagnostic {
		code: "SEQUENCE_003".to_string(),
		message: format!("increment must not be zero for sequence '{}'", name),
		label: Some("constraint violation".to_string()),
		help: Some("use a positive increment for an ascending sequence or a negative one for a descending sequence"
			.to_string()),
		notes: vec![],
	}
}
