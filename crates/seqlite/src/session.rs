// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

//! Session management: opening connections with the storage pragmas
//! applied and the sequence SQL surface registered.

use std::{
	ops::Deref,
	path::{Path, PathBuf},
	time::Duration,
};

use rusqlite::Connection;
use seqlite_type::{Error, diagnostic::storage::connection_failed, return_error};
use tracing::instrument;

use crate::{Result, diagnostic::from_rusqlite_error, function};

/// SQLite journal mode applied when a session opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JournalMode {
	Wal,
	Delete,
	Memory,
}

impl JournalMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			JournalMode::Wal => "WAL",
			JournalMode::Delete => "DELETE",
			JournalMode::Memory => "MEMORY",
		}
	}
}

/// SQLite synchronous mode applied when a session opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SynchronousMode {
	Off,
	Normal,
	Full,
	Extra,
}

impl SynchronousMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			SynchronousMode::Off => "OFF",
			SynchronousMode::Normal => "NORMAL",
			SynchronousMode::Full => "FULL",
			SynchronousMode::Extra => "EXTRA",
		}
	}
}

/// Configuration for a file-backed session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
	pub path: PathBuf,
	pub journal_mode: JournalMode,
	pub synchronous_mode: SynchronousMode,
	pub busy_timeout: Duration,
}

impl SessionConfig {
	/// Balanced defaults: WAL journaling with normal synchronization.
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self {
			path: path.as_ref().to_path_buf(),
			journal_mode: JournalMode::Wal,
			synchronous_mode: SynchronousMode::Normal,
			busy_timeout: Duration::from_secs(5),
		}
	}

	/// Durability first: full synchronization on every commit.
	pub fn safe(path: impl AsRef<Path>) -> Self {
		Self {
			synchronous_mode: SynchronousMode::Full,
			..Self::new(path)
		}
	}

	/// Speed first: journal kept in memory, synchronization off.
	pub fn fast(path: impl AsRef<Path>) -> Self {
		Self {
			journal_mode: JournalMode::Memory,
			synchronous_mode: SynchronousMode::Off,
			..Self::new(path)
		}
	}

	pub fn journal_mode(mut self, mode: JournalMode) -> Self {
		self.journal_mode = mode;
		self
	}

	pub fn synchronous_mode(mut self, mode: SynchronousMode) -> Self {
		self.synchronous_mode = mode;
		self
	}

	pub fn busy_timeout(mut self, timeout: Duration) -> Self {
		self.busy_timeout = timeout;
		self
	}
}

/// A connection with the sequence functions registered. Each session
/// owns its own cursor cache; it vanishes when the session closes.
#[derive(Debug)]
pub struct Session {
	conn: Connection,
}

impl Session {
	/// Opens a file-backed session: connects, applies the configured
	/// pragmas and registers the sequence SQL surface.
	#[instrument(name = "session::open", level = "info", skip(config), fields(
		db_path = ?config.path,
		journal_mode = %config.journal_mode.as_str()
	))]
	pub fn open(config: SessionConfig) -> Result<Session> {
		if config.path.as_os_str() == ":memory:" {
			return_error!(connection_failed(
				":memory:",
				"use Session::in_memory() for in-memory databases"
			));
		}

		let path = config.path.display().to_string();
		let conn = Connection::open(&config.path)
			.map_err(|e| Error(connection_failed(&path, e.to_string())))?;

		conn.pragma_update(None, "journal_mode", config.journal_mode.as_str())
			.map_err(|e| Error(from_rusqlite_error(e)))?;
		conn.pragma_update(None, "synchronous", config.synchronous_mode.as_str())
			.map_err(|e| Error(from_rusqlite_error(e)))?;
		// Wait for concurrent sessions to release their locks
		let _ = conn.busy_timeout(config.busy_timeout);

		function::register(&conn)?;

		Ok(Session {
			conn,
		})
	}

	/// Opens an in-memory session. The catalog does not outlive it.
	pub fn in_memory() -> Result<Session> {
		let conn = Connection::open_in_memory()
			.map_err(|e| Error(connection_failed(":memory:", e.to_string())))?;

		function::register(&conn)?;

		Ok(Session {
			conn,
		})
	}

	/// Get access to the underlying connection
	pub fn connection(&self) -> &Connection {
		&self.conn
	}
}

impl Deref for Session {
	type Target = Connection;

	fn deref(&self) -> &Self::Target {
		&self.conn
	}
}
