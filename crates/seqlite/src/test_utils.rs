// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

use crate::session::Session;

pub fn create_test_session() -> Session {
	Session::in_memory().unwrap()
}
