// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 SeqLite

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod tempdir;
