// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub integration module.
//!
//! Provides credential loading and the repository listing call.

pub mod auth;
pub mod repos;
