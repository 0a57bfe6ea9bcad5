// SPDX-License-Identifier: MIT

//! Stream and observer types shared by both matchers.

pub mod stream;
pub mod trace;
