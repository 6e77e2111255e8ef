// ABOUTME: Domain service layer for plan generation business logic
// ABOUTME: Orchestrates prompt composition, completion, retry, and response parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ProCoach Contributors

//! Domain service layer
//!
//! Business logic independent of any particular caller. The CLI binary and
//! any embedding application drive the same entry points, ensuring
//! consistent plan semantics regardless of the front end.

/// Plan generation and weekly iteration against the completion backend
pub mod plan_generation;
