//! Shared test utilities for the meta-check workspace.
//!
//! This crate provides standardised fixtures for Unity-style project trees
//! and the git repositories that track them. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures at two realism levels
//! - [`project`]: [`project::TestProject`] builder for project and package trees

pub mod git;
pub mod project;
