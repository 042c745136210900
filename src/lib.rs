//! # backend-forge
//!
//! Command-line tool for scaffolding Express + MongoDB backend projects.
//!
//! This crate provides the `forge` binary with a single command:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `forge new [name]` | Scaffold a new backend project with optional features |
//!
//! `forge new` asks a handful of questions (project name, JWT authentication,
//! Multer file upload, dotenv configuration) and writes the complete project
//! skeleton — `package.json`, `server.js`, a Mongoose database connector, a
//! User CRUD module and the optional auth/upload routes — into a new
//! directory. Every flag has a CLI counterpart so the command also works
//! non-interactively.
//!
//! ## Architecture
//!
//! The CLI is organized into command modules under [`commands`]:
//!
//! - [`commands::new_project`] — prompt resolution, scaffolding, npm install
//! - [`commands::templates`] — the generated-file templates
//! - [`commands::style`] — banner and terminal output helpers

pub mod commands;
