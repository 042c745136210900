//! Command implementations for the `forge` CLI.

/// Project scaffolding — `forge new [name]`.
///
/// Resolves options from CLI flags or interactive prompts, creates the
/// project directory tree, writes all scaffold files and optionally runs
/// `npm install` in the new directory.
pub mod new_project;

/// Terminal presentation: banner, progress lines, success summary.
pub mod style;

/// Generated-file templates.
///
/// Each generated file is an opaque string constant (or a format of one)
/// with only the project name and environment values substituted. The
/// `package.json` manifest is the one structured exception, built from
/// [`templates::PackageManifest`](templates::PackageManifest).
pub mod templates;
