//! # Cflint Architecture
//!
//! Cflint answers one question: **are these C/C++ files clang-format clean?**
//! It never formats anything itself. clang-format produces the canonical text,
//! git says which files to look at, and cflint shells out to both, diffs what
//! came back, and turns the per-file answers into an exit code.
//!
//! ## The Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Locate ([`locate`], [`version`])                           │
//! │  - Find clang-format, by explicit path or PATH search       │
//! │  - Parse `--version`, refuse anything below the minimum     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Select ([`git`])                                           │
//! │  - All tracked files, or files changed against the baseline │
//! │  - Keep only .h/.hpp/.c/.cpp, in git's enumeration order    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Lint, per file ([`formatter`], [`diff`], [`lint`])         │
//! │  - Read the file, capture clang-format's print-only output  │
//! │  - Unified diff with a/ and b/ repo-relative headers        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Aggregate ([`lint::LintSummary`], wired by main.rs)        │
//! │  - AND of every per-file result; exit 0 iff all clean       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs sequentially on one thread. A fatal error (missing binary,
//! version too low, a file that cannot be read, a formatter invocation that
//! fails) aborts the rest of the run; a misformatted file is not an error,
//! just a negative result.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From [`lint`] inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<FileReport>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! Printing the notices, fix-it hints, and colored diff bodies is main.rs's
//! job, and only main.rs knows about exit codes.
//!
//! The one kind of I/O the core does perform — running git and clang-format —
//! goes through the [`runner::RunCommand`] capability. Production code uses
//! [`runner::system::SystemRunner`]; tests script every command with
//! [`runner::fake::ScriptedRunner`] and never spawn a process.
//!
//! ## Testing Strategy
//!
//! 1. **Modules** (`#[cfg(test)]` throughout): unit tests against the
//!    scripted runner. This is where the lion's share of testing lives.
//! 2. **CLI** (`tests/`): end-to-end runs of the real binary inside a
//!    temporary git repository, with a shell-script stand-in for
//!    clang-format.
//!
//! ## Module Overview
//!
//! - [`runner`]: The process-execution seam—every external command goes here
//! - [`locate`]: Finds the clang-format binary
//! - [`version`]: Strict version extraction and the minimum-version gate
//! - [`git`]: File selection (all tracked vs changed) and extension filtering
//! - [`formatter`]: The validated clang-format handle; original and formatted text
//! - [`diff`]: Unified diff rendering with git-style headers
//! - [`lint`]: Per-file lint and the pass/fail aggregate
//! - [`error`]: Error types
//! - `args`: Argument parsing for the binary (not part of the lib API)

pub mod diff;
pub mod error;
pub mod formatter;
pub mod git;
pub mod lint;
pub mod locate;
pub mod runner;
pub mod version;
