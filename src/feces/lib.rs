//! # Feces Architecture
//!
//! Feces is a **UI-agnostic trash can library**. This is not a CLI application
//! that happens to have some library code, it's a library that happens to have
//! a CLI client.
//!
//! This distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: plop, plunge, pie, compost, init    │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions beyond the injected environment root  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait                               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: The Environment Root Is Injected
//!
//! Every operation works relative to a [`FecesPaths`](commands::FecesPaths)
//! handed in by the caller. Commands never consult `$HOME` or environment
//! variables; resolving the real root (including the `FECES_HOME` override)
//! is the binary's job. That is what lets the entire library, filesystem
//! moves included, run against a temporary directory in tests.
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! Even the compost confirmation is a callback the caller supplies, so the
//! interactive prompt stays in the CLI layer.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic.
//!    This is where the lion's share of testing lives.
//!
//! 2. **API** (`api.rs`): Tests verifying correct dispatch and return types,
//!    not the logic itself.
//!
//! 3. **CLI** (`tests/cli_e2e.rs`): End-to-end runs of the real binary against
//!    a `FECES_HOME` pointed at a temporary directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Record`, `PloppedFile`)
//! - [`duration`]: The compost duration grammar (`30m`, `2d`, `1y`, ...)
//! - [`relocate`]: Cross-device-safe file and directory moves
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod duration;
pub mod error;
pub mod model;
pub mod relocate;
pub mod store;
