//! # Condonery Architecture
//!
//! Condonery keeps a directory of real-estate properties and the clients
//! interested in them. Users drive it with short text commands such as
//! `add n/Sunny Villa a/123 Orchard Rd t/luxury`.
//!
//! The core is a library; the terminal front end in `cli/` is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prints feedback and lists           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Logic Layer (logic.rs)                                     │
//! │  - parse → execute → save, one command at a time            │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                               │
//!                  ▼                               ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Parser (parser/)             │ │  Commands (commands/*.rs) │
//! │  - text → Command             │ │  - pure model mutations   │
//! │  - all field validation       │ │  - no I/O                 │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                                                  │
//!                                                  ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model/) and Storage (store/)                        │
//! │  - Directory of unique properties and clients               │
//! │  - Storage trait: JsonStorage (files), InMemoryStorage      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Displayed indexes
//!
//! Index arguments (`edit 2`, `delete -c 1`) refer to the list the user is
//! currently looking at, which `find` narrows and `list` resets. See
//! [`index`].
//!
//! ## Module Overview
//!
//! - [`logic`]: the facade front ends talk to
//! - [`parser`]: command text to [`commands::Command`]
//! - [`commands`]: what each command does to the model
//! - [`model`]: `Property`, `Client`, their fields, and the `Directory`
//! - [`store`]: persistence abstraction and implementations
//! - [`prefs`]: user preferences
//! - [`index`]: displayed-index handling
//! - [`error`]: error types

pub mod commands;
pub mod error;
pub mod index;
pub mod logic;
pub mod model;
pub mod parser;
pub mod prefs;
pub mod store;
