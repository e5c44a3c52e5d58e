//! # Prodcat Architecture
//!
//! Prodcat is a **UI-agnostic product catalog library**. The `prodcat` binary is one client
//! of it; a web or desktop front end would drive the same API.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, fills form buffers, renders results    │
//! │  - The ONLY place that knows about stdout/stderr/stdin      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, the editing mode and the notification    │
//! │  - Returns structured `CmdResult`s                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + validation.rs              │
//! │  - Create/update/delete/list logic over Rust types          │
//! │  - Field validation with per-field messages                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: ordered list, write-through on every change │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments, returns `Result<CmdResult>`, and never
//! prints or prompts. Even the "are you sure?" step for deletes is a callback the UI
//! passes in.
//!
//! ## Validation Is Data, Not an Error
//!
//! A rejected form is a normal outcome: `CmdResult::errors` maps each bad field to a
//! message and the store is untouched. `Err` is reserved for storage and I/O failures,
//! which propagate unchanged to the caller.
//!
//! ## Testing Strategy
//!
//! 1. **Commands and validation**: thorough unit tests against `MemBackend`.
//! 2. **API**: the editing state machine and notification lifecycle.
//! 3. **Storage**: `FsBackend` against temporary directories (`tests/`).
//! 4. **CLI**: end-to-end runs of the binary with an isolated `PRODCAT_HOME`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and editing state machine
//! - [`commands`]: Business logic for each operation
//! - [`validation`]: Form validation rules
//! - [`store`]: Record store and storage backends
//! - [`model`]: `Product`, `ProductId`, `Category`, seed data
//! - [`form`]: Form buffers and editing mode
//! - [`notification`]: Outcome notifications and their display window
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and startup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod init;
pub mod model;
pub mod notification;
pub mod store;
pub mod validation;
