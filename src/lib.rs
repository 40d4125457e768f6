//! This crate is a collection of the classic abstract data types, written to be read as much as to
//! be used.
//!
//! # Purpose
//! Each container here is the textbook version of itself: a stack and queues backed by a fixed
//! array, their unbounded linked counterparts, singly, doubly and circular linked lists, a binary
//! search tree and a graph stored as an adjacency matrix. The interesting parts are the invariants
//! each one has to keep: circular index arithmetic, relinking neighbours on insertion and deletion,
//! the ordering of a search tree and the visited state of a graph traversal.
//!
//! # Method
//! There is no `unsafe` in this crate. Rather than chasing raw pointers, the linked lists and the
//! dynamic queue store their nodes in an index arena owned by the container, so a link is just a
//! slot number. That gives the doubly linked list its back-references and the circular list its
//! cycle without any aliasing. The search tree and the dynamic stack own their nodes through
//! [`Box`]es, because each node has exactly one parent.
//!
//! # Error Handling
//! Every failure is a [`Result`] with a strongly typed error. Each kind of failure is its own
//! small struct that implements [`Error`](std::error::Error), and an operation returns only the
//! kinds it can produce. [`ContainerError`](collections::ContainerError) wraps all of them for
//! callers who want a single type to propagate with `?`. Questions that have no answer for an empty
//! container, such as the height of an empty tree, return [`None`] rather than a sentinel.
//!
//! # Logging
//! The crate never writes anywhere itself. Rejected operations and traversal steps are emitted as
//! [`tracing`] events, so a caller that installs a subscriber can watch what the containers do.
//!
//! # Features
//! Each family of containers sits behind its own feature: `array`, `dynamic`, `linked`,
//! `binary-tree` and `graph`. All of them are enabled by default through `collections-all`.
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]
#![deny(unsafe_code)]

pub mod collections;

pub(crate) mod util;
