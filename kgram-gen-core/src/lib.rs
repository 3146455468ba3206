//! Kgram-based text generation library.
//!
//! This crate provides an order-K Markov model system including:
//! - A character-level frequency model built in one scan over a source text
//! - Uniform random kgram selection and empirical next-character sampling
//! - A generation driver sliding a kgram window over the model output
//! - Internal utilities for source text loading
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core kgram model and generation logic.
///
/// This module exposes the model and generator interface while keeping
/// internal observation records private.
pub mod model;

/// I/O utilities (source text loading).
///
/// Not exposed
pub(crate) mod io;
