//! Top-level module for the kgram generation system.
//!
//! This crate provides an order-K Markov text generator, including:
//! - The frequency model itself (`KgramModel`)
//! - Value types for keys and observations (`Kgram`, `Follower`)
//! - Internal observation records (`Followers`)
//! - A generation driver (`Generator`)

/// Order-K Markov model over a source text.
///
/// Handles the construction scan, first-kgram record, uniform random
/// kgram selection, and probabilistic next-character sampling.
pub mod kgram_model;

/// Value types used as model keys and sampling results.
///
/// `Kgram` is an opaque content-compared key; `Follower` carries either
/// an observed character or the end-of-text sentinel.
pub mod kgram;

/// Generation driver built on top of `KgramModel`.
///
/// Exposes seed selection and rolling-window text generation.
pub mod generator;

/// Internal record of the followers observed for a single kgram.
///
/// Keeps observations in encounter order and supports uniform sampling.
/// This module is not exposed publicly.
mod followers;
