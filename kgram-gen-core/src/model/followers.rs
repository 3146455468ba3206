use rand::Rng;

use crate::model::kgram::Follower;

/// Observations recorded for a single kgram.
///
/// A `Followers` stores, in encounter order, every follower seen right
/// after one kgram while scanning the source text. Conceptually this is
/// a node in a Markov chain where each observation is one outgoing edge.
///
/// Repeated characters are kept as-is rather than counted: sampling
/// uniformly over the sequence then reproduces the empirical
/// next-character distribution with no weight bookkeeping.
///
/// ## Invariants
/// - Holds at least one observation once the builder has touched it
#[derive(Clone, Debug)]
pub(crate) struct Followers {
	/// Every observation in the order the scan met it.
	/// Example: ['e', 'a', 'e', End]
	observed: Vec<Follower>,
}

impl Followers {
	/// Creates an empty record for a kgram about to receive its first
	/// observation.
	pub(crate) fn new() -> Self {
		Self { observed: Vec::new() }
	}

	/// Records one more observation.
	pub(crate) fn record(&mut self, follower: Follower) {
		self.observed.push(follower);
	}

	/// Samples one observation uniformly over the stored sequence.
	///
	/// A character observed twice is twice as likely to come out as one
	/// observed once.
	pub(crate) fn sample(&self, rng: &mut impl Rng) -> Follower {
		self.observed[rng.random_range(0..self.observed.len())]
	}

	/// Read-only view of every observation, in encounter order.
	pub(crate) fn observed(&self) -> &[Follower] {
		&self.observed
	}
}
