use std::collections::HashMap;
use std::path::Path;

use rand::Rng;

use crate::io;
use crate::model::followers::Followers;
use crate::model::kgram::{Follower, Kgram};

/// Represents an order-K Markov model of a source text.
///
/// The `KgramModel` maps every K-character window ("kgram") of the
/// source text to the characters observed right after it, and samples
/// from those observations to produce statistically similar output.
///
/// # Responsibilities
/// - Build the frequency model in a single scan over the source text
/// - Expose the first kgram of the source text
/// - Select a kgram uniformly at random over the distinct keys
/// - Sample the next character following a given kgram
///
/// # Invariants
/// - `k` is fixed at construction and always >= 1
/// - Every stored kgram has exactly `k` characters and at least one
///   recorded follower
/// - The model is read-only after construction
#[derive(Clone, Debug)]
pub struct KgramModel {
	/// The order of the model (number of characters in a kgram)
	k: usize,

	/// Mapping from a kgram to the observations made right after it
	followers: HashMap<Kgram, Followers>,

	/// The kgram formed by the first K characters of the source text
	first: Kgram,

	/// Distinct keys materialized once so random selection is O(1).
	/// Stays valid for the whole lifetime: the model never changes
	/// after construction.
	keys: Vec<Kgram>,
}

impl KgramModel {
	/// Builds an order `k` model of `text`.
	///
	/// Slides a window of width `k` over every position where a full
	/// window fits and records the character following each window.
	/// A window ending flush at the end of the text records
	/// `Follower::End` instead.
	///
	/// UTF-8 safe: windows are taken over characters, not bytes.
	///
	/// # Errors
	/// Returns an error if `k` is zero or if `text` holds fewer than
	/// `k` characters, no full window would fit.
	pub fn new(k: usize, text: &str) -> Result<Self, String> {
		if k == 0 {
			return Err("k must be >= 1".to_owned());
		}

		let chars: Vec<char> = text.chars().collect();
		if chars.len() < k {
			return Err(format!(
				"source text has {} characters, an order-{} model needs at least {}",
				chars.len(), k, k
			));
		}

		// Get the first kgram
		let first = Kgram::from_chars(&chars[0..k]);

		// For each window position, the follower is the character right
		// after the window, or the end sentinel on the last position
		let mut followers: HashMap<Kgram, Followers> = HashMap::new();
		for i in 0..=chars.len() - k {
			let kgram = Kgram::from_chars(&chars[i..i + k]);
			let follower = match chars.get(i + k) {
				Some(c) => Follower::Char(*c),
				None => Follower::End,
			};
			followers.entry(kgram).or_insert_with(Followers::new).record(follower);
		}

		let keys: Vec<Kgram> = followers.keys().cloned().collect();
		log::debug!("built order-{} model: {} distinct kgrams", k, keys.len());

		Ok(Self { k, followers, first, keys })
	}

	/// Builds an order `k` model from the file at `filepath`.
	///
	/// The whole file is read into memory as one character sequence,
	/// newlines included.
	///
	/// # Errors
	/// Returns an error if the file cannot be read, or if the loaded
	/// text is shorter than `k`. A failed read never yields a
	/// partially built model.
	pub fn from_file<P: AsRef<Path>>(k: usize, filepath: P) -> Result<Self, Box<dyn std::error::Error>> {
		let text = io::read_source(&filepath)?;
		Ok(Self::new(k, &text)?)
	}

	/// Returns the order of the model.
	pub fn k(&self) -> usize {
		self.k
	}

	/// Returns the kgram made of the first K characters of the source
	/// text.
	pub fn first_kgram(&self) -> &Kgram {
		&self.first
	}

	/// Returns every distinct kgram seen in the source text.
	///
	/// Order is unspecified.
	pub fn kgrams(&self) -> &[Kgram] {
		&self.keys
	}

	/// Returns a kgram chosen uniformly at random over the distinct
	/// keys.
	///
	/// A kgram occurring ten times in the text is no more likely to be
	/// chosen than one occurring once. A successfully built model holds
	/// at least one kgram, so selection cannot fail.
	pub fn random_kgram(&self, rng: &mut impl Rng) -> &Kgram {
		&self.keys[rng.random_range(0..self.keys.len())]
	}

	/// Samples a character following `kgram` in the source text.
	///
	/// The result is drawn from the recorded observations of `kgram`,
	/// so each character comes out proportionally to how often it was
	/// seen. `Follower::End` comes out when the sampled occurrence
	/// ended flush at the end of the text, and deterministically when
	/// `kgram` was never seen at all.
	pub fn next_char(&self, kgram: &str, rng: &mut impl Rng) -> Follower {
		match self.followers.get(kgram) {
			Some(followers) => followers.sample(rng),
			None => Follower::End,
		}
	}

	/// Read-only view of the observations recorded for `kgram`, in the
	/// order the scan met them.
	///
	/// Returns `None` for a kgram the model never saw.
	pub fn followers_of(&self, kgram: &str) -> Option<&[Follower]> {
		self.followers.get(kgram).map(Followers::observed)
	}
}
