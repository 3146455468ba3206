use rand::Rng;

use crate::model::kgram::Follower;
use crate::model::kgram_model::KgramModel;

/// Strategy used to select the starting window when generating text.
///
/// # Variants
/// - `First`: start from the first kgram of the source text.
/// - `Random`: start from a kgram chosen uniformly at random.
/// - `Custom(String)`: use the provided string as the starting window;
///   it must hold exactly K characters.
#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
	First,
	Random,
	Custom(String),
}

/// Drives a `KgramModel` to produce text statistically similar to its
/// source.
///
/// # Responsibilities
/// - Keep a rolling window of the last K emitted characters
/// - Query the model for the next character and append it
/// - Re-seed with a random kgram when the model has no data for the
///   current window
#[derive(Clone, Debug)]
pub struct Generator {
	model: KgramModel,
}

impl Generator {
	/// Creates a generator over an already built model.
	pub fn new(model: KgramModel) -> Self {
		Self { model }
	}

	/// Read-only access to the underlying model.
	pub fn model(&self) -> &KgramModel {
		&self.model
	}

	/// Generates `length` characters of output.
	///
	/// The starting window opens the output, then each sampled
	/// character is appended and the window slides forward by one.
	/// Whenever the model answers with the end sentinel, a random
	/// kgram replaces the window (without extending the output) so
	/// generation can keep going.
	///
	/// The output holds exactly `length` characters, except when every
	/// key kept dead-ending for a full lap over the distinct keys, the
	/// source cannot extend text any further and generation stops
	/// early rather than spinning.
	///
	/// # Errors
	/// Returns an error if a `Seed::Custom` window does not hold
	/// exactly K characters.
	pub fn generate(&self, seed: &Seed, length: usize, rng: &mut impl Rng) -> Result<String, String> {
		let mut window: Vec<char> = match seed {
			Seed::First => self.model.first_kgram().as_str().chars().collect(),
			Seed::Random => self.model.random_kgram(rng).as_str().chars().collect(),
			Seed::Custom(s) => {
				let chars: Vec<char> = s.chars().collect();
				if chars.len() != self.model.k() {
					return Err(format!(
						"custom seed has {} characters, the model order is {}",
						chars.len(),
						self.model.k()
					));
				}
				chars
			}
		};

		let mut output: String = window.iter().collect();
		let mut dead_ends = 0;

		while output.chars().count() < length {
			let kgram: String = window.iter().collect();
			match self.model.next_char(&kgram, rng) {
				Follower::Char(c) => {
					output.push(c);
					window.remove(0);
					window.push(c);
					dead_ends = 0;
				}
				Follower::End => {
					dead_ends += 1;
					if dead_ends > self.model.kgrams().len() {
						break;
					}
					window = self.model.random_kgram(rng).as_str().chars().collect();
				}
			}
		}

		Ok(output.chars().take(length).collect())
	}
}
