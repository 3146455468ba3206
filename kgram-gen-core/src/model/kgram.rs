use std::borrow::Borrow;
use std::fmt;

/// A contiguous window of exactly K characters taken from a source text.
///
/// Kgrams are opaque, immutable keys: equality and hashing follow the
/// character content, nothing else. They are produced by the model
/// (first kgram, random kgram, enumeration) and fed back into it for
/// next-character lookups.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Kgram(String);

impl Kgram {
	/// Builds a kgram from a slice of characters.
	pub(crate) fn from_chars(chars: &[char]) -> Self {
		Self(chars.iter().collect())
	}

	/// Returns the textual content of the kgram.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Kgram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Lets the model map resolve `&str` lookups against `Kgram` keys.
impl Borrow<str> for Kgram {
	fn borrow(&self) -> &str {
		&self.0
	}
}

/// A single observation made right after an occurrence of a kgram.
///
/// `End` is the sentinel recorded when the occurrence ends flush at the
/// end of the source text. It takes part in sampling like any observed
/// character, and it is also the answer for a kgram the model never saw,
/// so callers can treat both uniformly as "no data beyond this point".
/// Being an enum variant, it cannot collide with legitimate source
/// content.
///
/// # Variants
/// - `Char(char)`: the character at the position right after the window.
/// - `End`: end of the source text, nothing follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Follower {
	Char(char),
	End,
}

impl Follower {
	/// Returns `true` for the end-of-text sentinel.
	pub fn is_end(&self) -> bool {
		matches!(self, Follower::End)
	}

	/// Returns the observed character, or `None` for the sentinel.
	pub fn char(&self) -> Option<char> {
		match self {
			Follower::Char(c) => Some(*c),
			Follower::End => None,
		}
	}
}
