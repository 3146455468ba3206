//! Integration tests for the rolling-window generation driver.

use kgram_gen_core::model::generator::{Generator, Seed};
use kgram_gen_core::model::kgram_model::KgramModel;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn output_opens_with_the_first_kgram_and_has_the_requested_length() {
	let model = KgramModel::new(3, "the quick brown fox jumps over the lazy dog").unwrap();
	let generator = Generator::new(model);

	let mut rng = StdRng::seed_from_u64(3);
	let text = generator.generate(&Seed::First, 120, &mut rng).unwrap();

	assert!(text.starts_with("the"));
	assert_eq!(text.chars().count(), 120);
}

#[test]
fn output_is_truncated_to_short_requested_lengths() {
	let model = KgramModel::new(3, "abcdef").unwrap();
	let generator = Generator::new(model);

	let mut rng = StdRng::seed_from_u64(8);
	let text = generator.generate(&Seed::First, 2, &mut rng).unwrap();
	assert_eq!(text, "ab");
}

#[test]
fn the_same_seed_reproduces_the_same_output() {
	let text = "it was the best of times, it was the worst of times";
	let model = KgramModel::new(4, text).unwrap();
	let generator = Generator::new(model);

	let mut first_rng = StdRng::seed_from_u64(21);
	let mut second_rng = StdRng::seed_from_u64(21);
	let first = generator.generate(&Seed::Random, 80, &mut first_rng).unwrap();
	let second = generator.generate(&Seed::Random, 80, &mut second_rng).unwrap();
	assert_eq!(first, second);
}

#[test]
fn random_seeds_open_with_a_model_kgram() {
	let model = KgramModel::new(2, "ABAB").unwrap();
	let generator = Generator::new(model);
	let mut rng = StdRng::seed_from_u64(11);

	for _ in 0..20 {
		let text = generator.generate(&Seed::Random, 6, &mut rng).unwrap();
		let opening: String = text.chars().take(2).collect();
		assert!(generator.model().kgrams().iter().any(|kgram| kgram.as_str() == opening));
	}
}

#[test]
fn custom_seeds_must_match_the_model_order() {
	let model = KgramModel::new(2, "ABAB").unwrap();
	let generator = Generator::new(model);
	let mut rng = StdRng::seed_from_u64(5);

	assert!(generator.generate(&Seed::Custom("A".to_owned()), 10, &mut rng).is_err());

	let text = generator.generate(&Seed::Custom("BA".to_owned()), 10, &mut rng).unwrap();
	assert!(text.starts_with("BA"));
}

#[test]
fn a_model_with_only_dead_ends_stops_instead_of_spinning() {
	let model = KgramModel::new(5, "hello").unwrap();
	let generator = Generator::new(model);

	let mut rng = StdRng::seed_from_u64(2);
	let text = generator.generate(&Seed::First, 50, &mut rng).unwrap();

	// The single window has no follower besides the end of the text,
	// so the output cannot grow past the seed itself
	assert_eq!(text, "hello");
}
