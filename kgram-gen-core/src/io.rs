use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a source text file into a single in-memory buffer.
///
/// - Reads the entire file into memory
/// - No line splitting, the model consumes the raw character sequence
pub(crate) fn read_source<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
