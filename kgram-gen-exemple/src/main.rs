use kgram_gen_core::model::generator::{Generator, Seed};
use kgram_gen_core::model::kgram_model::KgramModel;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Arguments: <source file> [k] [length]
    let mut args = std::env::args().skip(1);
    let source = args.next().ok_or("usage: kgram-gen-exemple <source file> [k] [length]")?;
    let k: usize = match args.next() {
        Some(value) => value.parse()?,
        None => 6,
    };
    let length: usize = match args.next() {
        Some(value) => value.parse()?,
        None => 400,
    };

    // Build the order-K model from the whole file
    // A read failure or a too-short source aborts here
    let model = KgramModel::from_file(k, &source)?;
    println!("{} distinct kgrams of order {}", model.kgrams().len(), model.k());
    println!("first kgram: {}", model.first_kgram());

    let generator = Generator::new(model);

    // The seed can be set to
    // 'First' to start from the opening kgram of the source text
    // 'Random' to start from a random kgram of the model
    // 'Custom' to start from a caller-provided window of K characters
    let mut rng = rand::rng();
    let text = generator.generate(&Seed::First, length, &mut rng)?;
    println!("{}", text);

    // A custom seed of the wrong size is rejected
    match generator.generate(&Seed::Custom(String::new()), length, &mut rng) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("An empty custom seed is invalid, it must hold exactly {} characters", k),
    }

    Ok(())
}
