use clap::{App, Arg};
use hotel_sentiment::SentimentEngine;
use std::io;
use std::io::Write;

fn main() {
    env_logger::init();

    let matches = App::new("sentiment-predict")
        .about("Interactive CLI for classifying hotel review sentiment")
        .arg(
            Arg::with_name("ENGINE_DIR")
                .required(true)
                .takes_value(true)
                .index(1)
                .help("path to the trained sentiment engine directory"),
        )
        .arg(
            Arg::with_name("hotel")
                .short("H")
                .long("--hotel")
                .takes_value(true)
                .help("hotel profile to use (defaults to the first configured hotel)"),
        )
        .get_matches();
    let engine_dir = matches.value_of("ENGINE_DIR").unwrap();

    println!("\nLoading the sentiment engine...");
    let engine = SentimentEngine::from_path(engine_dir).unwrap();

    let hotel = matches
        .value_of("hotel")
        .map(|name| name.to_string())
        .unwrap_or_else(|| engine.hotels()[0].name.clone());
    println!("Classifying reviews for '{}'", hotel);

    loop {
        print!("> ");
        io::stdout().flush().unwrap();
        let mut review = String::new();
        io::stdin().read_line(&mut review).unwrap();
        match engine.predict(&hotel, review.trim()) {
            Ok(result) => {
                let result_json = serde_json::to_string_pretty(&result).unwrap();
                println!("{}", result_json);
            }
            Err(error) => println!("Error: {}", error),
        }
    }
}
