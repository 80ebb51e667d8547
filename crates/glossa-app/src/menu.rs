//! The interactive console menu. All dictionary semantics live in
//! `glossa-core`; this layer only prompts, prints, and decides on retry or
//! fallback when an operation reports an error.

use std::io::{self, Write};

use glossa_config::Config;
use glossa_core::game::{GameSession, Outcome};
use glossa_core::query;
use glossa_core::store::Store;

pub fn run(store: &mut Store, config: &Config) -> anyhow::Result<()> {
    let mut game = GameSession::new(config.game.points_per_correct);

    loop {
        println!();
        println!("Menu:");
        println!("1. Choose file");
        println!("2. Search for word");
        println!("3. List palindromes");
        println!("4. Rhyming words");
        println!("5. Add a word");
        println!("6. Play Guess the Fourth Word");
        println!("7. Exit program");

        match prompt("Enter your choice: ")?.as_str() {
            "1" => choose_file(store, config)?,
            "2" => search_word(store)?,
            "3" => palindromes_menu(store)?,
            "4" => rhyming_words_menu(store)?,
            "5" => add_word_menu(store)?,
            "6" => play_game(store, &mut game)?,
            "7" => {
                println!("Thanks for using glossa!");
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn choose_file(store: &mut Store, config: &Config) -> anyhow::Result<()> {
    let filename = prompt("Enter the filename: ")?;
    match store.load(&filename) {
        Ok(_) => println!("File loaded successfully."),
        Err(e) => {
            tracing::debug!("load of {filename} failed: {e}");
            println!("Failed to load file.");
            let fallback = &config.dictionary.fallback_path;
            println!("Defaulting to {fallback}");
            match store.load(fallback) {
                Ok(_) => println!("File loaded successfully."),
                Err(e) => println!("Failed to load fallback: {e}"),
            }
        }
    }
    Ok(())
}

fn search_word(store: &Store) -> anyhow::Result<()> {
    let word = prompt("Enter a word to search: ")?;
    match store.search(&word) {
        Some(entry) => {
            println!("Word: {}", entry.name());
            println!("Definition: {}", entry.definition());
            println!("Type: {}", query::expand_type(entry.word_type()));
        }
        None => println!("Word not found."),
    }
    Ok(())
}

fn palindromes_menu(store: &Store) -> anyhow::Result<()> {
    println!();
    println!("List Palindromes:");
    println!("Choose a section of the alphabet:");
    println!("1. A-C");
    println!("2. D-F");
    println!("3. G-I");
    println!("4. J-L");
    println!("5. M-O");
    println!("6. P-R");
    println!("7. S-U");
    println!("8. V-X");
    println!("9. Y-Z");

    let start = match prompt("Enter your choice (1-9): ")?.as_str() {
        "1" => 'A',
        "2" => 'D',
        "3" => 'G',
        "4" => 'J',
        "5" => 'M',
        "6" => 'P',
        "7" => 'S',
        "8" => 'V',
        // No English palindrome starts with y or z; the window is
        // hardcoded empty rather than scanned.
        "9" => {
            println!("No palindromes found for this range.");
            return Ok(());
        }
        _ => {
            println!("Invalid choice. Please try again.");
            return Ok(());
        }
    };

    let end = (start as u8 + 2) as char;
    println!();
    println!("Palindromes for range {start}-{end}:");

    let found = query::palindromes_in_range(store.entries(), start);
    if found.is_empty() {
        println!("No palindromes found for this range.");
    } else {
        for entry in found {
            println!("{}", entry.name());
        }
    }
    Ok(())
}

fn rhyming_words_menu(store: &Store) -> anyhow::Result<()> {
    println!();
    println!("Rhyming Words:");
    let word = prompt("Enter a word to find rhyming words: ")?;

    let rhymes = query::find_rhymes(store.entries(), &word);
    if rhymes.is_empty() {
        println!("No rhyming words found.");
    } else {
        for entry in rhymes {
            println!("{}", entry.name());
        }
    }
    Ok(())
}

fn add_word_menu(store: &mut Store) -> anyhow::Result<()> {
    println!();
    println!("Add a Word:");
    let name = prompt("Enter the name of the word: ")?;
    let type_code = prompt("Enter the type of the word (n/noun, v/verb, adj/adjective): ")?;
    let definition = prompt("Enter the definition of the word (separate multiple definitions with ; ): ")?;

    if let Err(e) = store.add(&name, &type_code, &definition) {
        println!("Error: {e}");
        return Ok(());
    }

    let filename = prompt("Enter the filename to save the dictionary: ")?;
    match store.save(&filename) {
        Ok(()) => println!("Dictionary saved successfully."),
        Err(e) => println!("Failed to save dictionary: {e}"),
    }
    Ok(())
}

fn play_game(store: &Store, game: &mut GameSession) -> anyhow::Result<()> {
    println!();
    println!("Welcome to Guess the Fourth Word!");
    println!("Current High Score: {}", game.high_score());
    println!("Instructions:");
    println!("- You will be presented with a word and its definition.");
    println!("- One word in the definition will be replaced by underscores.");
    println!("- Your task is to guess the missing word.");
    println!("- You will receive points for each correct guess.");
    println!("- The game ends when you guess incorrectly.");
    println!("- Good luck!");

    game.start();
    let mut rng = rand::thread_rng();

    loop {
        let challenge = match game.pick_challenge(store, &mut rng) {
            Ok(challenge) => challenge,
            Err(e) => {
                println!("Cannot start a round: {e}");
                return Ok(());
            }
        };

        println!();
        println!("Word: {}", challenge.word);
        println!("Definition: {}", challenge.masked_tokens.join(" "));

        let guess = prompt("Guess the missing word: ")?;
        match game.submit_guess(&challenge, &guess)? {
            Outcome::Correct => println!("Congratulations! You guessed correctly."),
            Outcome::Incorrect => {
                println!("Incorrect guess.");
                println!("The correct word was: {}", challenge.answer);
                println!("Your final score: {}", game.round_score());
                if game.round_score() > 0 && game.round_score() == game.high_score() {
                    println!("New High Score!");
                }
                return Ok(());
            }
        }
    }
}
