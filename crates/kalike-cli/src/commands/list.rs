use std::path::PathBuf;

use anyhow::{anyhow, Result};

use kalike_core::content::CardEntry;
use kalike_core::{ContentLibrary, Level};

/// Print the content library, optionally a single category
pub fn run(content_path: Option<PathBuf>, category: Option<&str>) -> Result<()> {
    let library = match content_path {
        Some(path) => ContentLibrary::from_path(&path)?,
        None => ContentLibrary::load_default()?,
    };

    match category {
        None => {
            print_letters("Vowels", &library.vowels);
            print_letters("Consonants", &library.consonants);
            print_leveled("Words", |level| library.words.level(level));
            print_leveled("Sentences", |level| library.sentences.level(level));
        }
        Some("vowels") => print_letters("Vowels", &library.vowels),
        Some("consonants") => print_letters("Consonants", &library.consonants),
        Some("words") => print_leveled("Words", |level| library.words.level(level)),
        Some("sentences") => print_leveled("Sentences", |level| library.sentences.level(level)),
        Some(other) => {
            return Err(anyhow!(
                "Unknown category '{}'. Expected vowels, consonants, words or sentences.",
                other
            ));
        }
    }

    Ok(())
}

fn print_letters<E: CardEntry>(title: &str, entries: &[E]) {
    println!("{} ({}):", title, entries.len());
    for entry in entries {
        println!("  {}  {}", entry.script(), entry.transliteration());
    }
    println!();
}

fn print_leveled<'a, E, F>(title: &str, entries_for: F)
where
    E: CardEntry + 'a,
    F: Fn(Level) -> &'a [E],
{
    println!("{}:", title);
    for level in Level::ALL {
        let entries = entries_for(level);
        println!("  {} ({}):", level.label(), entries.len());
        for entry in entries {
            let translation = entry.translation().unwrap_or("");
            println!(
                "    {}  {}  {}",
                entry.script(),
                entry.transliteration(),
                translation
            );
        }
    }
    println!();
}
