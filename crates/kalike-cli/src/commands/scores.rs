use anyhow::Result;

use kalike_core::{AppConfig, QuizKind, ScoreStore};

/// Show saved quiz high scores, or wipe them with `--reset`
pub fn run(config: &AppConfig, reset: bool) -> Result<()> {
    let mut scores = ScoreStore::load(&config.scores_path());

    if reset {
        scores.reset();
        println!("High scores cleared.");
        return Ok(());
    }

    println!("High scores:");
    for kind in [QuizKind::Letters, QuizKind::Words, QuizKind::Sentences] {
        println!("  {:<14} {}", kind.title(), scores.get(kind));
    }

    Ok(())
}
