use crate::models::{Flashcard, GeneratedQuiz};
use rand::seq::SliceRandom;

/// Build the multiple-choice options for the card at `index`: the card's own
/// back plus up to 3 distractors drawn without replacement from the other
/// backs in the same deck. The pool keeps duplicate backs, so decks with
/// repeated answers can produce repeated option text. Both the draw and the
/// final option order are uniform shuffles.
pub fn generate_quiz(cards: &[Flashcard], index: usize) -> GeneratedQuiz {
    let correct = cards[index].back.clone();

    let mut wrong_pool: Vec<String> = cards
        .iter()
        .map(|card| card.back.clone())
        .filter(|back| *back != correct)
        .collect();

    let mut rng = rand::thread_rng();
    wrong_pool.shuffle(&mut rng);
    wrong_pool.truncate(3);

    let mut options = wrong_pool;
    options.push(correct.clone());
    options.shuffle(&mut rng);

    GeneratedQuiz {
        for_index: index,
        options,
        correct,
    }
}
