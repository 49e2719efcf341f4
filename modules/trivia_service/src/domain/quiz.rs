//! Quiz question selection

use crate::contract::{Question, QuizCategory};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;

/// Questions in `category` whose id is not in `previous`, in input order
pub fn eligible<'a>(
    candidates: &'a [Question],
    category: QuizCategory,
    previous: &HashSet<i32>,
) -> Vec<&'a Question> {
    candidates
        .iter()
        .filter(|question| match category {
            QuizCategory::All => true,
            QuizCategory::Only(id) => question.category == id,
        })
        .filter(|question| !previous.contains(&question.id))
        .collect()
}

/// Pick one eligible question uniformly at random, `None` when none is left
pub fn select_next<'a, R>(
    candidates: &'a [Question],
    category: QuizCategory,
    previous: &HashSet<i32>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    eligible(candidates, category, previous).choose(rng).copied()
}
