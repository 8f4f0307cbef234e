use address_book::matching::Chooser;
use std::collections::VecDeque;

/// Chooser that replays canned answers and records what it was shown.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedChooser {
    answers: VecDeque<String>,
    pub presented: Vec<String>,
    pub rejected: Vec<String>,
    pub no_match_count: usize,
}

#[allow(dead_code)]
impl ScriptedChooser {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Chooser for ScriptedChooser {
    fn no_matches(&mut self) {
        self.no_match_count += 1;
    }

    fn present(&mut self, labels: &[String]) {
        self.presented = labels.to_vec();
    }

    fn answer(&mut self) -> Option<String> {
        self.answers.pop_front()
    }

    fn rejected(&mut self, answer: &str) {
        self.rejected.push(answer.to_string());
    }
}
