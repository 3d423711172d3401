use rand::prelude::*;

pub const DEFAULT_QUOTES: &[&str] = &[
    "What mysteries lie in the spaces between thoughts?",
    "How does consciousness emerge from complexity?",
    "Where do ideas go when they're forgotten?",
    "Can beauty be measured in mathematical terms?",
    "What shapes the rhythm of our universe?",
];

/// Picks the text shown over the background. Starts at the first quote and
/// jumps to a uniformly random one (repeats allowed) on each advance.
pub struct QuoteRotator {
    quotes: Vec<String>,
    current: usize,
    rng: StdRng,
}

impl QuoteRotator {
    pub fn new(quotes: Vec<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            quotes,
            current: 0,
            rng,
        }
    }

    pub fn with_defaults(seed: Option<u64>) -> Self {
        Self::new(DEFAULT_QUOTES.iter().map(|q| q.to_string()).collect(), seed)
    }

    pub fn current(&self) -> &str {
        self.quotes.get(self.current).map_or("", String::as_str)
    }

    pub fn advance(&mut self) -> &str {
        if !self.quotes.is_empty() {
            self.current = self.rng.gen_range(0..self.quotes.len());
        }
        self.current()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
