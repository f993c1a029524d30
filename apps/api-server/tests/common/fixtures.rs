//! Synthetic blog posts for seeding.

use rand::Rng;

use blog_core::domain::{Author, NewPost};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Margaret", "Ken", "Frances", "Dennis",
    "Radia", "John", "Hedy", "Niklaus", "Katherine", "Tim",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Hamilton", "Thompson",
    "Allen", "Ritchie", "Perlman", "McCarthy", "Lamarr", "Wirth", "Johnson", "Berners-Lee",
];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip",
    "commodo", "consequat", "duis", "aute", "irure", "voluptate", "velit", "esse", "cillum",
];

fn pick<'a>(rng: &mut impl Rng, words: &[&'a str]) -> &'a str {
    words[rng.gen_range(0..words.len())]
}

pub fn first_name() -> String {
    pick(&mut rand::thread_rng(), FIRST_NAMES).to_string()
}

pub fn last_name() -> String {
    pick(&mut rand::thread_rng(), LAST_NAMES).to_string()
}

/// A few space-separated lorem words.
pub fn words() -> String {
    let mut rng = rand::thread_rng();
    let count = rng.gen_range(3..=6);
    (0..count)
        .map(|_| pick(&mut rng, LOREM))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A few capitalized lorem sentences.
pub fn sentences() -> String {
    let mut rng = rand::thread_rng();
    let count = rng.gen_range(3..=5);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(4..=10);
            let sentence = (0..len)
                .map(|_| pick(&mut rng, LOREM))
                .collect::<Vec<_>>()
                .join(" ");
            let mut chars = sentence.chars();
            match chars.next() {
                Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn author() -> Author {
    Author::new(first_name(), last_name())
}

pub fn new_post() -> NewPost {
    NewPost::new(author(), words(), sentences()).expect("fixture post is valid")
}

/// `count` random posts, ready for a batch insert.
pub fn seed_data(count: usize) -> Vec<NewPost> {
    (0..count).map(|_| new_post()).collect()
}
