//! Fake Row Generator
//!
//! Synthetic grid rows generated from word lists. Every row is produced by
//! a `SmallRng` seeded with the row index, so `id_{n}` always carries the
//! same field values. Also hosts the scroll-triggered batch loader, which
//! simulates network latency before resolving.

use gloo_timers::future::TimeoutFuture;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::Row;

/// Simulated latency of one batch load, in milliseconds.
const BATCH_LOAD_DELAY_MS: u32 = 1000;

const TITLES: &[&str] = &["Mr.", "Mrs.", "Ms.", "Dr.", "Miss"];

const FIRST_NAMES: &[&str] = &[
    "Oliver", "Amelia", "George", "Isla", "Harry", "Ava", "Jack", "Emily", "Charlie", "Sophia",
    "Thomas", "Grace", "Oscar", "Lily", "William", "Freya", "James", "Poppy", "Henry", "Daisy",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Johnson", "Davies", "Robinson",
    "Wright", "Thompson", "Evans", "Walker", "White", "Roberts", "Green", "Hall", "Wood", "Clarke",
    "Harris",
];

const STREETS: &[&str] = &[
    "High Street", "Station Road", "Church Lane", "Victoria Road", "Green Lane", "Manor Road",
    "Kings Road", "Queensway", "Mill Lane", "Park Avenue", "The Crescent", "Windsor Close",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

const BUZZ_VERBS: &[&str] = &[
    "empower", "streamline", "aggregate", "synthesize", "orchestrate", "incentivize", "leverage",
    "monetize", "productize", "syndicate",
];

const BUZZ_ADJECTIVES: &[&str] = &[
    "scalable", "frictionless", "holistic", "dynamic", "seamless", "granular", "turn-key",
    "end-to-end", "mission-critical", "cross-platform",
];

const BUZZ_NOUNS: &[&str] = &[
    "paradigms", "channels", "deliverables", "synergies", "platforms", "architectures", "metrics",
    "ecosystems", "interfaces", "portals",
];

const CATCH_PREFIXES: &[&str] = &[
    "Adaptive", "Balanced", "Configurable", "Distributed", "Ergonomic", "Focused", "Integrated",
    "Networked", "Profound", "Reactive",
];

const CATCH_SUFFIXES: &[&str] = &[
    "framework", "workforce", "middleware", "methodology", "throughput", "knowledge base",
    "installation", "benchmark", "capability", "toolset",
];

const COMPANY_SUFFIXES: &[&str] = &["Ltd", "Group", "Holdings", "and Sons", "Partners", "PLC"];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "eiusmod",
    "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "veniam", "nostrud", "aliquip",
    "commodo",
];

fn pick<'a>(rng: &mut SmallRng, words: &[&'a str]) -> &'a str {
    // Word lists are non-empty consts, choose never returns None here.
    words.choose(rng).copied().unwrap_or("")
}

fn lorem_words(rng: &mut SmallRng, count: usize) -> Vec<&'static str> {
    (0..count).map(|_| pick(rng, LOREM)).collect()
}

fn past_date(rng: &mut SmallRng) -> String {
    // en_GB style, day first
    let day = rng.gen_range(1..=28);
    let month = rng.gen_range(1..=12);
    let year = rng.gen_range(2023..=2025);
    format!("{:02}/{:02}/{}", day, month, year)
}

fn uk_zip(rng: &mut SmallRng) -> String {
    const LETTERS: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXY";
    let letter = |rng: &mut SmallRng| LETTERS[rng.gen_range(0..LETTERS.len())] as char;
    format!(
        "{}{}{} {}{}{}",
        letter(rng),
        letter(rng),
        rng.gen_range(1..=9),
        rng.gen_range(1..=9),
        letter(rng),
        letter(rng),
    )
}

/// Generate the row at `index`. Deterministic per index.
pub fn create_fake_row(index: usize) -> Row {
    let mut rng = SmallRng::seed_from_u64(index as u64);
    let id = format!("id_{}", index);
    let first_name = pick(&mut rng, FIRST_NAMES).to_string();
    let last_name = pick(&mut rng, LAST_NAMES).to_string();
    let email = format!(
        "{}.{}{}@{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        rng.gen_range(1..100),
        pick(&mut rng, EMAIL_DOMAINS),
    );
    let street = format!("{} {}", rng.gen_range(1..200), pick(&mut rng, STREETS));
    let company_name = format!("{} {}", pick(&mut rng, LAST_NAMES), pick(&mut rng, COMPANY_SUFFIXES));
    let bs = format!(
        "{} {} {}",
        pick(&mut rng, BUZZ_VERBS),
        pick(&mut rng, BUZZ_ADJECTIVES),
        pick(&mut rng, BUZZ_NOUNS),
    );
    let catch_phrase = format!(
        "{} {} {}",
        pick(&mut rng, CATCH_PREFIXES),
        pick(&mut rng, BUZZ_ADJECTIVES),
        pick(&mut rng, CATCH_SUFFIXES),
    );
    let words = lorem_words(&mut rng, 3).join(" ");
    let sentence_len = rng.gen_range(6..=9);
    let mut sentence = lorem_words(&mut rng, sentence_len).join(" ");
    if let Some(first) = sentence.get(..1) {
        sentence = format!("{}{}.", first.to_uppercase(), &sentence[1..]);
    }

    Row {
        avatar: format!("https://i.pravatar.cc/40?u={}", id),
        id,
        email,
        title: pick(&mut rng, TITLES).to_string(),
        first_name,
        last_name,
        street,
        zip_code: uk_zip(&mut rng),
        date: past_date(&mut rng),
        bs,
        catch_phrase,
        company_name,
        words,
        sentence,
    }
}

/// Rows `0..number_of_rows`, the initial grid content.
pub fn create_rows(number_of_rows: usize) -> Vec<Row> {
    (0..number_of_rows).map(create_fake_row).collect()
}

/// `count` rows starting at index `length` (the store length at request time).
pub fn create_row_batch(count: usize, length: usize) -> Vec<Row> {
    (length..length + count).map(create_fake_row).collect()
}

/// Scroll-triggered batch load: resolves after a fixed simulated delay.
/// No in-flight guard; overlapping calls each append their own batch.
pub async fn load_more_rows(count: usize, length: usize) -> Vec<Row> {
    TimeoutFuture::new(BATCH_LOAD_DELAY_MS).await;
    create_row_batch(count, length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_deterministic_per_index() {
        assert_eq!(create_fake_row(3), create_fake_row(3));
        assert_ne!(create_fake_row(3).id, create_fake_row(4).id);
    }

    #[test]
    fn test_create_rows_ids_are_sequential() {
        let rows = create_rows(5);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["id_0", "id_1", "id_2", "id_3", "id_4"]);
    }

    #[test]
    fn test_batch_continues_from_length() {
        let batch = create_row_batch(3, 10);
        let ids: Vec<&str> = batch.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["id_10", "id_11", "id_12"]);
    }

    #[test]
    fn test_generated_fields_are_populated() {
        let row = create_fake_row(0);
        assert!(row.email.contains('@'));
        assert!(!row.first_name.is_empty());
        assert!(row.sentence.ends_with('.'));
        assert!(row.avatar.contains("id_0"));
    }
}
