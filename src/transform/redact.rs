//! Synthetic replacement values for sensitive fields.
//!
//! Redaction replaces a value with a freshly generated one of the same
//! general shape (name-like or email-like). Outputs are random and carry
//! no relationship to the input; there is no recoverability and no
//! uniqueness guarantee across calls.

use rand::Rng;

/// Pool of first names for generated replacements.
const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael",
    "Linda", "William", "Elizabeth", "David", "Barbara", "Richard", "Susan",
    "Joseph", "Jessica", "Thomas", "Sarah", "Charles", "Karen", "Christopher",
    "Nancy", "Daniel", "Lisa", "Matthew", "Betty", "Anthony", "Margaret",
    "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul",
    "Emily", "Andrew", "Donna", "Joshua", "Michelle", "Kenneth", "Dorothy",
    "Kevin", "Carol", "Brian", "Amanda", "George", "Melissa", "Timothy",
    "Deborah", "Ronald", "Stephanie", "Edward", "Rebecca", "Jason", "Sharon",
    "Jeffrey", "Laura", "Ryan", "Cynthia", "Jacob", "Kathleen",
];

/// Pool of last names for generated replacements.
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller",
    "Davis", "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez",
    "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson", "Martin",
    "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez", "Clark",
    "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King",
    "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green",
    "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell",
    "Carter", "Roberts",
];

/// Pool of domains for generated email replacements.
const EMAIL_DOMAINS: &[&str] = &[
    "test.com", "example.com", "demo.net", "sample.org", "redacted.io",
];

fn pick<'a>(rng: &mut impl Rng, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Generate a random "First Last" replacement name.
pub fn redact_name() -> String {
    let mut rng = rand::thread_rng();
    let first = pick(&mut rng, FIRST_NAMES);
    let last = pick(&mut rng, LAST_NAMES);
    format!("{} {}", first, last)
}

/// Generate a random replacement email address.
///
/// The local part is 5 to 10 random lowercase letters; the domain comes
/// from [`EMAIL_DOMAINS`].
pub fn redact_email() -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(5..=10);
    let local: String = (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
    let domain = pick(&mut rng, EMAIL_DOMAINS);
    format!("{}@{}", local, domain)
}

/// Redact a value, auto-detecting whether it is a name or an email.
///
/// Any value containing '@' is treated as email-shaped. This is a
/// deliberate heuristic, not a validator.
pub fn redact(value: &str) -> String {
    if value.contains('@') {
        redact_email()
    } else {
        redact_name()
    }
}
