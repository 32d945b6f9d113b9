//! Deterministic identity string generation using curated lists.
//!
//! Stand-in for a faker library: names (conditioned on gender),
//! emails, phone numbers, postal addresses, dates, and UUID tokens.
//! Everything draws from the run's StreamRng, so identity fields are
//! reproducible under the same seed like every other field.

use crate::rng::StreamRng;
use crate::types::Gender;
use chrono::{Duration, NaiveDate};

pub struct IdentityGenerator;

impl IdentityGenerator {
    /// Full name conditioned on gender. Non-binary and undisclosed
    /// genders fall back to the gender-neutral list.
    pub fn full_name(gender: Gender, rng: &mut StreamRng) -> String {
        let first = Self::first_name(gender, rng);
        let last = Self::pick(Self::last_names(), rng);
        format!("{} {}", first, last)
    }

    fn first_name(gender: Gender, rng: &mut StreamRng) -> &'static str {
        let pool = match gender {
            Gender::Female => Self::female_first_names(),
            Gender::Male => Self::male_first_names(),
            Gender::NonBinary | Gender::Undisclosed => Self::neutral_first_names(),
        };
        Self::pick(pool, rng)
    }

    /// Email independent of the donor's name, faker-style.
    pub fn email(rng: &mut StreamRng) -> String {
        let user = Self::pick(Self::email_users(), rng);
        let number = rng.next_u64_below(100);
        let domain = Self::pick(Self::email_domains(), rng);
        format!("{}{:02}@{}", user, number, domain)
    }

    pub fn phone(rng: &mut StreamRng) -> String {
        let area = 200 + rng.next_u64_below(790);
        let prefix = 200 + rng.next_u64_below(790);
        let line = rng.next_u64_below(10_000);
        format!("({}) {}-{:04}", area, prefix, line)
    }

    /// Single-line postal address, comma-separated.
    pub fn address(rng: &mut StreamRng) -> String {
        let number = 1 + rng.next_u64_below(9_899);
        let street = Self::pick(Self::street_names(), rng);
        let suffix = Self::pick(Self::street_suffixes(), rng);
        let (city, state) = Self::cities()[rng.next_u64_below(Self::cities().len() as u64) as usize];
        let zip = 10_000 + rng.next_u64_below(89_999);
        format!("{} {} {}, {}, {} {}", number, street, suffix, city, state, zip)
    }

    /// Uniform date in [start, end], inclusive on both ends.
    pub fn date_between(start: NaiveDate, end: NaiveDate, rng: &mut StreamRng) -> NaiveDate {
        assert!(start <= end, "date_between: start after end");
        let span_days = (end - start).num_days() as u64;
        start + Duration::days(rng.next_u64_below(span_days + 1) as i64)
    }

    /// Opaque globally-unique donation token: a v4 UUID built from
    /// stream bytes rather than the platform RNG.
    pub fn donation_token(rng: &mut StreamRng) -> String {
        uuid::Builder::from_random_bytes(rng.bytes16())
            .into_uuid()
            .to_string()
    }

    fn pick(pool: &'static [&'static str], rng: &mut StreamRng) -> &'static str {
        pool[rng.next_u64_below(pool.len() as u64) as usize]
    }

    fn female_first_names() -> &'static [&'static str] {
        &[
            "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Susan", "Jessica", "Sarah",
            "Karen", "Lisa", "Nancy", "Sandra", "Ashley", "Kimberly", "Emily", "Donna",
            "Michelle", "Carol", "Amanda", "Melissa", "Stephanie", "Rebecca", "Sharon", "Laura",
            "Cynthia", "Amy", "Angela", "Anna", "Pamela", "Emma", "Nicole", "Samantha",
            "Katherine", "Christine", "Rachel", "Carolyn", "Maria", "Heather", "Diane", "Julie",
            "Olivia", "Victoria", "Kelly", "Lauren", "Christina", "Megan", "Andrea", "Hannah",
            "Lucia", "Camila", "Valentina", "Sofia", "Isabela", "Fernanda", "Beatriz", "Ana",
        ]
    }

    fn male_first_names() -> &'static [&'static str] {
        &[
            "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
            "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark",
            "Steven", "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian", "George",
            "Timothy", "Edward", "Jason", "Jeffrey", "Ryan", "Jacob", "Nicholas", "Eric",
            "Jonathan", "Stephen", "Justin", "Scott", "Brandon", "Benjamin", "Samuel",
            "Alexander", "Patrick", "Jack", "Dennis", "Tyler", "Aaron", "Jose", "Adam",
            "Nathan", "Henry", "Diego", "Luis", "Carlos", "Miguel", "Rafael", "Mateo",
            "Santiago", "Joao",
        ]
    }

    fn neutral_first_names() -> &'static [&'static str] {
        &[
            "Alex", "Avery", "Cameron", "Casey", "Charlie", "Dakota", "Drew", "Elliot",
            "Emerson", "Finley", "Harper", "Hayden", "Jamie", "Jordan", "Kai", "Morgan",
            "Parker", "Quinn", "Reese", "Riley", "River", "Rowan", "Sage", "Taylor",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
            "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
            "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
            "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill",
            "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell",
            "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner", "Diaz",
            "Silva", "Santos", "Oliveira", "Souza", "Pereira", "Costa", "Fernandez", "Castro",
            "Vargas", "Romero", "Medina", "Reyes", "Morales", "Ortiz", "Delgado", "Vega",
            "Patel", "Kim", "Chen", "Tran", "Murphy", "O'Brien", "Kelly", "Sullivan",
            "Walsh", "Hughes",
        ]
    }

    fn email_users() -> &'static [&'static str] {
        &[
            "wildfan", "naturelover", "trailwalker", "greenheart", "foxfriend", "riverkeeper",
            "birdwatcher", "mountainair", "oakgrove", "meadowlark", "pinebranch", "wavecrest",
            "duskowl", "ferngully", "stonepath", "willowbend", "clearcreek", "mosslane",
            "sunfield", "northstar",
        ]
    }

    fn email_domains() -> &'static [&'static str] {
        &[
            "gmail.com",
            "yahoo.com",
            "outlook.com",
            "hotmail.com",
            "icloud.com",
            "aol.com",
        ]
    }

    fn street_names() -> &'static [&'static str] {
        &[
            "Oak", "Maple", "Cedar", "Pine", "Elm", "Willow", "Birch", "Juniper", "Magnolia",
            "Sycamore", "Chestnut", "Aspen", "Laurel", "Hawthorn", "Cypress", "Redwood",
            "Main", "Park", "Lake", "Hill", "River", "Meadow", "Sunset", "Prairie",
        ]
    }

    fn street_suffixes() -> &'static [&'static str] {
        &["St", "Ave", "Blvd", "Dr", "Ln", "Rd", "Ct", "Way"]
    }

    fn cities() -> &'static [(&'static str, &'static str)] {
        &[
            ("Portland", "OR"),
            ("Austin", "TX"),
            ("Denver", "CO"),
            ("Madison", "WI"),
            ("Asheville", "NC"),
            ("Burlington", "VT"),
            ("Boulder", "CO"),
            ("Eugene", "OR"),
            ("Santa Fe", "NM"),
            ("Missoula", "MT"),
            ("Ithaca", "NY"),
            ("Ann Arbor", "MI"),
            ("Tucson", "AZ"),
            ("Olympia", "WA"),
            ("Duluth", "MN"),
            ("Flagstaff", "AZ"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn identity_generation_is_deterministic() {
        let mut a = StreamRng::new(12345);
        let mut b = StreamRng::new(12345);
        assert_eq!(
            IdentityGenerator::full_name(Gender::Female, &mut a),
            IdentityGenerator::full_name(Gender::Female, &mut b),
        );
        assert_eq!(
            IdentityGenerator::email(&mut a),
            IdentityGenerator::email(&mut b)
        );
        assert_eq!(
            IdentityGenerator::donation_token(&mut a),
            IdentityGenerator::donation_token(&mut b)
        );
    }

    #[test]
    fn full_names_have_two_parts() {
        let mut rng = StreamRng::new(9);
        for gender in Gender::ALL {
            for _ in 0..50 {
                let name = IdentityGenerator::full_name(gender, &mut rng);
                assert!(
                    name.split_whitespace().count() >= 2,
                    "name should have first and last part: {name}"
                );
            }
        }
    }

    #[test]
    fn date_between_respects_bounds() {
        let mut rng = StreamRng::new(13);
        let start = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        for _ in 0..1_000 {
            let d = IdentityGenerator::date_between(start, end, &mut rng);
            assert!(d >= start && d <= end, "date out of bounds: {d}");
        }
    }

    #[test]
    fn date_between_handles_single_day_window() {
        let mut rng = StreamRng::new(13);
        let day = NaiveDate::from_ymd_opt(2023, 7, 4).unwrap();
        assert_eq!(IdentityGenerator::date_between(day, day, &mut rng), day);
    }

    #[test]
    fn donation_tokens_are_unique() {
        let mut rng = StreamRng::new(42);
        let tokens: std::collections::HashSet<String> = (0..5_000)
            .map(|_| IdentityGenerator::donation_token(&mut rng))
            .collect();
        assert_eq!(tokens.len(), 5_000, "duplicate donation token generated");
    }
}
