//! Pseudo-random fixture generators
//!
//! Opaque generators producing sufficiently-unique, constraint-satisfying
//! strings for disposable identities and content. Uniqueness comes from
//! random alphanumeric suffixes; nothing here talks to the network.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::types::Role;

fn alphanumeric(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn alphabetic(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

fn capitalized(len: usize) -> String {
    let word = alphabetic(len);
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => word,
    }
}

fn mixed_case(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| {
            let c = char::from(rng.gen_range(b'a'..=b'z'));
            if rng.gen_bool(0.5) {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// Role-prefixed unique username
///
/// Letters only: the registration confirmation is scraped for digits, so a
/// digit in the username would corrupt the recovered id.
pub fn username(role: Role) -> String {
    let prefix = match role {
        Role::Admin => "admin",
        Role::User => "user",
    };
    format!("{}{}", prefix, mixed_case(8))
}

pub fn email() -> String {
    format!("{}@{}.com", alphabetic(10), alphabetic(6))
}

pub fn password() -> String {
    // Letters, digits and a symbol to satisfy the service's password rules
    format!("{}{}!", alphanumeric(8), rand::thread_rng().gen_range(10..100))
}

pub fn first_name() -> String {
    capitalized(7)
}

pub fn last_name() -> String {
    capitalized(9)
}

pub fn city() -> String {
    const CITIES: [&str; 8] = [
        "Sofia", "Lisbon", "Valencia", "Gdansk", "Tallinn", "Graz", "Porto", "Leuven",
    ];
    let pick = rand::thread_rng().gen_range(0..CITIES.len());
    CITIES[pick].to_string()
}

/// Birth date in `YYYY-MM-DD` form
pub fn birth_date() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{:04}-{:02}-{:02}",
        rng.gen_range(1950..2004),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28)
    )
}

pub fn personal_review() -> String {
    format!("Working on {} since {}.", alphabetic(12), alphanumeric(6))
}

pub fn picture_url() -> String {
    format!("https://images.example.com/{}.png", alphanumeric(12))
}

pub fn skill_name() -> String {
    format!("skill-{}", alphanumeric(10))
}

pub fn post_content() -> String {
    format!("Post about {} ({})", alphabetic(10), alphanumeric(8))
}

pub fn comment_content() -> String {
    format!("Comment on {} ({})", alphabetic(10), alphanumeric(8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames_are_role_prefixed_and_unique() {
        let a = username(Role::Admin);
        let b = username(Role::Admin);
        assert!(a.starts_with("admin"));
        assert!(username(Role::User).starts_with("user"));
        assert_ne!(a, b);
    }

    #[test]
    fn usernames_carry_no_digits() {
        for _ in 0..32 {
            let name = username(Role::User);
            assert!(name.chars().all(|c| c.is_ascii_alphabetic()), "{name}");
        }
    }

    #[test]
    fn emails_look_like_emails() {
        let e = email();
        assert!(e.contains('@'));
        assert!(e.ends_with(".com"));
    }

    #[test]
    fn birth_dates_are_iso_shaped() {
        let date = birth_date();
        assert_eq!(date.len(), 10);
        let parts: Vec<&str> = date.split('-').collect();
        assert_eq!(parts.len(), 3);
        let year: u32 = parts[0].parse().unwrap();
        assert!((1950..2004).contains(&year));
    }

    #[test]
    fn names_are_capitalized() {
        let name = first_name();
        assert!(name.chars().next().unwrap().is_ascii_uppercase());
        assert!(name.chars().skip(1).all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn generated_content_is_unique() {
        assert_ne!(post_content(), post_content());
        assert_ne!(comment_content(), comment_content());
        assert_ne!(skill_name(), skill_name());
    }
}
