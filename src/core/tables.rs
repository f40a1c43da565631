//! Fixed membership tables for coarse geographic and occupational grouping.
//!
//! The groupings are deliberately hand-tuned and small; table updates must
//! not require touching scoring logic.

/// Metro clusters: canonical metro name -> constituent locality names.
pub const METRO_AREAS: &[(&str, &[&str])] = &[
    ("sydney", &["sydney", "parramatta", "bondi", "manly"]),
    ("melbourne", &["melbourne", "carlton", "richmond", "st kilda"]),
    ("brisbane", &["brisbane", "gold coast", "sunshine coast"]),
    ("delhi", &["delhi", "new delhi", "gurgaon", "noida", "ghaziabad"]),
    ("mumbai", &["mumbai", "navi mumbai", "thane"]),
];

/// Country membership sets, keyed by the cities users actually type.
pub const COUNTRY_CITIES: &[(&str, &[&str])] = &[
    ("australia", &["sydney", "melbourne", "brisbane", "canberra", "adelaide", "perth"]),
    ("india", &["delhi", "mumbai", "bangalore", "ahmedabad", "pune", "hyderabad"]),
    ("usa", &["new york", "san francisco", "los angeles", "chicago", "boston"]),
    ("uk", &["london", "manchester", "birmingham", "edinburgh"]),
];

/// Occupation groups matched by keyword containment.
pub const OCCUPATION_GROUPS: &[(&str, &[&str])] = &[
    ("technology", &["engineer", "developer", "software", "tech", "programmer"]),
    ("medicine", &["doctor", "physician", "surgeon", "medical"]),
    ("business", &["consultant", "analyst", "manager"]),
    ("education", &["teacher", "professor", "educator"]),
    ("finance", &["accountant", "finance", "banking"]),
];

#[inline]
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Check whether two locations fall inside the same metro cluster.
///
/// Membership is a case-insensitive substring test, so "Bondi Beach, Sydney"
/// and "Parramatta NSW" both land in the sydney cluster.
pub fn same_metro_area(loc_a: &str, loc_b: &str) -> bool {
    let a = loc_a.to_lowercase();
    let b = loc_b.to_lowercase();

    METRO_AREAS
        .iter()
        .any(|(_, suburbs)| contains_any(&a, suburbs) && contains_any(&b, suburbs))
}

/// Check whether two locations belong to the same country set.
pub fn same_country(loc_a: &str, loc_b: &str) -> bool {
    let a = loc_a.to_lowercase();
    let b = loc_b.to_lowercase();

    COUNTRY_CITIES
        .iter()
        .any(|(_, cities)| contains_any(&a, cities) && contains_any(&b, cities))
}

/// Check whether two occupations fall in the same coarse group.
pub fn similar_occupation(occ_a: &str, occ_b: &str) -> bool {
    let a = occ_a.to_lowercase();
    let b = occ_b.to_lowercase();

    OCCUPATION_GROUPS
        .iter()
        .any(|(_, keywords)| contains_any(&a, keywords) && contains_any(&b, keywords))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_metro_area() {
        assert!(same_metro_area("Parramatta, NSW", "Bondi"));
        assert!(same_metro_area("Gurgaon", "New Delhi, India"));
        assert!(!same_metro_area("Sydney", "Melbourne"));
        assert!(!same_metro_area("Canberra", "Sydney"));
    }

    #[test]
    fn test_same_country() {
        assert!(same_country("Canberra, Australia", "Sydney, Australia"));
        assert!(same_country("Mumbai", "Pune"));
        assert!(!same_country("Canberra", "Delhi"));
        assert!(!same_country("London", "Boston"));
    }

    #[test]
    fn test_similar_occupation() {
        assert!(similar_occupation("Software Engineer", "Backend Developer"));
        assert!(similar_occupation("Doctor", "Cardiac Surgeon"));
        assert!(similar_occupation("Management Consultant", "Business Analyst"));
        assert!(!similar_occupation("Software Engineer", "Doctor"));
    }

    #[test]
    fn test_unknown_locations_match_nothing() {
        assert!(!same_metro_area("Reykjavik", "Reykjavik suburbs"));
        assert!(!same_country("Reykjavik", "Oslo"));
    }

    #[test]
    fn test_tables_are_lowercase() {
        // Membership tests lowercase the input only, so table entries must
        // already be lowercase.
        for (metro, suburbs) in METRO_AREAS {
            assert_eq!(*metro, metro.to_lowercase());
            for s in *suburbs {
                assert_eq!(*s, s.to_lowercase());
            }
        }
        for (_, cities) in COUNTRY_CITIES {
            for c in *cities {
                assert_eq!(*c, c.to_lowercase());
            }
        }
        for (_, keywords) in OCCUPATION_GROUPS {
            for k in *keywords {
                assert_eq!(*k, k.to_lowercase());
            }
        }
    }
}
