use std::str::FromStr;

use crate::error::CoreError;

use super::{Breed, BreedSize};

/// Size restriction applied by [`filter_breeds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeFilter {
    #[default]
    All,
    Only(BreedSize),
}

impl SizeFilter {
    pub fn matches(self, size: BreedSize) -> bool {
        match self {
            SizeFilter::All => true,
            SizeFilter::Only(wanted) => wanted == size,
        }
    }
}

impl FromStr for SizeFilter {
    type Err = CoreError;

    /// Accepts `"All"` or any [`BreedSize`] name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(SizeFilter::All);
        }
        s.parse().map(SizeFilter::Only)
    }
}

/// Derive the display view of a breed collection.
///
/// Keeps breeds whose name or origin contains `term` (case-insensitive; an
/// empty term keeps everything) and whose size passes `size`. Input order is
/// preserved.
pub fn filter_breeds<'a>(breeds: &'a [Breed], term: &str, size: SizeFilter) -> Vec<&'a Breed> {
    let needle = term.to_lowercase();
    breeds
        .iter()
        .filter(|b| b.matches_term(&needle) && size.matches(b.size))
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::breed::{seed_breeds, BreedFields};

    fn collection() -> Vec<Breed> {
        let mut breeds = seed_breeds();
        breeds.push(Breed::new(
            4,
            BreedFields {
                name: "Border Collie".into(),
                origin: "Scotland and England".into(),
                size: BreedSize::Medium,
                temperament: "Energetic".into(),
                life_span: "12-15 years".into(),
                description: "Herding dog.".into(),
            },
        ));
        breeds
    }

    fn names<'a>(hits: &[&'a Breed]) -> Vec<&'a str> {
        hits.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn empty_term_and_all_returns_everything_in_order() {
        let breeds = collection();
        let hits = filter_breeds(&breeds, "", SizeFilter::All);
        assert_eq!(hits.len(), breeds.len());
        assert!(hits.iter().zip(&breeds).all(|(hit, b)| hit.id == b.id));
    }

    #[test]
    fn term_matches_name_case_insensitively() {
        let breeds = collection();
        let hits = filter_breeds(&breeds, "GERMAN", SizeFilter::All);
        assert_eq!(names(&hits), vec!["German Shepherd"]);
    }

    #[test]
    fn term_matches_origin() {
        let breeds = collection();
        let hits = filter_breeds(&breeds, "scot", SizeFilter::All);
        assert_eq!(names(&hits), vec!["Golden Retriever", "Border Collie"]);
    }

    #[test]
    fn size_filter_narrows_matches() {
        let breeds = collection();
        let hits = filter_breeds(&breeds, "scot", SizeFilter::Only(BreedSize::Medium));
        assert_eq!(names(&hits), vec!["Border Collie"]);

        let large = filter_breeds(&breeds, "", SizeFilter::Only(BreedSize::Large));
        assert_eq!(names(&large), vec!["Golden Retriever", "German Shepherd"]);
    }

    #[test]
    fn no_match_is_empty() {
        let breeds = collection();
        assert!(filter_breeds(&breeds, "poodle", SizeFilter::All).is_empty());
        assert!(filter_breeds(&breeds, "france", SizeFilter::Only(BreedSize::Large)).is_empty());
    }

    #[test]
    fn every_hit_satisfies_both_predicates() {
        let breeds = collection();
        for term in ["", "e", "an", "DOG", "land"] {
            for filter in [
                SizeFilter::All,
                SizeFilter::Only(BreedSize::Small),
                SizeFilter::Only(BreedSize::Medium),
                SizeFilter::Only(BreedSize::Large),
            ] {
                let hits = filter_breeds(&breeds, term, filter);
                let needle = term.to_lowercase();
                let expected: Vec<&Breed> = breeds
                    .iter()
                    .filter(|b| {
                        (b.name.to_lowercase().contains(&needle)
                            || b.origin.to_lowercase().contains(&needle))
                            && filter.matches(b.size)
                    })
                    .collect();
                assert_eq!(hits, expected, "term={term:?} filter={filter:?}");
            }
        }
    }

    #[test]
    fn filter_is_repeatable() {
        let breeds = collection();
        let first = filter_breeds(&breeds, "g", SizeFilter::All);
        let second = filter_breeds(&breeds, "g", SizeFilter::All);
        assert_eq!(first, second);
    }

    #[test]
    fn size_filter_parses() {
        assert_eq!("All".parse::<SizeFilter>().unwrap(), SizeFilter::All);
        assert_eq!(
            "Small".parse::<SizeFilter>().unwrap(),
            SizeFilter::Only(BreedSize::Small)
        );
        assert_matches!("Tiny".parse::<SizeFilter>(), Err(CoreError::Validation(_)));
    }
}
