use super::WallpaperRecord;

/// Select the records whose name or any tag contains `query`, ignoring case.
///
/// The empty query matches everything. Input order is preserved.
pub fn filter<'a>(records: &'a [WallpaperRecord], query: &str) -> Vec<&'a WallpaperRecord> {
    let needle = query.to_lowercase();
    records.iter().filter(|r| matches(r, &needle)).collect()
}

/// `needle` must already be lowercase.
pub(super) fn matches(record: &WallpaperRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn pair() -> Vec<WallpaperRecord> {
        vec![
            WallpaperRecord::new("Moon Art", "https://a", &["aesthetic moon", "moon"]),
            WallpaperRecord::new("Glass Guitar", "https://b", &["guitar", "glass"]),
        ]
    }

    fn names<'a>(records: &[&'a WallpaperRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn moon_matches_only_moon_art_in_any_case() {
        let records = pair();
        for query in ["moon", "MOON", "MoOn"] {
            assert_eq!(names(&filter(&records, query)), vec!["Moon Art"]);
        }
    }

    #[test]
    fn single_letter_matches_both() {
        let records = pair();
        assert_eq!(
            names(&filter(&records, "a")),
            vec!["Moon Art", "Glass Guitar"]
        );
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let catalog = Catalog::builtin();
        let all: Vec<&WallpaperRecord> = catalog.records().iter().collect();
        assert_eq!(filter(catalog.records(), ""), all);
    }

    #[test]
    fn tag_only_match_is_included() {
        let records = pair();
        assert_eq!(names(&filter(&records, "guit")), vec!["Glass Guitar"]);
        assert_eq!(names(&filter(&records, "aesthetic")), vec!["Moon Art"]);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(filter(&pair(), "sunset").is_empty());
    }

    #[test]
    fn result_is_ordered_subsequence_and_partitions_catalog() {
        let catalog = Catalog::builtin();
        let records = catalog.records();

        for query in ["", "a", "moon", "Aesthetic", "SUNSET", "house", "art", " ", "xyz"] {
            let result = filter(records, query);
            let needle = query.to_lowercase();

            // Subsequence: positions in the catalog are strictly increasing.
            let positions: Vec<usize> = result
                .iter()
                .map(|r| records.iter().position(|c| c == *r).expect("record from catalog"))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {query:?}");

            for record in records {
                let hit = record.name.to_lowercase().contains(&needle)
                    || record.tags.iter().any(|t| t.to_lowercase().contains(&needle));
                assert_eq!(
                    result.contains(&record),
                    hit,
                    "query {query:?} record {}",
                    record.name
                );
            }
        }
    }
}
