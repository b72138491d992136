use phf::phf_ordered_set;

/// Stat identifiers the aggregation scripts produce, in selector order
pub static KNOWN_STATS: phf::OrderedSet<&'static str> = phf_ordered_set! {
    "rs",
    "rs9",
    "ba",
    "ab",
    "ab9",
    "h",
    "h9",
    "hr",
    "hr9",
    "abhr",
    "so",
    "so9",
    "bb",
    "bb9",
    "obp",
    "rc",
    "babip",
    "ra",
    "ra9",
    "oppba",
    "oppab9",
    "opph",
    "opph9",
    "opphr",
    "opphr9",
    "oppabhr",
    "oppk",
    "oppk9",
    "oppbb",
    "oppbb9",
    "whip",
    "lob",
    "e",
    "fip",
    "rd",
    "rd9",
    "inningsplayed",
    "inningsgame",
    "wins",
    "losses",
    "winsbyrunrule",
    "lossesbyrunrule",
    "numseasons",
    "sweepsw",
    "sweepsl",
    "splits",
};

pub fn is_known_stat(stat: &str) -> bool {
    KNOWN_STATS.contains(stat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(KNOWN_STATS.len(), 46);
    }

    #[test]
    fn test_known_stats() {
        assert!(is_known_stat("ba"));
        assert!(is_known_stat("oppk9"));
        assert!(!is_known_stat("BA"));
        assert!(!is_known_stat("war"));
    }

    #[test]
    fn test_selector_order_is_kept() {
        let first: Vec<&str> = KNOWN_STATS.iter().take(3).copied().collect();
        assert_eq!(first, vec!["rs", "rs9", "ba"]);
    }
}
