//! Deterministic ranking of grouped results.
//!
//! Ordering is always (metric descending, key ascending). The top-1 selection is
//! explicit rather than "first row after sort", so tie-breaks never depend on
//! sort stability or input order.

use std::cmp::Ordering;

/// One ranked entry: a group key and the metric it was ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry<M> {
    /// The group key.
    pub key: String,
    /// The metric this entry was ranked by (a percentage or a raw count).
    pub metric: M,
}

/// Order `(key, metric)` pairs by metric descending, breaking ties by key ascending.
///
/// The resulting order is total and deterministic for finite metrics; reordering
/// the input never changes the output.
pub fn rank_descending<M, I>(entries: I) -> Vec<RankedEntry<M>>
where
    M: PartialOrd + Copy,
    I: IntoIterator<Item = (String, M)>,
{
    let mut ranked: Vec<RankedEntry<M>> = entries
        .into_iter()
        .map(|(key, metric)| RankedEntry { key, metric })
        .collect();
    ranked.sort_by(|a, b| {
        b.metric
            .partial_cmp(&a.metric)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.key.cmp(&b.key))
    });
    ranked
}

/// The top-ranked entry, or `None` for an empty table.
pub fn top<M>(ranked: &[RankedEntry<M>]) -> Option<&RankedEntry<M>> {
    ranked.first()
}

#[cfg(test)]
mod tests {
    use super::{rank_descending, top};

    #[test]
    fn ranks_by_metric_descending() {
        let ranked = rank_descending(vec![
            ("Canada".to_string(), 25.0),
            ("India".to_string(), 75.0),
            ("Peru".to_string(), 50.0),
        ]);
        let keys: Vec<&str> = ranked.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["India", "Peru", "Canada"]);
        assert_eq!(top(&ranked).unwrap().metric, 75.0);
    }

    #[test]
    fn ties_break_by_key_ascending() {
        let ranked = rank_descending(vec![
            ("US".to_string(), 50.0),
            ("India".to_string(), 50.0),
            ("Canada".to_string(), 10.0),
        ]);
        let keys: Vec<&str> = ranked.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["India", "US", "Canada"]);
        assert_eq!(top(&ranked).unwrap().key, "India");
    }

    #[test]
    fn result_is_independent_of_input_order() {
        let forward = rank_descending(vec![
            ("US".to_string(), 50.0),
            ("India".to_string(), 50.0),
        ]);
        let backward = rank_descending(vec![
            ("India".to_string(), 50.0),
            ("US".to_string(), 50.0),
        ]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn works_with_raw_counts() {
        let ranked = rank_descending(vec![
            ("Sales".to_string(), 3u64),
            ("Prof-specialty".to_string(), 7),
            ("Adm-clerical".to_string(), 3),
        ]);
        let keys: Vec<&str> = ranked.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["Prof-specialty", "Adm-clerical", "Sales"]);
    }

    #[test]
    fn top_of_empty_table_is_none() {
        let ranked = rank_descending(Vec::<(String, f64)>::new());
        assert!(top(&ranked).is_none());
    }
}
