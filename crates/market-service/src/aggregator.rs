use crate::models::markets::{CoinMarketRecord, MoversResult};

/// Rejections from [`top_movers`].
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MoversError {
    #[error("top_n must be non-negative, got {0}")]
    InvalidTopN(i64),
}

/// Reduces one market snapshot to its top movers.
///
/// Records missing the 24h change percentage or any required market
/// quantity cannot be compared and are left out of both lists. Both lists
/// are ranked independently over the same eligible set, so with few
/// eligible records a coin may legitimately show up as both a gainer and
/// a loser. Ties keep their input order; the snapshot itself is never
/// mutated.
pub fn top_movers(
    snapshot: &[CoinMarketRecord],
    top_n: i64,
) -> Result<MoversResult, MoversError> {
    if top_n < 0 {
        return Err(MoversError::InvalidTopN(top_n));
    }
    let top_n = top_n as usize;

    let eligible: Vec<&CoinMarketRecord> =
        snapshot.iter().filter(|record| record.is_rankable()).collect();

    // Vec::sort_by is stable, so equal percentages retain first-seen order
    // in both directions.
    let mut gainers = eligible.clone();
    gainers.sort_by(|a, b| {
        b.price_change_percentage_24h
            .cmp(&a.price_change_percentage_24h)
    });
    gainers.truncate(top_n);

    let mut losers = eligible;
    losers.sort_by(|a, b| {
        a.price_change_percentage_24h
            .cmp(&b.price_change_percentage_24h)
    });
    losers.truncate(top_n);

    Ok(MoversResult {
        top_gainers: gainers.into_iter().cloned().collect(),
        top_losers: losers.into_iter().cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn record(id: &str, change: Option<i64>) -> CoinMarketRecord {
        CoinMarketRecord {
            id: id.to_string(),
            symbol: id.to_string(),
            name: id.to_string(),
            current_price: Some(Decimal::ONE),
            market_cap: Some(Decimal::from(1_000_000)),
            volume_24h: Some(Decimal::from(10_000)),
            price_change_percentage_24h: change.map(Decimal::from),
            ..Default::default()
        }
    }

    fn ids(records: &[CoinMarketRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn ranks_gainers_descending_and_losers_ascending() {
        let snapshot = vec![
            record("mid", Some(5)),
            record("down", Some(-3)),
            record("up", Some(10)),
        ];

        let movers = top_movers(&snapshot, 2).unwrap();
        assert_eq!(ids(&movers.top_gainers), vec!["up", "mid"]);
        assert_eq!(ids(&movers.top_losers), vec!["down", "mid"]);
    }

    #[test]
    fn empty_snapshot_yields_empty_lists() {
        let movers = top_movers(&[], 5).unwrap();
        assert!(movers.top_gainers.is_empty());
        assert!(movers.top_losers.is_empty());
    }

    #[test]
    fn record_without_change_percentage_is_excluded() {
        let snapshot = vec![record("unquoted", None)];

        let movers = top_movers(&snapshot, 5).unwrap();
        assert!(movers.top_gainers.is_empty());
        assert!(movers.top_losers.is_empty());
    }

    #[test]
    fn malformed_record_is_excluded_not_fatal() {
        let mut broken = record("broken", Some(50));
        broken.current_price = None;
        let snapshot = vec![broken, record("ok", Some(2))];

        let movers = top_movers(&snapshot, 5).unwrap();
        assert_eq!(ids(&movers.top_gainers), vec!["ok"]);
        assert_eq!(ids(&movers.top_losers), vec!["ok"]);
    }

    #[test]
    fn negative_top_n_is_rejected() {
        let snapshot = vec![record("a", Some(1))];
        assert_eq!(
            top_movers(&snapshot, -1),
            Err(MoversError::InvalidTopN(-1))
        );
    }

    #[test]
    fn zero_top_n_yields_empty_lists() {
        let snapshot = vec![record("a", Some(1)), record("b", Some(-1))];

        let movers = top_movers(&snapshot, 0).unwrap();
        assert!(movers.top_gainers.is_empty());
        assert!(movers.top_losers.is_empty());
    }

    #[test]
    fn list_length_is_min_of_top_n_and_eligible() {
        let snapshot = vec![
            record("a", Some(1)),
            record("b", Some(2)),
            record("c", None),
        ];

        let movers = top_movers(&snapshot, 5).unwrap();
        assert_eq!(movers.top_gainers.len(), 2);
        assert_eq!(movers.top_losers.len(), 2);
    }

    #[test]
    fn ties_keep_first_seen_input_order() {
        let snapshot = vec![
            record("first", Some(5)),
            record("second", Some(5)),
            record("third", Some(1)),
        ];

        let movers = top_movers(&snapshot, 3).unwrap();
        assert_eq!(ids(&movers.top_gainers), vec!["first", "second", "third"]);
        assert_eq!(ids(&movers.top_losers), vec!["third", "first", "second"]);
    }

    #[test]
    fn small_eligible_set_may_appear_in_both_lists() {
        let snapshot = vec![record("a", Some(4)), record("b", Some(-4))];

        let movers = top_movers(&snapshot, 2).unwrap();
        assert_eq!(ids(&movers.top_gainers), vec!["a", "b"]);
        assert_eq!(ids(&movers.top_losers), vec!["b", "a"]);
    }

    #[test]
    fn snapshot_is_not_mutated_and_result_is_idempotent() {
        let snapshot = vec![
            record("mid", Some(5)),
            record("down", Some(-3)),
            record("up", Some(10)),
        ];
        let before = snapshot.clone();

        let first = top_movers(&snapshot, 2).unwrap();
        let second = top_movers(&snapshot, 2).unwrap();

        assert_eq!(snapshot, before);
        assert_eq!(first, second);
    }
}
