//! Home/away pairing of per-team rows into per-match rows.
//!
//! Two strategies:
//! - **Positional**: even rows are home sides, odd rows away sides, joined by
//!   their position within each partition. Requires an even row count.
//! - **Keyed**: rows sharing a match identifier form one match; the first row
//!   seen is home, the second away. Every match needs exactly two rows.

use std::collections::HashMap;
use tracing::info;

use super::models::{MatchRow, TeamGoal};
use crate::error::{AnalysisError, Result};

/// Pair rows by index parity (0/1, 2/3, ...).
///
/// An odd row count is rejected instead of truncating the trailing row.
pub fn pair_positional(records: Vec<TeamGoal>) -> Result<Vec<MatchRow>> {
    if records.len() % 2 == 1 {
        let index = records.len() - 1;
        let team = records[index].team.clone();
        return Err(AnalysisError::UnpairedRow { index, team });
    }

    let mut rows = Vec::with_capacity(records.len() / 2);
    let mut iter = records.into_iter();
    while let (Some(home), Some(away)) = (iter.next(), iter.next()) {
        rows.push(MatchRow::new(home, away)?);
    }

    info!("Paired {} matches by row position", rows.len());
    Ok(rows)
}

/// Pair rows on their `match_id`, keeping first-appearance order of matches.
///
/// Records without a match id are treated as invalid input.
pub fn pair_by_match_id(records: Vec<TeamGoal>) -> Result<Vec<MatchRow>> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<TeamGoal>> = HashMap::new();

    for (row, record) in records.into_iter().enumerate() {
        let id = match &record.match_id {
            Some(id) => id.clone(),
            None => return Err(AnalysisError::EmptyMatchId { row }),
        };
        let group = groups.entry(id.clone()).or_default();
        if group.is_empty() {
            order.push(id);
        }
        group.push(record);
    }

    let mut rows = Vec::with_capacity(order.len());
    for id in order {
        let group = groups.remove(&id).unwrap_or_default();
        match group.len() {
            2 => {
                let mut sides = group.into_iter();
                if let (Some(home), Some(away)) = (sides.next(), sides.next()) {
                    rows.push(MatchRow::new(home, away)?);
                }
            }
            1 => return Err(AnalysisError::IncompleteMatch(id)),
            n => {
                return Err(AnalysisError::OverfullMatch {
                    match_id: id,
                    rows: n,
                })
            }
        }
    }

    info!("Paired {} matches by match id", rows.len());
    Ok(rows)
}

/// The analysed column: total goals of each match, in match order.
pub fn total_goals(rows: &[MatchRow]) -> Vec<u32> {
    rows.iter().map(|r| r.total_goals).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(team: &str, goals: u32) -> TeamGoal {
        TeamGoal {
            team: team.into(),
            goals,
            match_id: None,
        }
    }

    fn keyed(team: &str, goals: u32, id: &str) -> TeamGoal {
        TeamGoal {
            team: team.into(),
            goals,
            match_id: Some(id.into()),
        }
    }

    // ── Positional ───────────────────────────────────────────────────────────

    #[test]
    fn two_matches_from_four_rows() {
        let rows =
            pair_positional(vec![rec("A", 2), rec("B", 1), rec("C", 0), rec("D", 3)]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].home_team, "A");
        assert_eq!(rows[0].away_team, "B");
        assert_eq!(rows[1].home_team, "C");
        assert_eq!(rows[1].away_team, "D");
        assert_eq!(total_goals(&rows), vec![3, 3]);
    }

    #[test]
    fn totals_are_home_plus_away_for_every_row() {
        let records: Vec<TeamGoal> = (0..20).map(|i| rec(&format!("T{i}"), i % 5)).collect();
        let rows = pair_positional(records).unwrap();
        assert_eq!(rows.len(), 10);
        for r in &rows {
            assert_eq!(r.total_goals, r.home_goals + r.away_goals);
        }
    }

    #[test]
    fn odd_row_count_is_rejected_naming_the_trailing_row() {
        let records = vec![rec("A", 1), rec("B", 1), rec("C", 0), rec("D", 2), rec("E", 4)];
        match pair_positional(records) {
            Err(AnalysisError::UnpairedRow { index, team }) => {
                assert_eq!(index, 4);
                assert_eq!(team, "E");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn overflowing_pair_is_rejected() {
        let err = pair_positional(vec![rec("A", u32::MAX), rec("B", 1)]).unwrap_err();
        assert!(matches!(err, AnalysisError::GoalOverflow { .. }));
    }

    #[test]
    fn empty_input_pairs_to_nothing() {
        assert!(pair_positional(Vec::new()).unwrap().is_empty());
    }

    // ── Keyed ────────────────────────────────────────────────────────────────

    #[test]
    fn keyed_pairing_matches_positional_on_ordered_data() {
        let keyed_rows = pair_by_match_id(vec![
            keyed("A", 2, "1"),
            keyed("B", 1, "1"),
            keyed("C", 0, "2"),
            keyed("D", 3, "2"),
        ])
        .unwrap();
        let positional =
            pair_positional(vec![rec("A", 2), rec("B", 1), rec("C", 0), rec("D", 3)]).unwrap();
        assert_eq!(keyed_rows, positional);
    }

    #[test]
    fn keyed_pairing_handles_interleaved_rows() {
        let rows = pair_by_match_id(vec![
            keyed("A", 2, "1"),
            keyed("C", 0, "2"),
            keyed("B", 1, "1"),
            keyed("D", 3, "2"),
        ])
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].home_team.as_str(), rows[0].away_team.as_str()), ("A", "B"));
        assert_eq!((rows[1].home_team.as_str(), rows[1].away_team.as_str()), ("C", "D"));
    }

    #[test]
    fn keyed_pairing_rejects_single_sided_match() {
        let err = pair_by_match_id(vec![
            keyed("A", 2, "1"),
            keyed("B", 1, "1"),
            keyed("C", 0, "2"),
        ])
        .unwrap_err();
        assert!(matches!(err, AnalysisError::IncompleteMatch(id) if id == "2"));
    }

    #[test]
    fn keyed_pairing_rejects_three_sided_match() {
        let err = pair_by_match_id(vec![
            keyed("A", 2, "1"),
            keyed("B", 1, "1"),
            keyed("C", 0, "1"),
        ])
        .unwrap_err();
        assert!(matches!(err, AnalysisError::OverfullMatch { rows: 3, .. }));
    }

    #[test]
    fn keyed_pairing_needs_ids() {
        let err = pair_by_match_id(vec![keyed("A", 2, "1"), rec("B", 1)]).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyMatchId { row: 1 }));
    }
}
