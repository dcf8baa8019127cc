//! Computations behind the competitions analysis view.

use std::collections::BTreeMap;

use super::model::{CompetitionRow, CompetitionTable, MedalCounts};

/// Rows of one competition, in table order.
pub fn competition_rows<'a>(
    table: &'a CompetitionTable,
    competition: &str,
) -> Vec<&'a CompetitionRow> {
    table
        .rows
        .iter()
        .filter(|r| r.competition == competition)
        .collect()
}

/// The `n` best rows of a competition by `total`, descending. Ties keep table order.
pub fn leaderboard<'a>(
    table: &'a CompetitionTable,
    competition: &str,
    n: usize,
) -> Vec<&'a CompetitionRow> {
    let mut rows = competition_rows(table, competition);
    rows.sort_by_key(|r| std::cmp::Reverse(r.total));
    rows.truncate(n);
    rows
}

/// Rows of one country across all competitions, in table order.
pub fn country_rows<'a>(table: &'a CompetitionTable, noc: &str) -> Vec<&'a CompetitionRow> {
    table.rows.iter().filter(|r| r.noc == noc).collect()
}

/// One country's summed results and its share of all medals.
#[derive(Debug, Clone, PartialEq)]
pub struct Efficiency<'a> {
    pub noc: &'a str,
    pub counts: MedalCounts,
    /// `counts.total` as a percentage of the grand total.
    pub pct: f64,
}

/// Group by country and express each country's total as a share of the grand
/// total. Countries come out in ascending code order. A zero grand total
/// yields 0% everywhere.
pub fn efficiency_by_country(table: &CompetitionTable) -> Vec<Efficiency<'_>> {
    let mut groups: BTreeMap<&str, MedalCounts> = BTreeMap::new();
    for r in &table.rows {
        let entry = groups.entry(r.noc.as_str()).or_default();
        *entry = *entry + r.counts();
    }

    let grand = groups
        .values()
        .fold(0u64, |acc, c| acc.saturating_add(c.total));
    groups
        .into_iter()
        .map(|(noc, counts)| Efficiency {
            noc,
            counts,
            pct: if grand == 0 {
                0.0
            } else {
                counts.total as f64 / grand as f64 * 100.0
            },
        })
        .collect()
}

/// Sum of `total` per competition, in ascending competition order.
pub fn competition_totals(table: &CompetitionTable) -> Vec<(&str, u64)> {
    let mut groups: BTreeMap<&str, u64> = BTreeMap::new();
    for r in &table.rows {
        let sum = groups.entry(r.competition.as_str()).or_default();
        *sum = sum.saturating_add(r.total);
    }
    groups.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        competition: &str,
        noc: &str,
        rank: u32,
        gold: u64,
        silver: u64,
        bronze: u64,
    ) -> CompetitionRow {
        CompetitionRow {
            competition: competition.into(),
            noc: noc.into(),
            rank,
            gold,
            silver,
            bronze,
            total: gold + silver + bronze,
        }
    }

    fn sample() -> CompetitionTable {
        CompetitionTable::new(vec![
            row("Judo", "JPN", 1, 3, 1, 1),
            row("Judo", "FRA", 2, 2, 1, 0),
            row("Swimming", "USA", 1, 8, 9, 11),
            row("Judo", "KOR", 3, 0, 2, 1),
            row("Archery", "KOR", 1, 5, 1, 1),
            row("Swimming", "FRA", 4, 1, 2, 1),
        ])
    }

    fn totals(rows: &[&CompetitionRow]) -> Vec<u64> {
        rows.iter().map(|r| r.total).collect()
    }

    #[test]
    fn test_competition_rows() {
        let table = sample();
        let nocs: Vec<_> = competition_rows(&table, "Judo")
            .iter()
            .map(|r| r.noc.as_str())
            .collect();
        assert_eq!(nocs, vec!["JPN", "FRA", "KOR"]);
        assert!(competition_rows(&table, "Fencing").is_empty());
    }

    #[test]
    fn test_leaderboard_ties_keep_row_order() {
        let table = sample();
        let top = leaderboard(&table, "Judo", 3);
        assert_eq!(totals(&top), vec![5, 3, 3]);
        assert_eq!(top[1].noc, "FRA");
        assert_eq!(top[2].noc, "KOR");
    }

    #[test]
    fn test_leaderboard_fewer_rows_than_n() {
        let table = sample();
        let top = leaderboard(&table, "Swimming", 3);
        assert_eq!(totals(&top), vec![28, 4]);
        assert!(leaderboard(&table, "Fencing", 3).is_empty());
    }

    #[test]
    fn test_country_rows() {
        let table = sample();
        let comps: Vec<_> = country_rows(&table, "KOR")
            .iter()
            .map(|r| r.competition.as_str())
            .collect();
        assert_eq!(comps, vec!["Judo", "Archery"]);
    }

    #[test]
    fn test_efficiency_groups_and_sums_to_100() {
        let table = sample();
        let eff = efficiency_by_country(&table);
        let nocs: Vec<_> = eff.iter().map(|e| e.noc).collect();
        assert_eq!(nocs, vec!["FRA", "JPN", "KOR", "USA"]);
        assert_eq!(eff[0].counts, MedalCounts::new(3, 3, 1, 7));

        let sum: f64 = eff.iter().map(|e| e.pct).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        let grand = 5 + 3 + 28 + 3 + 7 + 4;
        assert!((eff[3].pct - 28.0 / grand as f64 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_zero_grand_total() {
        let table = CompetitionTable::new(vec![row("Judo", "JPN", 1, 0, 0, 0)]);
        assert_eq!(efficiency_by_country(&table)[0].pct, 0.0);
        assert!(efficiency_by_country(&CompetitionTable::default()).is_empty());
    }

    #[test]
    fn test_huge_totals_saturate() {
        let mut a = row("Judo", "JPN", 1, 0, 0, 0);
        a.total = 1 << 63;
        let b = CompetitionRow {
            noc: "FRA".into(),
            ..a.clone()
        };
        let table = CompetitionTable::new(vec![a, b]);
        assert_eq!(competition_totals(&table), vec![("Judo", u64::MAX)]);
        let eff = efficiency_by_country(&table);
        assert!(eff.iter().all(|e| e.pct.is_finite()));
    }

    #[test]
    fn test_competition_totals() {
        let table = sample();
        assert_eq!(
            competition_totals(&table),
            vec![("Archery", 7), ("Judo", 11), ("Swimming", 32)]
        );
    }
}
