//! Computations behind the medal analysis view. Every function reads the
//! full table and returns a fresh derived view; nothing is cached.

use super::model::{Medal, MedalCounts, MedalRow, MedalTable};
use super::stats::pearson;

/// Percentage split of one team's medals.
#[derive(Debug, Clone, PartialEq)]
pub struct MedalShare<'a> {
    pub team: &'a str,
    /// Gold, silver and bronze percentages in [`Medal::ALL`] order.
    pub pct: [f64; 3],
}

/// Per-team medal percentages, in table order.
pub fn medal_shares(table: &MedalTable) -> Vec<MedalShare<'_>> {
    table
        .rows
        .iter()
        .map(|r| MedalShare {
            team: &r.team,
            pct: r.counts().shares(),
        })
        .collect()
}

/// Rows of the selected teams, in table order. An empty selection yields no rows.
pub fn compare_teams<'a>(table: &'a MedalTable, selected: &[String]) -> Vec<&'a MedalRow> {
    table
        .rows
        .iter()
        .filter(|r| selected.iter().any(|s| *s == r.team))
        .collect()
}

/// Pairwise Pearson correlation of the gold/silver/bronze columns.
/// `None` marks an undefined coefficient (constant column or < 2 rows).
pub type CorrelationMatrix = [[Option<f64>; 3]; 3];

pub fn correlation_matrix(table: &MedalTable) -> CorrelationMatrix {
    let columns = Medal::ALL.map(|m| {
        table
            .rows
            .iter()
            .map(|r| r.counts().get(m) as f64)
            .collect::<Vec<_>>()
    });
    std::array::from_fn(|i| std::array::from_fn(|j| pearson(&columns[i], &columns[j])))
}

/// One wedge of a pie.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub medal: Medal,
    pub count: u64,
    /// Fraction of the whole, in `[0, 1]`.
    pub fraction: f64,
}

/// What the single-country pie can show.
#[derive(Debug, Clone, PartialEq)]
pub enum Pie {
    /// The team isn't in the table.
    Missing,
    /// The team has no medals; there is nothing to draw.
    Empty,
    Slices([Slice; 3]),
}

/// Pie of the selected team's medal counts. Fractions come from the three
/// medal counts themselves, not from the `total` column.
pub fn pie_for_team(table: &MedalTable, team: &str) -> Pie {
    let Some(row) = table.find(team) else {
        return Pie::Missing;
    };
    let counts = row.counts();
    let sum = Medal::ALL
        .iter()
        .fold(0u64, |acc, &m| acc.saturating_add(counts.get(m)));
    if sum == 0 {
        return Pie::Empty;
    }
    Pie::Slices(Medal::ALL.map(|medal| Slice {
        medal,
        count: counts.get(medal),
        fraction: counts.get(medal) as f64 / sum as f64,
    }))
}

/// The `n` rows with the most medals of `medal`, descending. Ties keep table order.
pub fn top_by_medal(table: &MedalTable, medal: Medal, n: usize) -> Vec<&MedalRow> {
    let mut rows: Vec<&MedalRow> = table.rows.iter().collect();
    // sort_by_key is stable
    rows.sort_by_key(|r| std::cmp::Reverse(r.counts().get(medal)));
    rows.truncate(n);
    rows
}

/// Column-wise sums over all teams.
pub fn column_totals(table: &MedalTable) -> MedalCounts {
    table.rows.iter().map(MedalRow::counts).sum()
}

/// The team holding the most medals of one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Leader<'a> {
    pub medal: Medal,
    pub team: &'a str,
    pub count: u64,
}

/// Leader per medal kind. When several teams share the maximum, the first one
/// in table order wins. `None` only for an empty table.
pub fn medal_leaders(table: &MedalTable) -> [Option<Leader<'_>>; 3] {
    Medal::ALL.map(|medal| {
        // Iterator::max_by_key returns the *last* maximum, so fold by hand.
        table.rows.iter().fold(None::<Leader>, |best, r| {
            let count = r.counts().get(medal);
            match best {
                Some(b) if b.count >= count => Some(b),
                _ => Some(Leader {
                    medal,
                    team: &r.team,
                    count,
                }),
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(team: &str, gold: u64, silver: u64, bronze: u64) -> MedalRow {
        MedalRow {
            team: team.into(),
            gold,
            silver,
            bronze,
            total: gold + silver + bronze,
        }
    }

    fn sample() -> MedalTable {
        MedalTable::new(vec![
            row("Alpha", 3, 1, 0),
            row("Bravo", 5, 2, 2),
            row("Charlie", 0, 0, 0),
            row("Delta", 5, 4, 1),
            row("Echo", 1, 4, 3),
        ])
    }

    #[test]
    fn test_shares_example_row() {
        let table = sample();
        let shares = medal_shares(&table);
        assert_eq!(shares[0].team, "Alpha");
        assert_eq!(shares[0].pct, [75.0, 25.0, 0.0]);
    }

    #[test]
    fn test_shares_sum_to_100_or_are_zero() {
        let table = sample();
        for (share, r) in medal_shares(&table).iter().zip(&table.rows) {
            let sum: f64 = share.pct.iter().sum();
            if r.total > 0 {
                assert!((sum - 100.0).abs() < 1e-9, "{}: {sum}", share.team);
            } else {
                assert_eq!(share.pct, [0.0; 3]);
            }
        }
    }

    #[test]
    fn test_compare_keeps_table_order() {
        let table = sample();
        let selected = vec!["Echo".to_string(), "Alpha".to_string()];
        let teams: Vec<_> = compare_teams(&table, &selected)
            .iter()
            .map(|r| r.team.as_str())
            .collect();
        assert_eq!(teams, vec!["Alpha", "Echo"]);
    }

    #[test]
    fn test_compare_empty_selection_is_empty() {
        assert!(compare_teams(&sample(), &[]).is_empty());
    }

    #[test]
    fn test_correlation_matrix_diagonal_and_symmetry() {
        let m = correlation_matrix(&sample());
        for i in 0..3 {
            assert!((m[i][i].unwrap() - 1.0).abs() < 1e-12);
            for j in 0..3 {
                assert_eq!(m[i][j], m[j][i]);
            }
        }
    }

    #[test]
    fn test_correlation_constant_column_undefined() {
        let table = MedalTable::new(vec![row("A", 1, 0, 2), row("B", 2, 0, 5)]);
        let m = correlation_matrix(&table);
        assert_eq!(m[1], [None, None, None]);
        assert!((m[0][2].unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pie_fractions() {
        let Pie::Slices(slices) = pie_for_team(&sample(), "Alpha") else {
            panic!("expected slices");
        };
        assert_eq!(slices[0].medal, Medal::Gold);
        assert!((slices[0].fraction - 0.75).abs() < 1e-12);
        assert_eq!(slices[2].count, 0);
    }

    #[test]
    fn test_pie_zero_team_is_empty() {
        assert_eq!(pie_for_team(&sample(), "Charlie"), Pie::Empty);
        assert_eq!(pie_for_team(&sample(), "Zulu"), Pie::Missing);
    }

    #[test]
    fn test_top_by_medal_sorted_and_stable() {
        let table = sample();
        let top: Vec<_> = top_by_medal(&table, Medal::Gold, 10)
            .iter()
            .map(|r| r.team.as_str())
            .collect();
        assert_eq!(top, vec!["Bravo", "Delta", "Alpha", "Echo", "Charlie"]);
    }

    #[test]
    fn test_top_by_medal_truncates() {
        let table = sample();
        let top = top_by_medal(&table, Medal::Silver, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].team, "Delta");
        assert_eq!(top[1].team, "Echo");
    }

    #[test]
    fn test_column_totals() {
        assert_eq!(column_totals(&sample()), MedalCounts::new(14, 11, 6, 31));
    }

    #[test]
    fn test_column_totals_saturate() {
        let table = MedalTable::new(vec![row("Big", 1 << 63, 0, 0), row("Bigger", 1 << 63, 0, 0)]);
        let sums = column_totals(&table);
        assert_eq!(sums.gold, u64::MAX);
        assert_eq!(sums.total, u64::MAX);
    }

    #[test]
    fn test_pie_for_huge_counts() {
        let table = MedalTable::new(vec![MedalRow {
            team: "Big".into(),
            gold: u64::MAX,
            silver: 1,
            bronze: 0,
            total: 0,
        }]);
        let Pie::Slices(slices) = pie_for_team(&table, "Big") else {
            panic!("expected slices");
        };
        assert!(slices.iter().all(|s| (0.0..=1.0).contains(&s.fraction)));
    }

    #[test]
    fn test_leaders_first_in_table_order_wins_ties() {
        let table = sample();
        let [gold, silver, bronze] = medal_leaders(&table);
        // Bravo and Delta both have 5 gold.
        assert_eq!(gold.unwrap().team, "Bravo");
        // Delta and Echo both have 4 silver.
        assert_eq!(silver.unwrap().team, "Delta");
        let bronze = bronze.unwrap();
        assert_eq!((bronze.team, bronze.count), ("Echo", 3));
    }

    #[test]
    fn test_leaders_empty_table() {
        assert_eq!(medal_leaders(&MedalTable::default()), [None, None, None]);
    }
}
