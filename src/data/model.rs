use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Medal – the three medal kinds
// ---------------------------------------------------------------------------

/// One of the three medal kinds. Order is podium order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }

    /// Column name in the medal table file.
    pub fn column(self) -> &'static str {
        match self {
            Medal::Gold => "GOLD",
            Medal::Silver => "SILVER",
            Medal::Bronze => "BRONZE",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// MedalCounts – gold/silver/bronze/total of one row or one aggregate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedalCounts {
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
    pub total: u64,
}

impl MedalCounts {
    pub fn new(gold: u64, silver: u64, bronze: u64, total: u64) -> Self {
        Self {
            gold,
            silver,
            bronze,
            total,
        }
    }

    pub fn get(&self, medal: Medal) -> u64 {
        match medal {
            Medal::Gold => self.gold,
            Medal::Silver => self.silver,
            Medal::Bronze => self.bronze,
        }
    }

    /// `gold + silver + bronze`, or `None` if that overflows.
    pub fn medal_sum(&self) -> Option<u64> {
        self.gold.checked_add(self.silver)?.checked_add(self.bronze)
    }

    /// Whether `gold + silver + bronze == total`. An overflowing sum never is.
    pub fn is_consistent(&self) -> bool {
        self.medal_sum() == Some(self.total)
    }

    /// Percentage of `total` per medal kind, in [`Medal::ALL`] order.
    ///
    /// A zero total yields `0%` for every kind rather than NaN.
    pub fn shares(&self) -> [f64; 3] {
        if self.total == 0 {
            return [0.0; 3];
        }
        let total = self.total as f64;
        Medal::ALL.map(|m| self.get(m) as f64 / total * 100.0)
    }
}

/// Saturating, so aggregates over huge counts pin at `u64::MAX`.
impl std::ops::Add for MedalCounts {
    type Output = MedalCounts;

    fn add(self, rhs: MedalCounts) -> MedalCounts {
        MedalCounts {
            gold: self.gold.saturating_add(rhs.gold),
            silver: self.silver.saturating_add(rhs.silver),
            bronze: self.bronze.saturating_add(rhs.bronze),
            total: self.total.saturating_add(rhs.total),
        }
    }
}

impl std::iter::Sum for MedalCounts {
    fn sum<I: Iterator<Item = MedalCounts>>(iter: I) -> Self {
        iter.fold(MedalCounts::default(), |acc, c| acc + c)
    }
}

// ---------------------------------------------------------------------------
// Rows – one line of each input file
// ---------------------------------------------------------------------------

/// One row of the medal table: a team and its medal haul.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MedalRow {
    #[serde(rename = "TEAM")]
    pub team: String,
    #[serde(rename = "GOLD")]
    pub gold: u64,
    #[serde(rename = "SILVER")]
    pub silver: u64,
    #[serde(rename = "BRONZE")]
    pub bronze: u64,
    #[serde(rename = "TOTAL")]
    pub total: u64,
}

impl MedalRow {
    pub const COLUMNS: [&'static str; 5] = ["TEAM", "GOLD", "SILVER", "BRONZE", "TOTAL"];

    pub fn counts(&self) -> MedalCounts {
        MedalCounts::new(self.gold, self.silver, self.bronze, self.total)
    }
}

/// One row of the competition table: a country's result in one competition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompetitionRow {
    #[serde(rename = "Competitions")]
    pub competition: String,
    #[serde(rename = "NOC")]
    pub noc: String,
    #[serde(rename = "Rank")]
    pub rank: u32,
    #[serde(rename = "Gold")]
    pub gold: u64,
    #[serde(rename = "Silver")]
    pub silver: u64,
    #[serde(rename = "Bronze")]
    pub bronze: u64,
    #[serde(rename = "Total")]
    pub total: u64,
}

impl CompetitionRow {
    pub const COLUMNS: [&'static str; 7] = [
        "Competitions",
        "NOC",
        "Rank",
        "Gold",
        "Silver",
        "Bronze",
        "Total",
    ];

    pub fn counts(&self) -> MedalCounts {
        MedalCounts::new(self.gold, self.silver, self.bronze, self.total)
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// The medal table, rows in file order.
#[derive(Debug, Clone, Default)]
pub struct MedalTable {
    pub rows: Vec<MedalRow>,
}

impl MedalTable {
    pub fn new(rows: Vec<MedalRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct team names in table order.
    pub fn teams(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|r| r.team.as_str()))
    }

    /// First row for `team`.
    pub fn find(&self, team: &str) -> Option<&MedalRow> {
        self.rows.iter().find(|r| r.team == team)
    }
}

/// The per-competition results table, rows in file order.
#[derive(Debug, Clone, Default)]
pub struct CompetitionTable {
    pub rows: Vec<CompetitionRow>,
}

impl CompetitionTable {
    pub fn new(rows: Vec<CompetitionRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct competition names in first-appearance order.
    pub fn competitions(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|r| r.competition.as_str()))
    }

    /// Distinct country codes in first-appearance order.
    pub fn nocs(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|r| r.noc.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

// ---------------------------------------------------------------------------
// Dataset – both tables, immutable after load
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub medals: MedalTable,
    pub competitions: CompetitionTable,
    /// Rows (across both tables) whose medals don't add up to their total.
    pub inconsistent_rows: usize,
}
