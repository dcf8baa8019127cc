//! Writes a synthetic medal table and competition table with the headers the
//! dashboard reads, so it can be launched without the real datasets.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Serialize)]
struct MedalRecord<'a> {
    #[serde(rename = "TEAM")]
    team: &'a str,
    #[serde(rename = "GOLD")]
    gold: u64,
    #[serde(rename = "SILVER")]
    silver: u64,
    #[serde(rename = "BRONZE")]
    bronze: u64,
    #[serde(rename = "TOTAL")]
    total: u64,
}

#[derive(Serialize)]
struct CompetitionRecord<'a> {
    #[serde(rename = "Competitions")]
    competition: &'a str,
    #[serde(rename = "NOC")]
    noc: &'a str,
    #[serde(rename = "Rank")]
    rank: u32,
    #[serde(rename = "Gold")]
    gold: u64,
    #[serde(rename = "Silver")]
    silver: u64,
    #[serde(rename = "Bronze")]
    bronze: u64,
    #[serde(rename = "Total")]
    total: u64,
}

/// splitmix64, deterministic across runs.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

const TEAMS: [(&str, &str); 12] = [
    ("United States", "USA"),
    ("China", "CHN"),
    ("Japan", "JPN"),
    ("Australia", "AUS"),
    ("France", "FRA"),
    ("Netherlands", "NED"),
    ("Great Britain", "GBR"),
    ("South Korea", "KOR"),
    ("Italy", "ITA"),
    ("Germany", "GER"),
    ("Kenya", "KEN"),
    ("Brazil", "BRA"),
];

const COMPETITIONS: [&str; 8] = [
    "Athletics",
    "Swimming",
    "Gymnastics",
    "Judo",
    "Rowing",
    "Cycling",
    "Fencing",
    "Archery",
];

fn main() -> anyhow::Result<()> {
    let mut rng = SampleRng(42);

    // Per competition: a handful of countries with random medals, ranked by total.
    let mut results: Vec<(&str, &str, [u64; 3])> = Vec::new();
    for competition in COMPETITIONS {
        let mut entrants: Vec<(&str, [u64; 3])> = Vec::new();
        for (_, noc) in TEAMS {
            if rng.below(3) == 0 {
                continue;
            }
            let medals = [rng.below(5), rng.below(5), rng.below(6)];
            if medals.iter().sum::<u64>() > 0 {
                entrants.push((noc, medals));
            }
        }
        entrants.sort_by_key(|(_, m)| std::cmp::Reverse(m.iter().sum::<u64>()));
        results.extend(entrants.into_iter().map(|(noc, m)| (competition, noc, m)));
    }

    let mut by_noc: BTreeMap<&str, [u64; 3]> = BTreeMap::new();
    for &(_, noc, m) in &results {
        let entry = by_noc.entry(noc).or_default();
        for (sum, count) in entry.iter_mut().zip(m) {
            *sum += count;
        }
    }

    let medals_path = "Olympics 2024 Medals Table.csv";
    let mut writer = csv::Writer::from_path(medals_path)?;
    let mut teams = 0;
    for (team, noc) in TEAMS {
        let [gold, silver, bronze] = by_noc.get(noc).copied().unwrap_or_default();
        writer.serialize(MedalRecord {
            team,
            gold,
            silver,
            bronze,
            total: gold + silver + bronze,
        })?;
        teams += 1;
    }
    writer.flush()?;

    let competitions_path = "Olympics 2024.csv";
    let mut writer = csv::Writer::from_path(competitions_path)?;
    let mut rank = 0;
    let mut previous = "";
    for &(competition, noc, [gold, silver, bronze]) in &results {
        rank = if competition == previous { rank + 1 } else { 1 };
        previous = competition;
        writer.serialize(CompetitionRecord {
            competition,
            noc,
            rank,
            gold,
            silver,
            bronze,
            total: gold + silver + bronze,
        })?;
    }
    writer.flush()?;

    println!(
        "Wrote {teams} teams to '{medals_path}' and {} results to '{competitions_path}'",
        results.len()
    );
    Ok(())
}
