use std::path::PathBuf;

use crate::data::model::{Dataset, Medal, MedalTable};

// ---------------------------------------------------------------------------
// View router
// ---------------------------------------------------------------------------

/// The two top-level views selectable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Medals,
    Competitions,
}

impl View {
    pub const ALL: [View; 2] = [View::Medals, View::Competitions];

    pub fn label(self) -> &'static str {
        match self {
            View::Medals => "Medal Analysis",
            View::Competitions => "Competitions Analysis",
        }
    }
}

// ---------------------------------------------------------------------------
// Widget selections, one struct per view
// ---------------------------------------------------------------------------

/// Widget values of the medal analysis view.
#[derive(Debug, Clone, PartialEq)]
pub struct MedalSelections {
    /// Teams picked for the comparison chart.
    pub compare: Vec<String>,
    /// Team shown in the pie chart.
    pub pie_team: Option<String>,
    /// Medal kind ranked in the top-10 chart.
    pub top_medal: Medal,
}

impl MedalSelections {
    /// First two teams compared, first team in the pie, gold ranked.
    pub fn defaults(dataset: &Dataset) -> Self {
        let teams = dataset.medals.teams();
        Self {
            compare: teams.iter().take(2).map(|t| t.to_string()).collect(),
            pie_team: teams.first().map(|t| t.to_string()),
            top_medal: Medal::Gold,
        }
    }

    pub fn is_compared(&self, team: &str) -> bool {
        self.compare.iter().any(|t| t == team)
    }

    /// Select every team for comparison, in table order.
    pub fn compare_all(&mut self, table: &MedalTable) {
        self.compare = table.teams().into_iter().map(String::from).collect();
    }

    pub fn compare_none(&mut self) {
        self.compare.clear();
    }

    pub fn toggle_compare(&mut self, team: &str) {
        if let Some(pos) = self.compare.iter().position(|t| t == team) {
            self.compare.remove(pos);
        } else {
            self.compare.push(team.to_string());
        }
    }
}

/// Widget values of the competitions analysis view.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionSelections {
    /// Competition for the distribution chart and the top-3 table.
    pub competition: Option<String>,
    /// Country for the cross-competition chart.
    pub country: Option<String>,
    /// Country for the detail table.
    pub detail_country: Option<String>,
}

impl CompetitionSelections {
    /// Every select starts on the first distinct value of its column.
    pub fn defaults(dataset: &Dataset) -> Self {
        let first_noc = dataset.competitions.nocs().first().map(|n| n.to_string());
        Self {
            competition: dataset
                .competitions
                .competitions()
                .first()
                .map(|c| c.to_string()),
            country: first_noc.clone(),
            detail_country: first_noc,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Both tables, never mutated after load.
    pub dataset: Dataset,

    /// Active view.
    pub view: View,

    pub medal: MedalSelections,
    pub competition: CompetitionSelections,

    /// Sidebar logo; purely decorative.
    pub logo: Option<PathBuf>,
}

impl AppState {
    pub fn new(dataset: Dataset, logo: Option<PathBuf>) -> Self {
        Self {
            medal: MedalSelections::defaults(&dataset),
            competition: CompetitionSelections::defaults(&dataset),
            dataset,
            view: View::default(),
            logo,
        }
    }

    /// Switch views. Widget selections of both views go back to their
    /// defaults, so nothing carries over a switch.
    pub fn set_view(&mut self, view: View) {
        if view == self.view {
            return;
        }
        log::debug!("Switching view: {} -> {}", self.view.label(), view.label());
        self.view = view;
        self.reset_selections();
    }

    pub fn reset_selections(&mut self) {
        self.medal = MedalSelections::defaults(&self.dataset);
        self.competition = CompetitionSelections::defaults(&self.dataset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CompetitionRow, CompetitionTable, MedalRow};

    fn dataset() -> Dataset {
        let medal = |team: &str| MedalRow {
            team: team.into(),
            gold: 1,
            silver: 0,
            bronze: 0,
            total: 1,
        };
        let result = |competition: &str, noc: &str| CompetitionRow {
            competition: competition.into(),
            noc: noc.into(),
            rank: 1,
            gold: 1,
            silver: 0,
            bronze: 0,
            total: 1,
        };
        Dataset {
            medals: MedalTable::new(vec![medal("Alpha"), medal("Bravo"), medal("Charlie")]),
            competitions: CompetitionTable::new(vec![
                result("Rowing", "NZL"),
                result("Judo", "JPN"),
                result("Rowing", "GBR"),
            ]),
            inconsistent_rows: 0,
        }
    }

    #[test]
    fn test_defaults() {
        let state = AppState::new(dataset(), None);
        assert_eq!(state.view, View::Medals);
        assert_eq!(state.medal.compare, vec!["Alpha", "Bravo"]);
        assert_eq!(state.medal.pie_team.as_deref(), Some("Alpha"));
        assert_eq!(state.medal.top_medal, Medal::Gold);
        assert_eq!(state.competition.competition.as_deref(), Some("Rowing"));
        assert_eq!(state.competition.country.as_deref(), Some("NZL"));
        assert_eq!(state.competition.detail_country.as_deref(), Some("NZL"));
    }

    #[test]
    fn test_defaults_on_empty_dataset() {
        let state = AppState::new(Dataset::default(), None);
        assert!(state.medal.compare.is_empty());
        assert_eq!(state.medal.pie_team, None);
        assert_eq!(state.competition.competition, None);
    }

    #[test]
    fn test_switching_view_resets_selections() {
        let mut state = AppState::new(dataset(), None);
        state.medal.top_medal = Medal::Bronze;
        state.medal.toggle_compare("Alpha");
        state.competition.country = Some("GBR".into());

        state.set_view(View::Competitions);
        assert_eq!(state.view, View::Competitions);
        assert_eq!(state.medal, MedalSelections::defaults(&state.dataset));
        assert_eq!(state.competition.country.as_deref(), Some("NZL"));
    }

    #[test]
    fn test_same_view_keeps_selections() {
        let mut state = AppState::new(dataset(), None);
        state.medal.top_medal = Medal::Silver;
        state.set_view(View::Medals);
        assert_eq!(state.medal.top_medal, Medal::Silver);
    }

    #[test]
    fn test_toggle_compare() {
        let mut state = AppState::new(dataset(), None);
        state.medal.toggle_compare("Alpha");
        assert_eq!(state.medal.compare, vec!["Bravo"]);
        state.medal.toggle_compare("Charlie");
        assert!(state.medal.is_compared("Charlie"));
        assert!(!state.medal.is_compared("Alpha"));
    }

    #[test]
    fn test_compare_all_and_none() {
        let mut state = AppState::new(dataset(), None);
        state.medal.compare_all(&state.dataset.medals);
        assert_eq!(state.medal.compare, vec!["Alpha", "Bravo", "Charlie"]);
        state.medal.compare_none();
        assert!(state.medal.compare.is_empty());
    }
}
