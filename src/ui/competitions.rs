use eframe::egui::Ui;

use crate::color::generate_palette;
use crate::data::competitions::{
    competition_rows, competition_totals, country_rows, efficiency_by_country, leaderboard,
};
use crate::data::model::CompetitionRow;
use crate::state::AppState;
use crate::ui::charts;
use crate::ui::table::data_table;
use crate::ui::widgets::{section, select_one, subsection};

const LEADERBOARD_SIZE: usize = 3;

// ---------------------------------------------------------------------------
// Competitions analysis view
// ---------------------------------------------------------------------------

/// Render every panel of the competitions analysis view, top to bottom.
pub fn competition_view(ui: &mut Ui, state: &mut AppState) {
    let table = &state.dataset.competitions;
    let sel = &mut state.competition;
    let competitions = table.competitions();
    let nocs = table.nocs();

    // ---- Raw table ----
    subsection(ui, "Olympics Competitions Dataset");
    if table.is_empty() {
        charts::empty_chart(ui, "The competition table has no rows.");
    } else {
        let rows: Vec<Vec<String>> = table.rows.iter().map(full_cells).collect();
        data_table(ui, "competition_table", &CompetitionRow::COLUMNS, &rows);
    }

    // ---- Medal distribution within one competition ----
    section(ui, "Competition-Wise Medal Distribution");
    select_one(ui, "competition", "Select Competition", &competitions, &mut sel.competition);
    let selected = sel.competition.clone().unwrap_or_default();
    let comp = competition_rows(table, &selected);
    if comp.is_empty() {
        charts::empty_chart(ui, "No competition selected.");
    } else {
        subsection(ui, &format!("Medal Distribution in {selected}"));
        let labels: Vec<String> = comp.iter().map(|r| r.noc.clone()).collect();
        let counts: Vec<_> = comp.iter().map(|r| r.counts()).collect();
        charts::stacked_bar_chart(
            ui,
            "competition_distribution",
            &labels,
            &charts::medal_series(&counts),
            "Medal Count",
        );
    }

    // ---- Top 3 of that competition ----
    section(ui, "Top Performing Countries in Each Competition");
    subsection(ui, &format!("Top {LEADERBOARD_SIZE} Countries in {selected}"));
    let top: Vec<Vec<String>> = leaderboard(table, &selected, LEADERBOARD_SIZE)
        .into_iter()
        .map(|r| {
            vec![
                r.rank.to_string(),
                r.noc.clone(),
                r.gold.to_string(),
                r.silver.to_string(),
                r.bronze.to_string(),
                r.total.to_string(),
            ]
        })
        .collect();
    data_table(
        ui,
        "leaderboard",
        &["Rank", "NOC", "Gold", "Silver", "Bronze", "Total"],
        &top,
    );

    // ---- One country across competitions ----
    section(ui, "Country-Wise Performance Across Competitions");
    select_one(ui, "country", "Select Country", &nocs, &mut sel.country);
    let country = sel.country.clone().unwrap_or_default();
    let history = country_rows(table, &country);
    if history.is_empty() {
        charts::empty_chart(ui, "No country selected.");
    } else {
        subsection(ui, &format!("{country}'s Performance Across Competitions"));
        let labels: Vec<String> = history.iter().map(|r| r.competition.clone()).collect();
        let counts: Vec<_> = history.iter().map(|r| r.counts()).collect();
        charts::grouped_bar_chart(
            ui,
            "country_history",
            &labels,
            &charts::medal_series(&counts),
            "Medal Count",
        );
    }

    // ---- Share of all medals per country ----
    section(ui, "Medal Efficiency by Country");
    let efficiency = efficiency_by_country(table);
    let grand = efficiency
        .iter()
        .fold(0u64, |acc, e| acc.saturating_add(e.counts.total));
    ui.label(format!("Share of all {grand} medals won, per country"));
    let labels: Vec<String> = efficiency.iter().map(|e| e.noc.to_string()).collect();
    let values: Vec<f64> = efficiency.iter().map(|e| e.pct).collect();
    charts::bar_chart(
        ui,
        "efficiency",
        &labels,
        &values,
        &generate_palette(labels.len()),
        "Efficiency (%)",
    );

    // ---- Medals per competition ----
    section(ui, "Comparison Between Competitions");
    let per_competition = competition_totals(table);
    let labels: Vec<String> = per_competition.iter().map(|(c, _)| c.to_string()).collect();
    let values: Vec<f64> = per_competition.iter().map(|&(_, t)| t as f64).collect();
    charts::bar_chart(
        ui,
        "competition_totals",
        &labels,
        &values,
        &generate_palette(labels.len()),
        "Total Medals",
    );

    // ---- Detail table for one country ----
    section(ui, "Country Details and Interaction");
    select_one(
        ui,
        "detail_country",
        "Select a Country for Detailed Analysis",
        &nocs,
        &mut sel.detail_country,
    );
    let detail_country = sel.detail_country.clone().unwrap_or_default();
    subsection(ui, &format!("Detailed Performance of {detail_country}"));
    let detail: Vec<Vec<String>> = country_rows(table, &detail_country)
        .into_iter()
        .map(|r| {
            vec![
                r.competition.clone(),
                r.rank.to_string(),
                r.gold.to_string(),
                r.silver.to_string(),
                r.bronze.to_string(),
                r.total.to_string(),
            ]
        })
        .collect();
    data_table(
        ui,
        "country_detail",
        &["Competitions", "Rank", "Gold", "Silver", "Bronze", "Total"],
        &detail,
    );
    ui.add_space(16.0);
}

fn full_cells(r: &CompetitionRow) -> Vec<String> {
    vec![
        r.competition.clone(),
        r.noc.clone(),
        r.rank.to_string(),
        r.gold.to_string(),
        r.silver.to_string(),
        r.bronze.to_string(),
        r.total.to_string(),
    ]
}
