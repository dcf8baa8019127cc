use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;
use crate::data::medals::{
    column_totals, compare_teams, correlation_matrix, medal_leaders, medal_shares, pie_for_team,
    top_by_medal, Pie,
};
use crate::data::model::{Medal, MedalRow};
use crate::state::AppState;
use crate::ui::charts::{self, Series, Wedge};
use crate::ui::table::data_table;
use crate::ui::widgets::{section, select_one, subsection};

const BAR_BLUE: Color32 = Color32::from_rgb(0x1F, 0x77, 0xB4);
const TOP_N: usize = 10;

// ---------------------------------------------------------------------------
// Medal analysis view
// ---------------------------------------------------------------------------

/// Render every panel of the medal analysis view, top to bottom.
/// Each panel recomputes from the full table on every frame.
pub fn medal_view(ui: &mut Ui, state: &mut AppState) {
    let table = &state.dataset.medals;
    let sel = &mut state.medal;

    // ---- Raw table ----
    subsection(ui, "Olympics Medal Table");
    if table.is_empty() {
        charts::empty_chart(ui, "The medal table has no rows.");
    } else {
        let rows: Vec<Vec<String>> = table.rows.iter().map(medal_cells).collect();
        data_table(ui, "medal_table", &MedalRow::COLUMNS, &rows);
    }

    // ---- Total medals per team, table order ----
    section(ui, "Basic Statistics and Rankings");
    subsection(ui, "Total Medal Count by Country");
    let teams: Vec<String> = table.rows.iter().map(|r| r.team.clone()).collect();
    let totals: Vec<f64> = table.rows.iter().map(|r| r.total as f64).collect();
    charts::bar_chart(ui, "total_medals", &teams, &totals, &[BAR_BLUE], "TOTAL");

    // ---- 100% stacked medal shares ----
    subsection(ui, "Medal Proportions for Each Country");
    let shares = medal_shares(table);
    let share_labels: Vec<String> = shares.iter().map(|s| s.team.to_string()).collect();
    let share_series: Vec<Series> = Medal::ALL
        .iter()
        .enumerate()
        .map(|(k, &m)| Series {
            name: pct_label(m),
            color: color::medal_color(m),
            values: shares.iter().map(|s| s.pct[k]).collect(),
        })
        .collect();
    charts::stacked_bar_chart(ui, "medal_shares", &share_labels, &share_series, "Percentage");

    // ---- Country comparison ----
    section(ui, "Compare Countries");
    let all_teams = table.teams();
    let header = format!(
        "Select Countries to Compare  ({}/{})",
        sel.compare.len(),
        all_teams.len()
    );
    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt("compare_select")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    sel.compare_all(table);
                }
                if ui.small_button("None").clicked() {
                    sel.compare_none();
                }
            });
            egui::ScrollArea::vertical()
                .id_salt("compare_scroll")
                .max_height(200.0)
                .show(ui, |ui: &mut Ui| {
                    for team in &all_teams {
                        let mut checked = sel.is_compared(team);
                        if ui.checkbox(&mut checked, *team).changed() {
                            sel.toggle_compare(team);
                        }
                    }
                });
        });
    let compared = compare_teams(table, &sel.compare);
    let labels: Vec<String> = compared.iter().map(|r| r.team.clone()).collect();
    let counts: Vec<_> = compared.iter().map(|r| r.counts()).collect();
    charts::grouped_bar_chart(
        ui,
        "compare_teams",
        &labels,
        &charts::medal_series(&counts),
        "Medals",
    );

    // ---- Correlation heatmap ----
    section(ui, "Correlation Between Medal Types");
    charts::heatmap(ui, Medal::ALL.map(Medal::column), &correlation_matrix(table));

    // ---- Single-team pie ----
    section(ui, "Country and Medal-wise Analysis");
    select_one(
        ui,
        "pie_team",
        "Select a Country for Detailed Analysis",
        &all_teams,
        &mut sel.pie_team,
    );
    match sel.pie_team.as_deref().map(|team| pie_for_team(table, team)) {
        Some(Pie::Slices(slices)) => {
            let wedges: Vec<Wedge> = slices
                .iter()
                .map(|s| Wedge {
                    label: s.medal.label(),
                    fraction: s.fraction,
                    color: color::medal_color(s.medal),
                })
                .collect();
            charts::pie_chart(ui, &wedges);
            let legend: Vec<String> = slices
                .iter()
                .map(|s| format!("{}: {}", s.medal.label(), s.count))
                .collect();
            ui.label(legend.join("   "));
        }
        Some(Pie::Empty) => charts::empty_chart(ui, "This country has no medals to chart."),
        Some(Pie::Missing) | None => charts::empty_chart(ui, "No country selected."),
    }

    // ---- Top 10 by medal kind ----
    ui.add_space(8.0);
    ui.label("Select Medal Type for Analysis");
    egui::ComboBox::from_id_salt("top_medal")
        .selected_text(sel.top_medal.column())
        .show_ui(ui, |ui: &mut Ui| {
            for m in Medal::ALL {
                ui.selectable_value(&mut sel.top_medal, m, m.column());
            }
        });
    let medal = sel.top_medal;
    let top = top_by_medal(table, medal, TOP_N);
    let top_labels: Vec<String> = top.iter().map(|r| r.team.clone()).collect();
    let top_values: Vec<f64> = top.iter().map(|r| r.counts().get(medal) as f64).collect();
    charts::bar_chart(
        ui,
        "top_by_medal",
        &top_labels,
        &top_values,
        &[color::medal_color(medal)],
        medal.column(),
    );

    // ---- Summary statistics ----
    section(ui, "Static Analysis - Summary Statistics");
    subsection(ui, "Total Medals Overview");
    let sums = column_totals(table);
    egui::Grid::new("medal_sums")
        .striped(true)
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            for (name, value) in [
                ("GOLD", sums.gold),
                ("SILVER", sums.silver),
                ("BRONZE", sums.bronze),
                ("TOTAL", sums.total),
            ] {
                ui.strong(name);
                ui.label(value.to_string());
                ui.end_row();
            }
        });

    // ---- Leaders, first in table order on ties ----
    subsection(ui, "Top Countries by Medal Type");
    for leader in medal_leaders(table).into_iter().flatten() {
        ui.label(format!(
            "Top {} Medal Winner: {} ({})",
            leader.medal.label(),
            leader.team,
            leader.count
        ));
    }
    ui.add_space(16.0);
}

fn medal_cells(r: &MedalRow) -> Vec<String> {
    vec![
        r.team.clone(),
        r.gold.to_string(),
        r.silver.to_string(),
        r.bronze.to_string(),
        r.total.to_string(),
    ]
}

fn pct_label(m: Medal) -> &'static str {
    match m {
        Medal::Gold => "Gold %",
        Medal::Silver => "Silver %",
        Medal::Bronze => "Bronze %",
    }
}
