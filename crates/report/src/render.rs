//! Route rendering: title, notes, damage tables, and the step table.
//!
//! Everything renders to minified markup; [`crate::pretty::prettify`] (via
//! [`crate::page::page`]) makes it readable afterwards. Route text is
//! trusted markup written by route authors, so notes and details may embed
//! tags deliberately and nothing here escapes them.

use route_content::{DamageTable, HitLookup, Route};
use route_core::{ReplayError, Segment, State, items};

/// Step-table columns: full name for the tooltip, short label for the header.
const COLUMNS: [(&str, &str); 8] = [
    ("Souls", "Souls"),
    ("Item Souls", "☄️"),
    ("Homeward Bones", "🦴"),
    ("Titanite Shards", "🌑"),
    ("Twinkling Titanite", "💎"),
    ("Item Humanities", "👤"),
    ("Humanity", "👨"),
    ("Action", "Action"),
];

/// One running-total cell. The body stays empty when the value is unchanged,
/// so the table reads as a sparse ledger of deltas.
fn value_cell(name: &str, old_value: i64, new_value: i64) -> String {
    let lower = name.to_lowercase();
    let css_class = lower.replace(' ', "_");
    let mut html = format!("<td class=\"{css_class}\" title=\"{new_value} {lower}\">");
    if new_value != old_value {
        let change = new_value - old_value;
        let change_class = if change < 0 { "subtract" } else { "add" };
        html.push_str(&format!(
            "<span class=\"{change_class}\">{change:+}</span><br/>{new_value}"
        ));
    }
    html.push_str("</td>");
    html
}

/// Replays `segment` from `initial_state` and renders the event stream as
/// the running-totals table.
///
/// Suppressed records still advance the diff baseline, and any region change
/// inserts a numbered sub-header row after the step that caused it. When the
/// replay surfaced soft errors, an error-count banner is prepended.
pub fn steps_table(segment: &Segment, initial_state: State) -> Result<String, ReplayError> {
    let initial = initial_state.clone();
    let trace = segment.process_from(initial_state)?;

    let mut html = String::from("<table class=\"route\"><thead><tr>");
    for (title, label) in COLUMNS {
        html.push_str(&format!("<th title=\"{title}\">{label}</th>"));
    }
    html.push_str("</tr></thead><tbody>");

    let mut last_state = &initial;
    let mut region = "";
    let mut region_count = 0u32;
    for event in &trace {
        let state = &event.state;
        let record = &event.record;
        if record.output() {
            let row_class = if record.is_error() {
                "error"
            } else if record.optional() {
                "optional"
            } else {
                ""
            };
            if row_class.is_empty() {
                html.push_str("<tr>");
            } else {
                html.push_str(&format!("<tr class=\"{row_class}\">"));
            }
            html.push_str(&value_cell("Souls", last_state.souls, state.souls));
            html.push_str(&value_cell(
                "Item Souls",
                last_state.item_souls,
                state.item_souls,
            ));
            html.push_str(&value_cell(
                "Homeward Bones",
                last_state.item_count(items::BONE),
                state.item_count(items::BONE),
            ));
            html.push_str(&value_cell(
                "Titanite Shards",
                last_state.item_count(items::TITANITE_SHARD),
                state.item_count(items::TITANITE_SHARD),
            ));
            html.push_str(&value_cell(
                "Twinkling Titanite",
                last_state.item_count(items::TWINKLING_TITANITE),
                state.item_count(items::TWINKLING_TITANITE),
            ));
            html.push_str(&value_cell(
                "Item Humanities",
                last_state.item_humanities,
                state.item_humanities,
            ));
            html.push_str(&value_cell("Humanity", last_state.humanity, state.humanity));
            html.push_str(&format!(
                "<td class=\"action\"><span class=\"name\">{}</span> \
                 <span class=\"display\">{}</span><br/>\
                 <span class=\"detail\">{}</span></td></tr>",
                record.name(),
                record.display(),
                record.detail()
            ));
        }
        if state.region != region {
            region = &state.region;
            region_count += 1;
            html.push_str(&format!(
                "</tbody><tbody><tr><td colspan=\"{}\" class=\"region\">\
                 {region_count:02}. {region}</td></tr></tbody><tbody>",
                COLUMNS.len()
            ));
        }
        last_state = state;
    }
    html.push_str("</tbody></table>");

    let error_count = trace.error_count();
    if error_count > 0 {
        html.insert_str(
            0,
            &format!("<span class=\"warning\">{error_count} errors present.</span>"),
        );
    }
    Ok(html)
}

/// Renders one weapon's hit-count table.
///
/// Each hit type takes two cells per enemy form, plain then RTSR-buffed.
/// Entries missing from `lookup` render as blank cells so unmeasured
/// weapons still show their table skeleton.
pub fn damage_table(table: &DamageTable, lookup: &HitLookup) -> String {
    let mut html = String::from("<table class=\"route\"><thead><tr>");
    for hit_type in &table.hit_types {
        html.push_str(&format!(
            "<th colspan=\"2\" title=\"{}\">{}</th>",
            hit_type.display_name(),
            hit_type.column_name()
        ));
    }
    html.push_str("<th title=\"Enemy\">Enemy</th></tr></thead><tbody>");

    for enemy in &table.enemies {
        for form in enemy.forms() {
            html.push_str("<tr>");
            for hit_type in &table.hit_types {
                let hit = lookup
                    .get(&table.weapon)
                    .and_then(|enemies| enemies.get(enemy))
                    .and_then(|hits| hits.get(hit_type))
                    .copied()
                    .unwrap_or_default();
                let hit_display = hit_type.display_name().to_lowercase();
                for (damage, hit_text, rtsr) in [
                    (hit.damage, "hits", false),
                    (hit.with_rtsr, "hits with RTSR", true),
                ] {
                    if rtsr {
                        html.push_str(&format!("<td class=\"{} rtsr\"", hit_type.css_class()));
                    } else {
                        html.push_str(&format!("<td class=\"{}\"", hit_type.css_class()));
                    }
                    if damage != 0 {
                        let hits = form.hits(damage);
                        html.push_str(&format!(
                            " title=\"{hits} {hit_display} {hit_text} for {damage}\">{hits}</td>"
                        ));
                    } else {
                        html.push_str("></td>");
                    }
                }
            }
            html.push_str(&format!(
                "<td class=\"enemy\" title=\"{} total hp\">{}</td></tr>",
                form.health, form.name
            ));
        }
    }
    html.push_str("</tbody></table>");
    html
}

/// Renders the hoisted notes of `segment` as a list; empty when none.
pub fn notes_list(segment: &Segment) -> String {
    let notes = segment.flatten().notes;
    if notes.is_empty() {
        return String::new();
    }
    let mut html = String::from("<ul class=\"route notes\">");
    for note in notes {
        html.push_str(&format!("<li>{note}</li>"));
    }
    html.push_str("</ul>");
    html
}

/// Renders a full route body: title, notes, damage tables, then the replay.
pub fn render_route(route: &Route) -> Result<String, ReplayError> {
    let mut html = String::new();
    if !route.name.is_empty() {
        html.push_str(&format!(
            "<span class=\"route display_name\">{}</span>",
            route.name
        ));
    }
    let notes = notes_list(&route.segment);
    if !notes.is_empty() {
        html.push_str("<span class=\"route section\">Notes</span>");
        html.push_str(&notes);
    }
    for table in &route.damage_tables {
        html.push_str(&format!(
            "<span class=\"route section\">Hits ({})</span>",
            table.weapon
        ));
        html.push_str(&damage_table(table, &route.hit_lookup));
    }
    html.push_str("<span class=\"route section\">Steps</span>");
    html.push_str(&steps_table(&route.segment, State::new())?);
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_core::Action;
    use std::collections::BTreeMap;

    use route_content::{Enemy, Hit, HitType};

    #[test]
    fn unchanged_value_cells_have_a_title_but_no_body() {
        assert_eq!(
            value_cell("Souls", 200, 200),
            "<td class=\"souls\" title=\"200 souls\"></td>"
        );
    }

    #[test]
    fn changed_value_cells_show_a_signed_delta_and_the_new_total() {
        assert_eq!(
            value_cell("Souls", 0, 2000),
            "<td class=\"souls\" title=\"2000 souls\">\
             <span class=\"add\">+2000</span><br/>2000</td>"
        );
        assert_eq!(
            value_cell("Item Souls", 400, 0),
            "<td class=\"item_souls\" title=\"0 item souls\">\
             <span class=\"subtract\">-400</span><br/>0</td>"
        );
    }

    #[test]
    fn region_rows_number_every_region_change() {
        let segment = Segment::new("two regions")
            .add(Action::region("Northern Undead Asylum"))
            .add(Action::kill("Asylum Demon", 2000))
            .add(Action::region("Firelink Shrine"));

        let html = steps_table(&segment, State::new()).unwrap();
        assert!(html.contains(">01. Northern Undead Asylum</td>"));
        assert!(html.contains(">02. Firelink Shrine</td>"));
        // Region markers render as sub-headers only, never as step rows.
        assert!(!html.contains("<span class=\"name\">Region</span>"));
    }

    #[test]
    fn soft_errors_render_as_error_rows_and_a_banner() {
        let segment = Segment::new("overspend").add(Action::buy("Homeward Bone", 500));

        let html = steps_table(&segment, State::new()).unwrap();
        assert!(html.starts_with("<span class=\"warning\">1 errors present.</span>"));
        assert!(html.contains("<tr class=\"error\">"));
        assert!(html.contains("insufficient amount: souls(-500)"));
    }

    #[test]
    fn optional_steps_mark_their_row() {
        let segment = Segment::new("optional sit")
            .add(Action::bonfire_sit("Sen's Fortress").optional(true));
        let html = steps_table(&segment, State::new()).unwrap();
        assert!(html.contains("<tr class=\"optional\">"));
    }

    #[test]
    fn damage_cells_carry_hit_counts_and_blank_out_when_unmeasured() {
        // One measured enemy plus one with no entry at all; both Gargoyle
        // forms share the per-enemy damage but keep their own health.
        let table = DamageTable::new(
            "Reinforced Club +5",
            &[Enemy::BellGargoyles, Enemy::IronGolem],
            &[HitType::Heavy2H],
        );
        let lookup: HitLookup = BTreeMap::from([(
            "Reinforced Club +5".to_owned(),
            BTreeMap::from([(
                Enemy::BellGargoyles,
                BTreeMap::from([(HitType::Heavy2H, Hit::new(217, 358))]),
            )]),
        )]);

        let html = damage_table(&table, &lookup);
        // 999 health: ceil(999/217) = 5 plain, ceil(999/358) = 3 buffed.
        assert!(html.contains(
            "<td class=\"heavy_2h\" title=\"5 heavy (2h) hits for 217\">5</td>"
        ));
        assert!(html.contains(
            "<td class=\"heavy_2h rtsr\" title=\"3 heavy (2h) hits with RTSR for 358\">3</td>"
        ));
        assert!(html.contains("<td class=\"enemy\" title=\"999 total hp\">Bell Gargoyle A</td>"));
        assert!(html.contains("<td class=\"enemy\" title=\"480 total hp\">Bell Gargoyle B</td>"));
        // The unmeasured enemy renders blank cells for every form.
        assert!(html.contains("<td class=\"heavy_2h\"></td>"));
        assert!(html.contains("<td class=\"enemy\" title=\"2880 total hp\">Iron Golem</td>"));
    }

    #[test]
    fn notes_hoist_from_nested_steps_into_one_list() {
        let segment = Segment::new("noted")
            .note("top note")
            .add(Segment::new("inner").add(Action::loot("Hand Axe").note("step note")));
        assert_eq!(
            notes_list(&segment),
            "<ul class=\"route notes\"><li>top note</li><li>step note</li></ul>"
        );

        assert_eq!(notes_list(&Segment::new("bare")), "");
    }
}
