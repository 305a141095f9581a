use fantasy_card_core::{AttributeRow, PlayerCardView};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct AttributeLine {
    #[tabled(rename = "Attribute")]
    label: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct SeriesLine {
    #[tabled(rename = "Week")]
    week: String,
    #[tabled(rename = "Value")]
    value: u64,
}

fn attribute_lines(rows: &[AttributeRow]) -> Vec<AttributeLine> {
    rows.iter()
        .map(|row| AttributeLine {
            label: row.label.to_string(),
            value: row.value.clone(),
        })
        .collect()
}

fn series_lines(view: &PlayerCardView) -> Vec<SeriesLine> {
    view.series
        .points()
        .map(|(label, value)| SeriesLine {
            week: label.to_string(),
            value,
        })
        .collect()
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

pub fn render_card(view: &PlayerCardView) -> String {
    let mut out = format!("\x1b[1;36m{}\x1b[0m\n", view.name);
    if let Some(photo) = &view.photo {
        out.push_str(&format!("Photo: {}\n", photo));
    }
    if let Some(news) = &view.news {
        out.push_str(&format!("News: {}\n", news));
    }
    out.push_str(&styled(Table::new(attribute_lines(&view.attributes))).to_string());
    out.push('\n');

    if view.has_chart_data() {
        out.push_str(&format!("\n{}\n", view.series.name()));
        out.push_str(&styled(Table::new(series_lines(view))).to_string());
    } else {
        out.push_str("\nNo weekly data");
    }
    out
}
