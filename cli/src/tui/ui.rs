use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;
use fantasy_card_core::{ChartHints, NamedSeries, PlayerCardView, PlayerSource};

use crate::tui::app::App;

struct Theme {
    primary: Color,
    muted: Color,
    bar: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    bar: Color::Yellow,
};

pub fn draw<S: PlayerSource>(f: &mut Frame, app: &mut App<S>) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let header = Paragraph::new("FANTASY PLAYER CARD")
        .style(Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25), // Player list
            Constraint::Percentage(75), // Card
        ])
        .split(main_chunks[1]);

    draw_player_list(f, app, content_chunks[0]);
    match &app.view {
        Some(view) => draw_card(f, view, content_chunks[1]),
        None => {
            let empty = Paragraph::new("No players available")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
            f.render_widget(empty, content_chunks[1]);
        }
    }

    let footer = Paragraph::new("j/k: Switch player | q: Quit")
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn draw_player_list<S: PlayerSource>(f: &mut Frame, app: &mut App<S>, area: Rect) {
    let rows: Vec<Row> = app
        .players
        .iter()
        .map(|p| Row::new(vec![Span::raw(p.name.clone()), Span::styled(p.team.clone(), Style::default().fg(THEME.muted))]))
        .collect();

    let table = Table::new(rows, [Constraint::Min(10), Constraint::Length(12)])
        .block(Block::default().title(" Players ").borders(Borders::ALL).border_type(BorderType::Rounded))
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_card(f: &mut Frame, view: &PlayerCardView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(view.attributes.len() as u16 + 2), // Photo + attributes
            Constraint::Min(5),                                    // Chart
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    let mut photo_lines = vec![Line::from(view.photo.clone().unwrap_or_else(|| "No photo".to_string()))];
    if let Some(news) = &view.news {
        photo_lines.push(Line::from(""));
        photo_lines.push(Line::from(Span::styled(news.as_str(), Style::default().fg(Color::Red))));
    }
    let photo = Paragraph::new(photo_lines)
        .style(Style::default().fg(THEME.muted))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Photo ").borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(photo, top[0]);

    let inner_width = top[1].width.saturating_sub(2) as usize;
    let lines: Vec<Line> = view
        .attributes
        .iter()
        .map(|row| {
            let padding = attribute_padding(row.label, &row.value, inner_width);
            Line::from(vec![
                Span::styled(row.label, Style::default().fg(Color::Blue)),
                Span::raw(" ".repeat(padding)),
                Span::styled(row.value.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();
    let attributes = Paragraph::new(lines)
        .block(Block::default().title(" Player ").borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(attributes, top[1]);

    draw_chart(f, &view.series, view.hints, rows[1]);
}

fn draw_chart(f: &mut Frame, series: &NamedSeries, hints: ChartHints, area: Rect) {
    let mut chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted));
    if hints.show_legend {
        chart_block = chart_block.title(format!(" {} ", series.name()));
    }

    if series.is_empty() {
        let empty = Paragraph::new("No weekly data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(THEME.muted))
            .block(chart_block);
        f.render_widget(empty, area);
        return;
    }

    let points = chart_points(series, hints);
    let bars: Vec<Bar> = points
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .label(label.as_str())
                .value(*value)
                .style(Style::default().fg(THEME.bar))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(hints.bar_width)
        .bar_gap(hints.bar_gap)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

/// Bar labels and values; labels are blanked when axis labels are hidden.
pub(crate) fn chart_points(series: &NamedSeries, hints: ChartHints) -> Vec<(String, u64)> {
    series
        .points()
        .map(|(label, value)| {
            let label = if hints.show_axis_labels { short_label(label) } else { String::new() };
            (label, value)
        })
        .collect()
}

// "Gameweek 12" is wider than a bar; keep the week number only.
fn short_label(label: &str) -> String {
    label.rsplit(' ').next().unwrap_or(label).to_string()
}

/// Spaces between label and value so the value sits at the right edge.
pub(crate) fn attribute_padding(label: &str, value: &str, width: usize) -> usize {
    width.saturating_sub(label.width() + value.width()).max(1)
}
