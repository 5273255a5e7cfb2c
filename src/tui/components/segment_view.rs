// Segment content pane
//
// Turns the drill-down render model into styled lines: the Master summary,
// "Entry N" tables, or the attendance month links and day list.

use crate::categorize::display_name;
use crate::drilldown::{SegmentView, NO_MASTER_DATA};
use crate::model::{display_cell, MISSING_CELL};
use crate::tui::app::{App, Focus};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Content;
    let view = app.drill.segment_view();

    let title = match &app.drill.course {
        Some(course) => format!(
            " {} · {} ",
            display_name(&course.course_name),
            app.drill.segment
        ),
        None => " Details ".to_string(),
    };

    // Attendance rows are selectable months; everything else scrolls
    let (text, scroll) = match &view {
        SegmentView::Attendance { .. } => (build_lines(&view, theme, app.content_cursor), 0),
        _ => (build_lines(&view, theme, usize::MAX), app.content_cursor),
    };

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(theme.border_style(focused))
                .title(title),
        );

    f.render_widget(paragraph, area);
}

fn label_value<'a>(theme: &Theme, label: &str, value: &str) -> Line<'a> {
    let value_style = if value == MISSING_CELL {
        Style::default().fg(theme.missing)
    } else {
        Style::default().fg(theme.value)
    };
    Line::from(vec![
        Span::styled(format!("  {:<22}", label), Style::default().fg(theme.label)),
        Span::styled(value.to_string(), value_style),
    ])
}

/// Number of lines a render model produces before wrapping
pub fn line_count(view: &SegmentView<'_>, theme: &Theme) -> usize {
    build_lines(view, theme, usize::MAX).lines.len()
}

/// Styled lines for a render model. `month_cursor` marks the highlighted
/// month in the attendance view.
fn build_lines<'a>(view: &SegmentView<'_>, theme: &Theme, month_cursor: usize) -> Text<'a> {
    let muted = Style::default().fg(theme.muted);
    let mut lines: Vec<Line> = Vec::new();

    match view {
        SegmentView::NoCourse => {
            lines.push(Line::styled("Select a course from the sidebar.", muted));
        }
        SegmentView::MasterAbsent => {
            lines.push(Line::styled(NO_MASTER_DATA, Style::default().fg(theme.warn)));
        }
        SegmentView::Master(summary) => {
            for (title, fields) in summary.sections() {
                lines.push(Line::styled(title, theme.heading_style()));
                for (label, value) in fields {
                    lines.push(label_value(theme, label, value));
                }
                lines.push(Line::raw(""));
            }
        }
        SegmentView::Missing(segment) => {
            lines.push(Line::styled(
                format!("No data available for {}", segment),
                Style::default().fg(theme.warn),
            ));
        }
        SegmentView::Rows(rows) => {
            if rows.is_empty() {
                lines.push(Line::styled("No entries.", muted));
            }
            for (i, row) in rows.iter().enumerate() {
                lines.push(Line::styled(format!("Entry {}", i + 1), theme.heading_style()));
                for (header, value) in row.iter() {
                    lines.push(label_value(theme, header, &display_cell(Some(value))));
                }
                lines.push(Line::raw(""));
            }
        }
        SegmentView::Attendance {
            months,
            selected_month,
            days,
        } => {
            lines.push(Line::styled("Classes attended per month", theme.heading_style()));
            if months.is_empty() {
                lines.push(Line::styled("  No dated columns.", muted));
            }
            for (idx, m) in months.iter().enumerate() {
                let open = *selected_month == Some(m.month);
                let style = if idx == month_cursor {
                    theme.selected_style()
                } else if open {
                    Style::default().fg(theme.active).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.foreground)
                };
                lines.push(Line::styled(
                    format!("  {} {:<10} {:>3}", if open { "▾" } else { "▸" }, m.month, m.present),
                    style,
                ));
            }

            if let Some(month) = selected_month {
                lines.push(Line::raw(""));
                lines.push(Line::styled(format!("{} attendance", month), theme.heading_style()));
                if days.is_empty() {
                    lines.push(Line::styled("  No attended days.", muted));
                }
                for day in days.iter() {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {:<22}", day.date), Style::default().fg(theme.label)),
                        Span::styled(day.value.clone(), Style::default().fg(theme.present)),
                    ]));
                }
            }
        }
    }

    Text::from(lines)
}
