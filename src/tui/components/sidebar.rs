// Sidebar component
//
// Pinned Master group first, then one heading per category with its
// courses. Only course rows take the cursor; headings are skipped.

use crate::categorize::{display_name, CategoryTree, CourseRef};
use crate::tui::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Heading of the pinned group
pub const PINNED_HEADING: &str = "★ Master";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarItem {
    Heading(String),
    Course { at: CourseRef, pinned: bool },
}

/// Rows for a tree: pinned group (if any), then categories in order
pub fn items(tree: &CategoryTree) -> Vec<SidebarItem> {
    let mut rows = Vec::with_capacity(tree.course_count() + tree.categories.len() + 1);

    if !tree.pinned_master.is_empty() {
        rows.push(SidebarItem::Heading(PINNED_HEADING.to_string()));
        rows.extend(tree.pinned_master.iter().map(|at| SidebarItem::Course {
            at: at.clone(),
            pinned: true,
        }));
    }

    for (category, courses) in &tree.categories {
        rows.push(SidebarItem::Heading(category.clone()));
        rows.extend((0..courses.len()).map(|index| SidebarItem::Course {
            at: CourseRef {
                category: category.clone(),
                index,
            },
            pinned: false,
        }));
    }

    rows
}

fn is_course(item: &SidebarItem) -> bool {
    matches!(item, SidebarItem::Course { .. })
}

/// Index of the first course row
pub fn first_course(rows: &[SidebarItem]) -> Option<usize> {
    rows.iter().position(is_course)
}

/// Next course row from `from` in the direction of `delta`, skipping
/// headings. None at either end.
pub fn step(rows: &[SidebarItem], from: usize, delta: isize) -> Option<usize> {
    if delta >= 0 {
        rows.iter()
            .enumerate()
            .skip(from + 1)
            .find(|(_, item)| is_course(item))
            .map(|(idx, _)| idx)
    } else {
        rows.iter()
            .enumerate()
            .take(from)
            .rev()
            .find(|(_, item)| is_course(item))
            .map(|(idx, _)| idx)
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Sidebar;

    let list_items: Vec<ListItem> = app
        .sidebar
        .iter()
        .enumerate()
        .map(|(idx, item)| match item {
            SidebarItem::Heading(name) => {
                ListItem::new(Line::from(Span::styled(name.clone(), theme.heading_style())))
            }
            SidebarItem::Course { at, pinned } => {
                let Some(course) = app.data.tree.course(at) else {
                    return ListItem::new("");
                };
                // Equal duplicates highlight together
                let active = app.drill.is_selected(course);
                let marker = if active { "▸ " } else { "  " };
                let name = display_name(&course.course_name);
                let label = if *pinned {
                    format!("{}{} ({})", marker, name, at.category)
                } else {
                    format!("{}{}", marker, name)
                };

                let style = if focused && idx == app.sidebar_cursor {
                    theme.selected_style()
                } else if active {
                    Style::default()
                        .fg(theme.active)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.foreground)
                };
                ListItem::new(label).style(style)
            }
        })
        .collect();

    let title = format!(" Courses ({}) ", app.data.tree.course_count());
    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(title),
    );

    let mut state = ListState::default().with_selected(Some(app.sidebar_cursor));
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Course;

    fn tree() -> CategoryTree {
        CategoryTree::build(&[
            Course::new("[Math] Algebra"),
            Course::new("[Master] Roll"),
            Course::new("Art"),
        ])
    }

    #[test]
    fn pinned_group_precedes_categories() {
        let rows = items(&tree());
        let headings: Vec<_> = rows
            .iter()
            .filter_map(|r| match r {
                SidebarItem::Heading(h) => Some(h.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(headings, vec![PINNED_HEADING, "Master", "Math", "Other"]);
        assert_eq!(rows.len(), 8);
    }

    #[test]
    fn no_pinned_heading_without_master_courses() {
        let rows = items(&CategoryTree::build(&[Course::new("Art")]));
        assert_eq!(rows[0], SidebarItem::Heading("Other".to_string()));
    }

    #[test]
    fn step_skips_headings_and_stops_at_ends() {
        let rows = items(&tree());
        // [★, Roll*, Master, Roll, Math, Algebra, Other, Art]
        assert_eq!(first_course(&rows), Some(1));
        assert_eq!(step(&rows, 1, 1), Some(3));
        assert_eq!(step(&rows, 3, 1), Some(5));
        assert_eq!(step(&rows, 5, -1), Some(3));
        assert_eq!(step(&rows, 1, -1), None);
        assert_eq!(step(&rows, 7, 1), None);
    }
}
