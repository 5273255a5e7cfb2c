// Course categorizer
//
// Turns the flat course array into the sidebar tree:
// - Category = first bracketed tag in the course name, or "Other"
// - Categories sorted by name, courses sorted by full name within a category
// - "[Master]" courses are additionally surfaced as a pinned group

use crate::model::Course;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Category for courses without a bracketed tag
pub const OTHER_CATEGORY: &str = "Other";

/// Literal tag marking a course for the pinned group
pub const MASTER_TAG: &str = "[Master]";

fn re_category_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]").unwrap())
}

fn re_leading_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[[^\]]*\]\s*").unwrap())
}

/// Category of a course name: the first bracketed tag, else "Other"
pub fn category_of(course_name: &str) -> &str {
    re_category_tag()
        .captures(course_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(OTHER_CATEGORY)
}

/// Name shown in lists: the leading tag and the whitespace after it removed
pub fn display_name(course_name: &str) -> &str {
    match re_leading_tag().find(course_name) {
        Some(m) => &course_name[m.end()..],
        None => course_name,
    }
}

/// Whether the course belongs in the pinned Master group
pub fn is_master_course(course_name: &str) -> bool {
    course_name.contains(MASTER_TAG)
}

/// Position of a course inside a [`CategoryTree`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRef {
    pub category: String,
    pub index: usize,
}

/// Navigable tree derived from a course array
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTree {
    /// Category name -> courses, both levels in sorted order
    pub categories: BTreeMap<String, Vec<Course>>,

    /// References to every "[Master]" course, in flatten order
    pub pinned_master: Vec<CourseRef>,
}

impl CategoryTree {
    /// Build the tree. The result depends only on the multiset of courses,
    /// never on their order in `courses`.
    pub fn build(courses: &[Course]) -> Self {
        let mut categories: BTreeMap<String, Vec<Course>> = BTreeMap::new();
        for course in courses {
            categories
                .entry(category_of(&course.course_name).to_string())
                .or_default()
                .push(course.clone());
        }

        for list in categories.values_mut() {
            // Identical names are ordered by content so equal inputs in any
            // order produce the same tree.
            list.sort_by_cached_key(|c| (c.course_name.clone(), content_key(c)));
        }

        let pinned_master = categories
            .iter()
            .flat_map(|(category, list)| {
                list.iter()
                    .enumerate()
                    .filter(|(_, c)| is_master_course(&c.course_name))
                    .map(move |(index, _)| CourseRef {
                        category: category.clone(),
                        index,
                    })
            })
            .collect();

        Self {
            categories,
            pinned_master,
        }
    }

    /// Resolve a reference produced by this tree
    pub fn course(&self, at: &CourseRef) -> Option<&Course> {
        self.categories.get(&at.category)?.get(at.index)
    }

    /// Pinned Master courses, resolved
    pub fn master_courses(&self) -> impl Iterator<Item = &Course> {
        self.pinned_master.iter().filter_map(|r| self.course(r))
    }

    /// Every course in display order (categories, then courses)
    pub fn flatten(&self) -> impl Iterator<Item = &Course> {
        self.categories.values().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn course_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

fn content_key(course: &Course) -> String {
    serde_json::to_string(&course.data).unwrap_or_default()
}
