// Headless commands - the same data path as the TUI, printed to stdout

use crate::categorize::display_name;
use crate::cli::CoursesArgs;
use crate::dashboard::CourseData;
use crate::drilldown::DrillDown;
use crate::gateway::{CourseDataRequest, Gateway};
use crate::identity::{IdentityProvider, Profile};
use crate::session::Identity;
use anyhow::{bail, Context, Result};

/// Print one class per line
pub async fn run_classes(gateway: &dyn Gateway) -> Result<()> {
    let classes = gateway
        .list_classes()
        .await
        .context("Failed to load class list")?;

    for class in classes {
        println!("{}", class);
    }
    Ok(())
}

/// Resolve the student, fetch their courses and print the tree
pub async fn run_courses(
    gateway: &dyn Gateway,
    identity_provider: &dyn IdentityProvider,
    args: &CoursesArgs,
    token: Option<&str>,
) -> Result<()> {
    let identity = resolve_identity(identity_provider, args, token).await?;
    tracing::info!(email = %identity.email, class = %identity.class_id, "Fetching courses");

    let mut data = CourseData::new();
    data.begin_fetch();
    data.apply(
        gateway
            .fetch_course_data(&CourseDataRequest::for_identity(&identity))
            .await,
    );

    if let Some(message) = &data.user_message {
        bail!("{}", message);
    }

    print!("{}", render_tree(&data, args.segment.as_deref()));
    Ok(())
}

async fn resolve_identity(
    identity_provider: &dyn IdentityProvider,
    args: &CoursesArgs,
    token: Option<&str>,
) -> Result<Identity> {
    if let Some(email) = &args.email {
        let profile = Profile {
            email: email.clone(),
            name: None,
        };
        return Ok(Identity::from_profile(
            token.unwrap_or_default(),
            profile,
            &args.class_id,
        ));
    }

    let Some(token) = token else {
        bail!("Either --email or an access token (--token / CLASSDASH_ACCESS_TOKEN) is required");
    };

    let profile = identity_provider
        .fetch_profile(token)
        .await
        .context("User-info lookup failed")?;
    Ok(Identity::from_profile(token, profile, &args.class_id))
}

/// Text rendering of the sidebar: pinned Master group, then categories.
///
/// With `segment`, each course is followed by that segment's content.
pub fn render_tree(data: &CourseData, segment: Option<&str>) -> String {
    let mut out = String::new();
    let tree = &data.tree;

    if tree.is_empty() {
        out.push_str("No courses.\n");
        return out;
    }

    if !tree.pinned_master.is_empty() {
        out.push_str("Master\n");
        for course in tree.master_courses() {
            out.push_str(&format!("  * {}\n", display_name(&course.course_name)));
        }
        out.push('\n');
    }

    for (category, courses) in &tree.categories {
        out.push_str(&format!("{}\n", category));
        for course in courses {
            out.push_str(&format!("  - {}\n", display_name(&course.course_name)));
            if let Some(segment) = segment {
                let drill = DrillDown::new().select_course(course).select_segment(segment);
                for line in drill.segment_view().to_text(segment).lines() {
                    if line.is_empty() {
                        out.push('\n');
                    } else {
                        out.push_str(&format!("      {}\n", line));
                    }
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{DemoGateway, FetchOutcome};
    use crate::identity::DemoIdentityProvider;
    use crate::model::Course;

    fn data(courses: Vec<Course>) -> CourseData {
        let mut data = CourseData::new();
        data.apply(Ok(FetchOutcome::Courses(courses)));
        data
    }

    #[test]
    fn tree_lists_pinned_group_before_categories() {
        let text = render_tree(
            &data(vec![
                Course::new("[Math] Algebra"),
                Course::new("[Master] Attendance"),
                Course::new("Art"),
            ]),
            None,
        );
        assert_eq!(
            text,
            "Master\n  * Attendance\n\nMaster\n  - Attendance\nMath\n  - Algebra\nOther\n  - Art\n"
        );
    }

    #[test]
    fn segment_content_is_indented_under_course() {
        let text = render_tree(&data(vec![Course::new("[Math] Algebra")]), Some("Master"));
        assert!(text.contains("  - Algebra\n      ## Master\n"));
        assert!(text.contains("      No Master data available\n"));
    }

    #[test]
    fn empty_tree_says_so() {
        assert_eq!(render_tree(&CourseData::new(), None), "No courses.\n");
    }

    #[tokio::test]
    async fn email_flag_skips_user_info_lookup() {
        let args = CoursesArgs {
            class_id: "CS-2024-A".to_string(),
            email: Some("asha@example.edu".to_string()),
            segment: None,
        };
        let identity = resolve_identity(&DemoIdentityProvider, &args, None).await.unwrap();
        assert_eq!(identity.email, "asha@example.edu");
        assert_eq!(identity.class_id, "CS-2024-A");
    }

    #[tokio::test]
    async fn missing_token_and_email_is_an_error() {
        let args = CoursesArgs {
            class_id: "CS-2024-A".to_string(),
            email: None,
            segment: None,
        };
        assert!(resolve_identity(&DemoIdentityProvider, &args, None).await.is_err());
    }

    #[tokio::test]
    async fn no_data_class_fails_with_user_message() {
        let args = CoursesArgs {
            class_id: crate::gateway::demo::DEMO_EMPTY_CLASS.to_string(),
            email: Some("asha@example.edu".to_string()),
            segment: None,
        };
        let err = run_courses(&DemoGateway::new(), &DemoIdentityProvider, &args, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), crate::dashboard::NO_DATA_MESSAGE);
    }
}
