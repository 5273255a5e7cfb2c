// Application state and input handling for the TUI
//
// App is a synchronous state machine. Key presses and completed requests go
// in; a Command comes out when something has to happen off the UI task
// (network calls, clipboard). The event loop in tui/mod.rs runs commands and
// feeds their results back as AppEvents, in arrival order.

use super::components::segment_view;
use super::components::sidebar::{self, SidebarItem};
use super::components::toast::Toast;
use super::login_form::{ClassList, LoginField, LoginForm};
use super::modal::{Modal, ModalAction};
use super::theme::Theme;
use crate::config::Config;
use crate::dashboard::CourseData;
use crate::drilldown::DrillDown;
use crate::gateway::{CourseDataRequest, FetchOutcome, GatewayError};
use crate::identity::Profile;
use crate::logging::LogBuffer;
use crate::model::{Course, MASTER_SEGMENT};
use crate::session::{Identity, Route, SessionStore};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Spinner frames for loading states
const SPINNER: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Panel with keyboard focus on the authenticated screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Segments,
    Content,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Segments,
            Focus::Segments => Focus::Content,
            Focus::Content => Focus::Sidebar,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Content,
            Focus::Segments => Focus::Sidebar,
            Focus::Content => Focus::Segments,
        }
    }
}

/// Work the event loop runs off the UI task
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadClasses,
    ResolveIdentity { token: String, class_id: String },
    FetchCourses(CourseDataRequest),
    Copy(String),
}

/// Completed work reported back to the UI task
#[derive(Debug)]
pub enum AppEvent {
    ClassesLoaded(Result<Vec<String>, GatewayError>),
    IdentityResolved {
        token: String,
        class_id: String,
        result: Result<Profile, GatewayError>,
    },
    CoursesFetched(Result<FetchOutcome, GatewayError>),
}

pub struct App {
    pub session: SessionStore,
    pub login: LoginForm,
    pub data: CourseData,
    pub drill: DrillDown,

    /// Sidebar rows derived from the category tree
    pub sidebar: Vec<SidebarItem>,
    pub sidebar_cursor: usize,
    pub segment_cursor: usize,
    /// Month row in the attendance view, scroll offset otherwise
    pub content_cursor: usize,
    pub focus: Focus,

    pub theme: Theme,
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub show_logs: bool,
    pub log_buffer: LogBuffer,

    /// OAuth client hint for the login screen
    pub client_id: Option<String>,
    /// Gateway name for the header ("http" or "demo")
    pub backend: &'static str,

    pub should_quit: bool,
    frame: usize,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer, backend: &'static str) -> Self {
        Self {
            session: SessionStore::new(),
            login: LoginForm::new(config.access_token.clone()),
            data: CourseData::new(),
            drill: DrillDown::new(),
            sidebar: Vec::new(),
            sidebar_cursor: 0,
            segment_cursor: 0,
            content_cursor: 0,
            focus: Focus::Sidebar,
            theme: Theme::for_mode(config.theme),
            modal: None,
            toast: None,
            show_logs: false,
            log_buffer,
            client_id: config.identity.client_id.clone(),
            backend,
            should_quit: false,
            frame: 0,
        }
    }

    /// Command to run before the first frame
    pub fn startup(&self) -> Command {
        Command::LoadClasses
    }

    pub fn route(&self) -> Route {
        self.session.route()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Ticks and toasts
    // ─────────────────────────────────────────────────────────────────────

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.frame % SPINNER.len()]
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Report the outcome of a clipboard copy
    pub fn copy_finished(&mut self, result: anyhow::Result<usize>) {
        match result {
            Ok(lines) => self.show_toast(format!("Copied {} lines", lines)),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard copy failed");
                self.show_toast("Clipboard unavailable");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    /// Handle a key press. Layered: Ctrl+C, modal, then the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }

        if let Some(modal) = self.modal {
            if modal.handle_input(key.code) == ModalAction::Close {
                self.modal = None;
            }
            return None;
        }

        match self.route() {
            Route::Login => self.handle_login_key(key),
            Route::Home => self.handle_home_key(key),
        }
    }

    /// Keys shared by both screens. Returns true if handled.
    fn handle_global_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.modal = Some(Modal::Help),
            KeyCode::Char('t') => {
                self.theme = Theme::for_mode(self.theme.mode.toggle());
                tracing::debug!(theme = self.theme.mode.as_str(), "Theme toggled");
            }
            KeyCode::Char('L') => self.show_logs = !self.show_logs,
            _ => return false,
        }
        true
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> Option<Command> {
        let ready = matches!(self.login.classes, ClassList::Ready(_));

        // The token field takes every printable key, so globals stay out of it
        if ready && self.login.field == LoginField::Token {
            match key.code {
                KeyCode::Enter => return self.submit_login(),
                KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => self.login.toggle_field(),
                KeyCode::Backspace => self.login.pop_char(),
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.login.token.clear()
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.login.push_char(c)
                }
                _ => {}
            }
            return None;
        }

        if self.handle_global_key(key.code) || !ready {
            return None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.login.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.login.move_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.login.choose_class(),
            KeyCode::Tab | KeyCode::BackTab => self.login.toggle_field(),
            _ => {}
        }
        None
    }

    fn submit_login(&mut self) -> Option<Command> {
        if !self.login.can_submit() {
            if !self.login.submitting {
                self.show_toast("Choose a class and enter an access token");
            }
            return None;
        }
        let class_id = self.login.selected.clone()?;

        self.login.submitting = true;
        tracing::info!(class = %class_id, "Resolving identity");
        Some(Command::ResolveIdentity {
            token: self.login.token.trim().to_string(),
            class_id,
        })
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> Option<Command> {
        if self.handle_global_key(key.code) {
            return None;
        }

        match key.code {
            KeyCode::Char('x') => self.logout(),
            KeyCode::Char('y') => return self.copy_segment(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Enter => self.select(),
            _ => {}
        }
        None
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            Focus::Sidebar => {
                if let Some(idx) = sidebar::step(&self.sidebar, self.sidebar_cursor, delta) {
                    self.sidebar_cursor = idx;
                }
            }
            Focus::Segments => {
                let len = self.segment_names().len();
                if len > 0 {
                    self.segment_cursor =
                        self.segment_cursor.saturating_add_signed(delta).min(len - 1);
                }
            }
            Focus::Content => {
                let limit = match self.drill.month_summary() {
                    Some(months) => months.len(),
                    None => segment_view::line_count(&self.drill.segment_view(), &self.theme),
                }
                .saturating_sub(1);
                self.content_cursor = self.content_cursor.saturating_add_signed(delta).min(limit);
            }
        }
    }

    fn select(&mut self) {
        match self.focus {
            Focus::Sidebar => {
                if let Some(course) = self.course_under_cursor().cloned() {
                    self.select_course(&course);
                }
            }
            Focus::Segments => {
                if let Some(name) = self.segment_names().get(self.segment_cursor).cloned() {
                    self.drill = self.drill.select_segment(&name);
                    self.content_cursor = 0;
                }
            }
            Focus::Content => {
                if let Some(months) = self.drill.month_summary() {
                    if let Some(month) = months.get(self.content_cursor) {
                        self.drill = self.drill.select_month(month.month);
                    }
                }
            }
        }
    }

    fn select_course(&mut self, course: &Course) {
        self.drill = self.drill.select_course(course);
        self.segment_cursor = self
            .segment_names()
            .iter()
            .position(|s| s == MASTER_SEGMENT)
            .unwrap_or(0);
        self.content_cursor = 0;
    }

    fn copy_segment(&mut self) -> Option<Command> {
        if self.drill.course.is_none() {
            self.show_toast("Select a course first");
            return None;
        }
        let text = self.drill.segment_view().to_text(&self.drill.segment);
        Some(Command::Copy(text))
    }

    fn logout(&mut self) {
        self.session.logout();
        self.data.reset();
        self.drill = DrillDown::new();
        self.sidebar.clear();
        self.sidebar_cursor = 0;
        self.segment_cursor = 0;
        self.content_cursor = 0;
        self.focus = Focus::Sidebar;
        self.login.reset();
        self.show_toast("Logged out");
    }

    // ─────────────────────────────────────────────────────────────────────
    // Completed requests
    // ─────────────────────────────────────────────────────────────────────

    /// Apply a finished request. Results apply in arrival order.
    pub fn apply(&mut self, event: AppEvent) -> Option<Command> {
        match event {
            AppEvent::ClassesLoaded(result) => {
                if let Err(e) = &result {
                    tracing::error!(error = %e, "Failed to load class list");
                }
                self.login.set_classes(result);
                None
            }
            AppEvent::IdentityResolved {
                token,
                class_id,
                result,
            } => {
                self.login.submitting = false;
                match result {
                    Ok(profile) => {
                        let identity = Identity::from_profile(token, profile, class_id);
                        let request = CourseDataRequest::for_identity(&identity);
                        self.session.login(identity);
                        self.data.reset();
                        self.data.begin_fetch();
                        self.drill = DrillDown::new();
                        self.focus = Focus::Sidebar;
                        Some(Command::FetchCourses(request))
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "User-info lookup failed");
                        self.show_toast("Login failed; check the access token");
                        None
                    }
                }
            }
            AppEvent::CoursesFetched(result) => {
                if self.session.current().is_none() {
                    tracing::debug!("Dropping course data that arrived after logout");
                    return None;
                }
                self.data.apply(result);
                self.drill = DrillDown::new();
                self.rebuild_sidebar();
                None
            }
        }
    }

    fn rebuild_sidebar(&mut self) {
        self.sidebar = sidebar::items(&self.data.tree);
        self.sidebar_cursor = sidebar::first_course(&self.sidebar).unwrap_or(0);
        self.segment_cursor = 0;
        self.content_cursor = 0;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries for rendering
    // ─────────────────────────────────────────────────────────────────────

    /// Course under the sidebar cursor
    pub fn course_under_cursor(&self) -> Option<&Course> {
        match self.sidebar.get(self.sidebar_cursor)? {
            SidebarItem::Course { at, .. } => self.data.tree.course(at),
            SidebarItem::Heading(_) => None,
        }
    }

    /// Segment names of the selected course, in payload order
    pub fn segment_names(&self) -> Vec<String> {
        self.drill
            .course
            .as_ref()
            .map(|c| c.segment_names().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::demo::demo_courses;
    use crate::obfuscation::derive_id;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_token(token: Option<&str>) -> App {
        let config = Config {
            access_token: token.map(str::to_string),
            ..Config::default()
        };
        let mut app = App::new(&config, LogBuffer::new(), "demo");
        app.apply(AppEvent::ClassesLoaded(Ok(vec![
            "CS-2024-A".to_string(),
            "CS-2024-B".to_string(),
        ])));
        app
    }

    fn profile() -> Profile {
        Profile {
            email: "asha@example.edu".to_string(),
            name: Some("Asha".to_string()),
        }
    }

    /// Logged in with the demo payload loaded
    fn home() -> App {
        let mut app = app_with_token(Some("tok"));
        app.apply(AppEvent::IdentityResolved {
            token: "tok".to_string(),
            class_id: "CS-2024-A".to_string(),
            result: Ok(profile()),
        });
        app.apply(AppEvent::CoursesFetched(Ok(FetchOutcome::Courses(
            demo_courses("asha@example.edu").unwrap(),
        ))));
        app
    }

    fn select_sidebar_course(app: &mut App, name: &str) {
        let idx = app
            .sidebar
            .iter()
            .position(|item| match item {
                SidebarItem::Course { at, .. } => {
                    app.data.tree.course(at).map(|c| c.course_name.as_str()) == Some(name)
                }
                SidebarItem::Heading(_) => false,
            })
            .unwrap();
        app.sidebar_cursor = idx;
        app.focus = Focus::Sidebar;
        app.handle_key(press(KeyCode::Enter));
    }

    #[test]
    fn login_flow_produces_identity_and_fetch() {
        let mut app = app_with_token(Some("tok"));
        assert_eq!(app.startup(), Command::LoadClasses);
        assert_eq!(app.route(), Route::Login);

        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.handle_key(press(KeyCode::Enter)), None);
        assert_eq!(app.login.selected.as_deref(), Some("CS-2024-B"));
        assert_eq!(app.login.field, LoginField::Token);

        let command = app.handle_key(press(KeyCode::Enter));
        assert_eq!(
            command,
            Some(Command::ResolveIdentity {
                token: "tok".to_string(),
                class_id: "CS-2024-B".to_string(),
            })
        );

        let command = app.apply(AppEvent::IdentityResolved {
            token: "tok".to_string(),
            class_id: "CS-2024-B".to_string(),
            result: Ok(profile()),
        });
        assert_eq!(app.route(), Route::Home);
        assert!(app.data.loading);
        assert_eq!(
            command,
            Some(Command::FetchCourses(CourseDataRequest {
                email: "asha@example.edu".to_string(),
                encrypted_email: derive_id("asha@example.edu"),
                class: "CS-2024-B".to_string(),
            }))
        );
    }

    #[test]
    fn login_is_disabled_without_class() {
        let mut app = app_with_token(Some("tok"));
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.login.field, LoginField::Token);
        assert_eq!(app.handle_key(press(KeyCode::Enter)), None);
        assert!(app.toast.is_some());
    }

    #[test]
    fn failed_lookup_stays_on_login() {
        let mut app = app_with_token(Some("tok"));
        app.login.submitting = true;
        let command = app.apply(AppEvent::IdentityResolved {
            token: "tok".to_string(),
            class_id: "CS-2024-A".to_string(),
            result: Err(GatewayError::Transport("401".to_string())),
        });
        assert_eq!(command, None);
        assert_eq!(app.route(), Route::Login);
        assert!(!app.login.submitting);
        assert!(app.toast.is_some());
    }

    #[test]
    fn typing_q_in_token_field_does_not_quit() {
        let mut app = app_with_token(None);
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.login.token, "q");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn class_list_failure_blocks_login() {
        let config = Config::default();
        let mut app = App::new(&config, LogBuffer::new(), "http");
        app.apply(AppEvent::ClassesLoaded(Err(GatewayError::Transport(
            "offline".to_string(),
        ))));
        assert!(matches!(app.login.classes, ClassList::Failed(_)));

        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.login.field, LoginField::Classes);
        assert!(app.login.selected.is_none());
    }

    #[test]
    fn sidebar_lists_pinned_group_first() {
        let app = home();
        assert_eq!(app.sidebar[0], SidebarItem::Heading(sidebar::PINNED_HEADING.to_string()));
        assert!(matches!(app.sidebar[1], SidebarItem::Course { pinned: true, .. }));
        assert!(app.course_under_cursor().is_some());
    }

    #[test]
    fn selecting_course_resets_to_master() {
        let mut app = home();
        select_sidebar_course(&mut app, "[Master] Attendance");
        app.drill = app.drill.select_segment("Attendance").select_month("October");
        assert!(!app.drill.days.is_empty());

        select_sidebar_course(&mut app, "[Math] Calculus");
        assert_eq!(app.drill.segment, "Master");
        assert_eq!(app.drill.month, None);
        assert!(app.drill.days.is_empty());
        assert_eq!(app.segment_names()[app.segment_cursor], "Master");
    }

    #[test]
    fn attendance_drill_down_by_keyboard() {
        let mut app = home();
        select_sidebar_course(&mut app, "[Master] Attendance");

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Segments);
        let attendance = app
            .segment_names()
            .iter()
            .position(|s| s == "Attendance")
            .unwrap();
        app.segment_cursor = attendance;
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.drill.segment, "Attendance");

        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.drill.month.as_deref(), Some("October"));
        let dates: Vec<_> = app.drill.days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["Mon, Oct 7, 2024", "Thu, Oct 10, 2024", "Mon, Oct 14, 2024"]
        );

        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.content_cursor, 1);
    }

    #[test]
    fn content_scroll_stops_at_last_line() {
        let mut app = home();
        select_sidebar_course(&mut app, "[Math] Calculus");
        app.focus = Focus::Content;

        let lines = segment_view::line_count(&app.drill.segment_view(), &app.theme);
        assert!(lines > 1);
        for _ in 0..lines + 20 {
            app.handle_key(press(KeyCode::Char('j')));
        }
        assert_eq!(app.content_cursor, lines - 1);

        app.handle_key(press(KeyCode::Char('k')));
        assert_eq!(app.content_cursor, lines - 2);
    }

    #[test]
    fn copy_needs_a_course() {
        let mut app = home();
        assert_eq!(app.handle_key(press(KeyCode::Char('y'))), None);

        app.handle_key(press(KeyCode::Enter));
        let Some(Command::Copy(text)) = app.handle_key(press(KeyCode::Char('y'))) else {
            panic!("expected copy command");
        };
        assert!(text.starts_with("## Master"));
    }

    #[test]
    fn logout_clears_state_and_ignores_late_data() {
        let mut app = home();
        app.handle_key(press(KeyCode::Char('x')));
        assert_eq!(app.route(), Route::Login);
        assert!(app.sidebar.is_empty());
        assert!(app.data.courses.is_none());

        app.apply(AppEvent::CoursesFetched(Ok(FetchOutcome::Courses(vec![
            Course::new("Art"),
        ]))));
        assert!(app.data.courses.is_none());
        assert!(matches!(app.login.classes, ClassList::Ready(_)));
    }

    #[test]
    fn no_data_shows_message() {
        let mut app = app_with_token(Some("tok"));
        app.apply(AppEvent::IdentityResolved {
            token: "tok".to_string(),
            class_id: "CS-2024-A".to_string(),
            result: Ok(profile()),
        });
        app.apply(AppEvent::CoursesFetched(Ok(FetchOutcome::NoData { status: 404 })));
        assert!(!app.data.loading);
        assert_eq!(
            app.data.user_message.as_deref(),
            Some(crate::dashboard::NO_DATA_MESSAGE)
        );
        assert!(app.sidebar.is_empty());
    }

    #[test]
    fn theme_toggle_and_help_modal() {
        let mut app = home();
        let before = app.theme.mode;
        app.handle_key(press(KeyCode::Char('t')));
        assert_eq!(app.theme.mode, before.toggle());

        app.handle_key(press(KeyCode::Char('?')));
        assert_eq!(app.modal, Some(Modal::Help));
        // Modal swallows keys until closed
        app.handle_key(press(KeyCode::Char('x')));
        assert_eq!(app.route(), Route::Home);
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.modal, None);
    }
}
