// Components module - reusable UI building blocks
//
// Shell components are rendered on every screen:
// - Header: app name, backend, theme, logged-in student
// - Status bar: loading state, user message, key hints
// - Logs panel: recent log entries (toggled with 'L')
// - Toast: short-lived notifications
//
// The authenticated screen adds the sidebar, the segment list and the
// segment content pane.

pub mod header;
pub mod logs_panel;
pub mod segment_list;
pub mod segment_view;
pub mod sidebar;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;
