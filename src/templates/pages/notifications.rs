use maud::{html, Markup};

/// Navbar fragment polled by htmx.
pub fn notification_badge(unread: usize) -> Markup {
    html! {
        @if unread > 0 {
            a href="/" class="notification-count" title="Unread notifications" { (unread) }
        }
    }
}
