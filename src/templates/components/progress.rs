use maud::{html, Markup};

pub fn progress_bar(percent: u8, failed: bool) -> Markup {
    let fill = if failed { "progress-fill failed" } else { "progress-fill" };

    html! {
        div
            class="progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=(percent)
        {
            div class=(fill) style=(format!("width: {percent}%;")) {}
        }
        span class="progress-label" { (percent) "%" }
    }
}
