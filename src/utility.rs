use indicatif::{ProgressBar, ProgressStyle};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) = ProgressStyle::with_template(
        " {msg} {wide_bar} {pos}/{len} estimated remaining: {eta_precise}",
    ) {
        bar.set_style(style);
    }
    bar
}

/// Returns a visible progress bar if `show` is set, a hidden one otherwise.
pub fn get_optional_progressbar(show: bool, job_name: &str, len: u64) -> ProgressBar {
    if show {
        get_progressbar(job_name, len)
    } else {
        ProgressBar::hidden()
    }
}
