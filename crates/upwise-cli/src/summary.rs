use console::Style;
use upwise_core::session::SessionState;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    name: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            name: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

/// Print a styled summary of a completed run: per-file before/after payload
/// sizes. Results are display artifacts; nothing is written to disk.
pub fn print_run_summary(session: &SessionState) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Upwise Results"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Profile"),
        s.value.apply_to(session.profile())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(session.scale())
    );
    match session.output_folder() {
        Some(label) => println!(
            "  {:<14}{}",
            s.label.apply_to("Output folder"),
            s.value.apply_to(label)
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Output folder"),
            s.disabled.apply_to("not set")
        ),
    }
    println!();

    if session.results().is_empty() {
        println!("  {}", s.disabled.apply_to("No results"));
        println!();
        return;
    }

    for result in session.results() {
        println!("  {}", s.name.apply_to(&result.file_name));
        println!(
            "    {:<12}{}",
            s.label.apply_to("Before"),
            s.value.apply_to(format!("{:.1} KB", payload_kb(&result.original)))
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("After"),
            s.value.apply_to(format!("{:.1} KB", payload_kb(&result.upscaled)))
        );
    }
    println!();
}

/// Approximate decoded size of a data URI's base64 payload.
fn payload_kb(uri: &str) -> f64 {
    let payload = uri.split_once(',').map(|(_, p)| p).unwrap_or("");
    (payload.len() * 3 / 4) as f64 / 1024.0
}
