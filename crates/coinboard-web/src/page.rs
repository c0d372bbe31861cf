use coinboard_data::Window;

const TEMPLATE: &str = include_str!("../static/index.html");

/// Render the single dashboard page for the loaded window.
pub fn render(window: &Window) -> String {
    TEMPLATE.replace(
        "{{period_start}}",
        &window.start.format("%d/%m/%Y").to_string(),
    )
}
