//! HTML pages for the calculator form and its results

use crate::format;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const RESULT_TEMPLATE: &str = include_str!("../../templates/result.html");

/// Input form
pub fn index() -> &'static str {
    INDEX_TEMPLATE
}

/// Results page with the chart embedded as a base64 PNG.
/// Only formatted numbers and base64 text are substituted, so nothing needs escaping.
pub fn result(final_amount: f64, difference: f64, plot_base64: &str) -> String {
    RESULT_TEMPLATE
        .replace("{{final_amount}}", &format::currency(final_amount, 2))
        .replace("{{difference}}", &format::currency(difference, 2))
        .replace("{{plot_url}}", plot_base64)
}
