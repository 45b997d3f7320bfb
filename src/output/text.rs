//! Human-readable text output

use crate::result::BestResult;

/// `<number> = <minor> + <major>`
pub fn format_result(best: &BestResult) -> String {
    best.to_string()
}
