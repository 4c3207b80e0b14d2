use hotcopy_core::{CopyResult, Outcome, ResultSink};

/// One status line per copy outcome.
pub fn format_result(result: &CopyResult) -> String {
    match result.outcome {
        Outcome::Copied => format!("✅ {result}"),
        Outcome::Filtered => format!("🚫 {result}"),
        Outcome::Failed => format!("❌ {result}"),
    }
}

/// Prints every outcome to stdout, the status-bar equivalent of a
/// headless session.
pub struct StatusSink;

impl ResultSink for StatusSink {
    fn on_result(&mut self, result: &CopyResult) {
        println!("{}", format_result(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_marks_outcomes() {
        let copied = CopyResult::copied("/a.js", "/out/a.js");
        let filtered = CopyResult::filtered("/a.txt", "extension '.txt' is not whitelisted");
        let failed = CopyResult::failed("/b.js", "no prior output file at '/out/b.js'");

        assert!(format_result(&copied).starts_with("✅"));
        assert!(format_result(&filtered).starts_with("🚫"));
        assert!(format_result(&failed).starts_with("❌"));
    }
}
