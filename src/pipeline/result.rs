//! Counts reported at the end of a run.

use crate::utils::plural_count;

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Pages scanned and rewritten.
    pub html_files: usize,
    /// Unique scripts discovered on pages.
    pub js_files: usize,
    pub included_js_files: usize,
    /// Unique stylesheets discovered on pages.
    pub css_files: usize,
    pub included_css_files: usize,
    /// Removal selectors run on every page (not elements removed).
    pub removed_elements: usize,
    /// Web path of the script bundle from the site root.
    pub js_bundle: String,
    /// Web path of the stylesheet bundle from the site root.
    pub css_bundle: String,
}

impl RunResult {
    /// Lines printed after a successful run.
    ///
    /// The middle line only appears when something was included or removed.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Looked through {}. Found {} used, found {} used.",
            plural_count(self.html_files, "HTML file"),
            plural_count(self.js_files, "unique JavaScript file"),
            plural_count(self.css_files, "unique CSS file"),
        )];

        let mut extra = Vec::new();
        if self.included_js_files != 0 {
            extra.push(format!(
                "Included {}.",
                plural_count(self.included_js_files, "JavaScript file")
            ));
        }
        if self.included_css_files != 0 {
            extra.push(format!(
                "Included {}.",
                plural_count(self.included_css_files, "CSS file")
            ));
        }
        if self.removed_elements != 0 {
            let noun = if self.removed_elements == 1 { "query" } else { "queries" };
            extra.push(format!(
                "Ran {} remove element {noun}.",
                self.removed_elements
            ));
        }
        if !extra.is_empty() {
            lines.push(extra.join(" "));
        }

        lines.push(format!(
            "Saved JavaScript to {}, CSS to {} and replaced script/link tags in HTML files.",
            self.js_bundle, self.css_bundle
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> RunResult {
        RunResult {
            html_files: 3,
            js_files: 1,
            included_js_files: 0,
            css_files: 2,
            included_css_files: 0,
            removed_elements: 0,
            js_bundle: "all-1a2b3c4d.dwindle.js".into(),
            css_bundle: "all-1a2b3c4d.dwindle.css".into(),
        }
    }

    #[test]
    fn test_summary_without_extras() {
        let lines = result().summary_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Looked through 3 HTML files. Found 1 unique JavaScript file used, found 2 unique CSS files used."
        );
        assert!(lines[1].contains("all-1a2b3c4d.dwindle.js"));
    }

    #[test]
    fn test_summary_with_extras() {
        let result = RunResult {
            included_css_files: 1,
            removed_elements: 2,
            ..result()
        };
        let lines = result.summary_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Included 1 CSS file. Ran 2 remove element queries.");
    }
}
