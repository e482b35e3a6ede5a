//! JUnit XML report
//!
//! One `<testsuite>` named `meta-check`. Every missing or dangling companion
//! is a failing `<testcase>`; a clean result yields a single passing case.

use meta_check::CheckResult;

const SUITE: &str = "meta-check";

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn push_failure(xml: &mut String, kind: &str, path: &str, message: &str) {
    let path = escape_xml(path);
    xml.push_str(&format!(
        "    <testcase name=\"{path}\" classname=\"{SUITE}.{kind}\">\n"
    ));
    xml.push_str(&format!(
        "      <failure type=\"{kind}\" message=\"{message}\">{message}: {path}</failure>\n"
    ));
    xml.push_str("    </testcase>\n");
}

/// Render `result` as a JUnit XML document.
pub fn render_junit(result: &CheckResult) -> String {
    let failures = result.len();
    let tests = failures.max(1);

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!(
        "<testsuites name=\"{SUITE}\" tests=\"{tests}\" failures=\"{failures}\" errors=\"0\">\n"
    ));
    xml.push_str(&format!(
        "  <testsuite name=\"{SUITE}\" tests=\"{tests}\" failures=\"{failures}\" errors=\"0\">\n"
    ));

    if result.is_empty() {
        xml.push_str(&format!(
            "    <testcase name=\"all .meta files are consistent\" classname=\"{SUITE}\" />\n"
        ));
    }
    for companion in result.expected_companions() {
        push_failure(&mut xml, "missing", companion.as_str(), "Missing .meta file");
    }
    for companion in &result.dangling_meta {
        push_failure(&mut xml, "dangling", companion.as_str(), "Dangling .meta file");
    }

    xml.push_str("  </testsuite>\n");
    xml.push_str("</testsuites>\n");
    xml
}
