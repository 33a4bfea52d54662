//! @ai:module:intent Standalone HTML dashboard page
//! @ai:module:layer infrastructure
//! @ai:module:public_api HtmlReporter, escape_html
//! @ai:module:stateless true

use crate::stats::{CategoryCount, DashboardStats, QuestionMean, RatingMatrix};
use std::fmt::Write as FmtWrite;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; padding: 1rem 2rem; background: #fff; color: #222; }
.dashboard svg { width: 100%; height: auto; }
details { margin: 0.75rem 0; }
summary { cursor: pointer; font-weight: bold; }
table { border-collapse: collapse; margin-top: 0.5rem; font-size: 0.85rem; }
th, td { border: 1px solid #ccc; padding: 0.25rem 0.5rem; text-align: left; }
td.num { text-align: right; }
td.critical { color: #d62728; }
footer { margin-top: 1.5rem; font-size: 0.75rem; color: #777; }
"#;

/// @ai:intent Escape text for HTML element content and attributes
/// @ai:effects pure
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// @ai:intent Wraps the rendered dashboard and its data into one HTML page
pub struct HtmlReporter;

impl HtmlReporter {
    /// @ai:intent Create a new HTML reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Build the full page
    /// @ai:effects pure
    pub fn render(&self, stats: &DashboardStats, svg: &str, generated_at: &str) -> String {
        let mut output = String::new();

        writeln!(output, "<!DOCTYPE html>").unwrap();
        writeln!(output, "<html lang=\"de\">").unwrap();
        writeln!(output, "<head>").unwrap();
        writeln!(output, "<meta charset=\"utf-8\">").unwrap();
        writeln!(
            output,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        )
        .unwrap();
        writeln!(
            output,
            "<title>Hospitality Dashboard | Teilnehmer: {}</title>",
            stats.participants
        )
        .unwrap();
        writeln!(output, "<style>{}</style>", STYLE).unwrap();
        writeln!(output, "</head>").unwrap();
        writeln!(output, "<body>").unwrap();
        writeln!(output, "<main class=\"dashboard\">").unwrap();
        output.push_str(svg);
        writeln!(output).unwrap();
        writeln!(output, "</main>").unwrap();

        output.push_str(&Self::mean_ratings_table(&stats.mean_ratings));
        output.push_str(&Self::counts_table(
            "Ticket-Herkunft",
            "Herkunft",
            &stats.ticket_sources,
        ));
        output.push_str(&Self::matrix_table(&stats.area_matrix));
        output.push_str(&Self::counts_table(
            "Weiterempfehlungsrate",
            "Antwort",
            &stats.recommendations,
        ));

        writeln!(output, "<footer>Erstellt: {}</footer>", escape_html(generated_at)).unwrap();
        writeln!(output, "</body>").unwrap();
        writeln!(output, "</html>").unwrap();

        output
    }

    /// @ai:intent Table of mean rating per question
    /// @ai:effects pure
    fn mean_ratings_table(means: &[QuestionMean]) -> String {
        let mut output = String::new();

        writeln!(output, "<details>").unwrap();
        writeln!(output, "<summary>Durchschnittliche Bewertung</summary>").unwrap();
        writeln!(output, "<table>").unwrap();
        writeln!(output, "<tr><th>Frage</th><th>Mittelwert</th></tr>").unwrap();

        for m in means {
            let class = if m.is_critical() { "num critical" } else { "num" };
            writeln!(
                output,
                "<tr><td>{}</td><td class=\"{}\">{:.2}</td></tr>",
                escape_html(&m.question),
                class,
                m.mean
            )
            .unwrap();
        }

        writeln!(output, "</table>").unwrap();
        writeln!(output, "</details>").unwrap();
        output
    }

    /// @ai:intent Table of category counts
    /// @ai:effects pure
    fn counts_table(title: &str, header: &str, counts: &[CategoryCount]) -> String {
        let mut output = String::new();

        writeln!(output, "<details>").unwrap();
        writeln!(output, "<summary>{}</summary>", escape_html(title)).unwrap();
        writeln!(output, "<table>").unwrap();
        writeln!(
            output,
            "<tr><th>{}</th><th>Anzahl</th></tr>",
            escape_html(header)
        )
        .unwrap();

        for c in counts {
            writeln!(
                output,
                "<tr><td>{}</td><td class=\"num\">{}</td></tr>",
                escape_html(&c.label),
                c.count
            )
            .unwrap();
        }

        writeln!(output, "</table>").unwrap();
        writeln!(output, "</details>").unwrap();
        output
    }

    /// @ai:intent Table of the question by area matrix
    /// @ai:effects pure
    fn matrix_table(matrix: &RatingMatrix) -> String {
        let mut output = String::new();

        writeln!(output, "<details>").unwrap();
        writeln!(output, "<summary>Qualitäts-Matrix</summary>").unwrap();
        writeln!(output, "<table>").unwrap();

        output.push_str("<tr><th>Frage</th>");
        for area in &matrix.areas {
            write!(output, "<th>{}</th>", escape_html(area)).unwrap();
        }
        writeln!(output, "</tr>").unwrap();

        for (question, row) in matrix.questions.iter().zip(&matrix.values) {
            write!(output, "<tr><td>{}</td>", escape_html(question)).unwrap();

            for value in row {
                match value {
                    Some(v) => write!(output, "<td class=\"num\">{:.1}</td>", v).unwrap(),
                    None => output.push_str("<td class=\"num\">–</td>"),
                }
            }
            writeln!(output, "</tr>").unwrap();
        }

        writeln!(output, "</table>").unwrap();
        writeln!(output, "</details>").unwrap();
        output
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}
