//! @ai:module:intent Dashboard report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, DashboardRenderer, HtmlReporter, wrap_label

pub mod charts;
pub mod html;
pub mod labels;

pub use charts::{heat_color, DashboardRenderer, DashboardRendererTrait};
pub use html::{escape_html, HtmlReporter};
pub use labels::wrap_label;

use crate::stats::DashboardStats;
use anyhow::Result;
use std::path::Path;

/// @ai:intent Combined dashboard generator: SVG charts inside one HTML file
pub struct ReportGenerator {
    charts: DashboardRenderer,
    html: HtmlReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            charts: DashboardRenderer::new(),
            html: HtmlReporter::new(),
        }
    }

    /// @ai:intent Render the dashboard and write it to `output_path`
    /// @ai:effects fs:write
    pub fn generate(&self, stats: &DashboardStats, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let svg = self.charts.render_svg(stats)?;
        let generated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
        let page = self.html.render(stats, &svg, &generated_at);

        std::fs::write(output_path, page)?;

        tracing::info!("Dashboard written to {}", output_path.display());
        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::dataset::{DatasetLoader, DatasetLoaderTrait};
    use crate::generator::{rng_from_seed, SurveyGenerator, SurveyGeneratorTrait};
    use crate::stats::{StatsAggregator, StatsAggregatorTrait};
    use tempfile::TempDir;

    #[test]
    fn test_generate_dashboard_from_generated_surveys() {
        let temp = TempDir::new().unwrap();
        let survey_dir = temp.path().join("output");
        let generator = SurveyGenerator::from_config(&GeneratorConfig::default()).unwrap();
        let records = generator.generate(56, &mut rng_from_seed(Some(56)));
        generator.write_all(&records, &survey_dir).unwrap();

        let dataset = DatasetLoader::new().load(&survey_dir).unwrap();
        let stats = StatsAggregator::new().aggregate(&dataset);
        let output = temp.path().join("reports").join("Hospitality_Dashboard_Fixed.html");

        ReportGenerator::new().generate(&stats, &output).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("Teilnehmer: 56"));
        assert!(content.contains("<svg"));
        assert!(content.contains("Weiterempfehlungsrate"));
        assert_eq!(stats.mean_ratings.len(), 10);
        assert_eq!(stats.recommendations.len(), 4);
    }
}
