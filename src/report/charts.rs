//! @ai:module:intent Four-panel dashboard chart rendered as SVG
//! @ai:module:layer infrastructure
//! @ai:module:public_api DashboardRenderer, DashboardRendererTrait, heat_color
//! @ai:module:stateless true

use crate::report::labels::wrap_label;
use crate::stats::types::{MAX_SCORE, MIN_SCORE};
use crate::stats::{CategoryCount, DashboardStats, QuestionMean, RatingMatrix};
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

type Canvas<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Overall dashboard size in pixels.
pub const DASHBOARD_SIZE: (u32, u32) = (1600, 1100);

const FONT: &str = "sans-serif";
const LABEL_FONT_SIZE: i32 = 11;
const LINE_HEIGHT: i32 = 13;

const CRITICAL_COLOR: RGBColor = RGBColor(0xd6, 0x27, 0x28);
const GOOD_COLOR: RGBColor = RGBColor(0x2c, 0xa0, 0x2c);
const SOURCE_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const NO_DATA_COLOR: RGBColor = RGBColor(0xe0, 0xe0, 0xe0);
const RECOMMENDATION_COLORS: [RGBColor; 4] = [
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0x98, 0xdf, 0x8a),
    RGBColor(0xff, 0x98, 0x96),
    RGBColor(0xd6, 0x27, 0x28),
];

// Red-yellow-green diverging scale, low to high.
const RD_YL_GN: [(u8, u8, u8); 11] = [
    (165, 0, 38),
    (215, 48, 39),
    (244, 109, 67),
    (253, 174, 97),
    (254, 224, 139),
    (255, 255, 191),
    (217, 239, 139),
    (166, 217, 106),
    (102, 189, 99),
    (26, 152, 80),
    (0, 104, 55),
];

pub const MEAN_LABEL_WIDTH: usize = 35;
pub const SOURCE_LABEL_WIDTH: usize = 25;
pub const MATRIX_ROW_LABEL_WIDTH: usize = 30;
pub const MATRIX_COLUMN_LABEL_WIDTH: usize = 15;

pub const MEAN_PANEL_TITLE: &str = "Durchschnittliche Bewertung";
pub const SOURCE_PANEL_TITLE: &str = "Ticket-Herkunft";
pub const MATRIX_PANEL_TITLE: &str = "Qualitäts-Matrix (Heatmap)";
pub const RECOMMENDATION_PANEL_TITLE: &str = "Weiterempfehlungsrate";

/// @ai:intent Trait for dashboard rendering
pub trait DashboardRendererTrait {
    /// @ai:intent Render the 2x2 dashboard to an SVG document
    fn render_svg(&self, stats: &DashboardStats) -> Result<String>;
}

/// @ai:intent Renders dashboard statistics with plotters
pub struct DashboardRenderer;

/// One horizontal bar with its axis label and value text.
struct Bar {
    label: String,
    value: f64,
    text: String,
    color: RGBColor,
}

/// How wrapped label lines are placed relative to their anchor point.
#[derive(Clone, Copy)]
enum LabelPlacement {
    /// Right-aligned, centred vertically on the anchor (y axis)
    LeftOf,
    /// Centred horizontally, stacked downwards from the anchor (x axis)
    Below,
}

/// @ai:intent Map a score in [1, 5] onto the red-yellow-green scale
/// @ai:effects pure
pub fn heat_color(value: f64) -> RGBColor {
    let t = ((value - MIN_SCORE) / (MAX_SCORE - MIN_SCORE)).clamp(0.0, 1.0);
    let scaled = t * (RD_YL_GN.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(RD_YL_GN.len() - 1);
    let upper = (lower + 1).min(RD_YL_GN.len() - 1);
    let frac = scaled - lower as f64;

    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;
    let (r0, g0, b0) = RD_YL_GN[lower];
    let (r1, g1, b1) = RD_YL_GN[upper];

    RGBColor(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

impl DashboardRenderer {
    /// @ai:intent Create a new dashboard renderer
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Draw wrapped label lines directly onto the canvas
    /// @ai:effects pure
    fn draw_label(
        canvas: &Canvas,
        label: &str,
        width: usize,
        anchor: (i32, i32),
        placement: LabelPlacement,
    ) -> Result<()> {
        let lines = wrap_label(label, width);
        let count = lines.len() as i32;

        let (pos, top) = match placement {
            LabelPlacement::LeftOf => (
                Pos::new(HPos::Right, VPos::Center),
                anchor.1 - (count - 1) * LINE_HEIGHT / 2,
            ),
            LabelPlacement::Below => (Pos::new(HPos::Center, VPos::Top), anchor.1),
        };
        let style = (FONT, LABEL_FONT_SIZE).into_font().color(&BLACK).pos(pos);

        for (i, line) in lines.iter().enumerate() {
            let y = top + i as i32 * LINE_HEIGHT;
            canvas.draw(&Text::new(line.as_str(), (anchor.0, y), style.clone()))?;
        }

        Ok(())
    }

    /// @ai:intent Draw a horizontal bar chart with wrapped category labels
    /// @ai:effects pure
    fn draw_horizontal_bars(
        panel: &Canvas,
        canvas: &Canvas,
        caption: &str,
        bars: &[Bar],
        x_max: f64,
        label_width: usize,
    ) -> Result<()> {
        let rows = bars.len().max(1) as f64;

        let mut chart = ChartBuilder::on(panel)
            .caption(caption, (FONT, 20))
            .margin(15)
            .x_label_area_size(30)
            .y_label_area_size(label_width as i32 * 6 + 20)
            .build_cartesian_2d(0f64..x_max, -0.5f64..(rows - 0.5))?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_label_formatter(&|_: &f64| String::new())
            .x_labels(6)
            .label_style((FONT, 10))
            .draw()?;

        chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let y = i as f64;
            Rectangle::new([(0.0, y - 0.35), (bar.value, y + 0.35)], bar.color.filled())
        }))?;

        let value_style = (FONT, LABEL_FONT_SIZE)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Center));

        chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
            EmptyElement::at((bar.value, i as f64))
                + Text::new(bar.text.clone(), (4, 0), value_style.clone())
        }))?;

        for (i, bar) in bars.iter().enumerate() {
            let (x, y) = chart.backend_coord(&(0.0, i as f64));
            Self::draw_label(canvas, &bar.label, label_width, (x - 6, y), LabelPlacement::LeftOf)?;
        }

        Ok(())
    }

    /// @ai:intent Panel A: mean rating per question, red below threshold
    /// @ai:effects pure
    fn draw_mean_ratings(panel: &Canvas, canvas: &Canvas, means: &[QuestionMean]) -> Result<()> {
        let bars: Vec<Bar> = means
            .iter()
            .map(|m| Bar {
                label: m.question.clone(),
                value: m.mean,
                text: format!("{:.2}", m.mean),
                color: if m.is_critical() { CRITICAL_COLOR } else { GOOD_COLOR },
            })
            .collect();

        Self::draw_horizontal_bars(
            panel,
            canvas,
            MEAN_PANEL_TITLE,
            &bars,
            MAX_SCORE + 0.5,
            MEAN_LABEL_WIDTH,
        )
    }

    /// @ai:intent Panel B: most frequent ticket sources
    /// @ai:effects pure
    fn draw_ticket_sources(
        panel: &Canvas,
        canvas: &Canvas,
        sources: &[CategoryCount],
    ) -> Result<()> {
        let bars: Vec<Bar> = sources
            .iter()
            .map(|s| Bar {
                label: s.label.clone(),
                value: s.count as f64,
                text: s.count.to_string(),
                color: SOURCE_COLOR,
            })
            .collect();

        let max = sources.iter().map(|s| s.count).max().unwrap_or(0);
        let x_max = (max as f64 * 1.15).max(1.0);

        Self::draw_horizontal_bars(
            panel,
            canvas,
            SOURCE_PANEL_TITLE,
            &bars,
            x_max,
            SOURCE_LABEL_WIDTH,
        )
    }

    /// @ai:intent Panel C: question by area heatmap bounded to [1, 5]
    /// @ai:effects pure
    fn draw_area_matrix(panel: &Canvas, canvas: &Canvas, matrix: &RatingMatrix) -> Result<()> {
        let cols = matrix.areas.len().max(1);
        let rows = matrix.questions.len().max(1);

        let mut chart = ChartBuilder::on(panel)
            .caption(MATRIX_PANEL_TITLE, (FONT, 20))
            .margin(15)
            .x_label_area_size(70)
            .y_label_area_size(MATRIX_ROW_LABEL_WIDTH as i32 * 6 + 20)
            .build_cartesian_2d(0f64..cols as f64, 0f64..rows as f64)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_label_formatter(&|_: &f64| String::new())
            .y_label_formatter(&|_: &f64| String::new())
            .draw()?;

        // First question at the top.
        let row_y = |q: usize| (rows - 1 - q) as f64;

        let cells: Vec<(f64, f64, Option<f64>)> = matrix
            .values
            .iter()
            .enumerate()
            .flat_map(|(q, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(a, value)| (a as f64, row_y(q), *value))
            })
            .collect();

        chart.draw_series(cells.iter().map(|(x, y, value)| {
            let color = value.map(heat_color).unwrap_or(NO_DATA_COLOR);
            Rectangle::new([(*x, *y), (x + 1.0, y + 1.0)], color.filled())
        }))?;

        let cell_style = (FONT, LABEL_FONT_SIZE)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));

        chart.draw_series(cells.iter().filter_map(|(x, y, value)| {
            value.map(|v| {
                EmptyElement::at((x + 0.5, y + 0.5))
                    + Text::new(format!("{:.1}", v), (0, 0), cell_style.clone())
            })
        }))?;

        for (q, question) in matrix.questions.iter().enumerate() {
            let (x, y) = chart.backend_coord(&(0.0, row_y(q) + 0.5));
            Self::draw_label(
                canvas,
                question,
                MATRIX_ROW_LABEL_WIDTH,
                (x - 6, y),
                LabelPlacement::LeftOf,
            )?;
        }

        for (a, area) in matrix.areas.iter().enumerate() {
            let (x, y) = chart.backend_coord(&(a as f64 + 0.5, 0.0));
            Self::draw_label(
                canvas,
                area,
                MATRIX_COLUMN_LABEL_WIDTH,
                (x, y + 6),
                LabelPlacement::Below,
            )?;
        }

        Ok(())
    }

    /// @ai:intent Panel D: recommendation counts in fixed order
    /// @ai:effects pure
    fn draw_recommendations(
        panel: &Canvas,
        canvas: &Canvas,
        counts: &[CategoryCount],
    ) -> Result<()> {
        let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
        let y_max = (max as f64 * 1.15).max(1.0);
        let x_max = counts.len().max(1) as f64 - 0.5;

        let mut chart = ChartBuilder::on(panel)
            .caption(RECOMMENDATION_PANEL_TITLE, (FONT, 20))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(40)
            .build_cartesian_2d(-0.5f64..x_max, 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|_: &f64| String::new())
            .y_label_formatter(&|v: &f64| format!("{:.0}", v))
            .label_style((FONT, 10))
            .draw()?;

        chart.draw_series(counts.iter().enumerate().map(|(i, c)| {
            let x = i as f64;
            let color = RECOMMENDATION_COLORS[i % RECOMMENDATION_COLORS.len()];
            Rectangle::new([(x - 0.35, 0.0), (x + 0.35, c.count as f64)], color.filled())
        }))?;

        let count_style = (FONT, LABEL_FONT_SIZE)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        chart.draw_series(counts.iter().enumerate().map(|(i, c)| {
            EmptyElement::at((i as f64, c.count as f64))
                + Text::new(c.count.to_string(), (0, -4), count_style.clone())
        }))?;

        for (i, c) in counts.iter().enumerate() {
            let (x, y) = chart.backend_coord(&(i as f64, 0.0));
            Self::draw_label(canvas, &c.label, MATRIX_COLUMN_LABEL_WIDTH, (x, y + 6), LabelPlacement::Below)?;
        }

        Ok(())
    }
}

impl Default for DashboardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRendererTrait for DashboardRenderer {
    /// @ai:intent Render all four panels into one SVG document
    /// @ai:effects pure
    fn render_svg(&self, stats: &DashboardStats) -> Result<String> {
        let mut svg = String::new();

        {
            let root = SVGBackend::with_string(&mut svg, DASHBOARD_SIZE).into_drawing_area();
            root.fill(&WHITE)?;

            let title = format!("Hospitality Dashboard | Teilnehmer: {}", stats.participants);
            let body = root.titled(&title, (FONT, 28))?;
            let panels = body.split_evenly((2, 2));

            Self::draw_mean_ratings(&panels[0], &root, &stats.mean_ratings)?;
            Self::draw_ticket_sources(&panels[1], &root, &stats.ticket_sources)?;
            Self::draw_area_matrix(&panels[2], &root, &stats.area_matrix)?;
            Self::draw_recommendations(&panels[3], &root, &stats.recommendations)?;

            root.present()?;
        }

        tracing::debug!("Rendered dashboard SVG ({} bytes)", svg.len());
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{AggregateRow, Dataset};
    use crate::stats::{StatsAggregator, StatsAggregatorTrait};

    fn create_test_stats() -> DashboardStats {
        let row = |area: &str, source: &str, recommendation: &str, score: f64| AggregateRow {
            event: "Test Event".to_string(),
            area: area.to_string(),
            ticket_source: source.to_string(),
            recommendation: recommendation.to_string(),
            ratings: [
                ("den Hostessen-Service?".to_string(), score),
                ("insgesamt Ihr Spieltagserlebnis?".to_string(), 6.0 - score),
            ]
            .into_iter()
            .collect(),
        };

        let dataset = Dataset::new(vec![
            row("Mercedes-Benz Business Center - Loge", "Ich bin Mitarbeiter des Unternehmens", "Ja", 2.0),
            row("CLUB 1893", "Ich bin Mitarbeiter des Unternehmens", "Nein", 4.0),
            row("CLUB 1893", "Gewinnspiel", "Ja", 5.0),
        ]);

        StatsAggregator::new().aggregate(&dataset)
    }

    #[test]
    fn test_heat_color_bounds() {
        assert_eq!(heat_color(1.0), RGBColor(165, 0, 38));
        assert_eq!(heat_color(3.0), RGBColor(255, 255, 191));
        assert_eq!(heat_color(5.0), RGBColor(0, 104, 55));
        assert_eq!(heat_color(-2.0), heat_color(1.0));
        assert_eq!(heat_color(9.0), heat_color(5.0));
    }

    #[test]
    fn test_render_svg_contains_panels() {
        let svg = DashboardRenderer::new()
            .render_svg(&create_test_stats())
            .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Teilnehmer: 3"));
        assert!(svg.contains(MEAN_PANEL_TITLE));
        assert!(svg.contains(SOURCE_PANEL_TITLE));
        assert!(svg.contains(MATRIX_PANEL_TITLE));
        assert!(svg.contains(RECOMMENDATION_PANEL_TITLE));
        assert!(svg.contains("Eher nein"));
        assert!(svg.contains("Business Center"));
    }

    #[test]
    fn test_render_svg_with_empty_panels() {
        let stats = DashboardStats {
            participants: 1,
            mean_ratings: vec![],
            ticket_sources: vec![CategoryCount::new("N/A", 1)],
            area_matrix: RatingMatrix::default(),
            recommendations: vec![],
        };

        let svg = DashboardRenderer::new().render_svg(&stats).unwrap();
        assert!(svg.contains("Teilnehmer: 1"));
    }
}
