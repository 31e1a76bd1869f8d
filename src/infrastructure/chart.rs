//! SVG chart of daily and cumulative spending

use crate::domain::SpendReport;
use crate::error::{Result, SpendlogError};
use std::path::Path;
use svg::node::element::{path::Data, Circle, Line, Path as SvgPath, Rectangle, Text};
use svg::Document;

const BAR_COLOR: &str = "steelblue";
const AVERAGE_COLOR: &str = "red";
const CUMULATIVE_COLOR: &str = "green";
const BUDGET_COLOR: &str = "gray";

/// Most date labels drawn under the x axis
const MAX_DATE_LABELS: usize = 12;

/// Vertical mapping of a value range onto the plot area
#[derive(Debug, Clone, Copy)]
struct Axis {
    min: f64,
    max: f64,
    top: f64,
    bottom: f64,
}

impl Axis {
    /// Axis spanning zero and every value in the given series
    fn covering<'a>(series: impl IntoIterator<Item = &'a f64>, top: f64, bottom: f64) -> Self {
        let (min, max) = series
            .into_iter()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        let max = if max - min < f64::EPSILON { min + 1.0 } else { max };
        Axis {
            min,
            max,
            top,
            bottom,
        }
    }

    fn y(&self, value: f64) -> f64 {
        self.bottom - (value - self.min) / (self.max - self.min) * (self.bottom - self.top)
    }
}

/// Renders a `SpendReport` as bars of daily spend with an average line on the
/// left axis, and cumulative spend against cumulative budget on the right axis
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        ChartRenderer {
            width: 1000.0,
            height: 600.0,
            margin: 60.0,
        }
    }
}

impl ChartRenderer {
    pub fn save(&self, report: &SpendReport, path: &Path) -> Result<()> {
        let document = self.render(report)?;
        svg::save(path, &document)?;
        tracing::info!(path = %path.display(), days = report.dates.len(), "chart written");
        Ok(())
    }

    pub fn render(&self, report: &SpendReport) -> Result<Document> {
        let left = self.margin;
        let right = self.width - self.margin;
        let top = self.margin;
        let bottom = self.height - self.margin;
        if right <= left || bottom <= top {
            return Err(SpendlogError::Chart(format!(
                "canvas {}x{} leaves no room inside a {} margin",
                self.width, self.height, self.margin
            )));
        }

        let primary = Axis::covering(
            report.daily.iter().chain(report.running_average.iter()),
            top,
            bottom,
        );
        let secondary = Axis::covering(
            report
                .cumulative
                .iter()
                .chain(report.cumulative_budget.iter()),
            top,
            bottom,
        );

        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, self.width, self.height))
            .set("font-family", "sans-serif")
            .set("font-size", 12);

        document = document
            .add(axis_line((left, top), (left, bottom)))
            .add(axis_line((right, top), (right, bottom)))
            .add(axis_line((left, primary.y(0.0)), (right, primary.y(0.0))))
            .add(label(left - 8.0, top, "end", &format!("{:.2}", primary.max)))
            .add(label(right + 8.0, top, "start", &format!("{:.2}", secondary.max)));

        let n = report.dates.len();
        if n == 0 {
            return Ok(document.add(label(
                (left + right) / 2.0,
                (top + bottom) / 2.0,
                "middle",
                "No spending recorded",
            )));
        }

        let slot = (right - left) / n as f64;
        let center = |i: usize| left + slot * (i as f64 + 0.5);

        for (i, value) in report.daily.iter().enumerate() {
            let (y, height) = if *value >= 0.0 {
                (primary.y(*value), primary.y(0.0) - primary.y(*value))
            } else {
                (primary.y(0.0), primary.y(*value) - primary.y(0.0))
            };
            document = document.add(
                Rectangle::new()
                    .set("class", "bar")
                    .set("x", center(i) - slot * 0.35)
                    .set("y", y)
                    .set("width", slot * 0.7)
                    .set("height", height)
                    .set("fill", BAR_COLOR),
            );
        }

        document = document
            .add(
                series_path(&report.running_average, &center, &primary, AVERAGE_COLOR)
                    .set("class", "average"),
            )
            .add(
                series_path(&report.cumulative, &center, &secondary, CUMULATIVE_COLOR)
                    .set("class", "cumulative"),
            )
            .add(
                series_path(&report.cumulative_budget, &center, &secondary, BUDGET_COLOR)
                    .set("class", "budget")
                    .set("stroke-dasharray", "6,4"),
            );

        for (i, value) in report.running_average.iter().enumerate() {
            document = document.add(
                Circle::new()
                    .set("cx", center(i))
                    .set("cy", primary.y(*value))
                    .set("r", 3)
                    .set("fill", AVERAGE_COLOR),
            );
        }

        let step = n.div_ceil(MAX_DATE_LABELS);
        for (i, date) in report.dates.iter().enumerate().step_by(step) {
            document = document.add(label(
                center(i),
                bottom + 18.0,
                "middle",
                &date.format("%m-%d").to_string(),
            ));
        }

        let legend = [
            (BAR_COLOR, "daily"),
            (AVERAGE_COLOR, "average"),
            (CUMULATIVE_COLOR, "cumulative"),
            (BUDGET_COLOR, "budget"),
        ];
        for (i, (color, name)) in legend.iter().enumerate() {
            let x = left + i as f64 * 120.0;
            let y = top / 2.0;
            document = document
                .add(
                    Line::new()
                        .set("x1", x)
                        .set("x2", x + 20.0)
                        .set("y1", y)
                        .set("y2", y)
                        .set("stroke", *color)
                        .set("stroke-width", 4),
                )
                .add(label(x + 26.0, y + 4.0, "start", name));
        }

        Ok(document)
    }
}

fn axis_line(from: (f64, f64), to: (f64, f64)) -> Line {
    Line::new()
        .set("x1", from.0)
        .set("y1", from.1)
        .set("x2", to.0)
        .set("y2", to.1)
        .set("stroke", "black")
        .set("stroke-width", 1)
}

fn label(x: f64, y: f64, anchor: &str, content: &str) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
        .add(svg::node::Text::new(content))
}

fn series_path(
    values: &[f64],
    center: &dyn Fn(usize) -> f64,
    axis: &Axis,
    color: &str,
) -> SvgPath {
    let mut data = Data::new();
    for (i, value) in values.iter().enumerate() {
        let point = (center(i), axis.y(*value));
        data = if i == 0 {
            data.move_to(point)
        } else {
            data.line_to(point)
        };
    }
    SvgPath::new()
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", 2)
        .set("d", data)
}
