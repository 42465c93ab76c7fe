use std::f64::consts::PI;

use anyhow::anyhow;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::charts::CategoryBreakdown;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const PALETTE: [RGBColor; 8] = [
    RGBColor(59, 130, 246),
    RGBColor(16, 185, 129),
    RGBColor(245, 158, 11),
    RGBColor(239, 68, 68),
    RGBColor(139, 92, 246),
    RGBColor(6, 182, 212),
    RGBColor(236, 72, 153),
    RGBColor(249, 115, 22),
];

const WIDTH: u32 = 480;
const HEIGHT: u32 = 320;

/// Polygon points approximating one pie wedge, starting at `start` radians
/// and sweeping `sweep` radians clockwise from twelve o'clock.
pub fn wedge_points(center: (i32, i32), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = ((sweep / (2.0 * PI)) * 90.0).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let angle = start + sweep * step as f64 / steps as f64 - PI / 2.0;
        points.push((
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        ));
    }
    points
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub breakdown: CategoryBreakdown,
}

/// Share of expenses per category as a pie
pub struct CategoryChart {
    canvas_ref: NodeRef,
}

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let breakdown = &ctx.props().breakdown;
        if breakdown.is_empty() || breakdown.total() <= 0.0 {
            return;
        }
        if let Err(e) = self.draw(breakdown) {
            log::warn!("Category chart could not be drawn: {}", e);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let breakdown = &ctx.props().breakdown;
        html! {
            <div class="chart-card">
                <h3 class="chart-title">{"Expenses by Category"}</h3>
                {if breakdown.is_empty() || breakdown.total() <= 0.0 {
                    html! {
                        <div class="chart-empty">
                            <i class="fas fa-chart-pie chart-empty-icon"></i>
                            <p>{"No expenses to chart yet"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <canvas
                            id="category-chart"
                            ref={self.canvas_ref.clone()}
                            class="chart-canvas"
                            width={WIDTH.to_string()}
                            height={HEIGHT.to_string()}
                        ></canvas>
                    }
                }}
            </div>
        }
    }
}

impl CategoryChart {
    fn draw(&self, breakdown: &CategoryBreakdown) -> anyhow::Result<()> {
        let canvas = self
            .canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or_else(|| anyhow!("canvas is not mounted"))?;
        let backend = CanvasBackend::with_canvas_object(canvas)
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

        let total = breakdown.total();
        let percentages = breakdown.percentage_labels();
        let center = (HEIGHT as i32 / 2, HEIGHT as i32 / 2);
        let radius = HEIGHT as f64 / 2.0 - 20.0;

        let mut start = 0.0;
        for (i, value) in breakdown.values.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            let sweep = value / total * 2.0 * PI;
            root.draw(&Polygon::new(
                wedge_points(center, radius, start, sweep),
                color.filled(),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;

            // Percentage in the middle of the wedge, skipped for slivers
            if sweep > 0.25 {
                let mid = start + sweep / 2.0 - PI / 2.0;
                let pos = (
                    center.0 + (radius * 0.65 * mid.cos()) as i32 - 12,
                    center.1 + (radius * 0.65 * mid.sin()) as i32 - 7,
                );
                if let Some(label) = percentages.get(i) {
                    root.draw(&Text::new(
                        label.clone(),
                        pos,
                        ("sans-serif", 14).into_font().color(&WHITE),
                    ))
                    .map_err(|e| anyhow!("{:?}", e))?;
                }
            }
            start += sweep;
        }

        // Legend to the right of the pie
        let legend_x = HEIGHT as i32 + 10;
        for (i, label) in breakdown.labels.iter().enumerate() {
            let y = 20 + i as i32 * 24;
            let color = PALETTE[i % PALETTE.len()];
            root.draw(&Rectangle::new(
                [(legend_x, y), (legend_x + 14, y + 14)],
                color.filled(),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
            root.draw(&Text::new(
                label.clone(),
                (legend_x + 22, y),
                ("sans-serif", 13).into_font().color(&RGBColor(51, 65, 85)),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        }

        root.present().map_err(|e| anyhow!("{:?}", e))?;
        Ok(())
    }
}
