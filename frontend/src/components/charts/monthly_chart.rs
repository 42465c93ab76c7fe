use anyhow::anyhow;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::charts::MonthlySeries;
use shared::money::CurrencyFormat;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const INCOME_COLOR: RGBColor = RGBColor(16, 185, 129);
const EXPENSE_COLOR: RGBColor = RGBColor(239, 68, 68);

#[derive(Properties, PartialEq)]
pub struct MonthlyChartProps {
    pub series: MonthlySeries,
    pub currency: CurrencyFormat,
}

/// Income and expenses per month as two lines
pub struct MonthlyChart {
    canvas_ref: NodeRef,
}

impl Component for MonthlyChart {
    type Message = ();
    type Properties = MonthlyChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if ctx.props().series.is_empty() {
            return;
        }
        if let Err(e) = self.draw(&ctx.props().series, &ctx.props().currency) {
            log::warn!("Monthly chart could not be drawn: {}", e);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-card">
                <h3 class="chart-title">{"Income vs Expenses"}</h3>
                {if ctx.props().series.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <i class="fas fa-chart-line chart-empty-icon"></i>
                            <p>{"No transactions to chart yet"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <canvas
                            id="monthly-chart"
                            ref={self.canvas_ref.clone()}
                            class="chart-canvas"
                            width="640"
                            height="320"
                        ></canvas>
                    }
                }}
            </div>
        }
    }
}

impl MonthlyChart {
    fn draw(&self, series: &MonthlySeries, currency: &CurrencyFormat) -> anyhow::Result<()> {
        let canvas = self
            .canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or_else(|| anyhow!("canvas is not mounted"))?;
        let backend = CanvasBackend::with_canvas_object(canvas)
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

        let (lo, hi) = series.value_range();
        let padding = ((hi - lo) * 0.1).max(1.0);
        // A single month still needs a non-empty x range
        let x_max = (series.months.len().saturating_sub(1)).max(1) as f64;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(90)
            .build_cartesian_2d(0f64..x_max, (lo - padding)..(hi + padding))
            .map_err(|e| anyhow!("{:?}", e))?;

        let months = &series.months;
        chart
            .configure_mesh()
            .x_labels(months.len().max(2))
            .x_label_formatter(&|x| {
                let i = x.round();
                if (x - i).abs() > f64::EPSILON || i < 0.0 {
                    return String::new();
                }
                months.get(i as usize).cloned().unwrap_or_default()
            })
            .y_label_formatter(&|v| currency.format(*v))
            .label_style(("sans-serif", 12, &RGBColor(100, 116, 139)))
            .axis_style(RGBColor(226, 232, 240))
            .bold_line_style(RGBColor(241, 245, 249))
            .light_line_style(RGBColor(248, 250, 252))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;

        let points = |values: &[f64]| -> Vec<(f64, f64)> {
            values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect()
        };

        for (label, color, values) in [
            ("Income", INCOME_COLOR, &series.inflows),
            ("Expenses", EXPENSE_COLOR, &series.outflows),
        ] {
            let data = points(values);
            chart
                .draw_series(LineSeries::new(data.clone(), color.stroke_width(3)))
                .map_err(|e| anyhow!("{:?}", e))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3)));
            chart
                .draw_series(data.into_iter().map(|p| Circle::new(p, 4, color.filled())))
                .map_err(|e| anyhow!("{:?}", e))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(RGBColor(226, 232, 240))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;

        root.present().map_err(|e| anyhow!("{:?}", e))?;
        Ok(())
    }
}
