pub mod category_chart;
pub mod monthly_chart;

pub use category_chart::CategoryChart;
pub use monthly_chart::MonthlyChart;
