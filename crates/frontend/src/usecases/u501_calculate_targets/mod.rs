pub mod chart_panel;
pub mod export_panel;
pub mod input_panel;
pub mod product_form;
pub mod results_panel;
pub mod view;
