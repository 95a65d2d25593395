use textburst::WidgetConfig;
use wasm_bindgen::prelude::*;

const CONFIG_JSON: &str = include_str!("../widget.json");

textburst_web::export_widget!(WidgetConfig::from_json(CONFIG_JSON), "credit-page");
