use plotly::Scatter;
use plotly::common::Mode;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub labels: Vec<String>,
    /// Parallel to `labels`; `None` charts as a gap.
    pub values: Vec<Option<f64>>,
}

#[function_component(TemperatureChart)]
pub fn temperature_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let labels = props.labels.clone();
    let values = props.values.clone();

    use_effect_with(
        (container_ref.clone(), labels, values),
        move |(container_ref, labels, values)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id("chart-temperature");

                let trace = Scatter::new(labels.clone(), values.clone())
                    .mode(Mode::Lines)
                    .name("Temperature (°C)")
                    .line(
                        plotly::common::Line::new()
                            .color("rgb(59, 130, 246)")
                            .width(2.0),
                    );

                let trace_json = serde_json::to_string(&trace).unwrap();
                let trace_js = js_sys::JSON::parse(&trace_json).unwrap();
                let data_js = js_sys::Array::new();
                data_js.push(&trace_js);

                let layout = serde_json::json!({
                    "margin": {"t": 10, "r": 10, "l": 40, "b": 30},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"showgrid": false},
                    "yaxis": {"showgrid": true, "gridcolor": "#eee"}
                });
                let config = serde_json::json!({"responsive": true, "displayModeBar": false});

                // Full redraw on every sample; newPlot does not animate,
                // which keeps the chart in step with the 5-second cadence.
                newPlot(
                    "chart-temperature",
                    data_js.into(),
                    serde_wasm_bindgen::to_value(&layout).unwrap(),
                    serde_wasm_bindgen::to_value(&config).unwrap(),
                );
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} class="chart-container" style="width:100%; height:320px;"></div>
    }
}
