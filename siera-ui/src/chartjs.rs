//! Chart.js Backend
//!
//! Implements the `siera` charting boundary over the global `Chart` class.
//! Descriptors cross into JS as parsed JSON; the formatter callbacks they
//! carry as data are installed as Rust closures owned by the instance.

use serde::Serialize;
use siera::charts::{
    Callbacks, ChartBackend, ChartData, ChartInstance, ImageDownloader, ImageExport,
    VisualizationDescriptor,
};
use siera::ChartFault;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement};

#[wasm_bindgen]
extern "C" {
    /// `window.Chart`
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn resize(this: &Chart) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn update(this: &Chart) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);

    #[wasm_bindgen(method, catch, js_name = toBase64Image)]
    fn to_base64_image(this: &Chart) -> Result<String, JsValue>;

    #[wasm_bindgen(method, setter)]
    fn set_data(this: &Chart, data: &JsValue);
}

/// Formatter handed to Chart.js; arguments beyond the second are ignored
type Callback = Closure<dyn Fn(JsValue, JsValue) -> JsValue>;

/// Draws into `<canvas>` elements looked up by id
#[derive(Debug, Default)]
pub struct ChartJsBackend;

pub struct ChartJsInstance {
    chart: Chart,
    // Must outlive the chart
    _callbacks: Vec<Callback>,
}

impl ChartBackend for ChartJsBackend {
    type Container = HtmlCanvasElement;
    type Instance = ChartJsInstance;

    fn resolve(&self, mount_id: &str) -> Option<HtmlCanvasElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(mount_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()
    }

    fn render(
        &mut self,
        canvas: &HtmlCanvasElement,
        descriptor: &VisualizationDescriptor,
    ) -> Result<ChartJsInstance, ChartFault> {
        let started = now_ms();

        let config = to_js(descriptor)?;
        let callbacks = install_callbacks(&config, &descriptor.callbacks).map_err(fault)?;
        let chart = Chart::new(canvas, &config).map_err(fault)?;

        tracing::debug!(
            "Chart {} rendered in {:.2}ms",
            canvas.id(),
            now_ms() - started
        );

        Ok(ChartJsInstance {
            chart,
            _callbacks: callbacks,
        })
    }
}

impl ChartInstance for ChartJsInstance {
    fn resize(&mut self) -> Result<(), ChartFault> {
        self.chart.resize().map_err(fault)
    }

    fn update(&mut self, data: &ChartData) -> Result<(), ChartFault> {
        self.chart.set_data(&to_js(data)?);
        self.chart.update().map_err(fault)
    }

    fn to_image(&self) -> Result<ImageExport, ChartFault> {
        let href = self.chart.to_base64_image().map_err(fault)?;
        Ok(ImageExport { href })
    }

    fn destroy(self) {
        self.chart.destroy();
    }
}

/// Saves images through a temporary `<a download>` link
#[derive(Debug, Default)]
pub struct BrowserDownloader;

impl ImageDownloader for BrowserDownloader {
    fn download(&mut self, filename: &str, image: &ImageExport) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let link = match document.create_element("a") {
            Ok(link) => link,
            Err(e) => {
                tracing::error!("Failed to create download link: {:?}", e);
                return;
            }
        };

        let _ = link.set_attribute("href", &image.href);
        let _ = link.set_attribute("download", filename);
        if let Some(link) = link.dyn_ref::<HtmlElement>() {
            link.click();
        }
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

fn fault(err: JsValue) -> ChartFault {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    ChartFault::new(message)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, ChartFault> {
    let json = serde_json::to_string(value).map_err(|e| ChartFault::new(e.to_string()))?;
    js_sys::JSON::parse(&json).map_err(fault)
}

/// Set `root.a.b.c = value`, creating missing objects on the way
fn set_path(root: &JsValue, path: &[&str], value: &JsValue) -> Result<(), JsValue> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };

    let mut target = root.clone();
    for key in parents {
        let key = JsValue::from_str(key);
        let mut next = js_sys::Reflect::get(&target, &key)?;
        if !next.is_object() {
            next = js_sys::Object::new().into();
            js_sys::Reflect::set(&target, &key, &next)?;
        }
        target = next;
    }

    js_sys::Reflect::set(&target, &JsValue::from_str(last), value)?;
    Ok(())
}

fn number_at(value: &JsValue, key: &str) -> f64 {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default()
}

fn install_callbacks(config: &JsValue, callbacks: &Callbacks) -> Result<Vec<Callback>, JsValue> {
    let mut installed = Vec::new();

    if let Some(label) = callbacks.tooltip_label.clone() {
        // (context) => label
        let callback = Callback::new(move |context: JsValue, _: JsValue| {
            let parsed = js_sys::Reflect::get(&context, &JsValue::from_str("parsed"))
                .unwrap_or(JsValue::UNDEFINED);
            let text = label.format(number_at(&parsed, "x"), number_at(&parsed, "y"));
            JsValue::from_str(&text)
        });
        set_path(
            config,
            &["options", "plugins", "tooltip", "callbacks", "label"],
            callback.as_ref(),
        )?;
        installed.push(callback);
    }

    if let Some(title) = callbacks.tooltip_title.clone() {
        // (items) => title of the first hovered item
        let callback = Callback::new(move |items: JsValue, _: JsValue| {
            let first = js_sys::Reflect::get(&items, &JsValue::from_f64(0.0))
                .unwrap_or(JsValue::UNDEFINED);
            let index = number_at(&first, "dataIndex") as usize;
            let label = js_sys::Reflect::get(&first, &JsValue::from_str("label"))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default();
            JsValue::from_str(&title.format(index, &label))
        });
        set_path(
            config,
            &["options", "plugins", "tooltip", "callbacks", "title"],
            callback.as_ref(),
        )?;
        installed.push(callback);
    }

    if let Some(ticks) = callbacks.tick_labels.clone() {
        // (value, index) => tick text
        let callback = Callback::new(move |_value: JsValue, index: JsValue| {
            let index = index.as_f64().unwrap_or_default() as usize;
            ticks
                .get(index)
                .map(|text| JsValue::from_str(text))
                .unwrap_or(JsValue::UNDEFINED)
        });
        set_path(
            config,
            &["options", "scales", "x", "ticks", "callback"],
            callback.as_ref(),
        )?;
        installed.push(callback);
    }

    Ok(installed)
}
