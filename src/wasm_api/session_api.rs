use std::fmt::Display;
use chrono::Utc;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use crate::config::AnalysisConfig;
use crate::data_loading::DataFormat;
use crate::session::{AnalysisSession, HistoryLog};

fn js_error(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Mapy sa posielajú ako obyčajné JS objekty, nie ako `Map`
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(js_error)
}

/// Session pre JS stranu. UI si drží jednu inštanciu a všetko ide cez ňu.
#[wasm_bindgen]
pub struct WasmAnalysisSession {
    session: AnalysisSession,
}

#[wasm_bindgen]
impl WasmAnalysisSession {
    /// `config_json` je voliteľný JSON s `minRows`, `historyCapacity`, `currencySymbol`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmAnalysisSession, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => AnalysisConfig::from_json(&json).map_err(js_error)?,
            None => AnalysisConfig::default(),
        };

        Ok(WasmAnalysisSession {
            session: AnalysisSession::new(config),
        })
    }

    /// Načíta CSV a vráti výsledok analýzy
    #[wasm_bindgen(js_name = loadCsv)]
    pub fn load_csv(&mut self, csv_text: &str) -> Result<JsValue, JsValue> {
        let analysis = self.session.load_csv(csv_text).map_err(js_error)?;
        to_js(analysis)
    }

    /// `format` je "csv" alebo "json"
    #[wasm_bindgen(js_name = loadAs)]
    pub fn load_as(&mut self, format: &str, data: &str) -> Result<JsValue, JsValue> {
        let format: DataFormat = format.parse().map_err(js_error)?;
        let analysis = self.session.load_as(format, data).map_err(js_error)?;
        to_js(analysis)
    }

    /// Automaticky detekuje CSV alebo JSON
    #[wasm_bindgen(js_name = loadAuto)]
    pub fn load_auto(&mut self, data: &str) -> Result<JsValue, JsValue> {
        let analysis = self.session.load_auto(data).map_err(js_error)?;
        to_js(analysis)
    }

    pub fn analysis(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.analysis().map_err(js_error)?)
    }

    /// Pôvodné riadky pre tabuľku a grafy
    pub fn rows(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.dataset().map_err(js_error)?.rows())
    }

    pub fn headers(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.dataset().map_err(js_error)?.headers())
    }

    /// Predikcia z hodnôt formulára, vracia sumu vo formáte meny
    pub fn predict(&self, tv: &str, radio: &str, social: &str) -> Result<String, JsValue> {
        self.session.predict_formatted(tv, radio, social).map_err(js_error)
    }

    pub fn report(&self) -> Result<String, JsValue> {
        self.session.report().map_err(js_error)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.snapshot(Utc::now()).map_err(js_error)?)
    }

    #[wasm_bindgen(js_name = saveToHistory)]
    pub fn save_to_history(&mut self) -> Result<JsValue, JsValue> {
        let snapshot = self.session.save_to_history().map_err(js_error)?;
        to_js(snapshot)
    }

    pub fn history(&self) -> Result<JsValue, JsValue> {
        let entries: Vec<_> = self.session.history().iter().collect();
        to_js(&entries)
    }

    /// História ako JSON pre localStorage
    #[wasm_bindgen(js_name = historyJson)]
    pub fn history_json(&self) -> Result<String, JsValue> {
        self.session.history().to_json().map_err(js_error)
    }

    #[wasm_bindgen(js_name = loadHistoryJson)]
    pub fn load_history_json(&mut self, json: &str) -> Result<(), JsValue> {
        let capacity = self.session.config().history_capacity;
        let history = HistoryLog::from_json(json, capacity).map_err(js_error)?;
        self.session.set_history(history);
        Ok(())
    }

    #[wasm_bindgen(js_name = restoreHistory)]
    pub fn restore_history(&mut self, index: usize) -> Result<JsValue, JsValue> {
        let analysis = self.session.restore(index).map_err(js_error)?;
        to_js(analysis)
    }

    #[wasm_bindgen(js_name = clearHistory)]
    pub fn clear_history(&mut self) {
        self.session.set_history(HistoryLog::new(self.session.config().history_capacity));
    }

    pub fn clear(&mut self) {
        self.session.clear();
    }
}
