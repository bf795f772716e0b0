use js_sys::{Object, Reflect};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

/// Plain JS objects/arrays rather than `Map`s, so callers can `JSON.stringify`.
pub fn to_js<T: Serialize + ?Sized>(v: &T) -> JsValue {
    let ser = serde_wasm_bindgen::Serializer::json_compatible();
    v.serialize(&ser).unwrap_or(JsValue::NULL)
}

pub fn from_js<T: DeserializeOwned>(v: JsValue) -> Result<T, serde_wasm_bindgen::Error> {
    serde_wasm_bindgen::from_value(v)
}

/// `undefined`/`null` means "use the default".
pub fn from_js_or_default<T: DeserializeOwned + Default>(
    v: JsValue,
) -> Result<T, serde_wasm_bindgen::Error> {
    if v.is_undefined() || v.is_null() {
        Ok(T::default())
    } else {
        from_js(v)
    }
}
