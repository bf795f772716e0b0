use crate::interop::{new_obj, set_kv};
use navgraph::{CodecError, RouteError};
use wasm_bindgen::JsValue;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn codec(e: &CodecError) -> JsValue { err(e.code(), e.to_string(), None) }

#[inline]
pub fn json_parse(e: impl std::fmt::Display) -> JsValue { err("json_parse", e.to_string(), None) }

pub fn route(e: &RouteError) -> JsValue {
    let data = match e {
        RouteError::UnknownLocation { name } => {
            let d = new_obj();
            set_kv(&d, "name", &JsValue::from_str(name));
            Some(d.into())
        }
        RouteError::EmptyGraph | RouteError::Unreachable => None,
    };
    err(e.code(), e.to_string(), data)
}

