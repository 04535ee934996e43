//! Floating UI bindings for Dioxus
//!
//! Typed interface to `@floating-ui/dom` (loaded as `window.FloatingUIDOM`
//! by the host page) for placing tooltips next to their anchors.

use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// Placement options matching floating-ui's placement values
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Placement {
    #[default]
    Bottom,
    BottomStart,
    BottomEnd,
    Top,
    TopStart,
    TopEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComputePositionResult {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ComputePositionOptions {
    pub placement: Placement,
    /// Gap between anchor and floating element along the placement axis
    pub offset: Option<f64>,
    /// Shift perpendicular to the placement axis
    pub cross_axis_offset: Option<f64>,
    pub flip: bool,
    pub shift: bool,
}

fn library() -> Result<JsValue, JsValue> {
    let window = web_sys_x::window().ok_or("no window")?;
    js_sys_x::Reflect::get(&window, &"FloatingUIDOM".into())
}

/// Call `FloatingUIDOM[name](arg)` (or with no argument) to build a middleware.
fn middleware(
    lib: &JsValue,
    name: &str,
    arg: Option<&JsValue>,
) -> Result<Option<JsValue>, JsValue> {
    let factory = js_sys_x::Reflect::get(lib, &name.into())?;
    let Some(func) = factory.dyn_ref::<js_sys_x::Function>() else {
        return Ok(None);
    };
    let built = match arg {
        Some(arg) => func.call1(&JsValue::NULL, arg)?,
        None => func.call0(&JsValue::NULL)?,
    };
    Ok(Some(built))
}

/// Compute where `floating` should sit relative to `reference`.
pub async fn compute_position(
    reference: &web_sys_x::Element,
    floating: &web_sys_x::Element,
    options: ComputePositionOptions,
) -> Result<ComputePositionResult, JsValue> {
    let lib = library()?;
    let chain = js_sys_x::Array::new();

    if options.offset.is_some() || options.cross_axis_offset.is_some() {
        let offset = js_sys_x::Object::new();
        js_sys_x::Reflect::set(
            &offset,
            &"mainAxis".into(),
            &JsValue::from_f64(options.offset.unwrap_or(0.0)),
        )?;
        js_sys_x::Reflect::set(
            &offset,
            &"crossAxis".into(),
            &JsValue::from_f64(options.cross_axis_offset.unwrap_or(0.0)),
        )?;
        if let Some(m) = middleware(&lib, "offset", Some(&offset))? {
            chain.push(&m);
        }
    }
    if options.flip {
        if let Some(m) = middleware(&lib, "flip", None)? {
            chain.push(&m);
        }
    }
    if options.shift {
        if let Some(m) = middleware(&lib, "shift", None)? {
            chain.push(&m);
        }
    }

    let opts = js_sys_x::Object::new();
    js_sys_x::Reflect::set(&opts, &"placement".into(), &options.placement.as_str().into())?;
    js_sys_x::Reflect::set(&opts, &"middleware".into(), &chain)?;

    let compute = js_sys_x::Reflect::get(&lib, &"computePosition".into())?;
    let compute = compute
        .dyn_ref::<js_sys_x::Function>()
        .ok_or("computePosition not a function")?;

    let promise = compute
        .call3(&JsValue::NULL, reference, floating, &opts)?
        .dyn_into::<js_sys_x::Promise>()?;
    let result = wasm_bindgen_futures_x::JsFuture::from(promise).await?;

    let coord = |name: &str| -> Result<f64, JsValue> {
        Ok(js_sys_x::Reflect::get(&result, &name.into())?
            .as_f64()
            .unwrap_or(0.0))
    };

    Ok(ComputePositionResult {
        x: coord("x")?,
        y: coord("y")?,
    })
}
