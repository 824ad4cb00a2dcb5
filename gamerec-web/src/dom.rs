use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Event, EventTarget, Headers, HtmlElement, Request, RequestInit, Response,
    Window,
};

/// Class toggled on the dialogs and the backdrop.
pub const HIDDEN_CLASS: &str = "hidden";

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

#[must_use]
pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

#[must_use]
pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
#[must_use]
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove the `hidden` class.
pub fn set_hidden(el: &Element, hidden: bool) {
    let classes = el.class_list();
    let _ = if hidden {
        classes.add_1(HIDDEN_CLASS)
    } else {
        classes.remove_1(HIDDEN_CLASS)
    };
}

pub fn set_hidden_by_id(id: &str, hidden: bool) {
    if let Some(el) = element_by_id(id) {
        set_hidden(&el, hidden);
    }
}

/// Set an inline `display` value on the element with `id`.
pub fn set_display_by_id(id: &str, value: &str) {
    if let Some(el) = html_element_by_id(id) {
        let _ = el.style().set_property("display", value);
    }
}

/// Lock or release page scrolling behind an open dialog.
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

/// Whether the page currently blocks body scrolling.
#[must_use]
pub fn body_scroll_locked() -> bool {
    document()
        .and_then(|doc| doc.body())
        .and_then(|body| body.style().get_property_value("overflow").ok())
        .is_some_and(|value| value == "hidden")
}

/// Attach `handler` to `target` for the lifetime of the page.
///
/// # Errors
/// Returns an error if the browser rejects the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if no window is available, the timer cannot be scheduled,
/// or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Perform a GET request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)]
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// POST a JSON body and return the browser `Response`.
///
/// # Errors
/// Returns an error if the request cannot be built or the fetch fails.
#[allow(clippy::future_not_send)]
pub async fn post_json(url: &str, body: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(url, &init)?;
    let resp_value = JsFuture::from(win.fetch_with_request(&request)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read the body of `response` as text.
///
/// # Errors
/// Returns an error if the body cannot be read or is not a string.
#[allow(clippy::future_not_send)]
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}
