//! Clipboard writes through the asynchronous Clipboard API.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Why a clipboard write did not happen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// No window, an insecure context, or a server render.
    #[error("clipboard is not available")]
    Unavailable,
    /// The browser refused the write (permission denied, document not focused).
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// [`ClipboardError::Unavailable`] when the API is missing and
/// [`ClipboardError::Rejected`] when the browser refuses the write.
#[cfg_attr(not(feature = "hydrate"), allow(clippy::unused_async))]
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        // `navigator.clipboard` is undefined outside secure contexts.
        let clipboard = js_sys::Reflect::get(&window.navigator(), &"clipboard".into())
            .map_err(|_| ClipboardError::Unavailable)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable);
        }
        let clipboard: web_sys::Clipboard = clipboard.unchecked_into();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}
