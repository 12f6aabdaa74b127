use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a component could not be mounted on the page.
#[derive(Error, Debug)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },

    #[error("element #{id} is not a <canvas>")]
    NotACanvas { id: String },

    #[error("canvas has no 2d context")]
    NoContext,

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Dom(format!("{:?}", value))
    }
}
