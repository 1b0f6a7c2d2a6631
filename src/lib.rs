use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod label;
mod surface;

pub use api::{init_logging, set_panic_hook};
pub use label::HostLabel;
pub use surface::JsSurface;

#[wasm_bindgen]
pub struct Annotator { pub(crate) inner: boxlabel::Controller<JsSurface, HostLabel> }

impl Annotator {
    pub fn rs_mount(surface: JsSurface, args: boxlabel::MountArgs<HostLabel>, config: boxlabel::ControllerConfig) -> Annotator {
        Annotator { inner: boxlabel::Controller::mount(surface, args, config) }
    }
}
