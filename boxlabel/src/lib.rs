pub mod model;
pub mod args;
pub mod config;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod label;
pub mod limits;
pub mod raster;
pub mod store;
pub mod surface;

pub use args::MountArgs;
pub use config::ControllerConfig;
pub use controller::{Controller, Outcome};
pub use error::{ArgsError, CommandError, RasterError, SurfaceError};
pub use gesture::{GestureProtocol, GestureState, PointerButton, PointerInput, PointerKind};
pub use label::{Comment, Reply};
pub use model::{Bounds, InitialRegion, Payload, Point, RectPayload, Region, RegionId, Theme};
pub use raster::{RasterImage, ScaleRatio};
pub use store::RegionStore;
pub use surface::memory::MemorySurface;
pub use surface::{RectStyle, RenderSurface};
