pub mod detector;
pub mod frame;
pub mod graph;
pub mod set;

pub use detector::{Detector, ModelKind, RawDetection};
pub use frame::Frame;
pub use graph::{PixelBox, PixelPoint};
pub use set::DetectorSet;
