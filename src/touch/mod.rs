pub mod calibration;
pub mod filter;
pub mod types;

pub use calibration::TouchCalibration;
pub use filter::{average_burst, FilterConfig, SampleFilter};
pub use types::{FilteredPoint, RawSample, ScreenPoint, TouchSensor};
