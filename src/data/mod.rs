//! Domain types and form state.

mod device;
mod form;
mod threshold;

pub use device::{DeviceStatus, DEFAULT_DEVICE_NAME};
pub use form::{
    is_valid_email, NotificationForm, ThresholdForm, THRESHOLD_FIELD_COUNT,
};
pub use threshold::{Parameter, Threshold, ThresholdRecord};
