//! Modal overlay rendering

pub mod protocol_picker;
pub mod server_picker;
pub mod toast;
