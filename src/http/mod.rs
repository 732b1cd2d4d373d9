// HTTP utilities module entry point

pub mod cache;
pub mod mime;
pub mod response;

pub use response::{
    attachment_response, build_304_response, build_404_response, build_405_response,
    build_413_response, build_health_response, build_options_response, error_response,
    inline_text_response, json_response,
};
