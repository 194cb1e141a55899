pub mod auth_forms;
pub mod category_forms;
pub mod clipping_forms;
pub mod params;
pub mod post_forms;
pub mod responses;

pub use responses::ApiResponse;
