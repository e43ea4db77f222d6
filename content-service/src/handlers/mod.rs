pub mod content;
pub mod health;

pub use content::{
    delete_content, get_content, list_content, route_not_found, update_content, upload_content,
};
pub use health::health_check;
