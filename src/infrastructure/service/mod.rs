pub mod http;

use std::sync::Arc;

use crate::domain::models::DocServiceArc;

pub struct ServiceManager {}

impl ServiceManager {
    pub fn get() -> DocServiceArc {
        return Arc::<http::HttpDocService>::default();
    }
}
