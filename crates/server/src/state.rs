use std::sync::Arc;

use service::shop::RepairShopDirectory;

#[derive(Clone)]
pub struct ServerState {
    pub directory: Arc<dyn RepairShopDirectory>,
}

impl ServerState {
    pub fn new(directory: Arc<dyn RepairShopDirectory>) -> Self {
        Self { directory }
    }
}
