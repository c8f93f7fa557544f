use crate::db::Store;

pub struct AppState {
    pub db: Store,
}
