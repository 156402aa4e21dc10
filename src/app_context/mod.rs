use crate::cli::Args;
use crate::positioning::models::PositionOptions;
use crate::sessions::storage::{HashMapSessionStorage, ISessionStorage};

#[derive(Clone)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
    pub position_options: PositionOptions,
}

pub fn init(args: &Args) -> AppContext<HashMapSessionStorage> {
    AppContext {
        sessions: HashMapSessionStorage::default(),
        position_options: args.position_options(),
    }
}
