use crate::storage::games::HashMapGamesStorage;
use crate::storage::interface::ISubmissionStorage;
use crate::storage::scores::HashMapScoresStorage;

#[derive(Clone, Default)]
pub struct AppContext<SS: ISubmissionStorage> {
    pub submissions: SS,
    pub games: HashMapGamesStorage,
    pub scores: HashMapScoresStorage,
}
