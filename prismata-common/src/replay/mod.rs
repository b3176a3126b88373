pub mod model;
pub mod deck;
pub mod player;
pub mod result;
pub mod decode;

pub use self::model::Replay;
pub use self::model::TimeInfo;
pub use self::model::PlayerTime;
pub use self::model::RatingInfo;
pub use self::model::Rating;
pub use self::model::VersionInfo;
pub use self::model::CommandInfo;
pub use self::model::Command;
pub use self::deck::Deck;
pub use self::deck::Unit;
pub use self::player::Player;
pub use self::result::MatchResult;

pub use self::decode::decode;
pub use self::decode::decode_slice;
