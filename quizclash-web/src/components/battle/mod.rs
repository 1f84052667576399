pub mod active;
pub mod lobby;
pub mod results;

pub use active::{ActiveBattleView, ActiveBattleViewProps};
pub use lobby::{BattleLobby, BattleLobbyProps};
pub use results::{BattleResults, BattleResultsProps};
