// Game logic: player, combat, HUD and the session that ties them together

pub mod combat;
pub mod player;
pub mod session;
pub mod ui;
