// Zync services
// Services provide supporting functionality: settings persistence, the
// update notification feed, and the boundary to the host updater.

pub mod settings_engine;
pub mod update_feed;
pub mod updater_service;
