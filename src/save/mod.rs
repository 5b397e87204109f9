//! Profile persistence.
//!
//! The profile is a single JSON snapshot of the player ledger, play
//! statistics, and earned achievements. On native targets it lives next to
//! the executable; in the browser it lives in localStorage. The active
//! cooking session is transient and never persisted.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use crate::shared::*;

pub const SAVE_VERSION: u32 = 1;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "little-gourmet.profile";

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// Sent by the UI to write the profile.
#[derive(Event, Debug, Clone)]
pub struct SaveRequestEvent;

/// Sent by the UI to read the profile back and resume play.
#[derive(Event, Debug, Clone)]
pub struct LoadRequestEvent;

/// Sent after a save completes (success or failure).
#[derive(Event, Debug, Clone)]
pub struct SaveCompleteEvent {
    pub success: bool,
    pub error_message: Option<String>,
}

/// Sent after a load completes.
#[derive(Event, Debug, Clone)]
pub struct LoadCompleteEvent {
    pub success: bool,
    pub error_message: Option<String>,
}

/// Sent by the main menu to start over: resets every mutable resource to
/// its defaults and enters Playing. The profile on disk is untouched until
/// the next save.
#[derive(Event, Debug, Clone)]
pub struct NewGameEvent;

// ═══════════════════════════════════════════════════════════════════════
// RESOURCES & SNAPSHOT
// ═══════════════════════════════════════════════════════════════════════

/// Where the native profile file lives. Tests point this at a temp dir.
#[derive(Resource, Debug, Clone)]
pub struct SaveLocation {
    #[cfg(not(target_arch = "wasm32"))]
    pub path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SaveLocation {
    fn default() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: exe_dir.join("profile.json"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for SaveLocation {
    fn default() -> Self {
        Self {}
    }
}

/// Everything the profile stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u32,
    pub ledger: PlayerLedger,
    pub stats: PlayStats,
    pub achievements: Achievements,
}

impl GameSnapshot {
    pub fn capture(ledger: &PlayerLedger, stats: &PlayStats, achievements: &Achievements) -> Self {
        Self {
            version: SAVE_VERSION,
            ledger: ledger.clone(),
            stats: stats.clone(),
            achievements: achievements.clone(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SaveLocation>()
            .add_event::<SaveRequestEvent>()
            .add_event::<LoadRequestEvent>()
            .add_event::<SaveCompleteEvent>()
            .add_event::<LoadCompleteEvent>()
            .add_event::<NewGameEvent>()
            // Saving happens from the hub; the kitchen session is transient
            // and would be silently dropped if saving mid-cook were allowed.
            .add_systems(
                Update,
                handle_save_request.run_if(in_state(GameState::Playing)),
            )
            // The main menu loads or starts over; loading is also allowed
            // from the hub so a player can roll back.
            .add_systems(
                Update,
                handle_load_request
                    .run_if(in_state(GameState::MainMenu).or(in_state(GameState::Playing))),
            )
            .add_systems(
                Update,
                handle_new_game.run_if(in_state(GameState::MainMenu)),
            );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PROFILE I/O
// ═══════════════════════════════════════════════════════════════════════

#[cfg(not(target_arch = "wasm32"))]
fn write_profile(location: &SaveLocation, snapshot: &GameSnapshot) -> Result<(), String> {
    write_snapshot(&location.path, snapshot)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_profile(location: &SaveLocation) -> Result<GameSnapshot, String> {
    read_snapshot(&location.path)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_snapshot(path: &Path, snapshot: &GameSnapshot) -> Result<(), String> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Could not create profile directory: {}", e))?;
        }
    }

    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| format!("Serialization failed: {}", e))?;

    // Write to a temp file first, then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)
        .map_err(|e| format!("Write failed for {}: {}", tmp_path.display(), e))?;
    fs::rename(&tmp_path, path).map_err(|e| format!("Rename failed: {}", e))?;

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_snapshot(path: &Path) -> Result<GameSnapshot, String> {
    if !path.exists() {
        return Err("No saved profile".to_string());
    }
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    parse_snapshot(&json)
}

#[cfg(target_arch = "wasm32")]
fn write_profile(_location: &SaveLocation, snapshot: &GameSnapshot) -> Result<(), String> {
    let json =
        serde_json::to_string(snapshot).map_err(|e| format!("Serialization failed: {}", e))?;
    local_storage()?
        .set_item(STORAGE_KEY, &json)
        .map_err(|_| "localStorage write failed (quota?)".to_string())
}

#[cfg(target_arch = "wasm32")]
fn read_profile(_location: &SaveLocation) -> Result<GameSnapshot, String> {
    let json = local_storage()?
        .get_item(STORAGE_KEY)
        .map_err(|_| "localStorage read failed".to_string())?
        .ok_or_else(|| "No saved profile".to_string())?;
    parse_snapshot(&json)
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "no window".to_string())?
        .local_storage()
        .map_err(|_| "localStorage unavailable".to_string())?
        .ok_or_else(|| "localStorage disabled".to_string())
}

fn parse_snapshot(json: &str) -> Result<GameSnapshot, String> {
    let snapshot: GameSnapshot =
        serde_json::from_str(json).map_err(|e| format!("Deserialization failed: {}", e))?;

    // Version check — future versions can add migration here
    if snapshot.version != SAVE_VERSION {
        warn!(
            "Profile has version {} but current version is {}. Attempting to load anyway.",
            snapshot.version, SAVE_VERSION
        );
    }

    Ok(snapshot)
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

fn handle_save_request(
    mut events: EventReader<SaveRequestEvent>,
    location: Res<SaveLocation>,
    ledger: Res<PlayerLedger>,
    stats: Res<PlayStats>,
    achievements: Res<Achievements>,
    mut complete_events: EventWriter<SaveCompleteEvent>,
) {
    for _event in events.read() {
        let snapshot = GameSnapshot::capture(&ledger, &stats, &achievements);
        match write_profile(&location, &snapshot) {
            Ok(()) => {
                info!("Profile saved");
                complete_events.send(SaveCompleteEvent {
                    success: true,
                    error_message: None,
                });
            }
            Err(e) => {
                warn!("Profile save failed: {}", e);
                complete_events.send(SaveCompleteEvent {
                    success: false,
                    error_message: Some(e),
                });
            }
        }
    }
}

fn handle_load_request(
    mut events: EventReader<LoadRequestEvent>,
    location: Res<SaveLocation>,
    mut ledger: ResMut<PlayerLedger>,
    mut stats: ResMut<PlayStats>,
    mut achievements: ResMut<Achievements>,
    mut session: ResMut<CookingSession>,
    mut next_state: ResMut<NextState<GameState>>,
    mut complete_events: EventWriter<LoadCompleteEvent>,
) {
    for _event in events.read() {
        match read_profile(&location) {
            Ok(snapshot) => {
                *ledger = snapshot.ledger;
                *stats = snapshot.stats;
                *achievements = snapshot.achievements;
                *session = CookingSession::default();
                info!("Profile loaded");
                next_state.set(GameState::Playing);
                complete_events.send(LoadCompleteEvent {
                    success: true,
                    error_message: None,
                });
            }
            Err(e) => {
                warn!("Profile load failed: {}", e);
                complete_events.send(LoadCompleteEvent {
                    success: false,
                    error_message: Some(e),
                });
            }
        }
    }
}

fn handle_new_game(
    mut events: EventReader<NewGameEvent>,
    mut ledger: ResMut<PlayerLedger>,
    mut stats: ResMut<PlayStats>,
    mut achievements: ResMut<Achievements>,
    mut session: ResMut<CookingSession>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for _event in events.read() {
        *ledger = PlayerLedger::default();
        *stats = PlayStats::default();
        *achievements = Achievements::default();
        *session = CookingSession::default();
        info!("New game started");
        next_state.set(GameState::Playing);
    }
}
