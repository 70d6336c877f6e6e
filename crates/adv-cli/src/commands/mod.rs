pub mod check;
pub mod play;
pub mod rooms;

use std::path::Path;

use adv_world::WorldModel;

/// Load and validate a world file, or the built-in demo world when no path
/// is given.
fn load_world(path: Option<&Path>) -> Result<WorldModel, String> {
    let world = match path {
        Some(path) => WorldModel::from_path(path).map_err(|e| e.to_string())?,
        None => WorldModel::demo().map_err(|e| format!("built-in world: {e}"))?,
    };
    tracing::debug!(
        source = %path.map_or_else(|| "built-in".to_string(), |p| p.display().to_string()),
        rooms = world.room_count(),
        items = world.item_count(),
        "world loaded"
    );
    Ok(world)
}
