use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    let world = super::load_world(Some(path))?;
    let locked = world.rooms.values().filter(|r| r.locked).count();

    println!("  All checks passed for '{}'.", path.display());
    println!(
        "  {} rooms ({} locked), {} items",
        world.room_count(),
        locked,
        world.item_count()
    );

    Ok(())
}
