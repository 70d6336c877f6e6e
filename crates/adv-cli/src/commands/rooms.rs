use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Locked", "Exits", "Items"]);

    for (id, room) in world.rooms() {
        let exits = room
            .exits
            .iter()
            .map(|e| format!("{} -> {}", e.direction, e.destination))
            .collect::<Vec<_>>()
            .join(", ");
        let items = room
            .items
            .iter()
            .map(|i| world.item_name(i))
            .collect::<Vec<_>>()
            .join(", ");
        let marker = if id == &world.starting_room {
            format!("{id} *")
        } else {
            id.to_string()
        };

        table.add_row(vec![
            marker,
            room.name.clone(),
            if room.locked { "yes" } else { "no" }.to_string(),
            if exits.is_empty() { "—".to_string() } else { exits },
            if items.is_empty() { "—".to_string() } else { items },
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms, * marks the starting room", world.room_count());

    Ok(())
}
