//! Human-readable walking directions over a [`CampusMap`].

use campus_paths_core::{CampusMap, Point, Result};

/// Eight-point compass heading from `from` to `to`.
///
/// Map coordinates grow downward, so north is negative y.
pub fn compass(from: &Point, to: &Point) -> &'static str {
    const POINTS: [&str; 8] = ["E", "NE", "N", "NW", "W", "SW", "S", "SE"];

    let (dx, dy) = (to.x - from.x, from.y - to.y);
    let degrees = dy.atan2(dx).to_degrees().rem_euclid(360.0);
    let sector = ((degrees + 22.5) / 45.0) as usize % 8;
    POINTS[sector]
}

/// Step-by-step route between two buildings, or a short notice when they
/// are not connected.
pub fn describe_route(map: &CampusMap, start: &str, end: &str) -> Result<String> {
    let from = map.long_name_for_short(start)?;
    let to = map.long_name_for_short(end)?;

    let Some(path) = map.find_shortest_path(start, end)? else {
        return Ok(format!("There is no path from {from} to {to}."));
    };

    let mut lines = vec![format!("Path from {from} to {to}:")];
    for segment in &path {
        lines.push(format!(
            "\tWalk {:.0} feet {} to ({:.0}, {:.0})",
            segment.cost,
            compass(&segment.start, &segment.end),
            segment.end.x,
            segment.end.y
        ));
    }
    lines.push(format!("Total distance: {:.0} feet", path.cost()));
    Ok(lines.join("\n"))
}

/// `SHORT: Long Name`, one building per line, sorted by short name.
pub fn list_buildings(map: &CampusMap) -> String {
    map.building_names()
        .into_iter()
        .map(|(short, long)| format!("{short}: {long}"))
        .collect::<Vec<_>>()
        .join("\n")
}
