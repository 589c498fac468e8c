//! ASCII rendering of a level's claims

use ahash::AHashMap;
use serde::Serialize;

use crate::claims::ClaimMap;
use crate::core::error::Result;
use crate::core::types::FactionId;
use crate::grid::GridPoint;

/// One claim in JSON output
#[derive(Debug, Serialize)]
struct ClaimOutput<'a> {
    faction: &'a str,
    x: i32,
    z: i32,
}

/// Draw a level as text, north (+z) at the top
///
/// Each faction is drawn with the first character of its label; unclaimed
/// cells inside the bounding box are `.`.
pub fn render_level(store: &ClaimMap, level: &str, factions: &[(String, FactionId)]) -> String {
    let claims: Vec<_> = store.level_claims(level).collect();
    if claims.is_empty() {
        return String::new();
    }

    let min_x = claims.iter().map(|(p, _)| p.x).min().unwrap_or(0);
    let max_x = claims.iter().map(|(p, _)| p.x).max().unwrap_or(0);
    let min_z = claims.iter().map(|(p, _)| p.z).min().unwrap_or(0);
    let max_z = claims.iter().map(|(p, _)| p.z).max().unwrap_or(0);

    let symbol = |faction: FactionId| {
        factions
            .iter()
            .find(|(_, id)| *id == faction)
            .and_then(|(name, _)| name.chars().next())
            .unwrap_or('?')
    };

    let owners: AHashMap<GridPoint, FactionId> = claims.into_iter().collect();
    let mut out = String::new();
    for z in (min_z..=max_z).rev() {
        for x in min_x..=max_x {
            let cell = GridPoint::new(x, z);
            out.push(owners.get(&cell).map(|f| symbol(*f)).unwrap_or('.'));
        }
        out.push('\n');
    }
    out
}

/// A level's claims as a JSON array, sorted south to north then west to east
pub fn render_json(
    store: &ClaimMap,
    level: &str,
    factions: &[(String, FactionId)],
) -> Result<String> {
    let mut claims: Vec<ClaimOutput> = store
        .level_claims(level)
        .map(|(point, faction)| ClaimOutput {
            faction: factions
                .iter()
                .find(|(_, id)| *id == faction)
                .map(|(name, _)| name.as_str())
                .unwrap_or("?"),
            x: point.x,
            z: point.z,
        })
        .collect();
    claims.sort_by_key(|c| (c.z, c.x));
    Ok(serde_json::to_string_pretty(&claims)?)
}
