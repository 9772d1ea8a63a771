//! CLI command implementations

use std::path::PathBuf;

use anyhow::Context;
use wayfinder_campus::{CampusError, CampusMap};
use wayfinder_server::{ServerConfig, WayfinderServer};

pub async fn serve(
    buildings_file: PathBuf,
    paths_file: PathBuf,
    host: String,
    port: u16,
) -> anyhow::Result<()> {
    let map = load_map(&buildings_file, &paths_file)?;
    tracing::info!("Starting Wayfinder server on {}:{}", host, port);

    let config = ServerConfig { host, port };
    let server = WayfinderServer::new(map, config);
    server.start().await
}

pub fn buildings(buildings_file: PathBuf, paths_file: PathBuf) -> anyhow::Result<()> {
    let map = load_map(&buildings_file, &paths_file)?;
    for (short, long) in map.building_names() {
        println!("{short}: {long}");
    }
    Ok(())
}

pub fn route(
    buildings_file: PathBuf,
    paths_file: PathBuf,
    start: String,
    end: String,
) -> anyhow::Result<()> {
    let map = load_map(&buildings_file, &paths_file)?;

    let path = match map.find_shortest_path(&start, &end) {
        Ok(path) => path,
        Err(CampusError::UnknownBuilding(name)) => {
            anyhow::bail!("unknown building: {name} (try `wayfinder buildings`)");
        }
        Err(err) => return Err(err.into()),
    };

    let Some(path) = path else {
        println!("No path exists between {start} and {end}.");
        return Ok(());
    };

    println!(
        "Route from {} to {}:",
        map.long_name_for(&start)?,
        map.long_name_for(&end)?
    );
    for edge in path.edges() {
        println!("  walk {:.1} to {}", edge.label, edge.dst);
    }
    println!("Total distance: {:.1}", path.cost());
    Ok(())
}

fn load_map(buildings_file: &PathBuf, paths_file: &PathBuf) -> anyhow::Result<CampusMap> {
    let map = CampusMap::load(buildings_file, paths_file).context("building campus map")?;
    tracing::info!(
        "Loaded {} buildings from {}",
        map.building_names().len(),
        buildings_file.display()
    );
    Ok(map)
}
