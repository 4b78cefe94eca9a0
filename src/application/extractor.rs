//! Top league extraction from the bulk sports document.

use crate::domain::{DomainError, League, LeagueId, SportCatalog};
use crate::error::Result;
use crate::port::outbound::wire::SportContainer;

/// Flatten the sports/regions tree into the top leagues of catalog sports.
///
/// Containers whose name is not a catalog sport are skipped. Output order
/// follows containers, then regions, then leagues, as given.
///
/// # Errors
///
/// Returns [`Error::Defect`](crate::error::Error::Defect) if a container
/// passes the interest filter but its sport cannot be resolved when the
/// league is built. That path indicates a catalog inconsistency, so the
/// whole extraction fails instead of dropping the leagues.
pub fn extract_top_leagues(
    containers: &[SportContainer],
    catalog: SportCatalog,
) -> Result<Vec<League>> {
    let mut leagues = Vec::new();

    for container in containers
        .iter()
        .filter(|container| catalog.is_of_interest(&container.name))
    {
        let sport = catalog.lookup(&container.name);

        for region in &container.regions {
            for league in region.leagues.iter().filter(|league| league.top) {
                let sport = sport.ok_or_else(|| DomainError::UnresolvedSport {
                    name: container.name.clone(),
                })?;
                leagues.push(League::new(
                    LeagueId::new(league.id),
                    league.name.clone(),
                    region.name.clone(),
                    sport,
                ));
            }
        }
    }

    Ok(leagues)
}
