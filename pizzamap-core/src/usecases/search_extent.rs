use super::*;

pub async fn search_extent<G>(gateway: &G, bbox: &MapBbox) -> Result<Vec<Pizzeria>>
where
    G: SearchGateway + ?Sized,
{
    gateway.search_extent(bbox).await.map_err(Error::Search)
}

/// Searches `bbox` and shows the results in `view`.
///
/// On failure the listing stays as it is.
pub async fn refresh_listing<G, V>(gateway: &G, view: &mut V, bbox: &MapBbox) -> Result<()>
where
    G: SearchGateway + ?Sized,
    V: ListingView + ?Sized,
{
    let hits = search_extent(gateway, bbox).await?;
    render_listing(view, &hits);
    Ok(())
}
