use super::*;

/// Places a marker for every record of the store.
///
/// Returns the number of markers added.
pub async fn load_markers<S, L>(store: &S, layer: &mut L) -> Result<usize>
where
    S: RecordStore + ?Sized,
    L: MarkerLayer + ?Sized,
{
    let pizzerias = store.list_records().await.map_err(Error::LoadRecords)?;
    let count = pizzerias.len();
    for pizzeria in pizzerias {
        if let Some(id) = &pizzeria.id {
            log::debug!("Place marker of record {id}");
        }
        layer.add_marker(Marker::at(pizzeria.pos));
    }
    log::info!("Placed {count} markers");
    Ok(count)
}
