use super::*;

pub fn render_listing<V>(view: &mut V, pizzerias: &[Pizzeria])
where
    V: ListingView + ?Sized,
{
    let entries = pizzerias
        .iter()
        .map(|p| p.display_name().to_owned())
        .collect();
    view.replace_entries(entries);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizzamap_entities::builders::*;

    fn listing_with(entries: &[&str]) -> Listing {
        let mut listing = Listing::default();
        listing.replace_entries(entries.iter().map(ToString::to_string).collect());
        listing
    }

    #[test]
    fn empty_response_clears_the_listing() {
        let mut listing = listing_with(&["Old"]);
        render_listing(&mut listing, &[]);
        assert!(listing.entries().is_empty());
    }

    #[test]
    fn render_placeholder_for_missing_names() {
        let mut listing = Listing::default();
        let pizzerias = [
            Pizzeria::build().finish(),
            Pizzeria::build().name("").finish(),
        ];
        render_listing(&mut listing, &pizzerias);
        assert_eq!(listing.entries(), ["(No name)", "(No name)"]);
    }

    #[test]
    fn render_entries_in_response_order() {
        let mut listing = listing_with(&["X", "Y", "Z"]);
        let pizzerias = [
            Pizzeria::build().name("A").lat_lng(41.9, 12.4).finish(),
            Pizzeria::build().name("B").lat_lng(41.8, 12.5).finish(),
        ];
        render_listing(&mut listing, &pizzerias);
        assert_eq!(listing.entries(), ["A", "B"]);
    }
}
