use crate::core::format::{format_inr, format_price_per_area, usd_to_inr};
use crate::models::HouseListing;
use crate::services::ServiceClient;
use std::sync::Arc;

/// Available-houses listing
///
/// Fetched once per mount; no pagination, no retry. A failed fetch is
/// logged and the view stays in its loading state with an empty list.
pub struct CatalogView {
    client: Arc<ServiceClient>,
    houses: Vec<HouseListing>,
    loading: bool,
}

impl CatalogView {
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self {
            client,
            houses: Vec::new(),
            loading: true,
        }
    }

    pub async fn load(&mut self) {
        match self.client.list_houses().await {
            Ok(houses) => {
                self.houses = houses;
                self.loading = false;
            }
            Err(e) => {
                // Logged only; the listing simply stays empty.
                tracing::error!("Error fetching houses: {}", e);
            }
        }
    }

    pub fn houses(&self) -> &[HouseListing] {
        &self.houses
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// One formatted line per house. Catalog prices arrive in USD and are
    /// shown in INR with a per-area unit price.
    pub fn render_rows(&self) -> Vec<String> {
        self.houses
            .iter()
            .map(|house| {
                let price_inr = usd_to_inr(house.price);
                format!(
                    "{:>8} sq ft  {:>2} bed  {:>2} bath  {:>14}  ({})",
                    house.area,
                    house.bedrooms,
                    house.bathrooms,
                    format_inr(price_inr),
                    format_price_per_area(price_inr, house.area),
                )
            })
            .collect()
    }
}
