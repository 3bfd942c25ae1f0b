use std::cmp::Ordering;
use std::sync::Arc;

use crate::{
    error::AppError,
    models::trip::{SearchResult, Trip, TripDraft, TripPage, TripStats},
    services::{search::TripSearchClient, store::TripStore},
};

#[derive(Clone)]
pub struct TripService {
    gateway: Arc<dyn TripSearchClient>,
    store: TripStore,
}

impl TripService {
    pub fn new(gateway: Arc<dyn TripSearchClient>, store: TripStore) -> Self {
        Self { gateway, store }
    }

    pub async fn search_trips(
        &self,
        origin: &str,
        destination: &str,
        sort_by: Option<&str>,
    ) -> Result<Vec<SearchResult>, AppError> {
        let mut results = self.gateway.search(origin, destination).await?;
        sort_results(&mut results, sort_by);
        Ok(results)
    }

    pub async fn save_trip(&self, draft: TripDraft) -> Result<Trip, AppError> {
        self.store.create(draft).await
    }

    pub async fn list_trips(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<TripPage, AppError> {
        self.store.list(page, limit).await
    }

    pub async fn delete_trip(&self, record_id: &str) -> Result<(), AppError> {
        self.store.delete_by_id(record_id).await
    }

    pub async fn stats(&self) -> Result<TripStats, AppError> {
        self.store.stats().await
    }
}

// Stable sort, so equal-key results keep the order the api returned them in.
fn sort_results(results: &mut [SearchResult], sort_by: Option<&str>) {
    match sort_by {
        Some("fastest") => results.sort_by(|a, b| numeric(a.duration, b.duration)),
        Some("cheapest") => results.sort_by(|a, b| numeric(a.cost, b.cost)),
        _ => {}
    }
}

fn numeric(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn result(cost: f64, duration: f64) -> SearchResult {
        SearchResult {
            cost,
            duration,
            extra: Map::new(),
        }
    }

    fn sample() -> Vec<SearchResult> {
        vec![
            result(1000.0, 14.0),
            result(800.0, 15.0),
            result(1200.0, 13.0),
        ]
    }

    #[test]
    fn cheapest_sorts_by_cost_ascending() {
        let mut results = sample();
        sort_results(&mut results, Some("cheapest"));
        let costs: Vec<f64> = results.iter().map(|r| r.cost).collect();
        assert_eq!(costs, vec![800.0, 1000.0, 1200.0]);
    }

    #[test]
    fn fastest_sorts_by_duration_ascending() {
        let mut results = sample();
        sort_results(&mut results, Some("fastest"));
        let durations: Vec<f64> = results.iter().map(|r| r.duration).collect();
        assert_eq!(durations, vec![13.0, 14.0, 15.0]);
    }

    #[test]
    fn other_values_keep_upstream_order() {
        let mut results = sample();
        sort_results(&mut results, Some("scenic"));
        let costs: Vec<f64> = results.iter().map(|r| r.cost).collect();
        assert_eq!(costs, vec![1000.0, 800.0, 1200.0]);

        let mut results = sample();
        sort_results(&mut results, None);
        let costs: Vec<f64> = results.iter().map(|r| r.cost).collect();
        assert_eq!(costs, vec![1000.0, 800.0, 1200.0]);
    }

    #[test]
    fn ties_keep_relative_order() {
        let mut results = vec![result(500.0, 9.0), result(500.0, 7.0), result(400.0, 8.0)];
        sort_results(&mut results, Some("cheapest"));
        let durations: Vec<f64> = results.iter().map(|r| r.duration).collect();
        assert_eq!(durations, vec![8.0, 9.0, 7.0]);
    }
}
