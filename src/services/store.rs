use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::trip::{DestinationCount, Trip, TripDraft, TripPage, TripStats},
};

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct TripStore {
    db: DbPool,
}

impl TripStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, draft: TripDraft) -> Result<Trip, AppError> {
        let new_trip = draft.validate().map_err(AppError::Validation)?;

        let now = Utc::now();
        let trip = Trip {
            record_id: Uuid::new_v4().to_string(),
            origin: new_trip.origin,
            destination: new_trip.destination,
            cost: new_trip.cost,
            duration: new_trip.duration,
            trip_type: new_trip.trip_type,
            external_id: new_trip.external_id,
            display_name: new_trip.display_name,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO trips \
             (record_id, origin, destination, cost, duration, trip_type, external_id, display_name, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&trip.record_id)
        .bind(&trip.origin)
        .bind(&trip.destination)
        .bind(trip.cost)
        .bind(trip.duration)
        .bind(&trip.trip_type)
        .bind(&trip.external_id)
        .bind(&trip.display_name)
        .bind(trip.created_at)
        .bind(trip.updated_at)
        .execute(&self.db)
        .await?;

        Ok(trip)
    }

    pub async fn list(&self, page: Option<i64>, limit: Option<i64>) -> Result<TripPage, AppError> {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).max(1);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trips")
            .fetch_one(&self.db)
            .await?;

        // rowid preserves insertion order.
        let trips: Vec<Trip> = sqlx::query_as(
            "SELECT record_id, origin, destination, cost, duration, trip_type, external_id, display_name, created_at, updated_at \
             FROM trips ORDER BY rowid LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind((page - 1) * limit)
        .fetch_all(&self.db)
        .await?;

        Ok(TripPage {
            trips,
            total_pages: (total + limit - 1) / limit,
            current_page: page,
        })
    }

    pub async fn delete_by_id(&self, record_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM trips WHERE record_id = ?")
            .bind(record_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn stats(&self) -> Result<TripStats, AppError> {
        let total_trips: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trips")
            .fetch_one(&self.db)
            .await?;

        let avg_cost: Option<f64> = sqlx::query_scalar("SELECT AVG(cost) FROM trips")
            .fetch_one(&self.db)
            .await?;
        let avg_duration: Option<f64> = sqlx::query_scalar("SELECT AVG(duration) FROM trips")
            .fetch_one(&self.db)
            .await?;

        // The secondary key only pins sqlite's otherwise arbitrary emit order
        // so repeated calls agree on ties.
        let popular_destinations: Vec<DestinationCount> = sqlx::query_as(
            "SELECT destination, COUNT(*) AS count FROM trips \
             GROUP BY destination ORDER BY count DESC, destination LIMIT 5",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(TripStats {
            total_trips,
            avg_cost: avg_cost.unwrap_or(0.0),
            avg_duration: avg_duration.unwrap_or(0.0),
            popular_destinations,
        })
    }
}
