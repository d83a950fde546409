use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use emptyleg_catalog::{FlightListing, ListingRepository, NewFlightListing, SearchFilters};

pub struct PostgresListingRepository {
    pool: PgPool,
}

impl PostgresListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct ListingRow {
    id: Uuid,
    operator: String,
    aircraft_type: String,
    origin: String,
    origin_city: Option<String>,
    destination: String,
    destination_city: Option<String>,
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
    seats_available: i32,
    price: f64,
    currency: String,
    notes: Option<String>,
}

impl From<ListingRow> for FlightListing {
    fn from(row: ListingRow) -> Self {
        FlightListing {
            id: row.id,
            operator: row.operator,
            aircraft_type: row.aircraft_type,
            origin: row.origin,
            origin_city: row.origin_city,
            destination: row.destination,
            destination_city: row.destination_city,
            departure_time: row.departure_time,
            arrival_time: row.arrival_time,
            seats_available: row.seats_available,
            price: row.price,
            currency: row.currency,
            notes: row.notes,
        }
    }
}

const LISTING_COLUMNS: &str = "id, operator, aircraft_type, origin, origin_city, destination, destination_city, departure_time, arrival_time, seats_available, price, currency, notes";

#[async_trait]
impl ListingRepository for PostgresListingRepository {
    async fn insert_listing(
        &self,
        listing: NewFlightListing,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO emptylegflight
                (id, operator, aircraft_type, origin, origin_city, destination, destination_city,
                 departure_time, arrival_time, seats_available, price, currency, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(id)
        .bind(&listing.operator)
        .bind(&listing.aircraft_type)
        .bind(&listing.origin)
        .bind(listing.origin_city.as_deref())
        .bind(&listing.destination)
        .bind(listing.destination_city.as_deref())
        .bind(listing.departure_time)
        .bind(listing.arrival_time)
        .bind(listing.seats_available)
        .bind(listing.price)
        .bind(&listing.currency)
        .bind(listing.notes.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_listing(
        &self,
        id: Uuid,
    ) -> Result<Option<FlightListing>, Box<dyn std::error::Error + Send + Sync>> {
        let sql = format!("SELECT {LISTING_COLUMNS} FROM emptylegflight WHERE id = $1");
        let row = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(FlightListing::from))
    }

    async fn list_listings(
        &self,
        filters: &SearchFilters,
    ) -> Result<Vec<FlightListing>, Box<dyn std::error::Error + Send + Sync>> {
        let window = filters.departure_window();

        // Inactive filters bind as NULL and fall out of the predicate.
        let sql = format!(
            r#"
            SELECT {LISTING_COLUMNS} FROM emptylegflight
            WHERE ($1::TEXT IS NULL OR origin = $1)
              AND ($2::TEXT IS NULL OR destination = $2)
              AND ($3::TIMESTAMPTZ IS NULL OR departure_time BETWEEN $3 AND $4)
            ORDER BY departure_time
            LIMIT $5
            "#
        );
        let rows = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(filters.origin.as_deref())
            .bind(filters.destination.as_deref())
            .bind(window.map(|(start, _)| start))
            .bind(window.map(|(_, end)| end))
            .bind(filters.limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(FlightListing::from).collect())
    }

    async fn reserve_seats(
        &self,
        id: Uuid,
        count: i32,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        // Guarded decrement: seats_available can never go negative.
        let result = sqlx::query(
            "UPDATE emptylegflight SET seats_available = seats_available - $2 WHERE id = $1 AND seats_available >= $2",
        )
        .bind(id)
        .bind(count)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn release_seats(
        &self,
        id: Uuid,
        count: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query("UPDATE emptylegflight SET seats_available = seats_available + $2 WHERE id = $1")
            .bind(id)
            .bind(count)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
