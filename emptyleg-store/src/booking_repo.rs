use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use emptyleg_booking::{Booking, BookingRepository};

pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn insert_booking(
        &self,
        booking: &Booking,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO booking (id, flight_id, name, email, phone, passengers, notes, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(booking.id)
        .bind(booking.flight_id)
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(booking.phone.as_deref())
        .bind(booking.passengers)
        .bind(booking.notes.as_deref())
        .bind(booking.status.as_str())
        .bind(booking.created_at)
        .execute(&self.pool)
        .await?;

        Ok(booking.id)
    }
}
