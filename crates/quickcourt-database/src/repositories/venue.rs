//! Venue repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use quickcourt_core::error::AppError;
use quickcourt_core::result::AppResult;
use quickcourt_core::types::id::VenueId;
use quickcourt_core::types::pagination::{PageRequest, PageResponse};
use quickcourt_entity::venue::catalog::VenueCatalog;
use quickcourt_entity::venue::filter::{VenueFilter, VenueSort};
use quickcourt_entity::venue::model::Venue;

/// Repository for venue lookup and search.
#[derive(Debug, Clone)]
pub struct VenueRepository {
    pool: PgPool,
}

impl VenueRepository {
    /// Create a new venue repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueCatalog for VenueRepository {
    async fn find_by_id(&self, id: VenueId) -> AppResult<Option<Venue>> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::persistence_with_source("failed to find venue", e))
    }

    async fn search(
        &self,
        filter: &VenueFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Venue>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.query.is_some() {
            conditions.push(format!(
                "(name ILIKE ${param_idx} OR location ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }
        if filter.sport.is_some() {
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM unnest(sports) AS s WHERE lower(s) = lower(${param_idx}))"
            ));
            param_idx += 1;
        }
        if filter.min_price.is_some() {
            conditions.push(format!("price_per_hour >= ${param_idx}"));
            param_idx += 1;
        }
        if filter.max_price.is_some() {
            conditions.push(format!("price_per_hour <= ${param_idx}"));
            param_idx += 1;
        }
        if filter.min_rating.is_some() {
            conditions.push(format!("rating >= ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let order_clause = match filter.sort {
            VenueSort::RatingDesc => "ORDER BY rating DESC, review_count DESC",
            VenueSort::PriceAsc => "ORDER BY price_per_hour ASC",
            VenueSort::PriceDesc => "ORDER BY price_per_hour DESC",
        };

        let count_sql = format!("SELECT COUNT(*) FROM venues {where_clause}");
        let select_sql = format!(
            "SELECT * FROM venues {where_clause} {order_clause} LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, Venue>(&select_sql);

        if let Some(ref q) = filter.query {
            let pattern = format!("%{q}%");
            count_query = count_query.bind(pattern.clone());
            select_query = select_query.bind(pattern);
        }
        if let Some(ref sport) = filter.sport {
            count_query = count_query.bind(sport.clone());
            select_query = select_query.bind(sport.clone());
        }
        if let Some(min_price) = filter.min_price {
            count_query = count_query.bind(min_price);
            select_query = select_query.bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            count_query = count_query.bind(max_price);
            select_query = select_query.bind(max_price);
        }
        if let Some(min_rating) = filter.min_rating {
            count_query = count_query.bind(min_rating);
            select_query = select_query.bind(min_rating);
        }

        let total = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::persistence_with_source("failed to count venues", e))?;

        let venues = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::persistence_with_source("failed to search venues", e))?;

        Ok(PageResponse::new(
            venues,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
