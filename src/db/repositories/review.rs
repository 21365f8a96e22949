use crate::constants::markers;
use crate::entities::{prelude::*, reviews};
use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

/// A persisted AI-generated review.
#[derive(Debug, Clone)]
pub struct StoredReview {
    pub id: i64,
    pub product_name: String,
    pub overall_rating: String,
    pub review_title: String,
    pub author: String,
    pub review_date: String,
    pub rating: String,
    pub review: String,
}

/// Repository for generated-review rows
pub struct ReviewRepository {
    conn: DatabaseConnection,
}

impl ReviewRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_review_model(r: reviews::Model) -> StoredReview {
        StoredReview {
            id: r.id as i64,
            product_name: r.product_name,
            overall_rating: r.overall_rating,
            review_title: r.review_title,
            author: r.author,
            review_date: r.review_date,
            rating: r.rating,
            review: r.review,
        }
    }

    pub async fn insert(&self, product_name: &str, review: &str) -> Result<i64> {
        let active_model = reviews::ActiveModel {
            product_name: Set(product_name.to_string()),
            overall_rating: Set(markers::OVERALL_RATING.to_string()),
            review_title: Set(markers::REVIEW_TITLE.to_string()),
            author: Set(markers::AUTHOR.to_string()),
            review_date: Set(markers::REVIEW_DATE.to_string()),
            rating: Set(markers::RATING.to_string()),
            review: Set(review.to_string()),
            ..Default::default()
        };

        let res = Reviews::insert(active_model).exec(&self.conn).await?;
        info!("Stored generated review for product: {}", product_name);
        Ok(res.last_insert_id as i64)
    }

    pub async fn find_by_product(&self, product_name: &str) -> Result<Vec<StoredReview>> {
        let rows = Reviews::find()
            .filter(reviews::Column::ProductName.eq(product_name))
            .order_by_asc(reviews::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_review_model).collect())
    }
}
