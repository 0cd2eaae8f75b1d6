// src/infrastructure/repositories/postgres_catalog.rs
use super::map_sqlx;
use crate::domain::catalog::{
    CatalogLookup, CatalogRecord, EntityId, Filter, FilterValue, LookupQuery,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresCatalogLookup {
    pool: PgPool,
}

impl PostgresCatalogLookup {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_lookup(query: &LookupQuery) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT t.id, t.slug, to_jsonb(t) AS data FROM ");
        builder.push(query.collection.table());
        builder.push(" AS t");

        for (index, filter) in query.filters.iter().enumerate() {
            builder.push(if index == 0 { " WHERE " } else { " AND " });
            match filter {
                Filter::Eq(field, value) => {
                    builder.push("t.");
                    builder.push(*field);
                    builder.push(" = ");
                    push_value(&mut builder, value);
                }
                Filter::In(_, values) if values.is_empty() => {
                    builder.push("FALSE");
                }
                Filter::In(field, values) => {
                    builder.push("t.");
                    builder.push(*field);
                    builder.push(" IN (");
                    let mut separated = builder.separated(", ");
                    for value in values {
                        match value {
                            FilterValue::Text(text) => separated.push_bind(text.clone()),
                            FilterValue::Bool(flag) => separated.push_bind(*flag),
                        };
                    }
                    separated.push_unseparated(")");
                }
            }
        }

        builder.push(" LIMIT 1");
        builder
    }
}

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: &FilterValue) {
    match value {
        FilterValue::Text(text) => builder.push_bind(text.clone()),
        FilterValue::Bool(flag) => builder.push_bind(*flag),
    };
}

#[derive(Debug, FromRow)]
struct RecordRow {
    id: String,
    slug: Option<String>,
    data: Value,
}

impl TryFrom<RecordRow> for CatalogRecord {
    type Error = DomainError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: EntityId::new(row.id)?,
            slug: row.slug,
            data: row.data,
        })
    }
}

#[async_trait]
impl CatalogLookup for PostgresCatalogLookup {
    async fn lookup_one(&self, query: &LookupQuery) -> DomainResult<Option<CatalogRecord>> {
        let mut builder = Self::build_lookup(query);
        let row = builder
            .build_query_as::<RecordRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(CatalogRecord::try_from).transpose()
    }

    async fn resolve_sport(&self, slug: &str) -> DomainResult<Option<CatalogRecord>> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, slug, data FROM resolve_sport_by_slug($1)",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(CatalogRecord::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Collection;

    #[test]
    fn builds_filtered_single_row_lookup() {
        let query = LookupQuery::new(Collection::Programs)
            .with(Filter::eq("slug", "hiit-30"))
            .with(Filter::one_of("status", ["active", "published"]));
        let builder = PostgresCatalogLookup::build_lookup(&query);
        assert_eq!(
            builder.sql(),
            "SELECT t.id, t.slug, to_jsonb(t) AS data FROM programs AS t WHERE t.slug = $1 AND t.status IN ($2, $3) LIMIT 1"
        );
    }

    #[test]
    fn empty_in_filter_matches_nothing() {
        let query = LookupQuery::new(Collection::Profiles).with(Filter::In("role", Vec::new()));
        let builder = PostgresCatalogLookup::build_lookup(&query);
        assert!(builder.sql().ends_with("WHERE FALSE LIMIT 1"));
    }
}
