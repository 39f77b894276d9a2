use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::context;

use crate::core::error::AppError;
use crate::core::extractor::{AppQuery, AppQueryRejection};
use crate::features::resorts::dtos::ResortListingQuery;
use crate::features::resorts::ResortService;
use crate::shared::templates::render_page;

/// Resort listing page with the filter form.
///
/// A visit without a query string is the first view and gets the configured
/// travel-time budget; a submitted form with an empty `maxHours` has none.
pub async fn listing_page(
    State(service): State<Arc<ResortService>>,
    RawQuery(raw_query): RawQuery,
    query: Result<AppQuery<ResortListingQuery>, AppQueryRejection>,
) -> Response {
    let mut query = match query {
        Ok(AppQuery(query)) => query,
        Err(rejection) => return error_page(rejection.into_app_error()),
    };
    if matches!(raw_query.as_deref(), None | Some("")) {
        query.max_hours = service.config().default_max_hours;
    }

    match service.listing(&query).await {
        Ok(listing) => {
            let selected_slug = listing
                .selected_city
                .as_ref()
                .map(|c| c.slug.clone())
                .unwrap_or_default();
            // f64 Display drops the ".0" a template would print
            let max_hours_input = listing.criteria.max_hours.map(|h| h.to_string());
            page(
                StatusCode::OK,
                "listing.jinja",
                context! {
                    listing => listing,
                    selected_slug => selected_slug,
                    max_hours_input => max_hours_input,
                },
            )
        }
        Err(e) => error_page(e),
    }
}

/// Resort detail page
pub async fn resort_page(
    State(service): State<Arc<ResortService>>,
    Path(slug): Path<String>,
) -> Response {
    match service.detail(&slug).await {
        Ok(resort) => page(StatusCode::OK, "resort.jinja", context! { resort => resort }),
        Err(e) => error_page(e),
    }
}

fn error_page(err: AppError) -> Response {
    let status = err.status_code();
    let (title, message) = match &err {
        AppError::NotFound(_) => ("Resort not found", "We could not find this resort.".to_string()),
        AppError::Validation(msg) | AppError::BadRequest(msg) => ("Invalid filter", msg.clone()),
        AppError::ServiceUnavailable(msg) => {
            tracing::error!("Catalog store unavailable: {}", msg);
            (
                "Temporarily unavailable",
                "Resort data is temporarily unavailable. Please try again later.".to_string(),
            )
        }
        AppError::Internal(msg) => {
            tracing::error!("Internal error: {}", msg);
            ("Something went wrong", "Internal server error".to_string())
        }
    };

    page(status, "error.jinja", context! { title => title, message => message })
}

fn page(status: StatusCode, template: &str, ctx: minijinja::Value) -> Response {
    match render_page(template, ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page {}: {}", template, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
