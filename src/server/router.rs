//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations, and
//! Swagger UI serves the resulting document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Vinculo", description = "Vinculo API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration and login"),
        (name = controller::opportunity::OPPORTUNITY_TAG, description = "Opportunity registry"),
        (name = controller::application::APPLICATION_TAG, description = "Student applications"),
        (name = controller::appointment::APPOINTMENT_TAG, description = "Interview scheduling"),
        (name = controller::tutor::TUTOR_TAG, description = "Tutor request queue"),
        (name = controller::student::STUDENT_TAG, description = "Student profiles"),
        (name = controller::admin::ADMIN_TAG, description = "Liaison office administration"),
        (name = controller::files::FILES_TAG, description = "Stored file access"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::google_login))
        .routes(routes!(controller::auth::google_callback))
        .routes(routes!(
            controller::opportunity::list_opportunities,
            controller::opportunity::create_opportunity
        ))
        .routes(routes!(
            controller::opportunity::update_opportunity,
            controller::opportunity::delete_opportunity
        ))
        .routes(routes!(controller::application::submit_application))
        .routes(routes!(controller::application::list_my_applications))
        .routes(routes!(controller::appointment::schedule_appointment))
        .routes(routes!(controller::appointment::list_my_appointments))
        .routes(routes!(controller::tutor::submit_tutor_request))
        .routes(routes!(controller::tutor::list_my_tutor_requests))
        .routes(routes!(controller::tutor::list_tutor_requests))
        .routes(routes!(controller::tutor::update_tutor_request))
        .routes(routes!(controller::tutor::attach_memo))
        .routes(routes!(controller::student::get_profile))
        .routes(routes!(controller::student::upload_cv))
        .routes(routes!(controller::student::add_experience))
        .routes(routes!(controller::student::delete_experience))
        .routes(routes!(controller::student::add_certification))
        .routes(routes!(controller::student::delete_certification))
        .routes(routes!(controller::admin::list_applications))
        .routes(routes!(controller::admin::set_application_status))
        .routes(routes!(controller::admin::daily_report))
        .routes(routes!(controller::admin::dashboard_stats))
        .routes(routes!(controller::admin::list_appointments))
        .routes(routes!(controller::admin::get_student_profile))
        .split_for_parts();

    // Wildcard route so references like "cvs/cv_1.pdf" resolve; registered
    // outside the OpenAPI router since utoipa paths cannot express it.
    let routes = routes.route(
        "/api/files/{*reference}",
        axum::routing::get(controller::files::serve_file),
    );

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
