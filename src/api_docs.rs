use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::users::get_user,
        api::notes::create_note,
        // Add other endpoints here as we document them
    ),
    components(
        schemas(
            crate::domain::UserSummary,
            crate::domain::NoteSummary,
            crate::domain::UserPayload,
            crate::domain::NotePayload,
        )
    ),
    tags(
        (name = "notelab", description = "NoteLab users and notes API")
    )
)]
pub struct ApiDoc;
