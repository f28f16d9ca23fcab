//! OpenAPI documentation setup.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::admin::controller::ResetResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, RefreshResponse};
use crate::modules::posts::model::{CreatePostDto, Post};
use crate::modules::users::model::{CreateUserDto, UpdateCredentialsDto, User};
use crate::modules::webhooks::model::{PaymentWebhookData, PaymentWebhookEvent};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health_check,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::refresh_access_token,
        crate::modules::auth::controller::revoke_refresh_token,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::update_credentials,
        crate::modules::posts::controller::create_post,
        crate::modules::posts::controller::get_posts,
        crate::modules::posts::controller::get_post_by_id,
        crate::modules::posts::controller::delete_post,
        crate::modules::webhooks::controller::handle_payment_event,
        crate::modules::admin::controller::reset,
    ),
    components(schemas(
        LoginRequest,
        LoginResponse,
        RefreshResponse,
        User,
        CreateUserDto,
        UpdateCredentialsDto,
        Post,
        CreatePostDto,
        PaymentWebhookEvent,
        PaymentWebhookData,
        ResetResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and session lifecycle"),
        (name = "Users", description = "User registration and credentials"),
        (name = "Posts", description = "Post CRUD"),
        (name = "Webhooks", description = "Payment-provider callbacks"),
        (name = "Admin", description = "Development-only operations"),
    )
)]
pub struct ApiDoc;
