//! Blog post handlers. Each one issues exactly one store call.

use actix_web::{HttpResponse, web};

use blog_core::domain::{NewPost, PostId, PostUpdate};
use blog_shared::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.deadline("find_all", state.posts.find_all()).await?;
    let views: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();

    Ok(HttpResponse::Ok().json(views))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_post = NewPost::new(req.author, req.title, req.content)?;

    let post = state.deadline("insert", state.posts.insert(new_post)).await?;
    tracing::info!(request_id = %request_id.as_str(), post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());
    let req = body.into_inner();

    if let Some(body_id) = req.id.as_deref() {
        if body_id != id.as_str() {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                id, body_id
            )));
        }
    }

    let update = PostUpdate::new(req.title, req.content)?;

    state
        .deadline("update", state.posts.update(&id, &update))
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => AppError::NotFound(format!("BlogPost with id {} not found", id)),
            other => other,
        })?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Deleting an id that matches nothing still answers 204.
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());

    let removed = state.deadline("delete", state.posts.delete(&id)).await?;
    if removed {
        tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Post deleted");
    } else {
        tracing::debug!(request_id = %request_id.as_str(), post_id = %id, "Post already absent");
    }

    Ok(HttpResponse::NoContent().finish())
}
