use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info};

use crate::{
    error::{ApiError, ApiResult},
    extract::{ValidJson, ValidPath},
    model::{Comment, Id, NewComment, NewPost, Post, PostWithComments},
    store::Store,
};

pub type SharedStore = Arc<Store>;

pub async fn create_post(
    State(store): State<SharedStore>,
    ValidJson(new_post): ValidJson<NewPost>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    if new_post.body.is_empty() {
        return Err(ApiError::Validation("body must not be empty".to_string()));
    }

    let post = store.append_post(new_post.body);
    info!(post_id = post.id, "created post");
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn list_posts(State(store): State<SharedStore>) -> Json<Vec<Post>> {
    Json(store.all_posts())
}

pub async fn create_comment(
    State(store): State<SharedStore>,
    ValidJson(new_comment): ValidJson<NewComment>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    ensure_post_exists(&store, new_comment.post_id)?;

    let comment = store.append_comment(new_comment.body, new_comment.post_id);
    info!(comment_id = comment.id, post_id = comment.post_id, "created comment");
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn list_comments(
    State(store): State<SharedStore>,
    ValidPath(post_id): ValidPath<Id>,
) -> ApiResult<Json<Vec<Comment>>> {
    ensure_post_exists(&store, post_id)?;
    Ok(Json(store.comments_for_post(post_id)))
}

pub async fn get_post_with_comments(
    State(store): State<SharedStore>,
    ValidPath(post_id): ValidPath<Id>,
) -> ApiResult<Json<PostWithComments>> {
    let post = store
        .get_post(post_id)
        .ok_or_else(|| not_found(post_id))?;
    let comments = store.comments_for_post(post_id);
    Ok(Json(PostWithComments { post, comments }))
}

fn ensure_post_exists(store: &Store, post_id: Id) -> ApiResult<()> {
    if store.post_exists(post_id) {
        Ok(())
    } else {
        Err(not_found(post_id))
    }
}

fn not_found(post_id: Id) -> ApiError {
    debug!(post_id, "post not found");
    ApiError::PostNotFound { post_id }
}
