use serde::{Deserialize, Serialize};

/// Identifier shared by posts and comments. Signed so that a negative id in a
/// request deserializes and is answered with a not-found instead of a
/// validation error.
pub type Id = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: Id,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: Id,
    pub body: String,
    pub post_id: Id,
}

/// A post together with every comment made on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub body: String,
    pub post_id: Id,
}
