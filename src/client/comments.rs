//! Comment lifecycle controller

use reqwest::StatusCode;
use tracing::info;

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::{HarnessError, Result};
use crate::fixtures;
use crate::types::{Comment, NewComment, Post, User};

impl ApiClient {
    /// Create a comment on a post
    ///
    /// Commenting on a private post the actor cannot see is an expected
    /// rejection: the service answers 500 and this maps to `Ok(None)`.
    /// Every other non-success status stays a hard failure. On success the
    /// returned content must equal the submitted content.
    pub async fn create_comment(&self, author: &User, post: &Post) -> Result<Option<Comment>> {
        let content = fixtures::comment_content();
        let body = NewComment {
            comment_content: content.clone(),
            deleted_confirmed: true,
            post_id: post.post_id,
            user_id: author.id,
        };

        let client = self.login(&author.context()).await?;
        let response = client
            .post(self.api_url(endpoints::COMMENTS))
            .json(&body)
            .send()
            .await?;

        if response.status() == StatusCode::INTERNAL_SERVER_ERROR {
            info!(post_id = post.post_id, "comment rejected (inaccessible post)");
            return Ok(None);
        }

        let mut comment: Comment = self.decode("create comment", response).await?;
        if comment.content != content {
            return Err(HarnessError::Mismatch {
                entity: "Comment",
                field: "content",
                expected: format!("{:?}", content),
                actual: format!("{:?}", comment.content),
            });
        }

        comment.author_id = author.id;
        comment.post_id = post.post_id;
        info!(comment_id = comment.comment_id, "created comment");
        Ok(Some(comment))
    }

    /// Replace a comment's content with fresh generated content
    pub async fn edit_comment(&self, actor: &User, comment: &Comment) -> Result<()> {
        let content = fixtures::comment_content();
        let url = format!(
            "{}?commentId={}&content={}",
            self.api_url(endpoints::COMMENTS),
            comment.comment_id,
            urlencoding::encode(&content)
        );

        let client = self.login(&actor.context()).await?;
        let response = client.put(&url).send().await?;
        self.expect_status("edit comment", StatusCode::OK, &response)?;

        info!(comment_id = comment.comment_id, "edited comment");
        Ok(())
    }

    /// Like a comment; returns the updated entity for like-count checks
    pub async fn like_comment(&self, actor: &User, comment_id: i64) -> Result<Comment> {
        let url = format!(
            "{}?commentId={}",
            self.api_url(endpoints::LIKE_COMMENT),
            comment_id
        );

        let client = self.login(&actor.context()).await?;
        let response = client.post(&url).send().await?;
        self.decode("like comment", response).await
    }

    /// Delete a comment (author or admin; enforced service-side)
    pub async fn delete_comment(&self, actor: &User, comment_id: i64) -> Result<()> {
        let url = format!(
            "{}?commentId={}",
            self.api_url(endpoints::COMMENTS),
            comment_id
        );

        let client = self.login(&actor.context()).await?;
        let response = client.delete(&url).send().await?;
        self.expect_status("delete comment", StatusCode::OK, &response)?;

        info!(comment_id, "deleted comment");
        Ok(())
    }

    /// The global comment catalog
    pub async fn find_all_comments(&self) -> Result<Vec<Comment>> {
        let response = self
            .anonymous()
            .get(self.api_url(endpoints::ALL_COMMENTS))
            .send()
            .await?;
        self.decode("find all comments", response).await
    }

    /// All comments of one post
    pub async fn comments_of_post(&self, actor: &User, post_id: i64) -> Result<Vec<Comment>> {
        let url = format!(
            "{}?postId={}",
            self.api_url(endpoints::COMMENTS_BY_POST),
            post_id
        );

        let client = self.login(&actor.context()).await?;
        let response = client.get(&url).send().await?;
        self.decode("comments of post", response).await
    }

    /// Single comment by id
    pub async fn get_comment_by_id(&self, actor: &User, comment_id: i64) -> Result<Comment> {
        let url = format!(
            "{}?commentId={}",
            self.api_url(endpoints::COMMENT_SINGLE),
            comment_id
        );

        let client = self.login(&actor.context()).await?;
        let response = client.get(&url).send().await?;
        self.decode("get comment by id", response).await
    }

    /// Whether a comment is still present in the global catalog
    pub async fn comment_exists(&self, comment_id: i64) -> Result<bool> {
        let comments = self.find_all_comments().await?;
        Ok(comments.iter().any(|c| c.comment_id == comment_id))
    }
}
